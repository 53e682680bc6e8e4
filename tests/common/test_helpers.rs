//! Helper functions for integration tests

use drift_rs::physics::{Grid, StateVector};

/// Assert that two states are close (within tolerance)
pub fn assert_states_close(
    state1: &StateVector,
    state2: &StateVector,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(
        state1.components(),
        state2.components(),
        "{}: Component count mismatch",
        message
    );
    assert_eq!(
        state1.nodes(),
        state2.nodes(),
        "{}: Node count mismatch",
        message
    );

    for c in 0..state1.components() {
        for j in 0..state1.nodes() {
            let diff = (state1[(c, j)] - state2[(c, j)]).abs();
            assert!(
                diff < tolerance,
                "{}: Component {} node {} differs by {} (tolerance {})",
                message,
                c,
                j,
                diff,
                tolerance
            );
        }
    }
}

/// Largest absolute centered second difference of one component over the
/// interior nodes. Shrinks as a profile is smoothed by diffusion.
pub fn max_second_difference(state: &StateVector, component: usize) -> f64 {
    let values = state.component(component);
    let n = values.len();

    let mut max = 0.0_f64;
    for j in 1..(n - 1) {
        let second = (values[j + 1] - 2.0 * values[j] + values[j - 1]).abs();
        max = max.max(second);
    }
    max
}

/// Largest absolute value of one component over the physical nodes only
/// (ghost bands excluded)
pub fn max_abs_physical(grid: &Grid, state: &StateVector, component: usize) -> f64 {
    let w = grid.ghost_nodes();
    let values = state.component(component);
    values[w..values.len() - w]
        .iter()
        .fold(0.0_f64, |acc, v| acc.max(v.abs()))
}
