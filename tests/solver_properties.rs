//! Cross-cutting solver properties
//!
//! Fixed points, boundary preservation, divergence reporting and the
//! result-to-output pipeline.

mod common;

use common::test_helpers::assert_states_close;

use drift_rs::models::{CarrierPair, PureDiffusion};
use drift_rs::output::export::export_profile_csv;
use drift_rs::physics::Grid;
use drift_rs::solver::{
    DiffusionStepper, EdgePolicy, Integrator, RunConfiguration, RunOutcome, Scenario,
    StaggeredStepper,
};

// =================================================================================================
// Fixed points
// =================================================================================================

#[test]
fn test_uniform_equilibrium_is_steady_state() {
    let model = CarrierPair::new(0.1, 0.1);
    let equilibrium = model.equilibrium_density();

    let grid = Grid::new(0.0, 1.0, 0.05, 2).unwrap();
    let scenario = Scenario::new(
        Box::new(model),
        grid,
        EdgePolicy::ZeroFlux,
        EdgePolicy::ZeroFlux,
        move |_c, _x| equilibrium,
    );

    let integrator = Integrator::new(Box::new(StaggeredStepper::new()));
    let config = RunConfiguration::new(1e-5, 1_000);

    let result = integrator.run(&scenario, &config).unwrap();

    assert_eq!(result.outcome, RunOutcome::Completed);
    assert_states_close(
        &result.final_state,
        scenario.initial_state(),
        1e-12,
        "uniform equilibrium must not move",
    );
}

#[test]
fn test_uniform_profile_is_diffusion_fixed_point() {
    let grid = Grid::new(0.0, 1.0, 0.1, 1).unwrap();
    let scenario = Scenario::new(
        Box::new(PureDiffusion::new()),
        grid,
        EdgePolicy::ZeroFlux,
        EdgePolicy::ZeroFlux,
        |_c, _x| 2.5,
    );

    let integrator = Integrator::new(Box::new(DiffusionStepper::new()));
    let config = RunConfiguration::new(1e-3, 500);

    let result = integrator.run(&scenario, &config).unwrap();
    assert_states_close(
        &result.final_state,
        scenario.initial_state(),
        1e-12,
        "uniform profile must not move",
    );
}

// =================================================================================================
// Boundary preservation across a run
// =================================================================================================

#[test]
fn test_dirichlet_values_held_in_every_snapshot() {
    let grid = Grid::new(0.0, 1.0, 0.05, 1).unwrap();
    let scenario = Scenario::new(
        Box::new(PureDiffusion::new()),
        grid,
        EdgePolicy::Dirichlet(1.0),
        EdgePolicy::Dirichlet(0.25),
        |_c, x| 0.5 + 0.1 * x,
    );

    let integrator = Integrator::new(Box::new(DiffusionStepper::new()));
    let config = RunConfiguration::new(1e-4, 1_000).with_snapshots(100);

    let result = integrator.run(&scenario, &config).unwrap();

    let n = result.final_state.nodes();
    for snapshot in &result.snapshots {
        // Ghost and boundary nodes hold the exact constants, every step
        assert_eq!(snapshot[(0, 0)], 1.0);
        assert_eq!(snapshot[(0, 1)], 1.0);
        assert_eq!(snapshot[(0, n - 2)], 0.25);
        assert_eq!(snapshot[(0, n - 1)], 0.25);
    }
}

// =================================================================================================
// Divergence reporting
// =================================================================================================

#[test]
fn test_divergence_keeps_last_valid_state() {
    let grid = Grid::new(0.0, 1.0, 0.1, 1).unwrap();
    let scenario = Scenario::new(
        Box::new(PureDiffusion::new()),
        grid,
        EdgePolicy::Dirichlet(0.0),
        EdgePolicy::Dirichlet(0.0),
        |_c, x| x * (1.0 - x),
    );

    let integrator = Integrator::new(Box::new(DiffusionStepper::new()));
    // dt/dx^2 = 1.0; enough steps for the amplified modes to overflow
    let config = RunConfiguration::new(1e-2, 5_000);

    let result = integrator.run(&scenario, &config).unwrap();

    match result.outcome {
        RunOutcome::Diverged { at_step } => {
            assert!(at_step >= 1 && at_step <= 5_000);
        }
        RunOutcome::Completed => panic!("run should have diverged"),
    }

    // The retained state is the one before the blow-up, still finite
    assert!(result.final_state.is_finite());
    assert!(result.ensure_completed().is_err());
}

// =================================================================================================
// Result-to-output pipeline
// =================================================================================================

#[test]
fn test_final_state_exports_to_csv() {
    let grid = Grid::new(0.05, 1.0, 0.05, 2).unwrap();
    let scenario = Scenario::new(
        Box::new(CarrierPair::new(0.1, 0.1)),
        grid,
        EdgePolicy::ZeroFlux,
        EdgePolicy::ZeroFlux,
        |_c, x| 0.1 * (1.0 + 0.1 * (4.0 * std::f64::consts::PI * x).sin()),
    );

    let integrator = Integrator::new(Box::new(StaggeredStepper::new()));
    let config = RunConfiguration::new(1e-7, 100);

    let result = integrator.run(&scenario, &config).unwrap();
    assert_eq!(result.outcome, RunOutcome::Completed);

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("final.csv");
    let path = path.to_str().unwrap();

    export_profile_csv(&scenario.grid, &result.final_state, &["p", "n"], path, None).unwrap();

    let content = std::fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "x,p,n");
    // Header + one row per node
    assert_eq!(lines.len(), 1 + scenario.grid.nodes());
}
