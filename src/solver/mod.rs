//! Explicit time integration
//!
//! This module advances the states defined in [`crate::physics`] through
//! time with explicit finite-difference schemes.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The solver layer separates concerns into three pieces:
//!
//! 1. **Scenario** ([`Scenario`]) - WHAT to advance
//!    - Flux model (the pointwise physics)
//!    - Grid and per-edge boundary policies
//!    - Initial condition
//!
//! 2. **RunConfiguration** ([`RunConfiguration`]) - HOW to advance it
//!    - Time step and step count
//!    - Snapshot cadence
//!    - Finiteness checking
//!
//! 3. **Stepper** ([`Stepper`] trait) - The discrete update rule
//!    - One implementation per stencil
//!    - Independent of physics
//!
//! This separation allows the same scenario to run under different steppers
//! and the same stepper under different scenarios, which is how the method
//! comparison benchmarks are built.
//!
//! # Module Organization
//!
//! - **`traits`**: [`Stepper`], [`RunConfiguration`], [`RunOutcome`],
//!   [`SimulationResult`]
//! - **`boundary`**: [`EdgePolicy`] and [`BoundaryEnforcer`]
//! - **`scenario`**: [`Scenario`]
//! - **`methods`**: [`StaggeredStepper`], [`DiffusionStepper`]
//! - **`integrator`**: [`Integrator`], the run loop
//!
//! # Quick Start Example
//!
//! ```rust
//! use drift_rs::models::CarrierPair;
//! use drift_rs::physics::Grid;
//! use drift_rs::solver::{
//!     EdgePolicy, Integrator, RunConfiguration, Scenario, StaggeredStepper,
//! };
//!
//! // 1. Scenario (WHAT to advance)
//! let model = CarrierPair::new(0.1, 0.1);
//! let grid = Grid::new(0.05, 1.0, 0.05, 2).unwrap();
//! let scenario = Scenario::new(
//!     Box::new(model),
//!     grid,
//!     EdgePolicy::ZeroFlux,
//!     EdgePolicy::ZeroFlux,
//!     |_c, x| 0.1 * (1.0 + 0.1 * (4.0 * std::f64::consts::PI * x).sin()),
//! );
//!
//! // 2. Configuration (HOW to advance it)
//! let config = RunConfiguration::new(1e-7, 1_000).with_snapshots(100);
//!
//! // 3. Integrate
//! let integrator = Integrator::new(Box::new(StaggeredStepper::new()));
//! let result = integrator.run(&scenario, &config).unwrap();
//!
//! println!("{} snapshots, outcome {:?}", result.len(), result.outcome);
//! ```
//!
//! # Stability
//!
//! Both schemes are explicit and conditionally stable: divergence is a
//! property of the chosen `dt`/`dx` pair, governed by the von Neumann bound
//! `dt/dx^2 < 1/2`. The integrator warns when a run is configured beyond
//! the bound and reports blow-up as [`RunOutcome::Diverged`] with the last
//! valid state, so parameter sweeps can map the stability region without
//! treating each unstable run as a failure.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod boundary;
mod integrator;
mod methods;
mod scenario;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// How large a state has to be before Rayon pays off is a question about
// the numerical workload, so the knob sits in the solver layer; the state
// type only reads it.
//
// A relaxed AtomicUsize keeps the read free on the per-step hot path. The
// value tunes performance only and never affects results.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Element count above which the state's `map_with`/`try_map_with` switch
/// from sequential iteration to Rayon (with the `parallel` feature).
///
/// Flux closures do a few arithmetic operations per element, so the
/// crossover sits in the low thousands; smaller states finish before the
/// thread pool has dispatched them.
const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Current parallel-execution threshold
///
/// Flux evaluation over a state with at most this many elements stays
/// sequential; anything larger goes through Rayon when the crate is built
/// with the `parallel` feature.
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Replace the parallel-execution threshold, e.g. to force one path or the
/// other in a benchmark.
///
/// # Panics
///
/// Panics on zero, which would send even a one-element state to the thread
/// pool.
///
/// # Example
///
/// ```rust
/// use drift_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(64);
/// assert_eq!(parallel_threshold(), 64);
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Scoped threshold override for tests: applies `new_value` now, puts the
/// old value back on drop.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
}

#[cfg(test)]
impl ThresholdGuard {
    pub(crate) fn save(new_value: usize) -> Self {
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{RunConfiguration, RunOutcome, SimulationResult, Stepper};

pub use boundary::{BoundaryEnforcer, EdgePolicy};
pub use integrator::Integrator;
pub use scenario::Scenario;

pub use methods::{DiffusionStepper, StaggeredStepper};

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_round_trips_through_the_setter() {
        let _guard = ThresholdGuard::save(512);
        assert_eq!(parallel_threshold(), 512);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_rejected() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_guard_undoes_its_override() {
        let before = parallel_threshold();
        {
            let _guard = ThresholdGuard::save(before + 7);
            assert_eq!(parallel_threshold(), before + 7);
        }
        assert_eq!(parallel_threshold(), before);
    }
}
