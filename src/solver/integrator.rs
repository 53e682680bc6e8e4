//! Time-integration loop
//!
//! The integrator owns the run protocol: validate, enforce boundaries on
//! the initial state, then repeat advance / enforce / check-finite for N
//! steps, recording snapshots along the way. The discrete update rule
//! itself lives behind the [`Stepper`] trait.

use log::{info, warn};

use crate::error::SolverError;
use crate::solver::boundary::BoundaryEnforcer;
use crate::solver::scenario::Scenario;
use crate::solver::traits::{RunConfiguration, RunOutcome, SimulationResult, Stepper};

/// Stability bound for explicit diffusion schemes (von Neumann analysis)
const STABILITY_RATIO: f64 = 0.5;

/// Drives a [`Stepper`] over a [`Scenario`] for a configured number of steps
///
/// # Run Protocol
///
/// 1. Validate the scenario and configuration; check that the stepper's
///    stencil half-width matches the grid's ghost count.
/// 2. Apply boundary enforcement to the initial state, so the first flux
///    evaluation already reads a corrected state.
/// 3. For each step: advance, enforce boundaries, then (when enabled)
///    check finiteness. A non-finite update is *not* committed; the run
///    stops with [`RunOutcome::Diverged`] and the last valid state.
///
/// # Example
///
/// ```rust
/// use drift_rs::models::PureDiffusion;
/// use drift_rs::physics::Grid;
/// use drift_rs::solver::{
///     DiffusionStepper, EdgePolicy, Integrator, RunConfiguration, Scenario,
/// };
///
/// let grid = Grid::new(0.0, 1.0, 0.1, 1).unwrap();
/// let scenario = Scenario::new(
///     Box::new(PureDiffusion::new()),
///     grid,
///     EdgePolicy::Dirichlet(0.0),
///     EdgePolicy::Dirichlet(0.0),
///     |_c, x| x * (1.0 - x),
/// );
///
/// let integrator = Integrator::new(Box::new(DiffusionStepper::new()));
/// let config = RunConfiguration::new(1e-3, 100);
/// let result = integrator.run(&scenario, &config).unwrap();
///
/// assert!(result.ensure_completed().is_ok());
/// ```
pub struct Integrator {
    stepper: Box<dyn Stepper>,
}

impl Integrator {
    /// Create an integrator around the given stepper
    pub fn new(stepper: Box<dyn Stepper>) -> Self {
        Self { stepper }
    }

    /// Name of the underlying scheme
    pub fn scheme_name(&self) -> &str {
        self.stepper.name()
    }

    /// Run the scenario for `config.steps` steps of size `config.dt`
    ///
    /// # Errors
    ///
    /// - [`SolverError::Configuration`] when the scenario or configuration
    ///   is invalid, or when the stencil half-width does not match the
    ///   grid's ghost count
    /// - [`SolverError::Singularity`] when a flux evaluation is undefined
    ///
    /// Divergence is *not* an error: the run returns normally with
    /// [`RunOutcome::Diverged`] and the last valid state.
    pub fn run(
        &self,
        scenario: &Scenario,
        config: &RunConfiguration,
    ) -> Result<SimulationResult, SolverError> {
        scenario.validate()?;
        config.validate()?;

        let grid = &scenario.grid;
        let width = self.stepper.stencil_half_width();

        if grid.ghost_nodes() != width {
            return Err(SolverError::Configuration(format!(
                "Grid has {} ghost nodes per edge but the {} scheme needs {}",
                grid.ghost_nodes(),
                self.stepper.name(),
                width
            )));
        }
        if grid.nodes() <= 2 * width {
            return Err(SolverError::Configuration(format!(
                "Grid has {} nodes, too few for a stencil of half-width {}",
                grid.nodes(),
                width
            )));
        }

        let dx = grid.spacing();
        let ratio = config.dt / (dx * dx);
        if ratio >= STABILITY_RATIO {
            warn!(
                "dt/dx^2 = {:.3} exceeds the stability bound {}; expect divergence",
                ratio, STABILITY_RATIO
            );
        }

        info!(
            "Running {} on '{}': {} steps, dt = {:.3e}, {} nodes",
            self.stepper.name(),
            scenario.model_name(),
            config.steps,
            config.dt,
            grid.nodes()
        );

        let enforcer = BoundaryEnforcer::new(scenario.left, scenario.right, width);

        let mut state = scenario.initial_state().clone();
        enforcer.apply(&mut state);

        let mut time_points = Vec::new();
        let mut snapshots = Vec::new();
        if config.snapshot_every.is_some() {
            time_points.push(0.0);
            snapshots.push(state.clone());
        }

        let mut outcome = RunOutcome::Completed;

        for step in 1..=config.steps {
            let mut next = self
                .stepper
                .advance(scenario.model.as_ref(), grid, &state, config.dt)
                .map_err(|e| SolverError::Singularity {
                    step,
                    component: e.component,
                    node: e.node,
                })?;

            enforcer.apply(&mut next);

            if config.check_finite && !next.is_finite() {
                // Do not commit the bad update; `state` stays the last
                // valid level.
                warn!(
                    "Non-finite values at step {} of {}; stopping (dt/dx^2 = {:.3})",
                    step, config.steps, ratio
                );
                outcome = RunOutcome::Diverged { at_step: step };
                break;
            }

            state = next;

            if let Some(every) = config.snapshot_every {
                if step % every == 0 {
                    time_points.push(step as f64 * config.dt);
                    snapshots.push(state.clone());
                }
            }
        }

        let mut result = SimulationResult::new(time_points, snapshots, state, outcome);
        result.add_metadata("scheme", self.stepper.name());
        result.add_metadata("model", scenario.model_name());
        result.add_metadata("dt", &format!("{:e}", config.dt));
        result.add_metadata("steps", &config.steps.to_string());
        result.add_metadata("dx", &format!("{:e}", dx));

        Ok(result)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CarrierPair, PureDiffusion};
    use crate::physics::Grid;
    use crate::solver::boundary::EdgePolicy;
    use crate::solver::methods::{DiffusionStepper, StaggeredStepper};

    fn diffusion_scenario(ghost: usize) -> Scenario {
        let grid = Grid::new(0.0, 1.0, 0.1, ghost).unwrap();
        Scenario::new(
            Box::new(PureDiffusion::new()),
            grid,
            EdgePolicy::Dirichlet(0.0),
            EdgePolicy::Dirichlet(0.0),
            |_c, x| x * (1.0 - x),
        )
    }

    #[test]
    fn test_ghost_count_must_match_stencil() {
        let integrator = Integrator::new(Box::new(StaggeredStepper::new()));
        let config = RunConfiguration::new(1e-4, 10);

        // Staggered needs 2 ghosts, scenario has 1
        let err = integrator.run(&diffusion_scenario(1), &config).unwrap_err();
        assert!(err.to_string().contains("ghost nodes"));
    }

    #[test]
    fn test_stable_run_completes() {
        let integrator = Integrator::new(Box::new(DiffusionStepper::new()));
        // dt/dx^2 = 0.1, well inside the bound
        let config = RunConfiguration::new(1e-3, 200);

        let result = integrator.run(&diffusion_scenario(1), &config).unwrap();

        assert_eq!(result.outcome, RunOutcome::Completed);
        assert!(result.final_state.is_finite());
        assert_eq!(result.metadata.get("scheme").unwrap(), "Classical diffusion");
    }

    #[test]
    fn test_unstable_run_reports_divergence() {
        let integrator = Integrator::new(Box::new(DiffusionStepper::new()));
        // dt/dx^2 = 1.0, twice the stability bound; the highest mode is
        // amplified ~3x per step and overflows well before the step budget
        let config = RunConfiguration::new(1e-2, 2000);

        let result = integrator.run(&diffusion_scenario(1), &config).unwrap();

        assert!(result.is_diverged());
        // The retained state is the last valid one
        assert!(result.final_state.is_finite());
        assert!(result.ensure_completed().is_err());
    }

    #[test]
    fn test_disabled_finite_check_runs_to_the_end() {
        let integrator = Integrator::new(Box::new(DiffusionStepper::new()));
        // Same unstable setup as above, but with the per-step check off:
        // the run is never cut short and the blow-up lands in the final
        // state instead of a Diverged outcome.
        let config = RunConfiguration::new(1e-2, 2000).without_finite_check();

        let result = integrator.run(&diffusion_scenario(1), &config).unwrap();

        assert_eq!(result.outcome, RunOutcome::Completed);
        assert!(!result.final_state.is_finite());
    }

    #[test]
    fn test_snapshot_cadence() {
        let integrator = Integrator::new(Box::new(DiffusionStepper::new()));
        let config = RunConfiguration::new(1e-3, 100).with_snapshots(25);

        let result = integrator.run(&diffusion_scenario(1), &config).unwrap();

        // Initial state plus steps 25, 50, 75, 100
        assert_eq!(result.len(), 5);
        assert!((result.time_points[0] - 0.0).abs() < 1e-15);
        assert!((result.time_points[4] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_no_snapshots_by_default() {
        let integrator = Integrator::new(Box::new(DiffusionStepper::new()));
        let config = RunConfiguration::new(1e-3, 10);

        let result = integrator.run(&diffusion_scenario(1), &config).unwrap();

        assert!(result.is_empty());
        assert!(result.final_state.is_finite());
    }

    #[test]
    fn test_singularity_carries_step_and_location() {
        let grid = Grid::new(0.0, 1.0, 0.1, 2).unwrap();
        // Exact zero in the hole density at one interior node
        let scenario = Scenario::new(
            Box::new(CarrierPair::new(0.1, 0.1)),
            grid,
            EdgePolicy::ZeroFlux,
            EdgePolicy::ZeroFlux,
            |c, x| {
                if c == 0 && (x - 0.3).abs() < 1e-12 {
                    0.0
                } else {
                    0.2
                }
            },
        );

        let integrator = Integrator::new(Box::new(StaggeredStepper::new()));
        let config = RunConfiguration::new(1e-6, 10);

        let err = integrator.run(&scenario, &config).unwrap_err();
        match err {
            SolverError::Singularity { step, component, node } => {
                assert_eq!(step, 1);
                assert_eq!(component, 0);
                // x = 0.3 is node 5 on a grid with 2 ghosts and dx = 0.1
                assert_eq!(node, 5);
            }
            other => panic!("expected Singularity, got {:?}", other),
        }
    }

    #[test]
    fn test_dirichlet_edges_pinned_every_step() {
        let integrator = Integrator::new(Box::new(DiffusionStepper::new()));
        let config = RunConfiguration::new(1e-3, 50);

        let result = integrator.run(&diffusion_scenario(1), &config).unwrap();

        let n = result.final_state.nodes();
        assert_eq!(result.final_state[(0, 0)], 0.0);
        assert_eq!(result.final_state[(0, 1)], 0.0);
        assert_eq!(result.final_state[(0, n - 2)], 0.0);
        assert_eq!(result.final_state[(0, n - 1)], 0.0);
    }
}
