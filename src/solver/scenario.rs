//! Simulation scenario definition
//!
//! A scenario combines a flux model, a grid, per-edge boundary policies and
//! an initial state. It is the "WHAT to solve" (not "HOW to solve"): the
//! same scenario can be advanced by different steppers.

use crate::error::SolverError;
use crate::physics::{FluxModel, Grid, StateVector};
use crate::solver::boundary::EdgePolicy;

/// Simulation scenario: model + grid + boundary policies + initial state
///
/// # Example
///
/// ```rust
/// use drift_rs::models::PureDiffusion;
/// use drift_rs::physics::Grid;
/// use drift_rs::solver::{EdgePolicy, Scenario};
///
/// let grid = Grid::new(0.0, 1.0, 0.01, 1).unwrap();
/// let scenario = Scenario::new(
///     Box::new(PureDiffusion::new()),
///     grid,
///     EdgePolicy::Dirichlet(0.0),
///     EdgePolicy::Dirichlet(0.0),
///     |_c, x| x * (1.0 - x),
/// );
///
/// assert!(scenario.validate().is_ok());
/// ```
pub struct Scenario {
    /// Flux model (the pointwise physics)
    pub model: Box<dyn FluxModel>,

    /// Spatial discretization
    pub grid: Grid,

    /// Left-edge boundary policy
    pub left: EdgePolicy,

    /// Right-edge boundary policy
    pub right: EdgePolicy,

    initial: StateVector,
}

impl Scenario {
    /// Create a scenario; the initial state is built by evaluating
    /// `profile(component, x)` on every grid node, ghost nodes included.
    pub fn new<F>(
        model: Box<dyn FluxModel>,
        grid: Grid,
        left: EdgePolicy,
        right: EdgePolicy,
        profile: F,
    ) -> Self
    where
        F: Fn(usize, f64) -> f64,
    {
        let initial = StateVector::from_profile(&grid, model.components(), profile);
        Self {
            model,
            grid,
            left,
            right,
            initial,
        }
    }

    /// Initial condition, as evaluated on this scenario's grid
    pub fn initial_state(&self) -> &StateVector {
        &self.initial
    }

    /// Get model name
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Verify internal consistency before a run
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.model.components() == 0 {
            return Err(SolverError::Configuration(
                "Model must have at least one component".to_string(),
            ));
        }
        if !self.initial.is_finite() {
            return Err(SolverError::Configuration(
                "Initial condition contains non-finite values".to_string(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("model", &self.model_name())
            .field("components", &self.model.components())
            .field("nodes", &self.grid.nodes())
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
