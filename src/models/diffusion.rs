//! Scalar pure-diffusion model
//!
//! The teaching special case of the conservation law: g = 1, h = y, f = 0,
//! which reduces the equation to the heat equation dy/dt = d2y/dx2. Under
//! the classical explicit scheme this is the textbook demonstration of the
//! von Neumann stability bound dt/dx^2 < 1/2.

use crate::physics::{FluxError, FluxModel, StateVector};

/// Single-component heat equation: f = 0, g = 1, h = y
///
/// # Example
///
/// ```rust
/// use drift_rs::models::PureDiffusion;
/// use drift_rs::physics::{FluxModel, Grid, StateVector};
///
/// let grid = Grid::new(0.0, 1.0, 0.01, 1).unwrap();
/// let state = StateVector::from_profile(&grid, 1, |_c, x| x * (1.0 - x));
///
/// let model = PureDiffusion::new();
/// assert_eq!(model.components(), 1);
/// assert_eq!(model.potential(&state).unwrap(), state);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PureDiffusion;

impl PureDiffusion {
    /// Create a pure-diffusion model
    pub fn new() -> Self {
        Self
    }
}

impl FluxModel for PureDiffusion {
    fn components(&self) -> usize {
        1
    }

    fn source(&self, state: &StateVector) -> StateVector {
        state.map(|_| 0.0)
    }

    fn mobility(&self, state: &StateVector) -> StateVector {
        state.map(|_| 1.0)
    }

    fn potential(&self, state: &StateVector) -> Result<StateVector, FluxError> {
        Ok(state.clone())
    }

    fn name(&self) -> &str {
        "Pure diffusion"
    }

    fn description(&self) -> Option<&str> {
        Some("Heat equation dy/dt = d2y/dx2, the explicit-scheme teaching case")
    }
}

// =================================================================================================
// Tests
// =================================================================================================
