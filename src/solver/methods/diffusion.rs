//! Classical explicit diffusion stepper
//!
//! # Mathematical Background
//!
//! The textbook explicit scheme for the heat equation dy/dt = d2y/dx2:
//!
//! ```text
//! y_j' = y_j + dt * f_j + dt/dx^2 * ( h_{j+1} + h_{j-1} - 2 h_j )
//! ```
//!
//! with h = y for plain diffusion. The mobility g is assumed to be unity
//! and is not evaluated; models with a non-trivial g belong on
//! [`StaggeredStepper`](crate::solver::StaggeredStepper).
//!
//! # Stability
//!
//! The scheme is **conditionally stable**. Von Neumann analysis of the
//! plain-diffusion case bounds the step-size ratio:
//!
//! ```text
//! dt/dx^2 < 1/2
//! ```
//!
//! Above the bound, rounding and truncation errors in the highest Fourier
//! mode are amplified every step and the state blows up within a handful of
//! steps — which this crate treats as a documented outcome, not a bug.
//!
//! # Error Analysis
//!
//! - **Local truncation error**: O(dt) + O(dx^2)
//! - **Global error**: first-order in dt after T/dt steps

use crate::physics::{FluxError, FluxModel, Grid, StateVector};
use crate::solver::traits::Stepper;

/// Three-point explicit update for diffusion-dominated models
///
/// Interior nodes j in `[1, n-2]` are written into a fresh buffer; the
/// outermost node on each side is left for the boundary enforcer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffusionStepper;

impl DiffusionStepper {
    /// Create a new classical diffusion stepper
    pub fn new() -> Self {
        Self
    }
}

impl Stepper for DiffusionStepper {
    fn stencil_half_width(&self) -> usize {
        1
    }

    fn advance(
        &self,
        model: &dyn FluxModel,
        grid: &Grid,
        state: &StateVector,
        dt: f64,
    ) -> Result<StateVector, FluxError> {
        let f = model.source(state);
        let h = model.potential(state)?;

        let n = state.nodes();
        let dx = grid.spacing();
        let ratio = dt / (dx * dx);

        let mut next = state.clone();

        for c in 0..state.components() {
            for j in 1..(n - 1) {
                let second_diff = h[(c, j + 1)] + h[(c, j - 1)] - 2.0 * h[(c, j)];
                next[(c, j)] = state[(c, j)] + dt * f[(c, j)] + ratio * second_diff;
            }
        }

        Ok(next)
    }

    fn name(&self) -> &str {
        "Classical diffusion"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
