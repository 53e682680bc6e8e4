//! Flux-model trait and types
//!
//! This module defines the core API for flux models:
//! - `FluxModel`: trait supplying the three pure flux functions
//! - `FluxError`: pointwise domain violation during evaluation
//!
//! A flux model encapsulates the problem-specific closed forms f, g, h of
//! the conservation law
//!
//! ```text
//! dy/dt + d/dx( g(y) * dh(y)/dx ) = f(y)
//! ```
//!
//! Each function maps the whole state to a same-shaped state, computed
//! row-wise with no cross-node coupling: every output node depends only on
//! the component values at that same node. Spatial derivatives are the
//! stepper's job, not the model's.

use crate::physics::StateVector;
use thiserror::Error;

// =================================================================================================
// Flux evaluation error
// =================================================================================================

/// Pointwise domain violation during a flux evaluation
///
/// Raised when a flux function meets an undefined operation, typically the
/// reciprocal of a component value that is exactly zero (carrier depletion).
/// Carries enough position context for the integrator to attach the step
/// index and report a diagnosable failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("undefined flux value for component {component} at node {node}")]
pub struct FluxError {
    /// Component row where evaluation failed
    pub component: usize,
    /// Grid node where evaluation failed
    pub node: usize,
}

// =================================================================================================
// Flux Model Trait
// =================================================================================================

/// Trait for flux models
///
/// # Responsibility
///
/// Provides the pointwise physics f(y), g(y), h(y) of the conservation
/// law. Does NOT discretize or advance them (that's the stepper's job).
///
/// Models are selected at run configuration; the stepper evaluates each
/// function once per time step over the entire current state and indexes
/// the results with its stencil offsets.
pub trait FluxModel: Send + Sync {
    /// Number of component rows this model evolves
    fn components(&self) -> usize;

    /// Source term f(y), evaluated row-wise on every node
    fn source(&self, state: &StateVector) -> StateVector;

    /// Mobility factor g(y), evaluated row-wise on every node
    fn mobility(&self, state: &StateVector) -> StateVector;

    /// Quasi-potential h(y), evaluated row-wise on every node
    ///
    /// # Errors
    ///
    /// Returns [`FluxError`] when the function is undefined at some node,
    /// e.g. a reciprocal of a zero component value. This is an expected
    /// failure mode near depletion and must not be hidden.
    fn potential(&self, state: &StateVector) -> Result<StateVector, FluxError>;

    /// Name of the model (used for display and logging)
    fn name(&self) -> &str;

    /// Description of the model (optional)
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Grid;

    /// Identity model: f = 0, g = y, h = y
    struct Identity;

    impl FluxModel for Identity {
        fn components(&self) -> usize {
            1
        }

        fn source(&self, state: &StateVector) -> StateVector {
            state.map(|_| 0.0)
        }

        fn mobility(&self, state: &StateVector) -> StateVector {
            state.clone()
        }

        fn potential(&self, state: &StateVector) -> Result<StateVector, FluxError> {
            Ok(state.clone())
        }

        fn name(&self) -> &str {
            "Identity"
        }
    }

    #[test]
    fn test_flux_model_shapes_match() {
        let grid = Grid::new(0.0, 1.0, 0.1, 2).unwrap();
        let state = StateVector::from_profile(&grid, 1, |_c, x| 1.0 + x);

        let model = Identity;
        let f = model.source(&state);
        let g = model.mobility(&state);
        let h = model.potential(&state).unwrap();

        for out in [&f, &g, &h] {
            assert_eq!(out.components(), state.components());
            assert_eq!(out.nodes(), state.nodes());
        }
    }

    #[test]
    fn test_flux_error_message() {
        let err = FluxError {
            component: 1,
            node: 7,
        };
        let message = err.to_string();
        assert!(message.contains("component 1"));
        assert!(message.contains("node 7"));
    }
}
