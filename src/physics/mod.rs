//! Physical building blocks
//!
//! This module provides the spatial and state-level primitives of the
//! simulation, separate from the numerical machinery in [`crate::solver`]:
//!
//! - **Grid**: uniform node coordinates with ghost padding
//! - **StateVector**: component rows aligned with the grid nodes
//! - **FluxModel**: the pure pointwise functions f, g, h of the
//!   conservation law
//!
//! # Architecture
//!
//! Flux models are **separate from numerical steppers**:
//! - The model provides the **equations** (pointwise physics)
//! - The stepper provides the **discretization** that advances them
//!
//! This separation allows the same model to run under different stencils
//! and the same stencil to run different models.
//!
//! # Example
//!
//! ```rust
//! use drift_rs::physics::{Grid, StateVector};
//!
//! let grid = Grid::new(0.0, 1.0, 0.05, 2).unwrap();
//! let state = StateVector::from_profile(&grid, 2, |_c, x| {
//!     0.1 * (1.0 + 0.1 * (4.0 * std::f64::consts::PI * x).sin())
//! });
//!
//! assert_eq!(state.nodes(), grid.nodes());
//! ```

pub mod flux;
pub mod grid;
pub mod state;

// re-export commonly used types for convenience
pub use flux::{FluxError, FluxModel};
pub use grid::Grid;
pub use state::StateVector;
