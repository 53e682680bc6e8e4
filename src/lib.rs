//! drift-rs: 1D Drift-Diffusion Simulation
//!
//! Explicit finite-difference simulation of the coupled nonlinear
//! conservation law
//!
//! ```text
//! dy/dt + d/dx( g(y) * dh(y)/dx ) = f(y)
//! ```
//!
//! for a vector state y(x, t), in particular the hole/electron carrier pair
//! of a 1D semiconductor model. Built with Rust for performance and safety.
//!
//! # Architecture
//!
//! drift-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Flux models define the pointwise functions f, g, h (what to solve)
//!    - Steppers provide the discrete update rules (how to solve)
//!
//! 2. **Extensibility and Type Safety**
//!    - Trait-based design for easy extension
//!    - Typed errors distinguishing bad configuration from runtime
//!      singularities
//!    - Divergence reported as an inspectable outcome, not a panic
//!
//! # Quick Start
//!
//! ```rust
//! use drift_rs::models::CarrierPair;
//! use drift_rs::physics::Grid;
//! use drift_rs::solver::{
//!     EdgePolicy, Integrator, RunConfiguration, Scenario, StaggeredStepper,
//! };
//!
//! # fn main() -> Result<(), drift_rs::error::SolverError> {
//! // 1. Scenario: model + grid + boundary policies + initial condition
//! let model = CarrierPair::new(0.1, 0.1);
//! let grid = Grid::new(0.05, 1.0, 0.05, 2)?;
//! let scenario = Scenario::new(
//!     Box::new(model),
//!     grid,
//!     EdgePolicy::ZeroFlux,
//!     EdgePolicy::ZeroFlux,
//!     |_c, x| 0.1 * (1.0 + 0.1 * (4.0 * std::f64::consts::PI * x).sin()),
//! );
//!
//! // 2. Configuration: dt, step count, snapshots
//! let config = RunConfiguration::new(1e-7, 1_000).with_snapshots(100);
//!
//! // 3. Run
//! let integrator = Integrator::new(Box::new(StaggeredStepper::new()));
//! let result = integrator.run(&scenario, &config)?;
//!
//! // 4. Access results
//! println!("Snapshots retained: {}", result.len());
//! println!("Outcome: {:?}", result.outcome);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Grid, state and the flux-model trait (equations)
//! - [`models`]: Concrete flux models (carrier pair, pure diffusion)
//! - [`solver`]: Steppers, boundary enforcement and the integrator (methods)
//! - [`output`]: Result visualization and export
//! - [`error`]: Typed error hierarchy

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod output;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use drift_rs::prelude::*;
    //! ```
    pub use crate::error::SolverError;
    pub use crate::models::{CarrierPair, PureDiffusion};
    pub use crate::physics::{FluxModel, Grid, StateVector};
    pub use crate::solver::{
        BoundaryEnforcer, DiffusionStepper, EdgePolicy, Integrator, RunConfiguration, RunOutcome,
        Scenario, SimulationResult, StaggeredStepper, Stepper,
    };
}
