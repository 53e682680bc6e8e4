//! Explicit stepper implementations
//!
//! Each stepper is one discrete update rule behind the
//! [`Stepper`](crate::solver::Stepper) trait:
//!
//! - [`StaggeredStepper`]: four-point staggered-flux scheme for the full
//!   conservation law with mobility g and potential h (half-width 2)
//! - [`DiffusionStepper`]: classical three-point scheme for
//!   diffusion-dominated models with unit mobility (half-width 1)
//!
//! Steppers compute interior updates only; edge bands are corrected by the
//! boundary enforcer after every step.

mod diffusion;
mod staggered;

pub use diffusion::DiffusionStepper;
pub use staggered::StaggeredStepper;
