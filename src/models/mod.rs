//! Concrete flux models
//!
//! The flux functions f, g, h form a small closed set of problem-specific
//! variants, implemented as strategies behind [`FluxModel`](crate::physics::FluxModel)
//! and selected at run configuration:
//!
//! - [`PureDiffusion`]: scalar heat equation (g = 1, h = y, f = 0)
//! - [`CarrierPair`]: coupled hole/electron drift-diffusion pair

pub mod carriers;
pub mod diffusion;

pub use carriers::{CarrierPair, ELECTRONS, HOLES};
pub use diffusion::PureDiffusion;
