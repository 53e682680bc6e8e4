//! Plotting of simulation results
//!
//! Built on `plotters`; backend selected by the output file extension
//! (`.svg` gives vector output, anything else rasterizes to PNG).

mod config;
mod profile;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};
pub use profile::{plot_profile, plot_profile_evolution};
