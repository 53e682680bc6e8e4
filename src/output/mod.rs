//! Output module for simulation results
//!
//! This module provides tools to output simulation results:
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── profile.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use drift_rs::output::visualization::plot_profile;
//!
//! plot_profile(&grid, &result.final_state, &["p", "n"], "final.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use drift_rs::output::export::export_profile_csv;
//!
//! export_profile_csv(&grid, &result.final_state, &["p", "n"], "final.csv", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Visualization**: For human interpretation (plots, graphs)
//! - **Export**: For programmatic analysis (CSV)
//!
//! Both sub-modules read straight from [`Grid`](crate::physics::Grid) and
//! [`StateVector`](crate::physics::StateVector); neither knows about models
//! or steppers.

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{plot_profile, plot_profile_evolution, PlotConfig};

pub use export::{export_profile_csv, export_snapshots_csv, CsvConfig, CsvMetadata};
