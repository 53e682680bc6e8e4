//! Data export for external analysis
//!
//! Currently CSV only. Profiles export wide (one column per component),
//! snapshot series export long (one row per time and node).

mod csv;

pub use csv::{export_profile_csv, export_snapshots_csv, CsvConfig, CsvMetadata};
