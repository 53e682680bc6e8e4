//! CSV export for simulation results
//!
//! This module writes spatial profiles to CSV (Comma-Separated Values)
//! format, which is compatible with Excel, Python pandas, MATLAB, and most
//! data analysis tools.
//!
//! # Features
//!
//! - **Simple interface**: Export straight from [`Grid`] and [`StateVector`]
//! - **Metadata support**: Optional headers with run parameters
//! - **Customizable**: Delimiter, precision, format options
//! - **Multi-component**: One column per state component
//! - **Validation**: Checks for NaN, empty data, mismatched lengths
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use drift_rs::output::export::export_profile_csv;
//!
//! export_profile_csv(&grid, &result.final_state, &["p", "n"], "final.csv", None)?;
//! ```
//!
//! **Output** (`final.csv`):
//! ```csv
//! x,p,n
//! 0.000000,0.141421,0.141421
//! 0.050000,0.143005,0.140122
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use drift_rs::output::export::{export_profile_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata::from_run("Carrier pair", "Staggered flux", 1e-7, 10_000);
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_profile_csv(&grid, &state, &["p", "n"], "final.csv", Some(&config))?;
//! ```
//!
//! **Output** (`final.csv`):
//! ```csv
//! # Drift-Diffusion Simulation Data
//! # Generated: 2026-08-30T15:30:00Z
//! # Model: Carrier pair
//! # Scheme: Staggered flux
//! # Time Step: 1e-7 s
//! # Steps: 10000
//! #
//! x,p,n
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::physics::{Grid, StateVector};

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     precision: 10,         // High precision
///     include_metadata: true,
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header for the position column (default: "x")
    pub x_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
            metadata: None,
            x_header: "x".to_string(),
        }
    }
}

impl CsvConfig {
    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are written to the header.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Model name (e.g. "Carrier pair")
    pub model_name: Option<String>,

    /// Scheme name (e.g. "Staggered flux")
    pub scheme_name: Option<String>,

    /// Time step dt (seconds)
    pub dt: Option<f64>,

    /// Number of steps taken
    pub steps: Option<usize>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata from the parameters of one run
    pub fn from_run(model: &str, scheme: &str, dt: f64, steps: usize) -> Self {
        Self {
            model_name: Some(model.to_string()),
            scheme_name: Some(scheme.to_string()),
            dt: Some(dt),
            steps: Some(steps),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Drift-Diffusion Simulation Data")?;

    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(file, "# Model: {}", model)?;
    }
    if let Some(scheme) = &metadata.scheme_name {
        writeln!(file, "# Scheme: {}", scheme)?;
    }
    if let Some(dt) = metadata.dt {
        writeln!(file, "# Time Step: {:e} s", dt)?;
    }
    if let Some(steps) = metadata.steps {
        writeln!(file, "# Steps: {}", steps)?;
    }
    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    writeln!(file, "#")?;

    Ok(())
}

/// Format number with configured precision
fn format_number(value: f64, config: &CsvConfig) -> String {
    format!("{:.prec$}", value, prec = config.precision)
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export one spatial profile to CSV, one row per node
///
/// The position column comes from the grid (ghost nodes included, so the
/// file shows exactly what the stepper computed on); one column per state
/// component follows.
///
/// # Arguments
///
/// * `grid` - Spatial discretization the state lives on
/// * `state` - State to export
/// * `labels` - Column label for each component
/// * `output_path` - Output file path
/// * `config` - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// - Label count differs from component count
/// - NaN or Inf values in the state
/// - Grid and state node counts differ
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_profile_csv(&grid, &state, &["p", "n"], "final.csv", None)?;
/// ```
pub fn export_profile_csv(
    grid: &Grid,
    state: &StateVector,
    labels: &[&str],
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if labels.len() != state.components() {
        return Err(format!(
            "Label count mismatch: {} labels versus {} components",
            labels.len(),
            state.components()
        )
        .into());
    }

    if grid.nodes() != state.nodes() {
        return Err(format!(
            "Node count mismatch: grid has {} nodes, state has {}",
            grid.nodes(),
            state.nodes()
        )
        .into());
    }

    if !state.is_finite() {
        return Err("Invalid data: NaN or Inf detected in state".into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    write!(file, "{}", config.x_header)?;
    for label in labels {
        write!(file, "{}{}", config.delimiter, label)?;
    }
    writeln!(file)?;

    // ============================= Write Data =============================

    for j in 0..grid.nodes() {
        write!(file, "{}", format_number(grid.coord(j), config))?;
        for c in 0..state.components() {
            write!(
                file,
                "{}{}",
                config.delimiter,
                format_number(state[(c, j)], config)
            )?;
        }
        writeln!(file)?;
    }

    Ok(())
}

/// Export the retained snapshots of a run to CSV, one row per (time, node)
///
/// Long format: `t,x,<label 0>,<label 1>,...`, suitable for pivoting in
/// pandas or gnuplot.
///
/// # Arguments
///
/// * `grid` - Spatial discretization the snapshots live on
/// * `time_points` - Time of each snapshot
/// * `snapshots` - Snapshots, aligned with `time_points`
/// * `labels` - Column label for each component
/// * `output_path` - Output file path
/// * `config` - Optional CSV configuration
///
/// # Errors
///
/// - Empty snapshot list
/// - Time and snapshot counts differ
/// - Label count differs from component count
/// - NaN or Inf values in any snapshot
pub fn export_snapshots_csv(
    grid: &Grid,
    time_points: &[f64],
    snapshots: &[StateVector],
    labels: &[&str],
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if snapshots.is_empty() {
        return Err("Empty data: no snapshots to export".into());
    }

    if time_points.len() != snapshots.len() {
        return Err(format!(
            "Length mismatch: {} time points versus {} snapshots",
            time_points.len(),
            snapshots.len()
        )
        .into());
    }

    for (i, snapshot) in snapshots.iter().enumerate() {
        if snapshot.components() != labels.len() {
            return Err(format!(
                "Label count mismatch at snapshot {}: {} labels versus {} components",
                i,
                labels.len(),
                snapshot.components()
            )
            .into());
        }
        if !snapshot.is_finite() {
            return Err(format!("Invalid data: NaN or Inf detected in snapshot {}", i).into());
        }
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    write!(file, "t{}{}", config.delimiter, config.x_header)?;
    for label in labels {
        write!(file, "{}{}", config.delimiter, label)?;
    }
    writeln!(file)?;

    // ============================= Write Data =============================

    for (time, snapshot) in time_points.iter().zip(snapshots.iter()) {
        for j in 0..grid.nodes() {
            write!(
                file,
                "{}{}{}",
                format_number(*time, config),
                config.delimiter,
                format_number(grid.coord(j), config)
            )?;
            for c in 0..snapshot.components() {
                write!(
                    file,
                    "{}{}",
                    config.delimiter,
                    format_number(snapshot[(c, j)], config)
                )?;
            }
            writeln!(file)?;
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    fn small_state() -> (Grid, StateVector) {
        let grid = Grid::new(0.0, 1.0, 0.5, 0).unwrap();
        let state = StateVector::from_profile(&grid, 2, |c, x| c as f64 + x);
        (grid, state)
    }

    #[test]
    fn test_profile_export_writes_header_and_rows() {
        let (grid, state) = small_state();
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        export_profile_csv(&grid, &state, &["p", "n"], path, None).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "x,p,n");
        // 3 nodes -> header + 3 data rows
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("0.000000,0.000000,1.000000"));
    }

    #[test]
    fn test_profile_export_rejects_label_mismatch() {
        let (grid, state) = small_state();
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let err = export_profile_csv(&grid, &state, &["p"], path, None).unwrap_err();
        assert!(err.to_string().contains("Label count mismatch"));
    }

    #[test]
    fn test_profile_export_rejects_non_finite() {
        let (grid, mut state) = small_state();
        state[(0, 1)] = f64::NAN;
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let err = export_profile_csv(&grid, &state, &["p", "n"], path, None).unwrap_err();
        assert!(err.to_string().contains("NaN or Inf"));
    }

    #[test]
    fn test_metadata_header_lines() {
        let (grid, state) = small_state();
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let metadata = CsvMetadata::from_run("Carrier pair", "Staggered flux", 1e-7, 10_000);
        let config = CsvConfig::default().with_metadata(metadata);

        export_profile_csv(&grid, &state, &["p", "n"], path, Some(&config)).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("# Model: Carrier pair"));
        assert!(content.contains("# Scheme: Staggered flux"));
        assert!(content.contains("# Steps: 10000"));
    }

    #[test]
    fn test_custom_delimiter_and_precision() {
        let (grid, state) = small_state();
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let config = CsvConfig::default().delimiter(';').precision(2);
        export_profile_csv(&grid, &state, &["p", "n"], path, Some(&config)).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.lines().nth(1).unwrap().contains("0.00;0.00;1.00"));
    }

    #[test]
    fn test_snapshot_export_long_format() {
        let (grid, state) = small_state();
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let times = vec![0.0, 0.1];
        let snapshots = vec![state.clone(), state];
        export_snapshots_csv(&grid, &times, &snapshots, &["p", "n"], path, None).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "t,x,p,n");
        // 2 snapshots x 3 nodes
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_snapshot_export_rejects_empty() {
        let (grid, _) = small_state();
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let err = export_snapshots_csv(&grid, &[], &[], &["p"], path, None).unwrap_err();
        assert!(err.to_string().contains("no snapshots"));
    }
}
