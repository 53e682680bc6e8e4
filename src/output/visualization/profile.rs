//! Spatial profile plotting
//!
//! Plots y(x) for every component of a state, and the evolution of one
//! component across the retained snapshots of a run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use drift_rs::output::visualization::plot_profile;
//!
//! let result = integrator.run(&scenario, &config)?;
//! plot_profile(&grid, &result.final_state, &["p", "n"], "final.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use crate::physics::{Grid, StateVector};

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot all components of a spatial profile on shared axes
///
/// Densities can go negative during a run, so the y-range is taken from the
/// data on both sides with a small padding, not clamped at zero.
///
/// # Arguments
///
/// * `grid` - Spatial discretization the state lives on
/// * `state` - State to plot
/// * `labels` - Legend label for each component
/// * `output_path` - Path to save the plot (PNG or SVG, by extension)
/// * `config` - Optional plot configuration
///
/// # Example
///
/// ```rust,ignore
/// plot_profile(&grid, &state, &["p", "n"], "final.png", None)?;
/// ```
pub fn plot_profile(
    grid: &Grid,
    state: &StateVector,
    labels: &[&str],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if labels.len() != state.components() {
        return Err(format!(
            "Label count mismatch: {} labels versus {} components",
            labels.len(),
            state.components()
        )
        .into());
    }
    if !state.is_finite() {
        return Err("Invalid data: NaN or Inf detected in state".into());
    }

    let series: Vec<(&str, Vec<f64>)> = labels
        .iter()
        .enumerate()
        .map(|(c, label)| (*label, state.component(c)))
        .collect();

    let x_values: Vec<f64> = grid.coords().iter().cloned().collect();

    // Create default config if needed (avoid temporary value)
    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let (y_min, y_max) = value_range(series.iter().flat_map(|(_, v)| v.iter().cloned()));

    // Determine backend and plot
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_profile_impl(backend, &x_values, &series, config, y_min, y_max)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_profile_impl(backend, &x_values, &series, config, y_min, y_max)
        }
    }
}

/// Plot the evolution of one component across retained snapshots
///
/// One line per snapshot, labeled with its time.
///
/// # Arguments
///
/// * `grid` - Spatial discretization the snapshots live on
/// * `time_points` - Time of each snapshot
/// * `snapshots` - Snapshots, aligned with `time_points`
/// * `component` - Component index to plot
/// * `output_path` - Path to save the plot (PNG or SVG, by extension)
/// * `config` - Optional plot configuration
///
/// # Example
///
/// ```rust,ignore
/// plot_profile_evolution(
///     &grid,
///     &result.time_points,
///     &result.snapshots,
///     0,
///     "evolution.png",
///     None,
/// )?;
/// ```
pub fn plot_profile_evolution(
    grid: &Grid,
    time_points: &[f64],
    snapshots: &[StateVector],
    component: usize,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if snapshots.is_empty() {
        return Err("No snapshots provided".into());
    }
    if time_points.len() != snapshots.len() {
        return Err(format!(
            "Length mismatch: {} time points versus {} snapshots",
            time_points.len(),
            snapshots.len()
        )
        .into());
    }
    if component >= snapshots[0].components() {
        return Err(format!(
            "Component {} out of range (state has {})",
            component,
            snapshots[0].components()
        )
        .into());
    }
    for (i, snapshot) in snapshots.iter().enumerate() {
        if !snapshot.is_finite() {
            return Err(format!("Invalid data: NaN or Inf detected in snapshot {}", i).into());
        }
    }

    let labels: Vec<String> = time_points.iter().map(|t| format!("t = {:.3e}", t)).collect();
    let series: Vec<(&str, Vec<f64>)> = labels
        .iter()
        .zip(snapshots.iter())
        .map(|(label, snapshot)| (label.as_str(), snapshot.component(component)))
        .collect();

    let x_values: Vec<f64> = grid.coords().iter().cloned().collect();

    let default_config = PlotConfig::profile(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let (y_min, y_max) = value_range(series.iter().flat_map(|(_, v)| v.iter().cloned()));

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_profile_impl(backend, &x_values, &series, config, y_min, y_max)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_profile_impl(backend, &x_values, &series, config, y_min, y_max)
        }
    }
}

// =================================================================================================
// Helpers
// =================================================================================================

/// Data range with 10% padding, widened when the data is flat
fn value_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = (max - min).max(1e-10);
    (min - 0.1 * span, max + 0.1 * span)
}

/// Implementation with concrete backend
fn plot_profile_impl<DB: DrawingBackend>(
    backend: DB,
    x_values: &[f64],
    series: &[(&str, Vec<f64>)],
    config: &PlotConfig,
    y_min: f64,
    y_max: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let x_min = x_values.first().copied().unwrap_or(0.0);
    let x_max = x_values.last().copied().unwrap_or(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.3}", x))
            .y_label_formatter(&|y| format!("{:.3}", y))
            .draw()?;
    }

    for (i, (label, values)) in series.iter().enumerate() {
        let color = config.get_component_color(i);
        chart
            .draw_series(LineSeries::new(
                x_values.iter().zip(values.iter()).map(|(x, y)| (*x, *y)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
