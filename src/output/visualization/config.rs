//! Plot configuration shared across visualization functions

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// Used by both single-profile and evolution plots.
///
/// # Example: Single Component
///
/// ```rust,ignore
/// use drift_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::profile("Hole density");
/// config.line_color = RED;
/// config.width = 1920;  // Full HD
/// config.height = 1080;
/// ```
///
/// # Example: Carrier Pair with Custom Colors
///
/// ```rust,ignore
/// let mut config = PlotConfig::profile("Carrier densities");
/// config.component_colors = Some(vec![RED, BLUE]);
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: "Position x")
    pub xlabel: String,

    /// Y-axis label (default: "Density")
    pub ylabel: String,

    /// Line color for single-component plots (default: RED)
    pub line_color: RGBColor,

    /// Optional colors for multi-component plots (one per component)
    ///
    /// If None, uses default palette: [RED, BLUE, GREEN, MAGENTA, CYAN, ...]
    pub component_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: "Position x".to_string(),
            ylabel: "Density".to_string(),
            line_color: RED,
            component_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for spatial profile plots with optional custom title
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::profile("Final carrier densities");
    /// let config = PlotConfig::profile(None::<&str>);  // default title
    /// ```
    pub fn profile(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Spatial Profile".to_string());
        config
    }

    /// Create config for multi-component plots with custom colors
    pub fn component_colors(colors: Vec<RGBColor>) -> Self {
        let mut config = Self::default();
        config.component_colors = Some(colors);
        config
    }

    /// Get color for component at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_component_color(&self, component_index: usize) -> RGBColor {
        if let Some(ref colors) = self.component_colors {
            if component_index < colors.len() {
                return colors[component_index];
            }
        }

        // Default palette
        let default_colors = [
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0), // Orange
            RGBColor(128, 0, 128), // Purple
        ];

        default_colors[component_index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(config.show_grid);
    }

    #[test]
    fn test_profile_config_default_title() {
        let config = PlotConfig::profile(NO_TITLE);
        assert_eq!(config.title, "Spatial Profile");
        assert_eq!(config.xlabel, "Position x");
    }

    #[test]
    fn test_profile_config_with_str() {
        let config = PlotConfig::profile("Carrier densities");
        assert_eq!(config.title, "Carrier densities");
    }

    #[test]
    fn test_profile_config_with_string() {
        let config = PlotConfig::profile(format!("Profile at t={}", 0.5));
        assert_eq!(config.title, "Profile at t=0.5");
    }

    #[test]
    fn test_get_component_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.get_component_color(0), RED);
        assert_eq!(config.get_component_color(1), BLUE);
        assert_eq!(config.get_component_color(8), RED); // Wraparound
    }

    #[test]
    fn test_get_component_color_custom() {
        use plotters::style::full_palette::{LIGHTBLUE, ORANGE};
        let config = PlotConfig::component_colors(vec![ORANGE, LIGHTBLUE]);
        assert_eq!(config.get_component_color(0), ORANGE);
        assert_eq!(config.get_component_color(1), LIGHTBLUE);
    }
}
