//! Plot configuration shared by the diagnostic plots

use plotters::prelude::*;

/// Configuration for customizing the diagnostic plots
///
/// # Example
///
/// ```rust,ignore
/// use sorb_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::bet("Activated carbon, N2 at 77 K");
/// config.width = 1920;  // Full HD
/// config.height = 1080;
/// config.region_color = BLUE;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: set by plot type)
    pub title: String,

    /// X-axis label (default: "Relative pressure p/p0")
    pub xlabel: String,

    /// Y-axis label (default: set by plot type)
    pub ylabel: String,

    /// Color of points outside the selected region (default: RGB 160,160,160)
    pub point_color: RGBColor,

    /// Color of the selected-region points and fitted line (default: RED)
    pub region_color: RGBColor,

    /// Color of the monolayer marker (default: BLUE)
    pub marker_color: RGBColor,

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
            xlabel: "Relative pressure p/p0".to_string(),
            ylabel: String::new(), // Set by specific plot type
            point_color: RGBColor(160, 160, 160),
            region_color: RED,
            marker_color: BLUE,
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
    /// Create config for the BET plot with optional custom title
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::bet("MOF-5");
    /// let config = PlotConfig::bet(NO_TITLE);
    /// ```
    pub fn bet(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.ylabel = "p / n(1-p)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "BET plot".to_string());
        config
    }

    /// Create config for the Roquerol plot with optional custom title
    pub fn roquerol(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.ylabel = "n(1-p)".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Roquerol plot".to_string());
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_type_constructors_set_labels() {
        let bet = PlotConfig::bet(NO_TITLE);
        assert_eq!(bet.title, "BET plot");
        assert_eq!(bet.ylabel, "p / n(1-p)");

        let roq = PlotConfig::roquerol("Custom");
        assert_eq!(roq.title, "Custom");
        assert_eq!(roq.ylabel, "n(1-p)");
    }
}
