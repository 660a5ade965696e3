//! BET and Roquerol diagnostic plots
//!
//! Both functions take the raw (pressure, loading) arrays the analysis ran
//! on plus the finished [`BetResult`], and render to PNG or SVG depending on
//! the output extension. They read the result, never recompute it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sorb_rs::output::visualization::{plot_bet, plot_roquerol};
//!
//! let result = area_bet(&sample, &adsorbate, None)?;
//! plot_bet(sample.pressure(), &sample.loading_in_mol(), &result, "bet.png", None)?;
//! plot_roquerol(sample.pressure(), &sample.loading_in_mol(), &result, "roq.svg", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use crate::characterization::transform::{bet_point, bet_transform, roq_point, roq_transform};
use crate::characterization::BetResult;

// =================================================================================================
// Public Plot Functions
// =================================================================================================

/// Plot the linearized BET points, the fitted line and the monolayer marker
///
/// # Arguments
///
/// * `pressure` - Relative pressures of every measured point
/// * `loading` - Loadings in mol, same index space
/// * `result` - The computed BET result (region, slope, intercept, monolayer)
/// * `output_path` - Path to save the plot (PNG or SVG)
/// * `config` - Optional plot configuration
pub fn plot_bet(
    pressure: &[f64],
    loading: &[f64],
    result: &BetResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if pressure.len() != loading.len() {
        return Err("pressure and loading arrays have different lengths".into());
    }

    let points = bet_transform(loading, pressure);
    let fitted_line = Some((result.slope, result.intercept));
    let marker = (
        result.p_monolayer,
        bet_point(result.n_monolayer, result.p_monolayer),
    );

    let default_config = PlotConfig::bet(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    render(
        pressure,
        &points,
        result,
        fitted_line,
        marker,
        output_path,
        config,
    )
}

/// Plot the Roquerol transform with the selected region and monolayer marker
///
/// The selected points should form a non-decreasing run; a visible hump
/// inside the region means the selection should be revisited.
pub fn plot_roquerol(
    pressure: &[f64],
    loading: &[f64],
    result: &BetResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if pressure.len() != loading.len() {
        return Err("pressure and loading arrays have different lengths".into());
    }

    let points = roq_transform(loading, pressure);
    let marker = (
        result.p_monolayer,
        roq_point(result.n_monolayer, result.p_monolayer),
    );

    let default_config = PlotConfig::roquerol(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    // No fitted line: the Roquerol plot only shows the transform shape
    render(pressure, &points, result, None, marker, output_path, config)
}

// =================================================================================================
// Rendering
// =================================================================================================

/// Dispatch on the output extension, then draw with a concrete backend
fn render(
    pressure: &[f64],
    points: &[f64],
    result: &BetResult,
    fitted_line: Option<(f64, f64)>,
    marker: (f64, f64),
    output_path: &str,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            draw_on_backend(backend, pressure, points, result, fitted_line, marker, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            draw_on_backend(backend, pressure, points, result, fitted_line, marker, config)
        }
    }
}

fn draw_on_backend<DB: DrawingBackend>(
    backend: DB,
    pressure: &[f64],
    points: &[f64],
    result: &BetResult,
    fitted_line: Option<(f64, f64)>,
    marker: (f64, f64),
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    // Axis ranges over all finite points plus the marker
    let mut x_max = marker.0;
    let mut y_max = marker.1;
    for (&p, &y) in pressure.iter().zip(points.iter()) {
        if y.is_finite() {
            x_max = x_max.max(p);
            y_max = y_max.max(y);
        }
    }

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max * 1.05, 0.0..y_max * 1.1)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel).y_desc(&config.ylabel);
    if config.show_grid {
        mesh.draw()?;
    } else {
        mesh.disable_mesh().draw()?;
    }

    let in_region =
        |i: usize| i >= result.region.minimum && i <= result.region.maximum;

    // All measured points, greyed outside the selected region
    chart
        .draw_series(
            pressure
                .iter()
                .zip(points.iter())
                .enumerate()
                .filter(|(_, (_, y))| y.is_finite())
                .map(|(i, (&p, &y))| {
                    let color = if in_region(i) {
                        config.region_color
                    } else {
                        config.point_color
                    };
                    Circle::new((p, y), 4, color.filled())
                }),
        )?
        .label("measured points");

    // Fitted line across the selected region (BET plot only)
    if let Some((slope, intercept)) = fitted_line {
        let p_low = pressure[result.region.minimum];
        let p_high = pressure[result.region.maximum];
        chart
            .draw_series(LineSeries::new(
                (0..=100).map(|i| {
                    let p = p_low + (p_high - p_low) * i as f64 / 100.0;
                    (p, slope * p + intercept)
                }),
                config.region_color.stroke_width(config.line_width),
            ))?
            .label("fitted line");
    }

    // Statistical monolayer marker
    chart
        .draw_series(std::iter::once(Cross::new(
            marker,
            8,
            config.marker_color.stroke_width(config.line_width),
        )))?
        .label("monolayer point");

    root.present()?;
    Ok(())
}
