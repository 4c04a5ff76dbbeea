//! # ombak-plot
//!
//! Renders the diagnostic PNG for a wave analysis run: the centered
//! elevation trace over time, the detected zero-up-crossings as red
//! markers, and a reference line at zero elevation.

mod error;

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use ombak_wave::Sample;

pub use error::PlotError;

/// Canvas and caption settings for the diagnostic plot.
#[derive(Debug, Clone)]
pub struct PlotStyle {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Chart caption.
    pub caption: String,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1500,
            height: 600,
            caption: "Zero-Up-Crossing Wave Analysis".into(),
        }
    }
}

/// Render the centered elevation trace with crossing markers to a PNG file.
///
/// Crossing indices outside the series are ignored rather than panicking,
/// and an empty or flat series falls back to fixed axis bounds so the run
/// still produces a (blank) chart.
///
/// # Errors
///
/// Returns [`PlotError::Render`] if the backend cannot create or draw the
/// image file.
pub fn render_analysis(
    path: &Path,
    series: &[Sample],
    crossings: &[usize],
    style: &PlotStyle,
) -> Result<(), PlotError> {
    let (x_min, x_max) = axis_bounds(series.iter().map(|s| s.time_seconds), (0.0, 1.0));
    let (y_min, y_max) = axis_bounds(series.iter().map(|s| s.elevation_centered), (-1.0, 1.0));

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(&style.caption, ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 45)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Elevation (centered)")
        .draw()?;

    // Dashed zero reference line.
    chart.draw_series(DashedLineSeries::new(
        [(x_min, 0.0), (x_max, 0.0)],
        8,
        4,
        BLACK.stroke_width(1),
    ))?;

    chart
        .draw_series(LineSeries::new(
            series.iter().map(|s| (s.time_seconds, s.elevation_centered)),
            &BLUE,
        ))?
        .label("Centered elevation")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(
            crossings
                .iter()
                .filter(|&&i| i < series.len())
                .map(|&i| {
                    Circle::new(
                        (series[i].time_seconds, series[i].elevation_centered),
                        4,
                        RED.filled(),
                    )
                }),
        )?
        .label("Zero-up-crossings")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, RED.filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;

    info!(
        n_samples = series.len(),
        n_crossings = crossings.len(),
        path = %path.display(),
        "diagnostic plot written"
    );
    Ok(())
}

/// Min/max over the values, falling back to `default` when the iterator is
/// empty or the range degenerates to a point.
fn axis_bounds(values: impl Iterator<Item = f64>, default: (f64, f64)) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() || hi - lo < f64::EPSILON {
        default
    } else {
        (lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_values() {
        assert_eq!(axis_bounds([2.0, -1.0, 5.0].into_iter(), (0.0, 1.0)), (-1.0, 5.0));
    }

    #[test]
    fn bounds_of_empty_fall_back() {
        assert_eq!(axis_bounds(std::iter::empty(), (-1.0, 1.0)), (-1.0, 1.0));
    }

    #[test]
    fn bounds_of_flat_series_fall_back() {
        assert_eq!(axis_bounds([3.0, 3.0, 3.0].into_iter(), (-1.0, 1.0)), (-1.0, 1.0));
    }
}
