//! Row cleaning and mean-centering of the elevation record.

use tracing::debug;

use crate::sample::{RawRow, Sample};
use crate::time::parse_clock;

/// Builds the cleaned, mean-centered series from raw rows.
///
/// Per row, the time token is parsed via [`parse_clock`] and the elevation
/// as a plain `f64`. A row is dropped when either field fails to parse or
/// parses to NaN; drops are independent per row, order is preserved.
///
/// The mean is taken over the surviving rows' raw elevations, and
/// `elevation_centered = elevation - mean` for each of them. Zero survivors
/// yield an empty series, which downstream stages treat as "no waves".
pub fn clean_series(rows: &[RawRow]) -> Vec<Sample> {
    let mut kept: Vec<(f64, f64)> = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(time_seconds) = parse_clock(&row.time) else {
            continue;
        };
        let Ok(elevation) = row.elevation.trim().parse::<f64>() else {
            continue;
        };
        if time_seconds.is_nan() || elevation.is_nan() {
            continue;
        }
        kept.push((time_seconds, elevation));
    }

    let dropped = rows.len() - kept.len();
    if dropped > 0 {
        debug!(n_rows = rows.len(), n_dropped = dropped, "dropped unparseable rows");
    }
    if kept.is_empty() {
        return Vec::new();
    }

    let mean = kept.iter().map(|&(_, e)| e).sum::<f64>() / kept.len() as f64;
    kept.into_iter()
        .map(|(time_seconds, elevation)| Sample {
            time_seconds,
            elevation,
            elevation_centered: elevation - mean,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn row(time: &str, elevation: &str) -> RawRow {
        RawRow::new(time, elevation)
    }

    #[test]
    fn centers_on_the_mean() {
        let rows = [row("0:00", "1.0"), row("0:01", "3.0")];
        let series = clean_series(&rows);
        assert_eq!(series.len(), 2);
        assert_relative_eq!(series[0].elevation_centered, -1.0);
        assert_relative_eq!(series[1].elevation_centered, 1.0);
        assert_relative_eq!(series[0].time_seconds, 0.0);
        assert_relative_eq!(series[1].time_seconds, 1.0);
    }

    #[test]
    fn drops_bad_time_without_touching_the_mean() {
        // The "abc" row must not contribute its elevation to the mean.
        let rows = [row("0:00", "1.0"), row("abc", "5.0"), row("0:02", "3.0")];
        let series = clean_series(&rows);
        assert_eq!(series.len(), 2);
        assert_relative_eq!(series[0].elevation, 1.0);
        assert_relative_eq!(series[1].elevation, 3.0);
        // Mean over survivors is 2.0, not (1+5+3)/3.
        assert_relative_eq!(series[0].elevation_centered, -1.0);
        assert_relative_eq!(series[1].elevation_centered, 1.0);
    }

    #[test]
    fn drops_non_numeric_elevation() {
        let rows = [row("0:00", "1.0"), row("0:01", "sensor fault"), row("0:02", "3.0")];
        assert_eq!(clean_series(&rows).len(), 2);
    }

    #[test]
    fn drops_nan_values() {
        let rows = [row("0:00", "nan"), row("nan:1", "2.0"), row("0:02", "3.0")];
        let series = clean_series(&rows);
        assert_eq!(series.len(), 1);
        assert_relative_eq!(series[0].elevation, 3.0);
    }

    #[test]
    fn all_rows_bad_yields_empty_series() {
        let rows = [row("x", "1.0"), row("0:01", "y")];
        assert!(clean_series(&rows).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(clean_series(&[]).is_empty());
    }

    #[test]
    fn centered_mean_is_zero() {
        let rows: Vec<RawRow> = (0..50)
            .map(|i| row(&format!("0:{i}"), &format!("{}", (i as f64 * 0.7).sin() + 2.5)))
            .collect();
        let series = clean_series(&rows);
        let centered_mean: f64 =
            series.iter().map(|s| s.elevation_centered).sum::<f64>() / series.len() as f64;
        assert_relative_eq!(centered_mean, 0.0, epsilon = 1e-12);
    }
}
