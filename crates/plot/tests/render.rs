//! Integration tests: render diagnostic PNGs to disk.

use ombak_plot::{render_analysis, PlotStyle};
use ombak_wave::Sample;

fn series_of(centered: &[f64]) -> Vec<Sample> {
    centered
        .iter()
        .enumerate()
        .map(|(i, &c)| Sample {
            time_seconds: i as f64,
            elevation: c + 2.0,
            elevation_centered: c,
        })
        .collect()
}

#[test]
fn renders_series_with_crossings() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("analysis.png");

    let series = series_of(&[0.8, -1.2, 0.8, -1.2, 0.8]);
    render_analysis(&path, &series, &[1, 3], &PlotStyle::default()).expect("render succeeds");

    let meta = std::fs::metadata(&path).expect("plot file exists");
    assert!(meta.len() > 0);
}

#[test]
fn renders_empty_series_with_fallback_bounds() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("empty.png");

    render_analysis(&path, &[], &[], &PlotStyle::default()).expect("render succeeds");
    assert!(path.exists());
}

#[test]
fn out_of_range_crossing_indices_are_ignored() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("oob.png");

    let series = series_of(&[-1.0, 1.0]);
    render_analysis(&path, &series, &[0, 99], &PlotStyle::default()).expect("render succeeds");
    assert!(path.exists());
}

#[test]
fn custom_style_controls_canvas_size() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("small.png");

    let style = PlotStyle {
        width: 320,
        height: 200,
        caption: "tiny".into(),
    };
    render_analysis(&path, &series_of(&[-0.5, 0.5]), &[0], &style).expect("render succeeds");
    assert!(path.exists());
}
