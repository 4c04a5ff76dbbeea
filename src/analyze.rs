//! Analysis pipeline: ingest the record, extract waves, report and export.

use anyhow::{bail, Context, Result};
use tracing::{info, info_span};

use ombak_io::{read_rows, write_waves, ReaderConfig};
use ombak_plot::{render_analysis, PlotStyle};
use ombak_stats::{describe, Summary};
use ombak_wave::{clean_series, segment_waves, zero_up_crossings, WaveEvent};

use crate::cli::Cli;

/// Run the full batch pipeline for one input file.
///
/// Output files are written only after the complete wave table is computed,
/// so a failed run never leaves a partial CSV/plot pair behind.
pub fn run(args: Cli) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    if !args.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", args.delimiter);
    }

    // 1. Ingest raw records. A missing input file surfaces here as the
    //    dedicated "file not found" error, before anything is written.
    let reader_cfg = ReaderConfig::default()
        .with_time_column(&args.time_column)
        .with_elevation_column(&args.elevation_column)
        .with_delimiter(args.delimiter as u8);
    let rows = read_rows(&args.input, &reader_cfg)?;

    // 2. Clean, center, and extract wave events.
    let series = clean_series(&rows);
    info!(n_raw = rows.len(), n_clean = series.len(), "cleaned elevation series");

    let crossings = zero_up_crossings(&series);
    let waves = segment_waves(&series, &crossings);
    info!(
        n_crossings = crossings.len(),
        n_waves = waves.len(),
        "segmented wave events"
    );

    // 3. Console summary, printed before any file is written.
    print_summary(&waves);

    // 4. Export the wave table.
    write_waves(&args.output, &waves)
        .with_context(|| format!("failed to write wave table: {}", args.output.display()))?;
    println!("Wave table written to '{}'", args.output.display());

    // 5. Render the diagnostic plot.
    render_analysis(&args.plot, &series, &crossings, &PlotStyle::default())
        .with_context(|| format!("failed to render plot: {}", args.plot.display()))?;
    println!("Diagnostic plot written to '{}'", args.plot.display());

    Ok(())
}

/// Print descriptive statistics for the height and period columns.
fn print_summary(waves: &[WaveEvent]) {
    println!("--- Wave analysis summary ---");

    let heights: Vec<f64> = waves.iter().map(|w| w.height).collect();
    let periods: Vec<f64> = waves.iter().map(|w| w.period).collect();

    match (describe(&heights), describe(&periods)) {
        (Some(height), Some(period)) => print_table(&height, &period),
        _ => println!("no wave events detected"),
    }
}

fn print_table(height: &Summary, period: &Summary) {
    println!("{:<8}{:>14}{:>14}", "", "height", "period");
    println!("{:<8}{:>14}{:>14}", "count", height.count, period.count);
    let rows = [
        ("mean", height.mean, period.mean),
        ("std", height.std, period.std),
        ("min", height.min, period.min),
        ("25%", height.q25, period.q25),
        ("50%", height.median, period.median),
        ("75%", height.q75, period.q75),
        ("max", height.max, period.max),
    ];
    for (label, h, p) in rows {
        println!("{label:<8}{h:>14.6}{p:>14.6}");
    }
}
