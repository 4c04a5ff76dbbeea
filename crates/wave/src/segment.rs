//! Partitioning of the series into wave events between crossings.

use crate::sample::{Sample, WaveEvent};

/// Cuts the series into wave events at consecutive crossing indices.
///
/// For each crossing pair `(a, b)` the height is the crest-to-trough range
/// of `elevation_centered` over the half-open window `series[a..b]`, and the
/// period is `series[b].time_seconds - series[a].time_seconds` — the end
/// sample bounds the window in time but is not part of it.
///
/// Fewer than two crossings produce an empty table, never an error. The
/// output has exactly `crossings.len() - 1` events otherwise, in
/// chronological order. Pure function; callers may rerun it freely.
pub fn segment_waves(series: &[Sample], crossings: &[usize]) -> Vec<WaveEvent> {
    let mut waves = Vec::with_capacity(crossings.len().saturating_sub(1));
    for pair in crossings.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let window = &series[start..end];
        if window.is_empty() {
            // Unreachable with strictly increasing crossings.
            continue;
        }

        let mut crest = f64::NEG_INFINITY;
        let mut trough = f64::INFINITY;
        for sample in window {
            crest = crest.max(sample.elevation_centered);
            trough = trough.min(sample.elevation_centered);
        }

        waves.push(WaveEvent {
            height: crest - trough,
            period: series[end].time_seconds - series[start].time_seconds,
        });
    }
    waves
}
