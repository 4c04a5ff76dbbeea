//! Zero-up-crossing detection on the centered series.

use crate::sample::Sample;

/// Three-valued sign with zero mapped to 0, not +1.
fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Finds all zero-up-crossings in the centered elevation sequence.
///
/// A crossing sits between samples `i` and `i + 1` whenever the sign of
/// `elevation_centered` strictly increases across the pair; the reported
/// index is `i`, the earlier sample. With the three-valued sign this counts
/// `-1→0`, `-1→+1` and `0→+1` transitions alike.
///
/// Indices are strictly increasing and all lie in `[0, len - 2]`. A series
/// shorter than two samples has no crossings. The exact crossing time is
/// not interpolated; segmentation works on discrete sample boundaries.
pub fn zero_up_crossings(series: &[Sample]) -> Vec<usize> {
    series
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| sign(pair[1].elevation_centered) > sign(pair[0].elevation_centered))
        .map(|(i, _)| i)
        .collect()
}
