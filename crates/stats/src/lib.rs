//! Descriptive statistics for wave height and period columns.
//!
//! Conventions match the usual data-analysis defaults: sample standard
//! deviation with an N-1 denominator and type-7 linear-interpolation
//! quantiles, so summaries line up with what R and pandas report for the
//! same column.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance with N-1 denominator. Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (n as f64 - 1.0)
}

/// Sample standard deviation with N-1 denominator.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Type-7 quantile (linear interpolation between order statistics).
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Median of pre-sorted data. For even length, averages the middle two values.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn median(sorted: &[f64]) -> f64 {
    assert!(!sorted.is_empty(), "median: input must not be empty");
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Descriptive summary of one numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (N-1); 0.0 for a single value.
    pub std: f64,
    /// Smallest value.
    pub min: f64,
    /// Lower quartile (type-7).
    pub q25: f64,
    /// Median.
    pub median: f64,
    /// Upper quartile (type-7).
    pub q75: f64,
    /// Largest value.
    pub max: f64,
}

/// Summarises a column: count, mean, std, min, quartiles, max.
///
/// Returns `None` for an empty slice so callers report "no data" instead of
/// fabricating statistics for an empty set.
pub fn describe(data: &[f64]) -> Option<Summary> {
    if data.is_empty() {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Some(Summary {
        count: data.len(),
        mean: mean(data),
        std: sd(data),
        min: sorted[0],
        q25: quantile_type7(&sorted, 0.25),
        median: median(&sorted),
        q75: quantile_type7(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}
