//! Data types flowing through the extraction pipeline.

/// One ingested record, both fields still text.
///
/// Rows keep their raw textual form until [`clean_series`] decides whether
/// they parse; an unparseable row is dropped there, never an error.
///
/// [`clean_series`]: crate::clean_series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// Time token, expected in `"M:S"` form.
    pub time: String,
    /// Elevation value as text.
    pub elevation: String,
}

impl RawRow {
    /// Builds a row from any string-like pair.
    pub fn new(time: impl Into<String>, elevation: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            elevation: elevation.into(),
        }
    }
}

/// One cleaned sample of the elevation record.
///
/// `time_seconds` is assumed non-decreasing across a series (input records
/// are chronological; the pipeline does not re-sort).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Elapsed time in seconds since the start of the record.
    pub time_seconds: f64,
    /// Raw elevation as read.
    pub elevation: f64,
    /// Elevation with the series mean removed.
    pub elevation_centered: f64,
}

/// One wave event between two consecutive zero-up-crossings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveEvent {
    /// Crest-to-trough vertical extent over the wave window.
    pub height: f64,
    /// Elapsed time between the bounding crossings, in seconds.
    pub period: f64,
}
