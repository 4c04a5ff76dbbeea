//! Delimited-text ingestion of raw elevation records.

use std::path::Path;

use tracing::{debug, info};

use ombak_wave::RawRow;

use crate::error::IoError;

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading an elevation record from delimited text.
///
/// Use the builder methods (`with_*`) to customise column labels and the
/// field delimiter. The [`Default`] implementation matches the logging
/// sheets this tool was built for: `Time`/`Data` columns separated by `;`.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Header label of the time column (matched case-sensitively).
    time_column: String,
    /// Header label of the elevation column (matched case-sensitively).
    elevation_column: String,
    /// Field delimiter byte.
    delimiter: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            time_column: "Time".into(),
            elevation_column: "Data".into(),
            delimiter: b';',
        }
    }
}

impl ReaderConfig {
    /// Set the time column label.
    pub fn with_time_column(mut self, name: impl Into<String>) -> Self {
        self.time_column = name.into();
        self
    }

    /// Set the elevation column label.
    pub fn with_elevation_column(mut self, name: impl Into<String>) -> Self {
        self.elevation_column = name.into();
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Config`] if a column label is empty or the two
    /// labels are identical.
    pub fn validate(&self) -> Result<(), IoError> {
        if self.time_column.is_empty() || self.elevation_column.is_empty() {
            return Err(IoError::Config {
                details: "column labels must not be empty".into(),
            });
        }
        if self.time_column == self.elevation_column {
            return Err(IoError::Config {
                details: format!(
                    "time and elevation columns are both '{}'",
                    self.time_column
                ),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// read_rows
// ---------------------------------------------------------------------------

/// Read raw time/elevation rows from a delimited text file.
///
/// The header row must contain both configured column labels (exact,
/// case-sensitive match). Records whose field count differs from the header
/// are skipped, matching the tolerant loading of the field sheets; their
/// number is only visible in debug logs. Field values are returned as text —
/// parsing and row dropping happen in `ombak_wave::clean_series`.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::MissingColumn`] if a configured label is absent from the
/// header, or [`IoError::Csv`] on unreadable input.
pub fn read_rows(path: &Path, config: &ReaderConfig) -> Result<Vec<RawRow>, IoError> {
    config.validate()?;

    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let time_idx = headers
        .iter()
        .position(|h| h == config.time_column)
        .ok_or_else(|| IoError::MissingColumn {
            name: config.time_column.clone(),
            path: path.to_path_buf(),
        })?;
    let elevation_idx = headers
        .iter()
        .position(|h| h == config.elevation_column)
        .ok_or_else(|| IoError::MissingColumn {
            name: config.elevation_column.clone(),
            path: path.to_path_buf(),
        })?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if record.len() != headers.len() {
            skipped += 1;
            continue;
        }
        match (record.get(time_idx), record.get(elevation_idx)) {
            (Some(time), Some(elevation)) => rows.push(RawRow::new(time, elevation)),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(n_skipped = skipped, "skipped records with the wrong field count");
    }
    info!(
        n_rows = rows.len(),
        path = %path.display(),
        "loaded raw elevation records"
    );

    Ok(rows)
}
