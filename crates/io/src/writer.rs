//! Wave table export as delimited text.

use std::path::Path;

use tracing::info;

use ombak_wave::WaveEvent;

use crate::error::IoError;

/// Write the wave table as CSV with a `wave_height,wave_period` header.
///
/// One row per event, no index column. An empty table produces a
/// header-only file so downstream tooling still sees the schema.
///
/// # Errors
///
/// Returns [`IoError::Csv`] if the destination cannot be created or
/// written.
pub fn write_waves(path: &Path, waves: &[WaveEvent]) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["wave_height", "wave_period"])?;
    for wave in waves {
        writer.write_record([wave.height.to_string(), wave.period.to_string()])?;
    }
    writer.flush()?;

    info!(
        n_waves = waves.len(),
        path = %path.display(),
        "wave table written"
    );
    Ok(())
}
