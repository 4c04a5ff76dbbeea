//! Error types for ombak-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the ombak-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a required column is missing from the header row.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column (matched case-sensitively).
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when the reader configuration is internally inconsistent.
    #[error("invalid reader config: {details}")]
    Config {
        /// Human-readable description of the problem.
        details: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn display_csv() {
        let err = IoError::Csv {
            reason: "unequal lengths".to_string(),
        };
        assert_eq!(err.to_string(), "csv error: unequal lengths");
    }

    #[test]
    fn display_missing_column() {
        let err = IoError::MissingColumn {
            name: "Data".to_string(),
            path: PathBuf::from("/data/record.csv"),
        };
        assert_eq!(err.to_string(), "column 'Data' not found in /data/record.csv");
    }

    #[test]
    fn display_config() {
        let err = IoError::Config {
            details: "time column name must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid reader config: time column name must not be empty"
        );
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
        let err: IoError = io_err.into();
        assert!(matches!(err, IoError::Csv { .. }));
        assert!(err.to_string().contains("locked"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
