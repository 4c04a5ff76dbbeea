//! # ombak-io
//!
//! Read raw elevation records from delimited text and write the extracted
//! wave table back out. Bridges external files into `ombak-wave`'s owned
//! row/event types; all value parsing happens in the core, so this crate
//! only deals with files, delimiters, and headers.

mod error;
mod reader;
mod writer;

pub use error::IoError;
pub use reader::{read_rows, ReaderConfig};
pub use writer::write_waves;
