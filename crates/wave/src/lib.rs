//! Zero-up-crossing wave extraction.
//!
//! Turns a raw time-stamped sea-surface elevation record into discrete wave
//! events, each with a crest-to-trough height and a period. Everything here
//! is a pure transformation over owned vectors; I/O lives in `ombak-io` and
//! rendering in `ombak-plot`.
//!
//! # Quick start
//!
//! ```
//! use ombak_wave::{RawRow, clean_series, segment_waves, zero_up_crossings};
//!
//! let rows = vec![
//!     RawRow::new("0:00", "1.0"),
//!     RawRow::new("0:01", "-1.0"),
//!     RawRow::new("0:02", "1.0"),
//!     RawRow::new("0:03", "-1.0"),
//!     RawRow::new("0:04", "1.0"),
//! ];
//!
//! let series = clean_series(&rows);
//! let crossings = zero_up_crossings(&series);
//! let waves = segment_waves(&series, &crossings);
//!
//! assert_eq!(crossings, vec![1, 3]);
//! assert_eq!(waves.len(), 1);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! raw rows
//!   ├─ parse_clock()        (time.rs)
//!   ├─ clean_series()       (clean.rs)
//!   ├─ zero_up_crossings()  (crossing.rs)
//!   └─ segment_waves()      (segment.rs)
//! ```
//!
//! Each stage owns its output; nothing is mutated after handoff, so the
//! whole pipeline can be rerun on the same input and yields identical
//! results.

pub mod clean;
pub mod crossing;
pub mod sample;
pub mod segment;
pub mod time;

pub use clean::clean_series;
pub use crossing::zero_up_crossings;
pub use sample::{RawRow, Sample, WaveEvent};
pub use segment::segment_waves;
pub use time::parse_clock;
