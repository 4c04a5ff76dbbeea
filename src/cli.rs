use std::path::PathBuf;

use clap::Parser;

/// Ombak zero-up-crossing wave analyser.
#[derive(Parser)]
#[command(
    name = "ombak",
    version,
    about = "Extract wave heights and periods from a sea-surface elevation record"
)]
pub struct Cli {
    /// Path to the delimited elevation record.
    pub input: PathBuf,

    /// Path for the wave table CSV output.
    #[arg(short, long, default_value = "wave_analysis.csv")]
    pub output: PathBuf,

    /// Path for the diagnostic plot PNG.
    #[arg(short, long, default_value = "wave_analysis.png")]
    pub plot: PathBuf,

    /// Header label of the time column (case-sensitive).
    #[arg(long, default_value = "Time")]
    pub time_column: String,

    /// Header label of the elevation column (case-sensitive).
    #[arg(long, default_value = "Data")]
    pub elevation_column: String,

    /// Field delimiter of the input file.
    #[arg(short, long, default_value = ";")]
    pub delimiter: char,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
