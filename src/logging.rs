use tracing_subscriber::EnvFilter;

/// Workspace crates whose logs follow the CLI verbosity flag.
const CRATE_TARGETS: &[&str] = &["ombak", "ombak_io", "ombak_plot", "ombak_stats", "ombak_wave"];

/// Initialize tracing from the `-v` count.
///
/// 0 -> warn, 1 -> info, 2 -> debug, 3+ -> trace. A set `RUST_LOG` env var
/// takes precedence over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> =
            CRATE_TARGETS.iter().map(|t| format!("{t}={level}")).collect();
        EnvFilter::new(directives.join(","))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
