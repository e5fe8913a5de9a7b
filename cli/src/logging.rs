use tracing_subscriber::filter::EnvFilter;

/// Environment variable naming a log file to append to.
pub const LOG_PATH_VAR: &str = "MATCH_COUNTER_LOG_PATH";

/// Initialize logging, writing to MATCH_COUNTER_LOG_PATH if set, otherwise stderr.
///
/// Stderr defaults to warnings only so it doesn't interleave with REPL output;
/// `RUST_LOG` overrides either default.
pub fn init_logging() {
    // If MATCH_COUNTER_LOG_PATH is set, append to that file
    if let Ok(path) = std::env::var(LOG_PATH_VAR) {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter(tracing::Level::INFO))
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    // Fallback to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter(tracing::Level::WARN))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn filter(default: tracing::Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy()
}
