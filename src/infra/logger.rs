// src/infra/logger.rs — Structured logging with tracing

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. `WELLMATE_LOG` wins over `RUST_LOG`;
/// `level` applies when neither is set. Output goes to stderr so the chat
/// transcript on stdout stays clean.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env("WELLMATE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
