//! Structured logging setup for the harness binary.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a stderr subscriber so stdout carries only the report.
///
/// `RUST_LOG` or `FRONTIER_LOG` override everything; otherwise `level` (a
/// bare level such as `debug` or a full filter directive) applies, then
/// `verbose`, then the default of warnings only.
pub fn init_tracing(
    verbose: bool,
    level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let directive = match (verbose, level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("frontier={level}"),
        (true, None) => "frontier=debug".to_string(),
        (false, None) => "frontier=warn".to_string(),
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("FRONTIER_LOG"))
        .or_else(|_| EnvFilter::try_new(&directive))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
