use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt::{self, time::SystemTime},
    prelude::*,
    EnvFilter,
};

/// Installs the global subscriber: human-readable lines on stderr, so stdout stays
/// reserved for the banner and the per-cycle progress output.
pub fn setup_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).context("Invalid log level")?;

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(SystemTime)
        .with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::registry().with(filter).with(stderr_layer);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    tracing::debug!("Logging system initialized at level {}", level);

    Ok(())
}
