//! Logging set up for hosts that embed the tracker.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::Error;

/// Install a global `tracing` subscriber that writes to stdout.
///
/// The `RUST_LOG` environment variable takes precedence over `level`, which
/// is applied to this crate only, e.g. `"debug"` logs every store mutation.
///
/// # Errors
/// Returns [Error::LoggingInitError] if a global subscriber has already been
/// installed.
pub fn init_logging(level: &str) -> Result<(), Error> {
    let default_filter = format!("expense_tracker={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|error| Error::LoggingInitError(error.to_string()))?;

    tracing::info!("Logging initialised at level {level}");

    Ok(())
}
