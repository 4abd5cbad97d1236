use crate::config::ServiceConfig;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global fmt subscriber filtered by the configured log level.
///
/// Returns an error if a subscriber is already installed or the filter
/// does not parse.
pub fn init_tracing(
    config: &ServiceConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(&config.log_level)?;
    fmt().with_env_filter(filter).with_target(true).try_init()
}
