//! Command line and environment configuration.

use clap::Args;

mod gateway;
mod logging;

pub use gateway::GatewayConfig;
pub use logging::{LogFormat, LoggingConfig};

/// Settings shared by every command.
#[derive(Debug, Args)]
pub struct AppConfig {
    /// Promotions service settings.
    #[command(flatten)]
    pub gateway: GatewayConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
