//! Gateway Config

use std::time::Duration;

use clap::Args;
use promodesk::locale::Language;
use reqwest::Url;

use crate::gateway::HttpGatewayConfig;

/// Promotions service settings.
#[derive(Debug, Args)]
pub struct GatewayConfig {
    /// Promotions collection URL
    #[arg(
        long,
        env = "PROMOTIONS_API_URL",
        default_value = "http://localhost:5000/promotions"
    )]
    pub api_url: Url,

    /// UI language sent as Accept-Language (en, fr)
    #[arg(long, env = "PROMOTIONS_LANG", default_value = "en")]
    pub lang: Language,

    /// Request timeout in seconds; 0 disables the timeout
    #[arg(long, env = "PROMOTIONS_TIMEOUT_SECONDS", default_value_t = 30_u64)]
    pub timeout_seconds: u64,
}

impl GatewayConfig {
    /// HTTP client settings.
    #[must_use]
    pub fn http(&self) -> HttpGatewayConfig {
        HttpGatewayConfig {
            base_url: self.api_url.clone(),
            timeout: (self.timeout_seconds > 0)
                .then_some(Duration::from_secs(self.timeout_seconds)),
        }
    }
}
