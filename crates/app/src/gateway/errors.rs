//! Gateway errors.

use thiserror::Error;

/// Errors raised while talking to the promotions service.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport failure or unreadable response.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("promotions service returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,

        /// User-facing message from the error body, when it carried one
        message: Option<String>,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base URL cannot carry a path.
    #[error("invalid promotions API url `{0}`")]
    InvalidUrl(String),
}

impl GatewayError {
    /// Text suitable for an error advisory: the service's own message when
    /// it sent one, the error description otherwise.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}
