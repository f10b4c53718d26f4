//! Promotion identifiers

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the gateway.
///
/// Backends hand out either numeric keys or textual ones (document ids), so
/// both JSON numbers and JSON strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PromotionId {
    /// Numeric identifier
    Number(u64),

    /// Textual identifier
    Text(String),
}

impl Display for PromotionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Number(id) => Display::fmt(id, f),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for PromotionId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PromotionId {
    /// Digits-only input becomes a numeric id, anything else a textual one.
    fn from(value: &str) -> Self {
        value
            .parse::<u64>()
            .map_or_else(|_| Self::Text(value.to_string()), Self::Number)
    }
}

impl From<String> for PromotionId {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}
