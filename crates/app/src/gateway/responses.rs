//! Response bodies returned by the promotions service.

use promodesk::promotions::{Promotion, PromotionId};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::GatewayError;

/// Body of a successful update or delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GatewayMessage {
    /// User-facing text, already translated by the service
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a successful create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatedPromotion {
    /// User-facing text, already translated by the service
    pub message: Option<String>,

    /// The stored record, when the body carried every promotion field
    pub promotion: Option<Promotion>,
}

impl CreatedPromotion {
    /// Id the service assigned, if the body reported it.
    pub fn id(&self) -> Option<&PromotionId> {
        self.promotion.as_ref().map(|promotion| &promotion.id)
    }
}

pub(super) fn decode_promotions(body: &[u8]) -> Result<Vec<Promotion>, GatewayError> {
    Ok(serde_json::from_slice(body)?)
}

/// Created fields may sit at the top level next to `message` or under a
/// `promotion` key; anything less than a full record is ignored.
///
/// The service has already stored the promotion when this runs, so a body
/// that is not JSON yields no message rather than an error.
pub(super) fn decode_created(body: &[u8]) -> CreatedPromotion {
    let Some(mut value) = success_value(body) else {
        return CreatedPromotion::default();
    };

    let message = message_of(&value);

    let nested = value.get_mut("promotion").map(Value::take);
    let candidate = nested.unwrap_or(value);

    let promotion = match serde_json::from_value::<Promotion>(candidate) {
        Ok(promotion) => Some(promotion),
        Err(error) => {
            debug!(%error, "create response did not carry a complete promotion");

            None
        }
    };

    CreatedPromotion { message, promotion }
}

/// Message of an update or delete body; empty and non-JSON bodies carry
/// none.
pub(super) fn decode_message(body: &[u8]) -> GatewayMessage {
    GatewayMessage {
        message: success_value(body).as_ref().and_then(message_of),
    }
}

/// Message carried by an error body. Non-JSON bodies (proxy error pages and
/// the like) yield nothing.
pub(super) fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(message_of)
}

fn message_of(value: &Value) -> Option<String> {
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

fn success_value(body: &[u8]) -> Option<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(error) => {
            debug!(%error, "success response body is not JSON");

            None
        }
    }
}
