//! Dashboard errors.

use promodesk::{
    forms::{FieldParseError, FormError},
    promotions::PromotionId,
};
use thiserror::Error;

use crate::gateway::GatewayError;

/// Errors returned by [`Dashboard`](super::Dashboard) operations.
///
/// Gateway failures have already been shown as an error advisory by the time
/// they are returned.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The form rejected the operation, including validation failures.
    #[error(transparent)]
    Form(#[from] FormError),

    /// Raw field input could not be parsed.
    #[error(transparent)]
    Field(#[from] FieldParseError),

    /// No promotion with this id is loaded.
    #[error("promotion {0} not found")]
    UnknownPromotion(PromotionId),

    /// The promotions service call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
