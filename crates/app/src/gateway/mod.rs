//! Remote Promotion Gateway
//!
//! The four-operation contract the dashboard needs from the promotions
//! service, plus its HTTP implementation.

use async_trait::async_trait;
use mockall::automock;
use promodesk::{
    locale::Language,
    promotions::{NewPromotion, Promotion, PromotionId},
};

mod errors;
mod http;
mod responses;

pub use errors::GatewayError;
pub use http::{HttpGatewayConfig, HttpPromotionsGateway};
pub use responses::{CreatedPromotion, GatewayMessage};

/// Promotions service as seen by the dashboard.
///
/// Mutations carry the active UI language so the service can translate the
/// message it returns.
#[automock]
#[async_trait]
pub trait PromotionsGateway: Send + Sync {
    /// Fetch the full promotion collection.
    async fn list_promotions(&self) -> Result<Vec<Promotion>, GatewayError>;

    /// Create a promotion; the gateway assigns its id.
    async fn create_promotion(
        &self,
        promotion: NewPromotion,
        language: Language,
    ) -> Result<CreatedPromotion, GatewayError>;

    /// Replace the promotion with the same id.
    async fn update_promotion(
        &self,
        promotion: Promotion,
        language: Language,
    ) -> Result<GatewayMessage, GatewayError>;

    /// Delete the promotion with the given id.
    async fn delete_promotion(
        &self,
        id: PromotionId,
        language: Language,
    ) -> Result<GatewayMessage, GatewayError>;
}
