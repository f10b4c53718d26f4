//! HTTP client for the promotions service.

use std::time::Duration;

use async_trait::async_trait;
use promodesk::{
    locale::Language,
    promotions::{NewPromotion, Promotion, PromotionId},
};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url, header::ACCEPT_LANGUAGE};
use tracing::debug;

use super::{
    CreatedPromotion, GatewayError, GatewayMessage, PromotionsGateway,
    responses::{decode_created, decode_message, decode_promotions, error_message},
};

/// Configuration for connecting to the promotions service.
#[derive(Debug, Clone)]
pub struct HttpGatewayConfig {
    /// Collection URL, e.g. `"http://localhost:5000/promotions"`.
    pub base_url: Url,

    /// Per-request timeout; `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

/// [`PromotionsGateway`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPromotionsGateway {
    config: HttpGatewayConfig,
    http: Client,
}

impl HttpPromotionsGateway {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL cannot carry a path or the HTTP
    /// client cannot be built.
    pub fn new(config: HttpGatewayConfig) -> Result<Self, GatewayError> {
        if config.base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidUrl(config.base_url.to_string()));
        }

        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            config,
            http: builder.build()?,
        })
    }

    /// Build a mutating request that asks for messages in `language`.
    fn request(&self, method: Method, url: Url, language: Language) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(ACCEPT_LANGUAGE, language.tag())
    }

    /// Send a request and return the body of a 2xx response.
    async fn send(request: RequestBuilder) -> Result<Vec<u8>, GatewayError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if let Some(error) = status_error(status, &body) {
            return Err(error);
        }

        Ok(body.to_vec())
    }
}

/// Map a non-2xx response to [`GatewayError::Status`].
fn status_error(status: StatusCode, body: &[u8]) -> Option<GatewayError> {
    (!status.is_success()).then(|| GatewayError::Status {
        status: status.as_u16(),
        message: error_message(body),
    })
}

/// URL of a single promotion under the collection URL.
fn member_url(base: &Url, id: &PromotionId) -> Result<Url, GatewayError> {
    let mut url = base.clone();

    url.path_segments_mut()
        .map_err(|()| GatewayError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .push(&id.to_string());

    Ok(url)
}

#[async_trait]
impl PromotionsGateway for HttpPromotionsGateway {
    #[tracing::instrument(name = "promotions.gateway.list_promotions", skip(self), err)]
    async fn list_promotions(&self) -> Result<Vec<Promotion>, GatewayError> {
        let body = Self::send(self.http.get(self.config.base_url.clone())).await?;
        let promotions = decode_promotions(&body)?;

        debug!(count = promotions.len(), "fetched promotions");

        Ok(promotions)
    }

    #[tracing::instrument(
        name = "promotions.gateway.create_promotion",
        skip(self, promotion),
        fields(language = %language),
        err
    )]
    async fn create_promotion(
        &self,
        promotion: NewPromotion,
        language: Language,
    ) -> Result<CreatedPromotion, GatewayError> {
        let request = self
            .request(Method::POST, self.config.base_url.clone(), language)
            .json(&promotion);

        Ok(decode_created(&Self::send(request).await?))
    }

    #[tracing::instrument(
        name = "promotions.gateway.update_promotion",
        skip(self, promotion),
        fields(promotion_id = %promotion.id, language = %language),
        err
    )]
    async fn update_promotion(
        &self,
        promotion: Promotion,
        language: Language,
    ) -> Result<GatewayMessage, GatewayError> {
        let url = member_url(&self.config.base_url, &promotion.id)?;
        let request = self.request(Method::PUT, url, language).json(&promotion);

        Ok(decode_message(&Self::send(request).await?))
    }

    #[tracing::instrument(
        name = "promotions.gateway.delete_promotion",
        skip(self),
        fields(promotion_id = %id, language = %language),
        err
    )]
    async fn delete_promotion(
        &self,
        id: PromotionId,
        language: Language,
    ) -> Result<GatewayMessage, GatewayError> {
        let url = member_url(&self.config.base_url, &id)?;
        let request = self.request(Method::DELETE, url, language);

        Ok(decode_message(&Self::send(request).await?))
    }
}
