//! Dashboard controller
//!
//! Owns the promotion store, the form session, the advisory slot and the
//! view settings for one session, and runs each operation against the
//! injected gateway:
//!
//! ```text
//! form validates -> gateway call -> store updated -> advisory shown
//! ```
//!
//! Every mutating operation takes `&mut self`, so no two of them interleave.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use jiff::Timestamp;
use promodesk::{
    forms::{FieldUpdate, FormSession, SubmitRequest},
    locale::Language,
    notifications::{Advisory, Notifier},
    promotions::{Promotion, PromotionField, PromotionId},
    store::PromotionStore,
    views::{
        reports::{DateRange, Report, aggregate},
        search::filtered,
        sorting::{SortConfig, sorted},
    },
};
use tracing::{debug, info, warn};

use crate::gateway::{GatewayError, PromotionsGateway};

mod errors;
mod notices;

pub use errors::DashboardError;

use notices::Notice;

/// What a successful [`Dashboard::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A promotion was created; carries the assigned id when the service
    /// reported it.
    Created(Option<PromotionId>),

    /// The promotion with this id was replaced.
    Updated(PromotionId),
}

/// One dashboard session.
pub struct Dashboard {
    gateway: Arc<dyn PromotionsGateway>,
    store: PromotionStore,
    form: FormSession,
    notifier: Notifier,
    sort: SortConfig,
    search: String,
    language: Language,
}

impl Debug for Dashboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Dashboard")
            .field("store", &self.store)
            .field("form", &self.form)
            .field("notifier", &self.notifier)
            .field("sort", &self.sort)
            .field("search", &self.search)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Dashboard {
    /// Create an empty dashboard backed by `gateway`.
    #[must_use]
    pub fn new(gateway: Arc<dyn PromotionsGateway>) -> Self {
        Self {
            gateway,
            store: PromotionStore::new(),
            form: FormSession::new(),
            notifier: Notifier::new(),
            sort: SortConfig::default(),
            search: String::new(),
            language: Language::default(),
        }
    }

    /// Set the initial UI language.
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Loaded promotions.
    pub fn store(&self) -> &PromotionStore {
        &self.store
    }

    /// The create-or-edit form.
    pub fn form(&self) -> &FormSession {
        &self.form
    }

    /// The visible advisory, if any.
    pub fn advisory(&self) -> Option<&Advisory> {
        self.notifier.current()
    }

    /// The advisory slot.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Hide the advisory.
    pub fn dismiss_advisory(&mut self) {
        self.notifier.dismiss();
    }

    /// Hide the advisory once it has outlived its auto-hide delay.
    pub fn dismiss_expired_advisory(&mut self, now: Timestamp) -> bool {
        self.notifier.dismiss_expired(now)
    }

    /// Active UI language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch the UI language. Later gateway calls ask for messages in it
    /// and search matches dates as it formats them.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Current sort settings.
    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    /// Replace the sort settings.
    pub fn set_sort(&mut self, sort: SortConfig) {
        self.sort = sort;
    }

    /// Sort by `key`, flipping the direction when it is already the key.
    pub fn toggle_sort(&mut self, key: PromotionField) {
        self.sort.toggle(key);
    }

    /// Current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Promotions as the table shows them: sorted, then filtered by the
    /// search text.
    pub fn visible_promotions(&self) -> Vec<&Promotion> {
        filtered(
            sorted(&self.store, self.sort),
            &self.search,
            self.language,
        )
    }

    /// Aggregate the loaded promotions over `range`.
    pub fn report(&self, range: DateRange) -> Report {
        aggregate(&self.store, range)
    }

    /// Replace the store with the service's collection.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure, after showing it as an error advisory.
    /// The store is left unchanged.
    #[tracing::instrument(name = "promotions.dashboard.refresh", skip(self), err)]
    pub async fn refresh(&mut self) -> Result<(), DashboardError> {
        match self.reload().await {
            Ok(()) => Ok(()),
            Err(error) => Err(self.gateway_failure(error)),
        }
    }

    /// Open a blank form.
    ///
    /// # Errors
    ///
    /// Returns an error while a submission is in flight.
    pub fn new_promotion(&mut self) -> Result<(), DashboardError> {
        Ok(self.form.load(None)?)
    }

    /// Open the form on a copy of a loaded promotion.
    ///
    /// # Errors
    ///
    /// Returns an error when no promotion has this id or a submission is in
    /// flight.
    pub fn edit(&mut self, id: &PromotionId) -> Result<(), DashboardError> {
        let promotion = self
            .store
            .get(id)
            .ok_or_else(|| DashboardError::UnknownPromotion(id.clone()))?;

        Ok(self.form.load(Some(promotion))?)
    }

    /// Apply one field edit to the open form.
    ///
    /// # Errors
    ///
    /// Returns an error unless the form is being edited.
    pub fn set_field(&mut self, update: FieldUpdate) -> Result<(), DashboardError> {
        Ok(self.form.set_field(update)?)
    }

    /// Apply raw text input to a named field, as a text box would.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown field, unparsable input or when the
    /// form is not being edited.
    pub fn set_field_text(&mut self, name: &str, raw: &str) -> Result<(), DashboardError> {
        self.set_field(FieldUpdate::parse_named(name, raw)?)
    }

    /// Close the form without submitting.
    ///
    /// # Errors
    ///
    /// Returns an error while a submission is in flight.
    pub fn cancel_edit(&mut self) -> Result<(), DashboardError> {
        Ok(self.form.reset()?)
    }

    /// Validate the form and send it to the service.
    ///
    /// A create refreshes the store afterwards; an update replaces the
    /// submitted record in place. The form empties once the call succeeds.
    ///
    /// # Errors
    ///
    /// Returns validation errors without contacting the service. A gateway
    /// failure is shown as an error advisory, leaves the store unchanged and
    /// puts the form back in editing with its values intact.
    #[tracing::instrument(name = "promotions.dashboard.submit", skip(self), err)]
    pub async fn submit(&mut self) -> Result<SubmitOutcome, DashboardError> {
        match self.form.begin_submit()? {
            SubmitRequest::Create(promotion) => {
                let created = match self
                    .gateway
                    .create_promotion(promotion, self.language)
                    .await
                {
                    Ok(created) => created,
                    Err(error) => return Err(self.fail_submit(error)),
                };

                self.form.complete_submit(true)?;

                let id = created.id().cloned();

                info!(promotion_id = ?id, "promotion created");

                self.notifier
                    .success(Notice::Created.or_message(created.message, self.language));

                if let Err(error) = self.reload().await {
                    warn!(%error, "refresh after create failed, keeping created record");

                    if let Some(promotion) = created.promotion {
                        self.store.add(promotion);
                    }
                }

                Ok(SubmitOutcome::Created(id))
            }
            SubmitRequest::Update(promotion) => {
                let response = match self
                    .gateway
                    .update_promotion(promotion.clone(), self.language)
                    .await
                {
                    Ok(response) => response,
                    Err(error) => return Err(self.fail_submit(error)),
                };

                self.form.complete_submit(true)?;

                let id = promotion.id.clone();

                info!(promotion_id = %id, "promotion updated");

                self.store.update(promotion);
                self.notifier
                    .success(Notice::Updated.or_message(response.message, self.language));

                Ok(SubmitOutcome::Updated(id))
            }
        }
    }

    /// Delete a promotion and refresh the store.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure, after showing it as an error advisory.
    /// The store is left unchanged.
    #[tracing::instrument(
        name = "promotions.dashboard.delete",
        skip(self, id),
        fields(promotion_id = %id),
        err
    )]
    pub async fn delete(&mut self, id: &PromotionId) -> Result<(), DashboardError> {
        let response = match self.gateway.delete_promotion(id.clone(), self.language).await {
            Ok(response) => response,
            Err(error) => return Err(self.gateway_failure(error)),
        };

        info!("promotion deleted");

        self.notifier
            .success(Notice::Deleted.or_message(response.message, self.language));

        if let Err(error) = self.reload().await {
            warn!(%error, "refresh after delete failed, removing record locally");

            self.store.remove(id);
        }

        Ok(())
    }

    async fn reload(&mut self) -> Result<(), GatewayError> {
        let promotions = self.gateway.list_promotions().await?;

        self.store.replace_all(promotions);

        debug!(count = self.store.len(), "store refreshed");

        Ok(())
    }

    fn fail_submit(&mut self, error: GatewayError) -> DashboardError {
        if let Err(form_error) = self.form.complete_submit(false) {
            return form_error.into();
        }

        self.gateway_failure(error)
    }

    fn gateway_failure(&mut self, error: GatewayError) -> DashboardError {
        warn!(%error, "promotions gateway call failed");

        self.notifier.error(error.user_message());

        DashboardError::Gateway(error)
    }
}
