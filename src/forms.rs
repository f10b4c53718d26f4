//! Form Session
//!
//! Tracks one create-or-edit operation from the moment a promotion is loaded
//! into the form until the gateway answers.
//!
//! ```text
//! Empty --load--> Editing --begin_submit--> Submitting --complete_submit(ok)--> Empty
//!                    ^                           |
//!                    +---complete_submit(err)----+
//! ```

use thiserror::Error;
use tracing::debug;

use crate::promotions::{NewPromotion, Promotion, PromotionDraft};

pub mod fields;
pub mod validation;

pub use fields::{FieldParseError, FieldUpdate};

use validation::ValidationError;

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    /// Nothing loaded
    #[default]
    Empty,

    /// Fields are being edited
    Editing(PromotionDraft),

    /// Validated and waiting for the gateway
    Submitting(PromotionDraft),
}

/// Errors raised by form transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The draft failed validation; the gateway was not contacted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operation needs a loaded draft.
    #[error("no promotion is being edited")]
    NotEditing,

    /// A previous submission has not completed yet.
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// `complete_submit` was called with nothing in flight.
    #[error("no submission is in flight")]
    NotSubmitting,
}

/// Gateway request produced by a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    /// Create a promotion that has no id yet
    Create(NewPromotion),

    /// Replace an existing promotion
    Update(Promotion),
}

/// State machine for a single create or edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSession {
    state: FormState,
}

impl FormSession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The draft being edited or submitted.
    pub fn draft(&self) -> Option<&PromotionDraft> {
        match &self.state {
            FormState::Empty => None,
            FormState::Editing(draft) | FormState::Submitting(draft) => Some(draft),
        }
    }

    /// Whether a submission is waiting for the gateway.
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting(_))
    }

    /// Start editing: a blank draft for `None`, or a copy of every field of
    /// the given promotion.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::SubmissionInFlight`] while a submission is pending.
    pub fn load(&mut self, promotion: Option<&Promotion>) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::SubmissionInFlight);
        }

        let draft = promotion.map(PromotionDraft::from).unwrap_or_default();

        debug!(promotion_id = ?draft.id, "loaded promotion into form");

        self.state = FormState::Editing(draft);

        Ok(())
    }

    /// Apply one field edit.
    ///
    /// # Errors
    ///
    /// Returns an error unless the session is in `Editing`.
    pub fn set_field(&mut self, update: FieldUpdate) -> Result<(), FormError> {
        match &mut self.state {
            FormState::Editing(draft) => {
                update.apply(draft);

                Ok(())
            }
            FormState::Submitting(_) => Err(FormError::SubmissionInFlight),
            FormState::Empty => Err(FormError::NotEditing),
        }
    }

    /// Validate the draft and move to `Submitting`.
    ///
    /// A draft without an id becomes a create request, one with an id an
    /// update request. On validation failure the session stays in `Editing`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Validation`] for an invalid draft,
    /// [`FormError::SubmissionInFlight`] when already submitting and
    /// [`FormError::NotEditing`] when nothing is loaded.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, FormError> {
        let draft = match &self.state {
            FormState::Editing(draft) => draft,
            FormState::Submitting(_) => return Err(FormError::SubmissionInFlight),
            FormState::Empty => return Err(FormError::NotEditing),
        };

        let promotion = validation::validate(draft)?;

        let request = match &draft.id {
            Some(id) => SubmitRequest::Update(promotion.with_id(id.clone())),
            None => SubmitRequest::Create(promotion),
        };

        if let FormState::Editing(draft) = std::mem::take(&mut self.state) {
            self.state = FormState::Submitting(draft);
        }

        Ok(request)
    }

    /// Settle the in-flight submission: back to `Empty` when it succeeded,
    /// back to `Editing` with the same values when it failed.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotSubmitting`] when nothing is in flight.
    pub fn complete_submit(&mut self, succeeded: bool) -> Result<(), FormError> {
        let FormState::Submitting(draft) = std::mem::take(&mut self.state) else {
            return Err(FormError::NotSubmitting);
        };

        if !succeeded {
            self.state = FormState::Editing(draft);
        }

        Ok(())
    }

    /// Drop the draft.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::SubmissionInFlight`] while a submission is pending.
    pub fn reset(&mut self) -> Result<(), FormError> {
        if self.is_submitting() {
            return Err(FormError::SubmissionInFlight);
        }

        self.state = FormState::Empty;

        Ok(())
    }
}
