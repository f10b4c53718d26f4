//! Draft validation

use jiff::civil::Date;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::promotions::{NewPromotion, PromotionDraft, PromotionField};

/// Reasons a draft cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field has no value.
    #[error("{0} is required")]
    MissingField(PromotionField),

    /// The start date is not strictly before the end date.
    #[error("start date {start} must be before end date {end}")]
    InvalidDateRange {
        /// Submitted start date
        start: Date,

        /// Submitted end date
        end: Date,
    },

    /// The budget is below zero.
    #[error("budget must not be negative (got {0})")]
    NegativeBudget(Decimal),
}

/// Check a draft and produce the body of a create request.
///
/// Required fields are checked first, in display order, so the first
/// missing one is reported.
///
/// # Errors
///
/// Returns the first rule the draft violates.
pub fn validate(draft: &PromotionDraft) -> Result<NewPromotion, ValidationError> {
    if draft.name.trim().is_empty() {
        return Err(ValidationError::MissingField(PromotionField::Name));
    }

    let start_date = draft
        .start_date
        .ok_or(ValidationError::MissingField(PromotionField::StartDate))?;

    let end_date = draft
        .end_date
        .ok_or(ValidationError::MissingField(PromotionField::EndDate))?;

    let budget = draft
        .budget
        .ok_or(ValidationError::MissingField(PromotionField::Budget))?;

    if budget < Decimal::ZERO {
        return Err(ValidationError::NegativeBudget(budget));
    }

    if start_date >= end_date {
        return Err(ValidationError::InvalidDateRange {
            start: start_date,
            end: end_date,
        });
    }

    Ok(NewPromotion {
        name: draft.name.clone(),
        start_date,
        end_date,
        budget,
        sales_impact: draft.sales_impact,
    })
}
