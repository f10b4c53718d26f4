//! Typed field updates

use std::str::FromStr;

use jiff::civil::Date;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::promotions::{PromotionDraft, PromotionField, UnknownFieldError, dates};

/// A single field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Set the name
    Name(String),

    /// Set or clear the start date
    StartDate(Option<Date>),

    /// Set or clear the end date
    EndDate(Option<Date>),

    /// Set or clear the budget
    Budget(Option<Decimal>),

    /// Set or clear the sales impact
    SalesImpact(Option<Decimal>),
}

/// Errors raised while turning raw input into a [`FieldUpdate`].
#[derive(Debug, Error)]
pub enum FieldParseError {
    /// The field name is not recognised.
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    /// A date field received text that is not a date.
    #[error("`{raw}` is not a valid date for {field}")]
    InvalidDate {
        /// Target field
        field: PromotionField,

        /// Rejected input
        raw: String,

        /// Parser error
        #[source]
        source: jiff::Error,
    },

    /// An amount field received text that is not a decimal.
    #[error("`{raw}` is not a valid amount for {field}")]
    InvalidAmount {
        /// Target field
        field: PromotionField,

        /// Rejected input
        raw: String,

        /// Parser error
        #[source]
        source: rust_decimal::Error,
    },
}

impl FieldUpdate {
    /// The field this update targets.
    pub const fn field(&self) -> PromotionField {
        match self {
            Self::Name(_) => PromotionField::Name,
            Self::StartDate(_) => PromotionField::StartDate,
            Self::EndDate(_) => PromotionField::EndDate,
            Self::Budget(_) => PromotionField::Budget,
            Self::SalesImpact(_) => PromotionField::SalesImpact,
        }
    }

    /// Build an update from raw text input.
    ///
    /// Blank input clears optional fields. Dates accept `YYYY-MM-DD` or an
    /// RFC 3339 timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error when a date or amount cannot be parsed.
    pub fn parse(field: PromotionField, raw: &str) -> Result<Self, FieldParseError> {
        match field {
            PromotionField::Name => Ok(Self::Name(raw.to_string())),
            PromotionField::StartDate => parse_date(field, raw).map(Self::StartDate),
            PromotionField::EndDate => parse_date(field, raw).map(Self::EndDate),
            PromotionField::Budget => parse_amount(field, raw).map(Self::Budget),
            PromotionField::SalesImpact => parse_amount(field, raw).map(Self::SalesImpact),
        }
    }

    /// Build an update from a field name and raw text input.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown field name or unparsable input.
    pub fn parse_named(name: &str, raw: &str) -> Result<Self, FieldParseError> {
        Self::parse(name.parse()?, raw)
    }

    /// Write the update into a draft.
    pub fn apply(self, draft: &mut PromotionDraft) {
        match self {
            Self::Name(name) => draft.name = name,
            Self::StartDate(date) => draft.start_date = date,
            Self::EndDate(date) => draft.end_date = date,
            Self::Budget(amount) => draft.budget = amount,
            Self::SalesImpact(amount) => draft.sales_impact = amount,
        }
    }
}

fn parse_date(field: PromotionField, raw: &str) -> Result<Option<Date>, FieldParseError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    dates::parse(raw)
        .map(Some)
        .map_err(|source| FieldParseError::InvalidDate {
            field,
            raw: raw.to_string(),
            source,
        })
}

fn parse_amount(field: PromotionField, raw: &str) -> Result<Option<Decimal>, FieldParseError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Ok(None);
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map(Some)
        .map_err(|source| FieldParseError::InvalidAmount {
            field,
            raw: raw.to_string(),
            source,
        })
}
