//! Promodesk prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    forms::{
        FieldParseError, FieldUpdate, FormError, FormSession, FormState, SubmitRequest,
        validation::ValidationError,
    },
    locale::{Language, LanguageParseError},
    notifications::{Advisory, Notifier, Severity},
    promotions::{NewPromotion, Promotion, PromotionDraft, PromotionField, PromotionId},
    store::PromotionStore,
    views::{
        reports::{DateRange, Report, aggregate},
        search::filtered,
        sorting::{SortConfig, SortDirection, sorted},
    },
};
