//! Table sorting

use std::{cmp::Ordering, str::FromStr};

use jiff::civil::Date;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::promotions::{Promotion, PromotionField};

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Ascending,

    /// Largest first
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Raised for a direction other than `asc` or `desc`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort direction `{0}` (expected `asc` or `desc`)")]
pub struct SortDirectionParseError(pub String);

impl FromStr for SortDirection {
    type Err = SortDirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(SortDirectionParseError(other.to_string())),
        }
    }
}

/// Active sort column and direction of the promotions table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortConfig {
    /// Column to sort by
    pub key: PromotionField,

    /// Sort direction
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::new(PromotionField::Name, SortDirection::Ascending)
    }
}

impl SortConfig {
    /// Create a sort configuration.
    #[must_use]
    pub const fn new(key: PromotionField, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// React to a column header click: the active column flips direction,
    /// any other column becomes active in ascending order.
    pub fn toggle(&mut self, key: PromotionField) {
        *self = if self.key == key {
            Self::new(key, self.direction.reversed())
        } else {
            Self::new(key, SortDirection::Ascending)
        };
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue<'a> {
    Text(&'a str),
    Date(Date),
    Amount(Decimal),
}

fn sort_value(promotion: &Promotion, key: PromotionField) -> Option<SortValue<'_>> {
    match key {
        PromotionField::Name => Some(SortValue::Text(&promotion.name)),
        PromotionField::StartDate => Some(SortValue::Date(promotion.start_date)),
        PromotionField::EndDate => Some(SortValue::Date(promotion.end_date)),
        PromotionField::Budget => Some(SortValue::Amount(promotion.budget)),
        PromotionField::SalesImpact => promotion.sales_impact.map(SortValue::Amount),
    }
}

/// Sort promotions by `config`.
///
/// The sort is stable. Promotions without a value for the key go last in
/// either direction, keeping their relative order.
pub fn sorted<'a>(
    promotions: impl IntoIterator<Item = &'a Promotion>,
    config: SortConfig,
) -> Vec<&'a Promotion> {
    let mut promotions: Vec<&Promotion> = promotions.into_iter().collect();

    promotions.sort_by(|a, b| {
        match (sort_value(a, config.key), sort_value(b, config.key)) {
            (Some(a), Some(b)) => config.direction.apply(a.cmp(&b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });

    promotions
}
