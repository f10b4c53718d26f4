//! Promotions

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod amounts;
pub(crate) mod dates;
mod id;

pub use id::PromotionId;

/// Promotion record as persisted by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    /// Gateway-assigned identifier
    pub id: PromotionId,

    /// Display name
    pub name: String,

    /// First day of the promotion
    #[serde(with = "dates")]
    pub start_date: Date,

    /// Last day of the promotion
    #[serde(with = "dates")]
    pub end_date: Date,

    /// Allocated budget
    #[serde(with = "amounts::required")]
    pub budget: Decimal,

    /// Projected sales impact, when one was estimated
    #[serde(default, with = "amounts::optional")]
    pub sales_impact: Option<Decimal>,
}

impl Promotion {
    /// Return the sales impact, counting a missing estimate as zero.
    pub fn sales_impact_or_zero(&self) -> Decimal {
        self.sales_impact.unwrap_or(Decimal::ZERO)
    }
}

/// Validated body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPromotion {
    /// Display name
    pub name: String,

    /// First day of the promotion
    #[serde(with = "dates")]
    pub start_date: Date,

    /// Last day of the promotion
    #[serde(with = "dates")]
    pub end_date: Date,

    /// Allocated budget
    #[serde(with = "amounts::required")]
    pub budget: Decimal,

    /// Projected sales impact
    #[serde(with = "amounts::optional")]
    pub sales_impact: Option<Decimal>,
}

impl NewPromotion {
    /// Attach an identifier, producing a persisted record.
    pub fn with_id(self, id: PromotionId) -> Promotion {
        Promotion {
            id,
            name: self.name,
            start_date: self.start_date,
            end_date: self.end_date,
            budget: self.budget,
            sales_impact: self.sales_impact,
        }
    }
}

/// Working copy of a promotion inside the form.
///
/// Every field may be unset. `id` is `None` for a promotion that has never
/// been saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotionDraft {
    /// Identifier of the promotion being edited
    pub id: Option<PromotionId>,

    /// Display name
    pub name: String,

    /// First day of the promotion
    pub start_date: Option<Date>,

    /// Last day of the promotion
    pub end_date: Option<Date>,

    /// Allocated budget
    pub budget: Option<Decimal>,

    /// Projected sales impact
    pub sales_impact: Option<Decimal>,
}

impl From<&Promotion> for PromotionDraft {
    fn from(promotion: &Promotion) -> Self {
        Self {
            id: Some(promotion.id.clone()),
            name: promotion.name.clone(),
            start_date: Some(promotion.start_date),
            end_date: Some(promotion.end_date),
            budget: Some(promotion.budget),
            sales_impact: promotion.sales_impact,
        }
    }
}

/// Editable and sortable promotion fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionField {
    /// `name`
    Name,

    /// `startDate`
    StartDate,

    /// `endDate`
    EndDate,

    /// `budget`
    Budget,

    /// `salesImpact`
    SalesImpact,
}

impl PromotionField {
    /// All fields in display order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::StartDate,
        Self::EndDate,
        Self::Budget,
        Self::SalesImpact,
    ];

    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
            Self::Budget => "budget",
            Self::SalesImpact => "salesImpact",
        }
    }
}

impl Display for PromotionField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Raised when a field name does not match any promotion field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown promotion field `{0}`")]
pub struct UnknownFieldError(pub String);

impl FromStr for PromotionField {
    type Err = UnknownFieldError;

    /// Accepts the wire name (`startDate`) and the snake case form (`start_date`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "startDate" | "start_date" => Ok(Self::StartDate),
            "endDate" | "end_date" => Ok(Self::EndDate),
            "budget" => Ok(Self::Budget),
            "salesImpact" | "sales_impact" => Ok(Self::SalesImpact),
            other => Err(UnknownFieldError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::tz::TimeZone;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn promotion_decodes_numeric_id_and_plain_dates() -> TestResult {
        let promotion: Promotion = serde_json::from_value(json!({
            "id": 1,
            "name": "Spring Sale",
            "startDate": "2024-03-01",
            "endDate": "2024-03-31",
            "budget": 1000,
            "salesImpact": 200.5
        }))?;

        assert_eq!(promotion.id, PromotionId::Number(1));
        assert_eq!(promotion.start_date, jiff::civil::date(2024, 3, 1));
        assert_eq!(promotion.end_date, jiff::civil::date(2024, 3, 31));
        assert_eq!(promotion.budget, dec!(1000));
        assert_eq!(promotion.sales_impact, Some(dec!(200.5)));

        Ok(())
    }

    #[test]
    fn promotion_decodes_text_id_timestamps_and_missing_impact() -> TestResult {
        let promotion: Promotion = serde_json::from_value(json!({
            "id": "64f1c2",
            "name": "Winter Sale",
            "startDate": "2024-12-01T12:00:00.000Z",
            "endDate": "2024-12-24T12:00:00Z",
            "budget": "500"
        }))?;

        assert_eq!(promotion.id, PromotionId::from("64f1c2"));
        assert_eq!(
            promotion.start_date,
            dates::parse_in("2024-12-01T12:00:00Z", &TimeZone::system())?
        );
        assert_eq!(
            promotion.end_date,
            dates::parse_in("2024-12-24T12:00:00Z", &TimeZone::system())?
        );
        assert_eq!(promotion.budget, dec!(500));
        assert_eq!(promotion.sales_impact, None);

        Ok(())
    }

    #[test]
    fn blank_sales_impact_decodes_as_absent() -> TestResult {
        let promotion: Promotion = serde_json::from_value(json!({
            "id": 3,
            "name": "Flash",
            "startDate": "2024-01-01",
            "endDate": "2024-01-02",
            "budget": 10,
            "salesImpact": ""
        }))?;

        assert_eq!(promotion.sales_impact, None);

        Ok(())
    }

    #[test]
    fn blank_budget_is_rejected() {
        let result = serde_json::from_value::<Promotion>(json!({
            "id": 3,
            "name": "Flash",
            "startDate": "2024-01-01",
            "endDate": "2024-01-02",
            "budget": ""
        }));

        assert!(result.is_err());
    }

    #[test]
    fn new_promotion_encodes_camel_case_with_plain_dates() -> TestResult {
        let body = serde_json::to_value(NewPromotion {
            name: "Spring Sale".to_string(),
            start_date: jiff::civil::date(2024, 3, 1),
            end_date: jiff::civil::date(2024, 3, 31),
            budget: dec!(1000),
            sales_impact: None,
        })?;

        assert_eq!(
            body,
            json!({
                "name": "Spring Sale",
                "startDate": "2024-03-01",
                "endDate": "2024-03-31",
                "budget": 1000.0,
                "salesImpact": null
            })
        );

        Ok(())
    }

    #[test]
    fn draft_copies_every_field_from_promotion() {
        let promotion = Promotion {
            id: PromotionId::Number(7),
            name: "Autumn".to_string(),
            start_date: jiff::civil::date(2024, 9, 1),
            end_date: jiff::civil::date(2024, 9, 30),
            budget: dec!(250),
            sales_impact: Some(dec!(12)),
        };

        let draft = PromotionDraft::from(&promotion);

        assert_eq!(draft.id, Some(PromotionId::Number(7)));
        assert_eq!(draft.name, "Autumn");
        assert_eq!(draft.start_date, Some(promotion.start_date));
        assert_eq!(draft.end_date, Some(promotion.end_date));
        assert_eq!(draft.budget, Some(dec!(250)));
        assert_eq!(draft.sales_impact, Some(dec!(12)));
    }

    #[test]
    fn field_names_parse_in_both_spellings() -> TestResult {
        assert_eq!("startDate".parse::<PromotionField>()?, PromotionField::StartDate);
        assert_eq!("sales_impact".parse::<PromotionField>()?, PromotionField::SalesImpact);
        assert!("colour".parse::<PromotionField>().is_err());

        Ok(())
    }
}
