//! Reporting

use jiff::civil::Date;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::promotions::Promotion;

/// Date window for a report.
///
/// The window only applies when both bounds are set. Clearing either bound
/// makes the report cover every promotion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// Earliest allowed start date (inclusive)
    pub start: Option<Date>,

    /// Latest allowed end date (inclusive)
    pub end: Option<Date>,
}

impl DateRange {
    /// A range that includes every promotion.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// A range from `start` to `end`, both inclusive.
    #[must_use]
    pub const fn between(start: Date, end: Date) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Whether the promotion runs entirely inside the range.
    pub fn contains(&self, promotion: &Promotion) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => promotion.start_date >= start && promotion.end_date <= end,
            _ => true,
        }
    }
}

/// Aggregated figures over a set of promotions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Number of promotions included
    pub count: usize,

    /// Sum of budgets
    pub total_budget: Decimal,

    /// Mean sales impact, missing estimates counted as zero; zero when no
    /// promotion is included
    pub avg_sales_impact: Decimal,
}

impl Report {
    /// Average sales impact rounded half away from zero to two decimal
    /// places, e.g. `100.00`.
    #[must_use]
    pub fn avg_sales_impact_display(&self) -> String {
        let rounded = self
            .avg_sales_impact
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        format!("{rounded:.2}")
    }
}

/// Aggregate the promotions that fall inside `range`.
pub fn aggregate<'a>(
    promotions: impl IntoIterator<Item = &'a Promotion>,
    range: DateRange,
) -> Report {
    let (count, total_budget, total_sales_impact) = promotions
        .into_iter()
        .filter(|promotion| range.contains(promotion))
        .fold(
            (0_usize, Decimal::ZERO, Decimal::ZERO),
            |(count, budget, impact), promotion| {
                (
                    count + 1,
                    budget + promotion.budget,
                    impact + promotion.sales_impact_or_zero(),
                )
            },
        );

    let avg_sales_impact = if count == 0 {
        Decimal::ZERO
    } else {
        total_sales_impact
            .checked_div(Decimal::from(count))
            .unwrap_or(Decimal::ZERO)
    };

    Report {
        count,
        total_budget,
        avg_sales_impact,
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal_macros::dec;

    use crate::promotions::PromotionId;

    use super::*;

    fn promotion(
        id: u64,
        start: Date,
        end: Date,
        budget: Decimal,
        impact: Option<Decimal>,
    ) -> Promotion {
        Promotion {
            id: PromotionId::Number(id),
            name: format!("Promotion {id}"),
            start_date: start,
            end_date: end,
            budget,
            sales_impact: impact,
        }
    }

    fn seasonal() -> Vec<Promotion> {
        vec![
            promotion(1, date(2024, 3, 1), date(2024, 3, 31), dec!(1000), Some(dec!(200))),
            promotion(2, date(2024, 12, 1), date(2024, 12, 24), dec!(500), None),
            promotion(3, date(2024, 6, 1), date(2024, 6, 30), dec!(250), Some(dec!(30))),
        ]
    }

    #[test]
    fn empty_input_reports_zeroes() {
        let none: Vec<Promotion> = Vec::new();

        let report = aggregate(&none, DateRange::between(date(2024, 1, 1), date(2024, 12, 31)));

        assert_eq!(report, Report::default());
        assert_eq!(aggregate(&none, DateRange::unbounded()), Report::default());
    }

    #[test]
    fn missing_impact_counts_as_zero_in_the_average() {
        let promotions = vec![
            promotion(1, date(2024, 3, 1), date(2024, 3, 31), dec!(1000), Some(dec!(200))),
            promotion(2, date(2024, 12, 1), date(2024, 12, 24), dec!(500), None),
        ];

        let report = aggregate(&promotions, DateRange::unbounded());

        assert_eq!(report.count, 2);
        assert_eq!(report.total_budget, dec!(1500));
        assert_eq!(report.avg_sales_impact, dec!(100));
        assert_eq!(report.avg_sales_impact_display(), "100.00");
    }

    #[test]
    fn bounds_are_inclusive() {
        let promotions = seasonal();

        let report = aggregate(
            &promotions,
            DateRange::between(date(2024, 3, 1), date(2024, 6, 30)),
        );

        assert_eq!(report.count, 2);
        assert_eq!(report.total_budget, dec!(1250));
        assert_eq!(report.avg_sales_impact, dec!(115));
    }

    #[test]
    fn promotions_crossing_a_bound_are_excluded() {
        let promotions = seasonal();

        let report = aggregate(
            &promotions,
            DateRange::between(date(2024, 3, 2), date(2024, 12, 31)),
        );

        assert_eq!(report.count, 2);
        assert_eq!(report.total_budget, dec!(750));
    }

    #[test]
    fn a_single_missing_bound_includes_everything() {
        let promotions = seasonal();

        let start_only = DateRange {
            start: Some(date(2030, 1, 1)),
            end: None,
        };
        let end_only = DateRange {
            start: None,
            end: Some(date(2000, 1, 1)),
        };

        assert_eq!(aggregate(&promotions, start_only).count, 3);
        assert_eq!(aggregate(&promotions, end_only).count, 3);
    }

    #[test]
    fn average_display_rounds_to_two_places() {
        let report = Report {
            count: 3,
            total_budget: dec!(0),
            avg_sales_impact: dec!(10) / dec!(3),
        };

        assert_eq!(report.avg_sales_impact_display(), "3.33");
    }

    #[test]
    fn average_display_rounds_midpoints_up() {
        let report = Report {
            count: 4,
            total_budget: dec!(0),
            avg_sales_impact: dec!(152.625),
        };

        assert_eq!(report.avg_sales_impact_display(), "152.63");
    }
}
