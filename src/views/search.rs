//! Table search

use crate::{locale::Language, promotions::Promotion};

/// Keep the promotions matching `search`, preserving order.
///
/// An empty search matches everything.
pub fn filtered<'a>(
    promotions: impl IntoIterator<Item = &'a Promotion>,
    search: &str,
    language: Language,
) -> Vec<&'a Promotion> {
    promotions
        .into_iter()
        .filter(|promotion| matches(promotion, search, language))
        .collect()
}

/// Whether `search` is a case-sensitive substring of the promotion's name,
/// its start or end date as displayed in `language`, its budget or its sales
/// impact.
///
/// Amounts are matched on their shortest decimal text (`1000.5`, never
/// `1000.50`). A missing sales impact has no text to match.
pub fn matches(promotion: &Promotion, search: &str, language: Language) -> bool {
    if search.is_empty() {
        return true;
    }

    promotion.name.contains(search)
        || language.format_date(promotion.start_date).contains(search)
        || language.format_date(promotion.end_date).contains(search)
        || promotion.budget.normalize().to_string().contains(search)
        || promotion
            .sales_impact
            .is_some_and(|impact| impact.normalize().to_string().contains(search))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal_macros::dec;

    use crate::promotions::PromotionId;

    use super::*;

    fn fixture() -> Vec<Promotion> {
        vec![
            Promotion {
                id: PromotionId::Number(1),
                name: "Spring Sale".to_string(),
                start_date: date(2024, 3, 1),
                end_date: date(2024, 3, 31),
                budget: dec!(1000.50),
                sales_impact: Some(dec!(200)),
            },
            Promotion {
                id: PromotionId::Number(2),
                name: "Winter Sale".to_string(),
                start_date: date(2024, 12, 1),
                end_date: date(2024, 12, 24),
                budget: dec!(500),
                sales_impact: None,
            },
        ]
    }

    fn ids(view: &[&Promotion]) -> Vec<PromotionId> {
        view.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn empty_search_keeps_everything_in_order() {
        let promotions = fixture();

        let view = filtered(&promotions, "", Language::English);

        assert_eq!(
            ids(&view),
            vec![PromotionId::Number(1), PromotionId::Number(2)]
        );
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let promotions = fixture();

        assert_eq!(
            ids(&filtered(&promotions, "Winter", Language::English)),
            vec![PromotionId::Number(2)]
        );
        assert!(filtered(&promotions, "winter", Language::English).is_empty());
    }

    #[test]
    fn dates_match_in_the_active_language_format() {
        let promotions = fixture();

        assert_eq!(
            ids(&filtered(&promotions, "12/24/2024", Language::English)),
            vec![PromotionId::Number(2)]
        );
        assert_eq!(
            ids(&filtered(&promotions, "24/12/2024", Language::French)),
            vec![PromotionId::Number(2)]
        );
        assert!(filtered(&promotions, "24/12/2024", Language::English).is_empty());
    }

    #[test]
    fn amounts_match_on_normalized_text() {
        let promotions = fixture();

        assert_eq!(
            ids(&filtered(&promotions, "1000.5", Language::English)),
            vec![PromotionId::Number(1)]
        );
        assert!(filtered(&promotions, "1000.50", Language::English).is_empty());
        assert_eq!(
            ids(&filtered(&promotions, "200", Language::English)),
            vec![PromotionId::Number(1)]
        );
    }

    #[test]
    fn missing_sales_impact_does_not_match_placeholder_text() {
        let promotions = fixture();

        assert!(filtered(&promotions, "null", Language::English).is_empty());
    }
}
