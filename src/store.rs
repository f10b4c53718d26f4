//! Promotion Store
//!
//! The session's authoritative copy of the promotion collection. It is
//! replaced wholesale after a full refresh from the gateway and patched one
//! record at a time after individual mutations; both paths converge when
//! applied in order.

use std::slice::Iter;

use tracing::{debug, warn};

use crate::promotions::{Promotion, PromotionId};

/// In-memory promotion collection, ordered by insertion.
///
/// Holds at most one entry per [`PromotionId`]. Drafts cannot be stored since
/// only persisted [`Promotion`]s carry an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotionStore {
    promotions: Vec<Promotion>,
}

impl PromotionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current collection and keep `promotions` in the given order.
    ///
    /// When the sequence repeats an id, the first occurrence wins and the
    /// rest are dropped.
    pub fn replace_all(&mut self, promotions: impl IntoIterator<Item = Promotion>) {
        self.promotions.clear();

        for promotion in promotions {
            if self.contains(&promotion.id) {
                warn!(
                    promotion_id = %promotion.id,
                    "dropping duplicate promotion from replacement set"
                );

                continue;
            }

            self.promotions.push(promotion);
        }

        debug!(count = self.promotions.len(), "replaced promotions");
    }

    /// Append a promotion. Returns `false`, leaving the store untouched, when
    /// one with the same id is already present.
    pub fn add(&mut self, promotion: Promotion) -> bool {
        if self.contains(&promotion.id) {
            debug!(promotion_id = %promotion.id, "promotion already present, not adding");

            return false;
        }

        self.promotions.push(promotion);

        true
    }

    /// Replace the entry with the same id, keeping its position. Returns
    /// `false` when no entry matches.
    pub fn update(&mut self, promotion: Promotion) -> bool {
        let Some(slot) = self
            .promotions
            .iter_mut()
            .find(|existing| existing.id == promotion.id)
        else {
            warn!(promotion_id = %promotion.id, "update for unknown promotion ignored");

            return false;
        };

        *slot = promotion;

        true
    }

    /// Remove and return the entry with the given id, if present.
    pub fn remove(&mut self, id: &PromotionId) -> Option<Promotion> {
        let Some(index) = self.promotions.iter().position(|promotion| promotion.id == *id) else {
            debug!(promotion_id = %id, "remove for unknown promotion ignored");

            return None;
        };

        Some(self.promotions.remove(index))
    }

    /// Current collection in insertion order.
    pub fn snapshot(&self) -> &[Promotion] {
        &self.promotions
    }

    /// Look up a promotion by id.
    pub fn get(&self, id: &PromotionId) -> Option<&Promotion> {
        self.promotions.iter().find(|promotion| promotion.id == *id)
    }

    /// Whether a promotion with the given id is stored.
    pub fn contains(&self, id: &PromotionId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate promotions in insertion order.
    pub fn iter(&self) -> Iter<'_, Promotion> {
        self.promotions.iter()
    }

    /// Number of stored promotions.
    pub fn len(&self) -> usize {
        self.promotions.len()
    }

    /// Whether the store holds no promotions.
    pub fn is_empty(&self) -> bool {
        self.promotions.is_empty()
    }
}

impl<'a> IntoIterator for &'a PromotionStore {
    type Item = &'a Promotion;
    type IntoIter = Iter<'a, Promotion>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Promotion> for PromotionStore {
    fn from_iter<T: IntoIterator<Item = Promotion>>(iter: T) -> Self {
        let mut store = Self::new();

        store.replace_all(iter);

        store
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    fn promotion(id: u64, name: &str, budget: Decimal) -> Promotion {
        Promotion {
            id: PromotionId::Number(id),
            name: name.to_string(),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 2, 1),
            budget,
            sales_impact: None,
        }
    }

    fn ids(store: &PromotionStore) -> Vec<PromotionId> {
        store.iter().map(|promotion| promotion.id.clone()).collect()
    }

    #[test]
    fn replace_all_then_snapshot_round_trips() {
        let promotions = vec![
            promotion(3, "C", dec!(30)),
            promotion(1, "A", dec!(10)),
            promotion(2, "B", dec!(20)),
        ];

        let mut store = PromotionStore::new();

        store.add(promotion(9, "stale", dec!(1)));
        store.replace_all(promotions.clone());

        assert_eq!(store.snapshot(), promotions.as_slice());
    }

    #[test]
    fn replace_all_keeps_first_of_duplicate_ids() {
        let mut store = PromotionStore::new();

        store.replace_all([
            promotion(1, "first", dec!(10)),
            promotion(1, "second", dec!(20)),
        ]);

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(&PromotionId::Number(1)).map(|p| p.name.as_str()),
            Some("first")
        );
    }

    #[test]
    fn add_ignores_existing_id() {
        let mut store = PromotionStore::new();

        assert!(store.add(promotion(1, "A", dec!(10))));
        assert!(!store.add(promotion(1, "A again", dec!(99))));

        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot().first().map(|p| p.budget), Some(dec!(10)));
    }

    #[test]
    fn update_replaces_whole_entry_in_place() {
        let mut store: PromotionStore = [
            promotion(1, "Spring Sale", dec!(1000)),
            promotion(2, "Winter Sale", dec!(500)),
        ]
        .into_iter()
        .collect();

        let mut replacement = promotion(2, "Winter Mega Sale", dec!(800));
        replacement.sales_impact = Some(dec!(50));

        assert!(store.update(replacement.clone()));

        assert_eq!(store.get(&PromotionId::Number(2)), Some(&replacement));
        assert_eq!(
            store.get(&PromotionId::Number(1)),
            Some(&promotion(1, "Spring Sale", dec!(1000)))
        );
        assert_eq!(
            ids(&store),
            vec![PromotionId::Number(1), PromotionId::Number(2)]
        );
    }

    #[test]
    fn update_of_unknown_id_is_a_no_op() {
        let mut store: PromotionStore = [promotion(1, "A", dec!(10))].into_iter().collect();
        let before = store.clone();

        assert!(!store.update(promotion(5, "ghost", dec!(1))));
        assert_eq!(store, before);
    }

    #[test]
    fn remove_returns_removed_entry_and_ignores_unknown_ids() {
        let mut store: PromotionStore = [promotion(1, "A", dec!(10)), promotion(2, "B", dec!(20))]
            .into_iter()
            .collect();

        assert_eq!(
            store.remove(&PromotionId::Number(1)).map(|p| p.name),
            Some("A".to_string())
        );
        assert_eq!(store.remove(&PromotionId::Number(1)), None);
        assert_eq!(ids(&store), vec![PromotionId::Number(2)]);
    }

    #[test]
    fn ids_stay_unique_across_mixed_operations() {
        let mut store = PromotionStore::new();

        for step in 0_u64..60 {
            let id = step % 7;

            match step % 4 {
                0 | 1 => {
                    store.add(promotion(id, "added", Decimal::from(step)));
                }
                2 => {
                    store.update(promotion(id, "updated", Decimal::from(step)));
                }
                _ => {
                    store.remove(&PromotionId::Number(id));
                }
            }

            let mut seen = ids(&store);
            let total = seen.len();

            seen.sort();
            seen.dedup();

            assert_eq!(seen.len(), total, "duplicate id after step {step}");
        }
    }
}
