use super::aggregate::InventoryItem;
use crate::shared::listing::Searchable;
use crate::shared::record_set::RecordFilter;
use serde::{Deserialize, Serialize};

/// Active inventory filter. The free-text search term is one more field
/// here, so search and filters always compose instead of overriding each
/// other.
///
/// Empty strings and `None` bounds impose no constraint. Numeric bounds
/// are parsed at the form boundary; input that fails to parse becomes
/// `None` (no constraint) rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryFilter {
    /// Free-text search over the item name
    pub q: String,
    /// Exact category match
    pub category: String,
    /// Case-insensitive substring match on supplier
    pub supplier: String,
    /// Inclusive unit price lower bound
    pub price_min: Option<f64>,
    /// Inclusive unit price upper bound
    pub price_max: Option<f64>,
}

impl RecordFilter<InventoryItem> for InventoryFilter {
    fn matches(&self, record: &InventoryItem) -> bool {
        if !self.q.trim().is_empty() && !record.matches_query(self.q.trim()) {
            return false;
        }
        if !self.category.is_empty() && record.category != self.category {
            return false;
        }
        if !self.supplier.trim().is_empty()
            && !record
                .supplier
                .to_lowercase()
                .contains(&self.supplier.trim().to_lowercase())
        {
            return false;
        }
        if let Some(min) = self.price_min {
            if record.unit_price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if record.unit_price > max {
                return false;
            }
        }
        true
    }

    fn active_count(&self) -> usize {
        [
            !self.q.trim().is_empty(),
            !self.category.is_empty(),
            !self.supplier.trim().is_empty(),
            self.price_min.is_some(),
            self.price_max.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::w001_inventory_item::InventoryItemDraft;
    use chrono::NaiveDate;

    fn item(name: &str, category: &str, supplier: &str, price: f64) -> InventoryItem {
        InventoryItem::new_for_insert(
            "ITM-001".into(),
            InventoryItemDraft {
                name: name.to_string(),
                category: category.to_string(),
                quantity: 10,
                unit_price: price,
                supplier: supplier.to_string(),
                last_updated: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            },
        )
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = InventoryFilter::default();
        assert!(filter.matches(&item("Laptop", "Electronics", "Wix", 900.0)));
        assert!(!filter.is_active());
    }

    #[test]
    fn test_predicates_intersect() {
        // category + price_min together must single out the one matching item
        let filter = InventoryFilter {
            category: "Electronics".into(),
            price_min: Some(100.0),
            ..Default::default()
        };
        let records = vec![
            item("Laptop", "Electronics", "Wix", 900.0),
            item("Cable", "Electronics", "Wix", 9.0),
            item("Desk", "Furniture", "Strauss Group", 400.0),
        ];
        let matching: Vec<&InventoryItem> =
            records.iter().filter(|r| filter.matches(r)).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].name, "Laptop");
        assert_eq!(filter.active_count(), 2);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = InventoryFilter {
            price_min: Some(100.0),
            price_max: Some(200.0),
            ..Default::default()
        };
        assert!(filter.matches(&item("A", "X", "S", 100.0)));
        assert!(filter.matches(&item("B", "X", "S", 200.0)));
        assert!(!filter.matches(&item("C", "X", "S", 99.99)));
        assert!(!filter.matches(&item("D", "X", "S", 200.01)));
    }

    #[test]
    fn test_search_composes_with_filters() {
        let filter = InventoryFilter {
            q: "lap".into(),
            category: "Electronics".into(),
            ..Default::default()
        };
        assert!(filter.matches(&item("Laptop", "Electronics", "Wix", 900.0)));
        // same name, wrong category: the search hit alone is not enough
        assert!(!filter.matches(&item("Laptop sleeve", "Accessories", "Wix", 20.0)));
    }

    #[test]
    fn test_supplier_substring_case_insensitive() {
        let filter = InventoryFilter {
            supplier: "wix".into(),
            ..Default::default()
        };
        assert!(filter.matches(&item("Laptop", "Electronics", "Wix", 900.0)));
        assert!(!filter.matches(&item("Laptop", "Electronics", "Amdocs", 900.0)));
    }
}
