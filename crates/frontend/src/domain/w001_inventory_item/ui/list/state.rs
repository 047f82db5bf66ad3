use crate::shared::number_utils::parse_price;
use contracts::domain::w001_inventory_item::InventoryFilter;
use leptos::prelude::*;

/// Local list state: pagination plus the raw filter form inputs.
///
/// The inputs stay as the strings the user typed; they are parsed into
/// an [`InventoryFilter`] when applied. Input that fails to parse
/// becomes no constraint rather than an error.
#[derive(Clone, Debug)]
pub struct InventoryListState {
    pub page: usize,
    pub page_size: usize,

    pub category: String,
    pub supplier: String,
    pub price_min: String,
    pub price_max: String,
}

impl Default for InventoryListState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            category: String::new(),
            supplier: String::new(),
            price_min: String::new(),
            price_max: String::new(),
        }
    }
}

impl InventoryListState {
    /// Build the filter from the current inputs, carrying the search
    /// query over so search and filters compose.
    pub fn build_filter(&self, q: String) -> InventoryFilter {
        InventoryFilter {
            q,
            category: self.category.clone(),
            supplier: self.supplier.trim().to_string(),
            price_min: parse_price(&self.price_min),
            price_max: parse_price(&self.price_max),
        }
    }
}

pub fn create_state() -> RwSignal<InventoryListState> {
    RwSignal::new(InventoryListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_carries_search_query() {
        let state = InventoryListState {
            category: "Electronics".into(),
            price_min: "100".into(),
            price_max: "oops".into(),
            ..Default::default()
        };
        let filter = state.build_filter("lap".into());
        assert_eq!(filter.q, "lap");
        assert_eq!(filter.category, "Electronics");
        assert_eq!(filter.price_min, Some(100.0));
        assert_eq!(filter.price_max, None);
    }
}
