use crate::shared::date_utils::parse_date;
use crate::shared::number_utils::parse_price;
use contracts::domain::w002_order::OrderFilter;
use contracts::enums::OrderStatus;
use leptos::prelude::*;

/// Local list state: pagination plus the raw filter form inputs.
#[derive(Clone, Debug)]
pub struct OrderListState {
    pub page: usize,
    pub page_size: usize,

    /// Status code from the select, empty means any
    pub status: String,
    pub price_min: String,
    pub price_max: String,
    pub date_from: String,
    pub date_to: String,
}

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            status: String::new(),
            price_min: String::new(),
            price_max: String::new(),
            date_from: String::new(),
            date_to: String::new(),
        }
    }
}

impl OrderListState {
    /// Build the filter from the current inputs, carrying the search
    /// query over so search and filters compose. Unparseable numeric or
    /// date input imposes no constraint.
    pub fn build_filter(&self, q: String) -> OrderFilter {
        OrderFilter {
            q,
            status: OrderStatus::from_code(&self.status),
            price_min: parse_price(&self.price_min),
            price_max: parse_price(&self.price_max),
            date_from: parse_date(&self.date_from),
            date_to: parse_date(&self.date_to),
        }
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_build_filter_parses_inputs() {
        let state = OrderListState {
            status: "shipped".into(),
            price_min: "100".into(),
            date_from: "2025-06-10".into(),
            date_to: "not a date".into(),
            ..Default::default()
        };
        let filter = state.build_filter("acme".into());
        assert_eq!(filter.q, "acme");
        assert_eq!(filter.status, Some(OrderStatus::Shipped));
        assert_eq!(filter.price_min, Some(100.0));
        assert_eq!(
            filter.date_from,
            NaiveDate::from_ymd_opt(2025, 6, 10)
        );
        assert_eq!(filter.date_to, None);
    }

    #[test]
    fn test_empty_status_means_any() {
        let filter = OrderListState::default().build_filter(String::new());
        assert_eq!(filter.status, None);
    }
}
