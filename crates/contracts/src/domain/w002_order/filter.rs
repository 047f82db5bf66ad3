use super::aggregate::Order;
use crate::enums::OrderStatus;
use crate::shared::listing::Searchable;
use crate::shared::record_set::RecordFilter;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Active order filter; the search term composes with the other
/// predicates just like [`InventoryFilter`](crate::domain::w001_inventory_item::InventoryFilter).
///
/// Date bounds apply to `created_at` and are inclusive on both ends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderFilter {
    /// Free-text search over the customer name
    pub q: String,
    /// Exact status match
    pub status: Option<OrderStatus>,
    /// Inclusive total price lower bound
    pub price_min: Option<f64>,
    /// Inclusive total price upper bound
    pub price_max: Option<f64>,
    /// Inclusive creation date lower bound
    pub date_from: Option<NaiveDate>,
    /// Inclusive creation date upper bound
    pub date_to: Option<NaiveDate>,
}

impl RecordFilter<Order> for OrderFilter {
    fn matches(&self, record: &Order) -> bool {
        if !self.q.trim().is_empty() && !record.matches_query(self.q.trim()) {
            return false;
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if record.total_price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if record.total_price > max {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if record.created_at < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if record.created_at > to {
                return false;
            }
        }
        true
    }

    fn active_count(&self) -> usize {
        [
            !self.q.trim().is_empty(),
            self.status.is_some(),
            self.price_min.is_some(),
            self.price_max.is_some(),
            self.date_from.is_some(),
            self.date_to.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::w002_order::{OrderDraft, OrderLine};

    fn order(customer: &str, status: OrderStatus, total: f64, created: NaiveDate) -> Order {
        Order::new_for_insert(
            "ORD-001".into(),
            created,
            OrderDraft {
                customer_name: customer.to_string(),
                status,
                items: vec![OrderLine {
                    name: "Keyboard".to_string(),
                    quantity: 1,
                }],
                total_price: total,
                shipping_date: created,
                notes: None,
            },
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_status_is_exact_match() {
        let filter = OrderFilter {
            status: Some(OrderStatus::Pending),
            ..Default::default()
        };
        assert!(filter.matches(&order("Wix", OrderStatus::Pending, 100.0, date(2025, 6, 1))));
        assert!(!filter.matches(&order("Wix", OrderStatus::Shipped, 100.0, date(2025, 6, 1))));
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let filter = OrderFilter {
            date_from: Some(date(2025, 6, 1)),
            date_to: Some(date(2025, 6, 30)),
            ..Default::default()
        };
        assert!(filter.matches(&order("Wix", OrderStatus::Pending, 100.0, date(2025, 6, 1))));
        assert!(filter.matches(&order("Wix", OrderStatus::Pending, 100.0, date(2025, 6, 30))));
        assert!(!filter.matches(&order("Wix", OrderStatus::Pending, 100.0, date(2025, 5, 31))));
        assert!(!filter.matches(&order("Wix", OrderStatus::Pending, 100.0, date(2025, 7, 1))));
    }

    #[test]
    fn test_search_composes_with_status() {
        let filter = OrderFilter {
            q: "mobile".into(),
            status: Some(OrderStatus::Delivered),
            ..Default::default()
        };
        assert!(filter.matches(&order(
            "Mobileye",
            OrderStatus::Delivered,
            100.0,
            date(2025, 6, 1)
        )));
        assert!(!filter.matches(&order(
            "Mobileye",
            OrderStatus::Pending,
            100.0,
            date(2025, 6, 1)
        )));
        assert_eq!(filter.active_count(), 2);
    }
}
