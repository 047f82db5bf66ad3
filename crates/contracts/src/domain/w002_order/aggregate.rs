use crate::domain::common::{Record, RecordId};
use crate::enums::OrderStatus;
use crate::shared::listing::{Searchable, Sortable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl RecordId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================
/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,

    /// Business code, e.g. "ORD-001"
    pub code: String,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    pub status: OrderStatus,

    pub items: Vec<OrderLine>,

    #[serde(rename = "totalPrice")]
    pub total_price: f64,

    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,

    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDate,

    #[serde(rename = "shippingDate")]
    pub shipping_date: NaiveDate,

    pub notes: Option<String>,
}

impl Order {
    pub fn new_for_insert(code: String, today: NaiveDate, draft: OrderDraft) -> Self {
        Self {
            id: OrderId::new_v4(),
            code,
            customer_name: draft.customer_name,
            status: draft.status,
            items: draft.items,
            total_price: draft.total_price,
            created_at: today,
            updated_at: today,
            shipping_date: draft.shipping_date,
            notes: draft.notes,
        }
    }

    /// Full-record replace of the editable fields; `created_at` is kept,
    /// `updated_at` is touched.
    pub fn apply(&mut self, today: NaiveDate, draft: OrderDraft) {
        self.customer_name = draft.customer_name;
        self.status = draft.status;
        self.items = draft.items;
        self.total_price = draft.total_price;
        self.shipping_date = draft.shipping_date;
        self.notes = draft.notes;
        self.updated_at = today;
    }

    /// Total number of units across all lines
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Next free business code ("ORD-001", "ORD-002", ...)
    pub fn next_code(existing: &[Order]) -> String {
        let max = existing
            .iter()
            .filter_map(|order| order.code.strip_prefix("ORD-"))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("ORD-{:03}", max + 1)
    }
}

impl Record for Order {
    type Id = OrderId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

impl Searchable for Order {
    fn matches_query(&self, q: &str) -> bool {
        self.customer_name.to_lowercase().contains(&q.to_lowercase())
    }
}

impl Sortable for Order {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "customer_name" => self.customer_name.cmp(&other.customer_name),
            "status" => self.status.code().cmp(other.status.code()),
            "items" => self.unit_count().cmp(&other.unit_count()),
            "total_price" => self.total_price.total_cmp(&other.total_price),
            "created_at" => self.created_at.cmp(&other.created_at),
            "updated_at" => self.updated_at.cmp(&other.updated_at),
            "shipping_date" => self.shipping_date.cmp(&other.shipping_date),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// Draft (form boundary)
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    #[serde(rename = "customerName")]
    pub customer_name: String,
    pub status: OrderStatus,
    pub items: Vec<OrderLine>,
    #[serde(rename = "totalPrice")]
    pub total_price: f64,
    #[serde(rename = "shippingDate")]
    pub shipping_date: NaiveDate,
    pub notes: Option<String>,
}

impl OrderDraft {
    pub fn from_order(order: &Order) -> Self {
        Self {
            customer_name: order.customer_name.clone(),
            status: order.status,
            items: order.items.clone(),
            total_price: order.total_price,
            shipping_date: order.shipping_date,
            notes: order.notes.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty() {
            return Err("Customer name is required".into());
        }
        if self.items.is_empty() {
            return Err("An order needs at least one line".into());
        }
        if self.items.iter().any(|line| line.name.trim().is_empty()) {
            return Err("Every order line needs a product name".into());
        }
        if self.items.iter().any(|line| line.quantity == 0) {
            return Err("Line quantity must be at least 1".into());
        }
        if !self.total_price.is_finite() || self.total_price < 0.0 {
            return Err("Total price must be a non-negative number".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(customer: &str) -> OrderDraft {
        OrderDraft {
            customer_name: customer.to_string(),
            status: OrderStatus::Pending,
            items: vec![OrderLine {
                name: "Monitor".to_string(),
                quantity: 2,
            }],
            total_price: 450.0,
            shipping_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            notes: None,
        }
    }

    #[test]
    fn test_validate() {
        assert!(draft("Mobileye").validate().is_ok());
        assert!(draft("").validate().is_err());

        let mut no_lines = draft("Mobileye");
        no_lines.items.clear();
        assert!(no_lines.validate().is_err());

        let mut zero_qty = draft("Mobileye");
        zero_qty.items[0].quantity = 0;
        assert!(zero_qty.validate().is_err());
    }

    #[test]
    fn test_apply_touches_updated_at_only() {
        let created = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let edited = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let mut order = Order::new_for_insert("ORD-001".into(), created, draft("Mobileye"));
        order.apply(edited, draft("Fiverr"));
        assert_eq!(order.created_at, created);
        assert_eq!(order.updated_at, edited);
        assert_eq!(order.customer_name, "Fiverr");
    }

    #[test]
    fn test_unit_count() {
        let mut d = draft("Mobileye");
        d.items.push(OrderLine {
            name: "Charger".to_string(),
            quantity: 3,
        });
        let order = Order::new_for_insert(
            "ORD-001".into(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            d,
        );
        assert_eq!(order.unit_count(), 5);
    }
}
