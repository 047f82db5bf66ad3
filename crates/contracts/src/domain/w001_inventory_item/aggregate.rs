use crate::domain::common::{Record, RecordId};
use crate::shared::listing::{Searchable, Sortable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryItemId(pub Uuid);

impl InventoryItemId {
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

impl RecordId for InventoryItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(InventoryItemId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Record
// ============================================================================
/// One stocked product. Numeric and date fields are typed; string form
/// input is parsed into an [`InventoryItemDraft`] before it gets here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,

    /// Business code, e.g. "ITM-001"
    pub code: String,

    pub name: String,

    pub category: String,

    pub quantity: u32,

    #[serde(rename = "unitPrice")]
    pub unit_price: f64,

    pub supplier: String,

    #[serde(rename = "lastUpdated")]
    pub last_updated: NaiveDate,
}

/// Stock at or below this level is flagged as low in lists and on the
/// dashboard.
pub const LOW_STOCK_THRESHOLD: u32 = 20;

impl InventoryItem {
    pub fn new_for_insert(code: String, draft: InventoryItemDraft) -> Self {
        Self {
            id: InventoryItemId::new_v4(),
            code,
            name: draft.name,
            category: draft.category,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
            supplier: draft.supplier,
            last_updated: draft.last_updated,
        }
    }

    /// Full-record replace of the editable fields
    pub fn apply(&mut self, draft: InventoryItemDraft) {
        self.name = draft.name;
        self.category = draft.category;
        self.quantity = draft.quantity;
        self.unit_price = draft.unit_price;
        self.supplier = draft.supplier;
        self.last_updated = draft.last_updated;
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity <= LOW_STOCK_THRESHOLD
    }

    /// Next free business code ("ITM-001", "ITM-002", ...)
    ///
    /// Scans the max existing suffix rather than counting records, so
    /// codes stay unique after deletions.
    pub fn next_code(existing: &[InventoryItem]) -> String {
        let max = existing
            .iter()
            .filter_map(|item| item.code.strip_prefix("ITM-"))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("ITM-{:03}", max + 1)
    }
}

impl Record for InventoryItem {
    type Id = InventoryItemId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn element_name() -> &'static str {
        "Inventory item"
    }

    fn list_name() -> &'static str {
        "Inventory"
    }
}

impl Searchable for InventoryItem {
    fn matches_query(&self, q: &str) -> bool {
        self.name.to_lowercase().contains(&q.to_lowercase())
    }
}

impl Sortable for InventoryItem {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.code.cmp(&other.code),
            "name" => self.name.cmp(&other.name),
            "category" => self.category.cmp(&other.category),
            "quantity" => self.quantity.cmp(&other.quantity),
            "unit_price" => self.unit_price.total_cmp(&other.unit_price),
            "supplier" => self.supplier.cmp(&other.supplier),
            "last_updated" => self.last_updated.cmp(&other.last_updated),
            _ => Ordering::Equal,
        }
    }
}

// ============================================================================
// Draft (form boundary)
// ============================================================================
/// Validated form payload for create and edit. The UI parses quantity and
/// price out of the input strings before building a draft; parse failures
/// never reach the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItemDraft {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
    pub supplier: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: NaiveDate,
}

impl InventoryItemDraft {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            supplier: item.supplier.clone(),
            last_updated: item.last_updated,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.category.trim().is_empty() {
            return Err("Category is required".into());
        }
        if self.supplier.trim().is_empty() {
            return Err("Supplier is required".into());
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err("Unit price must be a non-negative number".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> InventoryItemDraft {
        InventoryItemDraft {
            name: name.to_string(),
            category: "Electronics".to_string(),
            quantity: 10,
            unit_price: 99.5,
            supplier: "Wix".to_string(),
            last_updated: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        }
    }

    #[test]
    fn test_validate_rejects_blank_required_fields() {
        assert!(draft("Laptop").validate().is_ok());
        assert!(draft("  ").validate().is_err());

        let mut bad_price = draft("Laptop");
        bad_price.unit_price = -1.0;
        assert!(bad_price.validate().is_err());
    }

    #[test]
    fn test_next_code_skips_past_deletions() {
        let a = InventoryItem::new_for_insert("ITM-001".into(), draft("Laptop"));
        let c = InventoryItem::new_for_insert("ITM-007".into(), draft("Mouse"));
        assert_eq!(InventoryItem::next_code(&[a, c]), "ITM-008");
        assert_eq!(InventoryItem::next_code(&[]), "ITM-001");
    }

    #[test]
    fn test_apply_replaces_editable_fields() {
        let mut item = InventoryItem::new_for_insert("ITM-001".into(), draft("Laptop"));
        let id = item.id;
        let mut edited = draft("Docking station");
        edited.quantity = 3;
        item.apply(edited);
        assert_eq!(item.id, id);
        assert_eq!(item.code, "ITM-001");
        assert_eq!(item.name, "Docking station");
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let item = InventoryItem::new_for_insert("ITM-001".into(), draft("Laptop"));
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("unitPrice").is_some());
        assert!(value.get("lastUpdated").is_some());
        assert!(value.get("unit_price").is_none());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let item = InventoryItem::new_for_insert("ITM-001".into(), draft("Laptop"));
        assert!(item.matches_query("lap"));
        assert!(item.matches_query("LAPTOP"));
        assert!(!item.matches_query("mouse"));
    }
}
