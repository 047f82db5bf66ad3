use contracts::domain::w001_inventory_item::{
    InventoryFilter, InventoryItem, InventoryItemDraft, InventoryItemId,
};
use contracts::domain::w002_order::{Order, OrderDraft, OrderFilter, OrderId};
use contracts::shared::record_set::{RecordSet, StoreError};
use contracts::shared::seed::{SEED_INVENTORY, SEED_ORDERS};
use leptos::prelude::*;

/// The single mutable resource of the app: both record sets plus the
/// presentational loading flag. Components read derived snapshots and
/// route every change through the methods below; they never mutate the
/// signals directly.
#[derive(Clone, Copy)]
pub struct WarehouseStore {
    pub inventory: RwSignal<RecordSet<InventoryItem, InventoryFilter>>,
    pub orders: RwSignal<RecordSet<Order, OrderFilter>>,
    pub loading: RwSignal<bool>,
}

impl WarehouseStore {
    pub fn new() -> Self {
        Self {
            inventory: RwSignal::new(RecordSet::with_records(SEED_INVENTORY.clone())),
            orders: RwSignal::new(RecordSet::with_records(SEED_ORDERS.clone())),
            loading: RwSignal::new(true),
        }
    }

    pub fn use_store() -> Self {
        use_context::<WarehouseStore>().expect("WarehouseStore not provided in context")
    }

    pub fn finish_initial_load(&self) {
        self.loading.set(false);
    }

    fn today() -> chrono::NaiveDate {
        chrono::Utc::now().date_naive()
    }

    // ------------------------------------------------------------------
    // Inventory mutations
    // ------------------------------------------------------------------

    pub fn add_item(&self, draft: InventoryItemDraft) -> Result<InventoryItem, StoreError> {
        let code = self
            .inventory
            .with_untracked(|set| InventoryItem::next_code(set.all()));
        let record = InventoryItem::new_for_insert(code, draft);
        let mut result = Ok(());
        self.inventory.update(|set| result = set.insert(record.clone()));
        result?;
        log::info!("inventory: added {}", record.code);
        Ok(record)
    }

    pub fn update_item(
        &self,
        id: InventoryItemId,
        draft: InventoryItemDraft,
    ) -> Result<InventoryItem, StoreError> {
        let mut existing = self
            .inventory
            .with_untracked(|set| set.get(id).cloned())
            .ok_or_else(|| StoreError::NotFound(format!("Inventory item {}", id.0)))?;
        existing.apply(draft);
        let mut result = Ok(());
        self.inventory
            .update(|set| result = set.update(existing.clone()));
        result?;
        log::info!("inventory: updated {}", existing.code);
        Ok(existing)
    }

    pub fn delete_item(&self, id: InventoryItemId) -> Result<InventoryItem, StoreError> {
        let mut result = Err(StoreError::NotFound(format!("Inventory item {}", id.0)));
        self.inventory.update(|set| result = set.remove(id));
        if let Ok(removed) = &result {
            log::info!("inventory: deleted {}", removed.code);
        }
        result
    }

    // ------------------------------------------------------------------
    // Order mutations
    // ------------------------------------------------------------------

    pub fn add_order(&self, draft: OrderDraft) -> Result<Order, StoreError> {
        let code = self
            .orders
            .with_untracked(|set| Order::next_code(set.all()));
        let record = Order::new_for_insert(code, Self::today(), draft);
        let mut result = Ok(());
        self.orders.update(|set| result = set.insert(record.clone()));
        result?;
        log::info!("orders: added {}", record.code);
        Ok(record)
    }

    pub fn update_order(&self, id: OrderId, draft: OrderDraft) -> Result<Order, StoreError> {
        let mut existing = self
            .orders
            .with_untracked(|set| set.get(id).cloned())
            .ok_or_else(|| StoreError::NotFound(format!("Order {}", id.0)))?;
        existing.apply(Self::today(), draft);
        let mut result = Ok(());
        self.orders.update(|set| result = set.update(existing.clone()));
        result?;
        log::info!("orders: updated {}", existing.code);
        Ok(existing)
    }

    pub fn delete_order(&self, id: OrderId) -> Result<Order, StoreError> {
        let mut result = Err(StoreError::NotFound(format!("Order {}", id.0)));
        self.orders.update(|set| result = set.remove(id));
        if let Ok(removed) = &result {
            log::info!("orders: deleted {}", removed.code);
        }
        result
    }
}
