mod widget;

pub use widget::InventoryItemForm;
