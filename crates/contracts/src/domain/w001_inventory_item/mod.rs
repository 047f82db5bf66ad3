pub mod aggregate;
pub mod filter;

pub use aggregate::{InventoryItem, InventoryItemDraft, InventoryItemId};
pub use filter::InventoryFilter;
