pub mod state;
mod widget;

pub use widget::InventoryList;
