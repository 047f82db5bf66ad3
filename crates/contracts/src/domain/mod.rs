pub mod common;
pub mod w001_inventory_item;
pub mod w002_order;
