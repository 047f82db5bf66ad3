pub mod aggregate;
pub mod filter;

pub use aggregate::{Order, OrderDraft, OrderId, OrderLine};
pub use filter::OrderFilter;
