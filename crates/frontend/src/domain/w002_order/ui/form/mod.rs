mod widget;

pub use widget::OrderForm;
