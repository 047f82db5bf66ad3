pub mod store;

pub use store::WarehouseStore;

/// Explicit modal-form state machine. Intents: `OpenAdd` sets `Adding`,
/// `OpenEdit(record)` sets `Editing`, `Submit`/`Cancel` return to
/// `Closed`.
#[derive(Clone, PartialEq, Default)]
pub enum FormMode<T> {
    #[default]
    Closed,
    Adding,
    Editing(T),
}

impl<T> FormMode<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormMode::Closed)
    }
}
