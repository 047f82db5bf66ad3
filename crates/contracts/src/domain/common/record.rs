use super::RecordId;

/// Trait for records held by a collection
///
/// Defines the required accessors and static names for every record type
/// in the system.
pub trait Record {
    /// Identifier type of the record
    type Id: RecordId;

    /// Get the record id
    fn id(&self) -> Self::Id;

    /// Get the business code of the record (e.g. "ORD-001")
    fn code(&self) -> &str;

    /// Element name for the UI (singular, e.g. "Inventory item")
    fn element_name() -> &'static str;

    /// List name for the UI (plural, e.g. "Inventory")
    fn list_name() -> &'static str;
}
