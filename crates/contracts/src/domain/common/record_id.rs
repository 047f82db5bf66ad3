use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for record identifier types
pub trait RecordId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the id to a string
    fn as_string(&self) -> String;

    /// Parse the id from a string
    fn from_string(s: &str) -> Result<Self, String>;
}

impl RecordId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s).map_err(|e| format!("Invalid UUID: {}", e))
    }
}
