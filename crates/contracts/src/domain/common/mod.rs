mod record;
mod record_id;

pub use record::Record;
pub use record_id::RecordId;
