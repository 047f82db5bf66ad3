pub mod listing;
pub mod record_set;
pub mod seed;

pub use listing::{paginate, sort_records, total_pages, Searchable, SortSpec, Sortable};
pub use record_set::{RecordFilter, RecordSet, StoreError};
