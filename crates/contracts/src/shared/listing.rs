//! List pipeline primitives: sorting and pagination.
//!
//! The visible collection shown by a list widget is always derived as
//! `paginate(sort(filter(all)))`; this module holds the sort and paginate
//! stages shared by every record type.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Trait for record types that support free-text search
pub trait Searchable {
    /// Check whether the record matches the search query (case-insensitive)
    fn matches_query(&self, q: &str) -> bool;
}

/// Trait for record types that support sorting by a named field
pub trait Sortable {
    /// Compare two records by the named field
    ///
    /// Unknown fields compare equal, which leaves the prior order intact.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Active sort: field key plus direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

impl SortSpec {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    /// Clicking the active field flips direction; a new field starts ascending
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }
}

/// Sort records in place by the given spec
///
/// `slice::sort_by` is stable, so records comparing equal keep their prior
/// relative order.
pub fn sort_records<T: Sortable>(items: &mut [T], spec: &SortSpec) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, &spec.field);
        if spec.ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Slice out one page of a collection (pages are 1-based)
///
/// Out-of-range pages (including page 0) yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Total page count: `ceil(len / page_size)`, zero for an empty collection
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        qty: u32,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.qty.cmp(&other.qty),
                "id" => self.id.cmp(&other.id),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, qty: 5 },
            Row { id: 2, qty: 20 },
            Row { id: 3, qty: 5 },
        ]
    }

    #[test]
    fn test_sort_is_stable() {
        let mut items = rows();
        sort_records(&mut items, &SortSpec::ascending("qty"));
        // ids 1 and 3 tie on qty; their relative order is preserved
        let ids: Vec<u32> = items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_descending() {
        let mut items = rows();
        let mut spec = SortSpec::ascending("qty");
        spec.toggle("qty");
        assert!(!spec.ascending);
        sort_records(&mut items, &spec);
        assert_eq!(items[0].id, 2);
    }

    #[test]
    fn test_resort_same_spec_is_noop() {
        let mut items = rows();
        let spec = SortSpec::ascending("qty");
        sort_records(&mut items, &spec);
        let once = items.clone();
        sort_records(&mut items, &spec);
        assert_eq!(items, once);
    }

    #[test]
    fn test_toggle_new_field_defaults_ascending() {
        let mut spec = SortSpec::ascending("qty");
        spec.toggle("qty");
        spec.toggle("id");
        assert_eq!(spec.field, "id");
        assert!(spec.ascending);
    }

    #[test]
    fn test_paginate_middle_page() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 3, 10), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_paginate_out_of_range() {
        let items: Vec<u32> = (1..=25).collect();
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, 0, 10).is_empty());
        assert!(paginate::<u32>(&[], 1, 10).is_empty());
    }

    #[test]
    fn test_paginate_reconstructs_collection() {
        let items: Vec<u32> = (1..=25).collect();
        let pages = total_pages(items.len(), 10);
        assert_eq!(pages, 3);
        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            rebuilt.extend_from_slice(paginate(&items, page, 10));
        }
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_total_pages_empty_is_zero() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }
}
