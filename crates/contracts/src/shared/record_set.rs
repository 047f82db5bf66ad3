//! In-memory record store with derived visibility.
//!
//! A `RecordSet` holds the source-of-truth collection plus the active
//! filter and sort specs. The visible collection is never stored: it is
//! recomputed as `sort(filter(all))` on every read, so create/update/
//! delete can never leave a stale derived view behind.

use crate::domain::common::{Record, RecordId};
use crate::shared::listing::{paginate, sort_records, total_pages, SortSpec, Sortable};
use thiserror::Error;

/// Errors produced by record-set mutations. Nothing here is fatal; each
/// variant maps to a user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0} already exists")]
    Duplicate(String),
}

/// Trait for per-entity filter specs
///
/// All supplied, non-empty predicates intersect; an inactive filter
/// matches every record.
pub trait RecordFilter<T>: Clone + Default {
    /// Check whether the record satisfies every active predicate
    fn matches(&self, record: &T) -> bool;

    /// Number of active (non-empty) predicates, for the filter badge
    fn active_count(&self) -> usize;

    fn is_active(&self) -> bool {
        self.active_count() > 0
    }
}

/// One entity collection: records plus active filter and sort
#[derive(Debug, Clone)]
pub struct RecordSet<T, F> {
    all: Vec<T>,
    filter: F,
    sort: Option<SortSpec>,
}

impl<T, F> Default for RecordSet<T, F>
where
    F: Default,
{
    fn default() -> Self {
        Self {
            all: Vec::new(),
            filter: F::default(),
            sort: None,
        }
    }
}

impl<T, F> RecordSet<T, F>
where
    T: Record + Sortable + Clone,
    F: RecordFilter<T>,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from seed records. Seed data is expected to carry
    /// unique ids; this is checked in debug builds only.
    pub fn with_records(records: Vec<T>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<String> = records.iter().map(|r| r.id().as_string()).collect();
                ids.sort();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "seed records must have unique ids"
        );
        Self {
            all: records,
            filter: F::default(),
            sort: None,
        }
    }

    pub fn all(&self) -> &[T] {
        &self.all
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.all.iter().find(|r| r.id() == id)
    }

    /// Append a new record. Rejects an id already present in the set.
    pub fn insert(&mut self, record: T) -> Result<(), StoreError> {
        if self.get(record.id()).is_some() {
            return Err(StoreError::Duplicate(format!(
                "{} {}",
                T::element_name(),
                record.code()
            )));
        }
        self.all.push(record);
        Ok(())
    }

    /// Replace the record with the same id (full-record replace)
    pub fn update(&mut self, record: T) -> Result<(), StoreError> {
        match self.all.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(StoreError::NotFound(format!(
                "{} {}",
                T::element_name(),
                record.code()
            ))),
        }
    }

    /// Remove the record with the given id, returning it
    pub fn remove(&mut self, id: T::Id) -> Result<T, StoreError> {
        match self.all.iter().position(|r| r.id() == id) {
            Some(index) => Ok(self.all.remove(index)),
            None => Err(StoreError::NotFound(format!(
                "{} {}",
                T::element_name(),
                id.as_string()
            ))),
        }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Replace the active filter wholesale
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
    }

    pub fn clear_filter(&mut self) {
        self.filter = F::default();
    }

    pub fn sort_spec(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Toggle sorting by the given field (same field flips direction,
    /// a new field starts ascending)
    pub fn toggle_sort(&mut self, field: &str) {
        match &mut self.sort {
            Some(spec) => spec.toggle(field),
            None => self.sort = Some(SortSpec::ascending(field)),
        }
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// The derived visible collection: `sort(filter(all))`
    ///
    /// Order of `all` is preserved for records the filter keeps; the sort
    /// stage is stable, so ties keep that order too.
    pub fn visible(&self) -> Vec<T> {
        let mut items: Vec<T> = self
            .all
            .iter()
            .filter(|r| self.filter.matches(r))
            .cloned()
            .collect();
        if let Some(spec) = &self.sort {
            sort_records(&mut items, spec);
        }
        items
    }

    pub fn visible_len(&self) -> usize {
        self.all.iter().filter(|r| self.filter.matches(r)).count()
    }

    /// One page of the visible collection (1-based)
    pub fn page(&self, page: usize, page_size: usize) -> Vec<T> {
        paginate(&self.visible(), page, page_size).to_vec()
    }

    pub fn total_pages(&self, page_size: usize) -> usize {
        total_pages(self.visible_len(), page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Record;
    use std::cmp::Ordering;
    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: Uuid,
        code: String,
        qty: u32,
    }

    impl Widget {
        fn new(code: &str, qty: u32) -> Self {
            Self {
                id: Uuid::new_v4(),
                code: code.to_string(),
                qty,
            }
        }
    }

    impl Record for Widget {
        type Id = Uuid;

        fn id(&self) -> Uuid {
            self.id
        }

        fn code(&self) -> &str {
            &self.code
        }

        fn element_name() -> &'static str {
            "Widget"
        }

        fn list_name() -> &'static str {
            "Widgets"
        }
    }

    impl Sortable for Widget {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.qty.cmp(&other.qty),
                "code" => self.code.cmp(&other.code),
                _ => Ordering::Equal,
            }
        }
    }

    #[derive(Debug, Clone, Default)]
    struct MinQty(Option<u32>);

    impl RecordFilter<Widget> for MinQty {
        fn matches(&self, record: &Widget) -> bool {
            match self.0 {
                Some(min) => record.qty >= min,
                None => true,
            }
        }

        fn active_count(&self) -> usize {
            usize::from(self.0.is_some())
        }
    }

    fn seed() -> RecordSet<Widget, MinQty> {
        RecordSet::with_records(vec![
            Widget::new("W-001", 5),
            Widget::new("W-002", 20),
            Widget::new("W-003", 5),
        ])
    }

    #[test]
    fn test_visible_is_subset_satisfying_filter() {
        let mut set = seed();
        set.set_filter(MinQty(Some(10)));
        let visible = set.visible();
        assert_eq!(visible.len(), 1);
        assert!(visible.iter().all(|w| w.qty >= 10));
        assert!(visible.iter().all(|w| set.get(w.id).is_some()));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut set = seed();
        set.set_filter(MinQty(Some(10)));
        let once = set.visible();
        set.set_filter(MinQty(Some(10)));
        assert_eq!(set.visible(), once);
    }

    #[test]
    fn test_inactive_filter_keeps_source_order() {
        let set = seed();
        let codes: Vec<String> = set.visible().into_iter().map(|w| w.code).collect();
        assert_eq!(codes, vec!["W-001", "W-002", "W-003"]);
    }

    #[test]
    fn test_sort_stability_per_scenario() {
        // items [{id:1,qty:5},{id:2,qty:20},{id:3,qty:5}] sorted by qty asc
        // keeps 1 before 3
        let mut set = seed();
        set.toggle_sort("qty");
        let codes: Vec<String> = set.visible().into_iter().map(|w| w.code).collect();
        assert_eq!(codes, vec!["W-001", "W-003", "W-002"]);
    }

    #[test]
    fn test_toggle_sort_flips_direction() {
        let mut set = seed();
        set.toggle_sort("qty");
        set.toggle_sort("qty");
        let spec = set.sort_spec().cloned().unwrap();
        assert!(!spec.ascending);
        assert_eq!(set.visible()[0].code, "W-002");
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut set = seed();
        let existing = set.all()[0].clone();
        assert!(matches!(
            set.insert(existing),
            Err(StoreError::Duplicate(_))
        ));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_insert_respects_active_filter_in_visible() {
        let mut set = seed();
        set.set_filter(MinQty(Some(10)));
        set.insert(Widget::new("W-004", 2)).unwrap();
        // appended to `all` but filtered out of the derived view
        assert_eq!(set.len(), 4);
        assert!(!set.visible().iter().any(|w| w.code == "W-004"));
    }

    #[test]
    fn test_update_replaces_record() {
        let mut set = seed();
        let mut record = set.all()[1].clone();
        record.qty = 7;
        set.update(record).unwrap();
        assert_eq!(set.all()[1].qty, 7);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut set = seed();
        let ghost = Widget::new("W-404", 1);
        assert!(matches!(set.update(ghost), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_remove_is_reflected_in_visible() {
        let mut set = seed();
        let id = set.all()[1].id;
        let removed = set.remove(id).unwrap();
        assert_eq!(removed.code, "W-002");
        assert_eq!(set.len(), 2);
        // visible is derived, so the removed record is gone from it too
        let codes: Vec<String> = set.visible().into_iter().map(|w| w.code).collect();
        assert_eq!(codes, vec!["W-001", "W-003"]);
        assert!(matches!(set.remove(id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_paging_the_visible_collection() {
        let mut set = RecordSet::<Widget, MinQty>::new();
        for i in 1..=25 {
            set.insert(Widget::new(&format!("W-{:03}", i), i)).unwrap();
        }
        assert_eq!(set.total_pages(10), 3);
        let last = set.page(3, 10);
        assert_eq!(last.len(), 5);
        assert_eq!(last[0].code, "W-021");
        assert!(set.page(4, 10).is_empty());
    }
}
