//! Cross-page selection tracking.
//!
//! The remote collection is never held in memory, so selection is recorded
//! per page: a map from [`PageNumber`] to the set of identifiers selected on
//! that page. Navigating away and back keeps each visited page's selections.
//! "Select all" means every record of the page currently loaded, never the
//! whole remote collection.
//!
//! Every operation is total. A page without an entry has nothing selected.
//! Derived state such as the header checkbox is recomputed from the sets on
//! every query and never stored.

mod event;

pub use event::SelectionEvent;

use std::collections::HashMap;
use std::collections::HashSet;

use log::trace;

use crate::model::PageNumber;
use crate::model::RecordId;

/// Page-scoped selection state.
///
/// Created empty when the application starts and owned by it for the whole
/// session. Pass it explicitly to whatever renders or mutates it.
#[derive(Debug, Clone)]
pub struct SelectionTracker<Id: RecordId> {
    /// Selected ids per page. Pages with no selections have no entry.
    pages: HashMap<PageNumber, HashSet<Id>>,
}

impl<Id: RecordId> Default for SelectionTracker<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: RecordId> SelectionTracker<Id> {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    /// Returns `true` if `id` is selected on `page`.
    pub fn is_selected(&self, page: PageNumber, id: &Id) -> bool {
        self.pages.get(&page).is_some_and(|ids| ids.contains(id))
    }

    /// Selects or deselects a single record on `page`.
    ///
    /// Deselecting an id that is not selected is a no-op. Other pages are
    /// never touched.
    pub fn toggle_one(&mut self, page: PageNumber, id: Id, selected: bool) {
        if selected {
            self.pages.entry(page).or_default().insert(id);
        } else if let Some(ids) = self.pages.get_mut(&page) {
            ids.remove(&id);
            if ids.is_empty() {
                self.pages.remove(&page);
            }
        }
    }

    /// Selects every id in `ids` on `page`, or clears the page.
    ///
    /// `ids` is expected to be the full record set of the loaded page.
    /// Selecting unions them with whatever was already selected there.
    /// Deselecting clears the whole page regardless of `ids`.
    pub fn set_page_all(&mut self, page: PageNumber, ids: &[Id], selected: bool) {
        if !selected {
            self.pages.remove(&page);
            return;
        }
        if ids.is_empty() {
            return;
        }
        self.pages
            .entry(page)
            .or_default()
            .extend(ids.iter().cloned());
    }

    /// Returns `true` if `ids` is non-empty and every id is selected on `page`.
    ///
    /// An empty page is never fully selected.
    pub fn is_page_fully_selected(&self, page: PageNumber, ids: &[Id]) -> bool {
        if ids.is_empty() {
            return false;
        }
        match self.pages.get(&page) {
            Some(selected) => ids.iter().all(|id| selected.contains(id)),
            None => false,
        }
    }

    /// Returns the number of selected records across every page.
    pub fn total_selected_count(&self) -> usize {
        self.pages.values().map(HashSet::len).sum()
    }

    /// Returns the number of records selected on `page`.
    pub fn page_selected_count(&self, page: PageNumber) -> usize {
        self.pages.get(&page).map_or(0, HashSet::len)
    }

    /// Returns the ids selected on `page`, sorted.
    pub fn selected_on_page(&self, page: PageNumber) -> Vec<Id> {
        let mut ids: Vec<_> = self
            .pages
            .get(&page)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default();
        ids.sort();
        ids
    }

    /// Returns the pages that have at least one selection, sorted.
    pub fn selected_pages(&self) -> Vec<PageNumber> {
        let mut pages: Vec<_> = self
            .pages
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(page, _)| *page)
            .collect();
        pages.sort();
        pages
    }

    /// Returns `true` if nothing is selected on any page.
    pub fn is_empty(&self) -> bool {
        self.total_selected_count() == 0
    }

    /// Applies a selection event coming from the view.
    pub fn apply(&mut self, event: SelectionEvent<Id>) {
        trace!("Applying selection event: {:?}", event);
        match event {
            SelectionEvent::ToggleOne { page, id, selected } => {
                self.toggle_one(page, id, selected);
            }
            SelectionEvent::ToggleAllOnPage {
                page,
                ids,
                selected,
            } => {
                self.set_page_all(page, &ids, selected);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u32) -> PageNumber {
        PageNumber::new(n).unwrap()
    }

    fn ids(range: std::ops::RangeInclusive<u64>) -> Vec<u64> {
        range.collect()
    }

    #[test]
    fn test_untouched_page_is_empty() {
        let tracker = SelectionTracker::<u64>::new();
        assert!(!tracker.is_selected(page(3), &42));
        assert_eq!(tracker.page_selected_count(page(3)), 0);
        assert_eq!(tracker.total_selected_count(), 0);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_toggle_one_is_idempotent() {
        let mut tracker = SelectionTracker::new();
        tracker.toggle_one(page(1), 7u64, true);
        tracker.toggle_one(page(1), 7, true);
        assert!(tracker.is_selected(page(1), &7));
        assert_eq!(tracker.total_selected_count(), 1);

        tracker.toggle_one(page(1), 7, false);
        tracker.toggle_one(page(1), 7, false);
        assert!(!tracker.is_selected(page(1), &7));
        assert_eq!(tracker.total_selected_count(), 0);
    }

    #[test]
    fn test_deselect_unknown_is_noop() {
        let mut tracker = SelectionTracker::new();
        tracker.toggle_one(page(2), 9u64, false);
        assert!(tracker.selected_pages().is_empty());
    }

    #[test]
    fn test_select_all_then_clear_round_trip() {
        let mut tracker = SelectionTracker::new();
        let page_ids = ids(1..=10);
        tracker.set_page_all(page(1), &page_ids, true);
        assert!(tracker.is_page_fully_selected(page(1), &page_ids));

        tracker.set_page_all(page(1), &page_ids, false);
        assert!(page_ids.iter().all(|id| !tracker.is_selected(page(1), id)));
        assert!(!tracker.is_page_fully_selected(page(1), &page_ids));
        assert_eq!(tracker.total_selected_count(), 0);
    }

    #[test]
    fn test_select_all_keeps_existing_selections() {
        let mut tracker = SelectionTracker::new();
        tracker.toggle_one(page(1), 99u64, true);
        tracker.set_page_all(page(1), &ids(1..=3), true);
        assert!(tracker.is_selected(page(1), &99));
        assert_eq!(tracker.page_selected_count(page(1)), 4);
    }

    #[test]
    fn test_clear_ignores_given_ids() {
        let mut tracker = SelectionTracker::new();
        tracker.set_page_all(page(1), &ids(1..=5), true);
        tracker.set_page_all(page(1), &[], false);
        assert_eq!(tracker.page_selected_count(page(1)), 0);
    }

    #[test]
    fn test_empty_page_never_fully_selected() {
        let mut tracker = SelectionTracker::<u64>::new();
        assert!(!tracker.is_page_fully_selected(page(1), &[]));
        tracker.set_page_all(page(1), &[], true);
        assert!(!tracker.is_page_fully_selected(page(1), &[]));
        assert!(tracker.selected_pages().is_empty());
    }

    #[test]
    fn test_pages_are_independent() {
        let mut tracker = SelectionTracker::new();
        let first = ids(1..=10);
        let second = ids(11..=20);
        tracker.set_page_all(page(1), &first, true);

        tracker.toggle_one(page(2), 15, true);
        tracker.set_page_all(page(2), &second, true);
        tracker.set_page_all(page(2), &second, false);

        assert!(tracker.is_page_fully_selected(page(1), &first));
        assert_eq!(tracker.page_selected_count(page(1)), 10);
        assert_eq!(tracker.total_selected_count(), 10);
    }

    #[test]
    fn test_header_tracks_row_toggles() {
        let mut tracker = SelectionTracker::new();
        let page_ids = ids(1..=4);
        for id in &page_ids {
            assert!(!tracker.is_page_fully_selected(page(1), &page_ids));
            tracker.toggle_one(page(1), *id, true);
        }
        assert!(tracker.is_page_fully_selected(page(1), &page_ids));

        tracker.toggle_one(page(1), 2, false);
        assert!(!tracker.is_page_fully_selected(page(1), &page_ids));
    }

    #[test]
    fn test_same_id_on_different_pages() {
        let mut tracker = SelectionTracker::new();
        tracker.toggle_one(page(1), 5u64, true);
        assert!(!tracker.is_selected(page(2), &5));
        tracker.toggle_one(page(2), 5, true);
        assert_eq!(tracker.total_selected_count(), 2);
        assert_eq!(tracker.selected_pages(), vec![page(1), page(2)]);
    }

    #[test]
    fn test_selected_on_page_is_sorted() {
        let mut tracker = SelectionTracker::new();
        for id in [30u64, 10, 20] {
            tracker.toggle_one(page(4), id, true);
        }
        assert_eq!(tracker.selected_on_page(page(4)), vec![10, 20, 30]);
        assert!(tracker.selected_on_page(page(5)).is_empty());
    }

    #[test]
    fn test_apply_dispatches_events() {
        let mut tracker = SelectionTracker::new();
        tracker.apply(SelectionEvent::ToggleAllOnPage {
            page: page(1),
            ids: ids(1..=3),
            selected: true,
        });
        tracker.apply(SelectionEvent::ToggleOne {
            page: page(1),
            id: 2,
            selected: false,
        });
        assert_eq!(tracker.selected_on_page(page(1)), vec![1, 3]);
    }
}
