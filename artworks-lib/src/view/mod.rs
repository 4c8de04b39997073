//! View binding between the page store, the selection tracker and a renderer.
//!
//! [`PageView::build`] is a pure function of the store and the tracker. It is
//! rebuilt after every event, so no selection-dependent flag (row checkbox,
//! header checkbox, selected count) is ever cached between renders.
//!
//! User input comes back as a [`ViewAction`], which [`ViewAction::into_event`]
//! scopes to the page whose records are displayed.

mod action;

pub use action::*;

use crate::model::PageNumber;
use crate::model::RecordId;
use crate::model::TableRecord;
use crate::selection::SelectionTracker;
use crate::store::PageStore;

/// One table row ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<Id> {
    pub id: Id,
    pub selected: bool,
    pub cells: Vec<String>,
}

/// Non-blocking status shown under the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    Idle,
    /// A fetch for `page` is outstanding.
    Loading { page: PageNumber },
    /// The latest fetch failed; the previous page is still shown.
    Failed { page: PageNumber, message: String, retryable: bool },
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<Id> {
    /// Page the rows belong to.
    pub page: PageNumber,
    pub columns: &'static [&'static str],
    pub rows: Vec<RowView<Id>>,
    /// Header "select all" checkbox, derived from the rows.
    pub header_checked: bool,
    /// Selections across every visited page.
    pub selected_count: usize,
    pub total_pages: usize,
    /// e.g. `(2 of 12)`
    pub page_report: String,
    /// e.g. `Showing 11 to 20 of 115 entries`
    pub range_report: String,
    pub status: ViewStatus,
}

impl<Id: RecordId> PageView<Id> {
    /// Derives the view from the store and the tracker.
    pub fn build<R>(store: &PageStore<R>, tracker: &SelectionTracker<Id>) -> Self
    where
        R: TableRecord<Id = Id>,
    {
        let page = store.page();
        let ids = store.current_ids();
        let paginator = store.paginator();

        let rows = store
            .records()
            .iter()
            .map(|record| {
                let id = record.id();
                RowView {
                    selected: tracker.is_selected(page, &id),
                    cells: record.cells(),
                    id,
                }
            })
            .collect();

        Self {
            page,
            columns: R::columns(),
            rows,
            header_checked: tracker.is_page_fully_selected(page, &ids),
            selected_count: tracker.total_selected_count(),
            total_pages: paginator.total_pages(),
            page_report: paginator.report(page),
            range_report: paginator.range_report(page),
            status: status(store),
        }
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Label for the selection panel.
    pub fn selected_label(&self) -> String {
        format!("Selected Artworks: {}", self.selected_count)
    }
}

fn status<R: TableRecord>(store: &PageStore<R>) -> ViewStatus {
    if store.is_loading() {
        return ViewStatus::Loading {
            page: store.requested_page(),
        };
    }
    match store.last_error() {
        Some(err) => ViewStatus::Failed {
            page: store.requested_page(),
            message: err.to_string(),
            retryable: err.is_retryable(),
        },
        None => ViewStatus::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::model::Artwork;
    use crate::model::Page;

    fn loaded_store(ids: std::ops::RangeInclusive<u64>, page: u32) -> PageStore<Artwork> {
        let mut store = PageStore::new(10);
        let ticket = store.request(PageNumber::new(page).unwrap());
        let records = ids.map(|id| Artwork::new(id, format!("Artwork {id}"))).collect();
        store.complete(ticket, Ok(Page::new(records, 25)));
        store
    }

    #[test]
    fn test_rows_reflect_selection() {
        let store = loaded_store(1..=10, 1);
        let mut tracker = SelectionTracker::new();
        tracker.toggle_one(PageNumber::FIRST, 3, true);

        let view = PageView::build(&store, &tracker);
        assert_eq!(view.rows.len(), 10);
        assert!(view.rows[2].selected);
        assert!(!view.rows[0].selected);
        assert!(!view.header_checked);
        assert_eq!(view.selected_count, 1);
        assert_eq!(view.columns, Artwork::columns());
        assert_eq!(view.rows[2].cells[0], "Artwork 3");
    }

    #[test]
    fn test_header_is_derived() {
        let store = loaded_store(1..=10, 1);
        let mut tracker = SelectionTracker::new();
        for id in 1..=10 {
            tracker.toggle_one(PageNumber::FIRST, id, true);
        }
        assert!(PageView::build(&store, &tracker).header_checked);

        tracker.toggle_one(PageNumber::FIRST, 4, false);
        assert!(!PageView::build(&store, &tracker).header_checked);
    }

    #[test]
    fn test_empty_table_header_unchecked() {
        let store = PageStore::<Artwork>::new(10);
        let view = PageView::build(&store, &SelectionTracker::new());
        assert!(view.is_empty());
        assert!(!view.header_checked);
        assert_eq!(view.range_report, "Showing 0 to 0 of 0 entries");
    }

    #[test]
    fn test_reports_and_label() {
        let store = loaded_store(21..=25, 3);
        let view = PageView::build(&store, &SelectionTracker::new());
        assert_eq!(view.page_report, "(3 of 3)");
        assert_eq!(view.range_report, "Showing 21 to 25 of 25 entries");
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.selected_label(), "Selected Artworks: 0");
    }

    #[test]
    fn test_status_transitions() {
        let mut store = loaded_store(1..=10, 1);
        let tracker = SelectionTracker::new();
        assert_eq!(PageView::build(&store, &tracker).status, ViewStatus::Idle);

        let ticket = store.request(PageNumber::new(2).unwrap());
        assert_eq!(
            PageView::build(&store, &tracker).status,
            ViewStatus::Loading {
                page: PageNumber::new(2).unwrap()
            }
        );

        store.complete(ticket, Err(ApiError::http(503, "unavailable").into()));
        let view = PageView::build(&store, &tracker);
        match view.status {
            ViewStatus::Failed { page, retryable, .. } => {
                assert_eq!(page.get(), 2);
                assert!(retryable);
            }
            other => panic!("unexpected status: {other:?}"),
        }
        assert_eq!(view.page, PageNumber::FIRST);
        assert_eq!(view.rows.len(), 10);
    }
}
