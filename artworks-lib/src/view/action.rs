//! User actions coming back from the renderer.

use crate::model::RecordId;
use crate::model::TableRecord;
use crate::selection::SelectionEvent;
use crate::selection::SelectionTracker;
use crate::store::PageStore;

/// A checkbox interaction in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction<Id> {
    /// A row checkbox was set to `selected`.
    ToggleRow { id: Id, selected: bool },
    /// The header checkbox was set to `selected`.
    TogglePage { selected: bool },
}

impl<Id: RecordId> ViewAction<Id> {
    /// Scopes the action to the displayed page of `store`.
    ///
    /// A page toggle carries the ids of the records currently held.
    pub fn into_event<R>(self, store: &PageStore<R>) -> SelectionEvent<Id>
    where
        R: TableRecord<Id = Id>,
    {
        let page = store.page();
        match self {
            Self::ToggleRow { id, selected } => SelectionEvent::ToggleOne { page, id, selected },
            Self::TogglePage { selected } => SelectionEvent::ToggleAllOnPage {
                page,
                ids: store.current_ids(),
                selected,
            },
        }
    }
}

/// Applies a view action to the tracker.
pub fn dispatch<R>(
    action: ViewAction<R::Id>,
    store: &PageStore<R>,
    tracker: &mut SelectionTracker<R::Id>,
) where
    R: TableRecord,
{
    tracker.apply(action.into_event(store));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Artwork;
    use crate::model::Page;
    use crate::model::PageNumber;

    #[test]
    fn test_page_toggle_uses_displayed_page() {
        let mut store = PageStore::new(10);
        let ticket = store.request(PageNumber::new(2).unwrap());
        let records = (11..=13).map(|id| Artwork::new(id, "x")).collect();
        store.complete(ticket, Ok(Page::new(records, 30)));
        store.request(PageNumber::new(3).unwrap());

        let event = ViewAction::TogglePage { selected: true }.into_event(&store);
        assert_eq!(
            event,
            SelectionEvent::ToggleAllOnPage {
                page: PageNumber::new(2).unwrap(),
                ids: vec![11, 12, 13],
                selected: true,
            }
        );
    }

    #[test]
    fn test_dispatch_row_toggle() {
        let store = PageStore::<Artwork>::new(10);
        let mut tracker = SelectionTracker::new();
        dispatch(
            ViewAction::ToggleRow {
                id: 42,
                selected: true,
            },
            &store,
            &mut tracker,
        );
        assert!(tracker.is_selected(PageNumber::FIRST, &42));
    }
}
