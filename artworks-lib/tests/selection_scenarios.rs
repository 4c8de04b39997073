//! End-to-end selection scenarios across page navigation.
//!
//! Pages are served by an in-memory source of 25 artworks with ids 1..=25,
//! ten per page.

use artworks_lib::model::Artwork;
use artworks_lib::selection::SelectionTracker;
use artworks_lib::source::InMemorySource;
use artworks_lib::store::FetchOutcome;
use artworks_lib::store::PageStore;
use artworks_lib::view::PageView;
use artworks_lib::view::ViewAction;
use artworks_lib::view::dispatch;
use artworks_lib::PageNumber;

fn source() -> InMemorySource<Artwork> {
    InMemorySource::new(
        (1..=25)
            .map(|id| Artwork::new(id, format!("Artwork {id}")))
            .collect(),
    )
}

fn page(n: u32) -> PageNumber {
    PageNumber::new(n).unwrap()
}

#[tokio::test]
async fn test_selection_survives_navigation() {
    let source = source();
    let mut store = PageStore::new(10);
    let mut tracker = SelectionTracker::new();

    assert_eq!(store.load(&source, page(1)).await, FetchOutcome::Applied);
    dispatch(ViewAction::TogglePage { selected: true }, &store, &mut tracker);
    assert_eq!(tracker.total_selected_count(), 10);

    store.load(&source, page(2)).await;
    assert_eq!(store.current_ids(), (11..=20u64).collect::<Vec<_>>());
    let view = PageView::build(&store, &tracker);
    assert!(!view.header_checked);
    assert!(view.rows.iter().all(|row| !row.selected));

    dispatch(
        ViewAction::ToggleRow {
            id: 15,
            selected: true,
        },
        &store,
        &mut tracker,
    );
    assert_eq!(tracker.total_selected_count(), 11);

    store.load(&source, page(1)).await;
    let view = PageView::build(&store, &tracker);
    assert!(view.header_checked);
    assert_eq!(view.selected_count, 11);

    dispatch(
        ViewAction::ToggleRow {
            id: 3,
            selected: false,
        },
        &store,
        &mut tracker,
    );
    let view = PageView::build(&store, &tracker);
    assert!(!view.header_checked);
    assert_eq!(view.selected_count, 10);
    assert_eq!(view.selected_label(), "Selected Artworks: 10");
}

#[tokio::test]
async fn test_select_all_then_clear_restores_count() {
    let source = source();
    let mut store = PageStore::new(10);
    let mut tracker = SelectionTracker::new();

    store.load(&source, page(3)).await;
    dispatch(
        ViewAction::ToggleRow {
            id: 22,
            selected: true,
        },
        &store,
        &mut tracker,
    );
    let before = tracker.total_selected_count();

    store.load(&source, page(1)).await;
    dispatch(ViewAction::TogglePage { selected: true }, &store, &mut tracker);
    assert_eq!(tracker.total_selected_count(), before + 10);

    dispatch(ViewAction::TogglePage { selected: false }, &store, &mut tracker);
    assert_eq!(tracker.total_selected_count(), before);
    assert!(tracker.is_selected(page(3), &22));
}

#[tokio::test]
async fn test_short_last_page_select_all() {
    let source = source();
    let mut store = PageStore::new(10);
    let mut tracker = SelectionTracker::new();

    store.load(&source, page(3)).await;
    assert_eq!(store.records().len(), 5);
    dispatch(ViewAction::TogglePage { selected: true }, &store, &mut tracker);

    let view = PageView::build(&store, &tracker);
    assert!(view.header_checked);
    assert_eq!(view.selected_count, 5);
    assert_eq!(tracker.selected_pages(), vec![page(3)]);
}

#[tokio::test]
async fn test_failed_fetch_keeps_selection_scoped_to_shown_page() {
    let source = source();
    let mut store = PageStore::new(10);
    let mut tracker = SelectionTracker::new();

    store.load(&source, page(1)).await;
    source.set_failing(true);
    assert_eq!(store.load(&source, page(2)).await, FetchOutcome::Failed);
    assert!(!store.is_loading());

    dispatch(ViewAction::TogglePage { selected: true }, &store, &mut tracker);
    assert_eq!(tracker.page_selected_count(page(1)), 10);
    assert_eq!(tracker.page_selected_count(page(2)), 0);

    source.set_failing(false);
    let ticket = store.retry();
    assert_eq!(ticket.page(), page(2));
}
