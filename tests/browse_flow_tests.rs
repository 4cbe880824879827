use menagerie::catalog::{CatalogEntry, SourceError};
use menagerie::core::action::{Action, Effect, update};
use menagerie::core::nav_state::{MemoryStore, NavigationStore};
use menagerie::core::paginate::PageSlot;
use menagerie::core::state::{App, DetailState, Screen};
use menagerie::core::view::describe_slots;

// ============================================================================
// Helper Functions
// ============================================================================

fn entries(n: usize) -> Vec<CatalogEntry> {
    (1..=n)
        .map(|i| {
            CatalogEntry::new(
                format!("creature-{i}"),
                format!("https://pokeapi.co/api/v2/pokemon/{i}/"),
            )
        })
        .collect()
}

/// An app with `n` numbered entries loaded into a fresh session.
fn loaded_app(n: usize) -> App {
    let navigation =
        NavigationStore::with_session_id(Box::new(MemoryStore::new()), "flow".to_string());
    let mut app = App::with_navigation("flow", navigation);
    update(&mut app, Action::CatalogLoaded(entries(n)));
    app
}

fn open(app: &mut App, id: &str, scroll_offset: usize) -> Effect {
    update(
        app,
        Action::OpenDetail {
            id: id.to_string(),
            scroll_offset,
        },
    )
}

// ============================================================================
// Paging
// ============================================================================

#[test]
fn test_paging_through_large_catalog() {
    let mut app = loaded_app(21 * 75);

    assert_eq!(describe_slots(&app.view()), "1 2 … 21 ›");

    assert_eq!(update(&mut app, Action::JumpToPage(6)), Effect::ScrollTo(0));
    let view = app.view();
    assert_eq!(view.page_index, 5);
    assert_eq!(view.items[0].id, "376");
    assert_eq!(describe_slots(&view), "‹ 1 … 5 [6] 7 … 21 ›");

    update(&mut app, Action::GoToPage(20));
    assert_eq!(describe_slots(&app.view()), "‹ 1 … 20 [21]");
    assert_eq!(update(&mut app, Action::NextPage), Effect::None);
}

#[test]
fn test_search_narrows_and_resets_page() {
    let mut app = loaded_app(200);
    update(&mut app, Action::NextPage);
    assert_eq!(app.page.page_index, 1);

    update(&mut app, Action::SetSearch("CREATURE 19".to_string()));
    let view = app.view();
    assert_eq!(app.page.page_index, 0);
    assert_eq!(view.total_matches, 11);
    assert!(!view.shows_controls());
    assert!(view.slots.contains(&PageSlot::Page(0)));
}

#[test]
fn test_search_without_matches() {
    let mut app = loaded_app(200);
    update(&mut app, Action::SetSearch("missingno".to_string()));
    let view = app.view();
    assert!(view.is_empty());
    assert_eq!(view.max_page_index, None);
    assert!(view.slots.is_empty());
}

// ============================================================================
// Detail round trip
// ============================================================================

#[test]
fn test_returning_from_detail_restores_page_and_scroll() {
    let mut app = loaded_app(200);
    update(&mut app, Action::GoToPage(2));
    update(&mut app, Action::SetSearch("creature".to_string()));
    update(&mut app, Action::GoToPage(2));

    assert_eq!(open(&mut app, "160", 9), Effect::FetchDetail("160".to_string()));
    assert_eq!(app.detail_id(), Some("160"));

    assert_eq!(update(&mut app, Action::CloseDetail), Effect::ScrollTo(9));
    assert!(app.is_browsing());
    assert_eq!(app.page.page_index, 2);
    assert!(app.search_term.is_empty());
}

#[test]
fn test_snapshot_is_read_once() {
    let mut app = loaded_app(200);
    update(&mut app, Action::NextPage);
    open(&mut app, "80", 4);
    update(&mut app, Action::CloseDetail);
    assert_eq!(app.page.page_index, 1);

    // A second remount without a new snapshot starts fresh.
    update(&mut app, Action::CatalogLoaded(entries(200)));
    assert_eq!(app.page.page_index, 0);
}

#[test]
fn test_restored_page_is_clamped_to_last_page() {
    let mut app = loaded_app(200);
    open(&mut app, "190", 0);

    // A snapshot from a larger view than the one being restored.
    app.navigation.save(9, 3);
    assert_eq!(update(&mut app, Action::CloseDetail), Effect::ScrollTo(3));
    assert_eq!(app.page.page_index, 2);
}

#[test]
fn test_detail_results_for_the_open_item() {
    let mut app = loaded_app(10);
    open(&mut app, "7", 0);

    update(
        &mut app,
        Action::DetailFailed {
            id: "7".to_string(),
            error: SourceError::NotFound("7".to_string()),
        },
    );
    assert_eq!(
        app.screen,
        Screen::Detail {
            id: "7".to_string(),
            detail: DetailState::NotFound,
        }
    );
}

#[test]
fn test_stale_detail_results_are_dropped() {
    let mut app = loaded_app(10);
    open(&mut app, "3", 0);
    update(&mut app, Action::CloseDetail);
    open(&mut app, "4", 0);

    update(
        &mut app,
        Action::DetailFailed {
            id: "3".to_string(),
            error: SourceError::Network("timed out".to_string()),
        },
    );
    assert_eq!(
        app.screen,
        Screen::Detail {
            id: "4".to_string(),
            detail: DetailState::Loading,
        }
    );
}
