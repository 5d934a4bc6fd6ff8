//! Tests for the event handler and accumulator semantics.
//!
//! Drives the application state machine through events the way the event
//! loop would, asserting the accumulator rules (replace on search, append on
//! load-more), the loading/error lifecycle, and the bookmark actions.

use regbrowse::app::handler::GENERIC_FETCH_ERROR;
use regbrowse::app::{handle_event, Action, AppState, Event, InputMode};
use regbrowse::domain::{Agency, BookmarkSet, Document};
use regbrowse::fetch::{FetchRequest, FetchResponse};
use regbrowse::Config;

fn new_state() -> AppState {
    regbrowse::initialize(&Config::default(), BookmarkSet::new())
}

fn doc(id: &str, date: &str, doc_type: &str, agency: &str) -> Document {
    Document {
        id: id.to_string(),
        title: format!("Document {id}"),
        publication_date: date.to_string(),
        document_type: Some(doc_type.to_string()),
        agencies: vec![Agency {
            name: agency.to_string(),
        }],
        abstract_text: Some("An abstract.".to_string()),
        citation: None,
        source_url: format!("https://example.gov/d/{id}"),
    }
}

fn loaded(page: u32, replace: bool, documents: Vec<Document>) -> Event {
    let has_more = !documents.is_empty();
    Event::FetchCompleted(FetchResponse::Loaded {
        request: FetchRequest {
            keyword: String::new(),
            page,
            replace,
        },
        documents,
        has_more,
    })
}

fn failed(page: u32, message: &str) -> Event {
    Event::FetchCompleted(FetchResponse::Failed {
        request: FetchRequest {
            keyword: String::new(),
            page,
            replace: false,
        },
        message: message.to_string(),
    })
}

#[test]
fn submit_search_posts_a_page_one_replacing_fetch() {
    let mut state = new_state();
    state.keyword = "climate".to_string();

    let (_, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();

    assert!(state.loading);
    assert_eq!(
        actions,
        vec![Action::PostFetch(FetchRequest {
            keyword: "climate".to_string(),
            page: 1,
            replace: true,
        })]
    );
}

#[test]
fn submit_is_ignored_while_a_fetch_is_in_flight() {
    let mut state = new_state();
    state.loading = true;

    let (rendered, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();
    assert!(!rendered);
    assert!(actions.is_empty());
}

#[test]
fn successful_search_replaces_the_list_and_clears_error_and_detail() {
    let mut state = new_state();
    state.documents = vec![doc("old-1", "2023-01-01", "Rule", "EPA")];
    state.apply_filters();
    state.page = 4;
    state.error = Some("previous failure".to_string());
    state.selected_document = Some(state.documents[0].clone());
    state.loading = true;

    let fresh = vec![
        doc("new-1", "2024-06-01", "Rule", "EPA"),
        doc("new-2", "2024-06-02", "Notice", "DOT"),
    ];
    handle_event(&mut state, &loaded(1, true, fresh)).unwrap();

    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.selected_document.is_none());
    assert_eq!(state.page, 1);
    assert_eq!(state.documents.len(), 2);
    assert_eq!(state.documents[0].id, "new-1");
    assert!(state.has_more);
    // Facets recomputed from the new list.
    assert_eq!(state.agency_options, vec!["DOT", "EPA"]);
    assert_eq!(state.type_options, vec!["Notice", "Rule"]);
}

#[test]
fn load_more_is_a_no_op_without_more_pages() {
    let mut state = new_state();
    state.has_more = false;

    let (rendered, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
    assert!(!rendered);
    assert!(actions.is_empty());
    assert!(!state.loading);
}

#[test]
fn load_more_requests_the_next_page() {
    let mut state = new_state();
    state.keyword = "water".to_string();
    state.page = 2;
    state.has_more = true;

    let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();

    assert!(state.loading);
    assert_eq!(
        actions,
        vec![Action::PostFetch(FetchRequest {
            keyword: "water".to_string(),
            page: 3,
            replace: false,
        })]
    );
}

#[test]
fn load_more_appends_without_deduplicating_and_advances_the_page() {
    let mut state = new_state();
    handle_event(&mut state, &loaded(1, true, vec![doc("a", "2024-01-01", "Rule", "EPA")])).unwrap();

    // The next page overlaps with the first; duplicates are preserved.
    let next = vec![
        doc("a", "2024-01-01", "Rule", "EPA"),
        doc("b", "2024-01-02", "Rule", "EPA"),
    ];
    handle_event(&mut state, &loaded(2, false, next)).unwrap();

    assert_eq!(state.page, 2);
    assert_eq!(state.documents.len(), 3);
    assert_eq!(state.visible_documents.len(), 3);
}

#[test]
fn empty_page_turns_off_load_more() {
    let mut state = new_state();
    handle_event(&mut state, &loaded(1, true, vec![doc("a", "2024-01-01", "Rule", "EPA")])).unwrap();
    assert!(state.has_more);

    handle_event(&mut state, &loaded(2, false, vec![])).unwrap();
    assert!(!state.has_more);
    assert_eq!(state.documents.len(), 1);
}

#[test]
fn failed_fetch_keeps_documents_and_sets_error_until_the_next_success() {
    let mut state = new_state();
    handle_event(&mut state, &loaded(1, true, vec![doc("a", "2024-01-01", "Rule", "EPA")])).unwrap();

    state.loading = true;
    handle_event(&mut state, &failed(2, "request failed with status 429")).unwrap();

    assert!(!state.loading);
    assert_eq!(state.documents.len(), 1);
    assert_eq!(
        state.error.as_deref(),
        Some("request failed with status 429")
    );

    // A subsequent successful search clears the error and replaces the list.
    state.loading = true;
    handle_event(&mut state, &loaded(1, true, vec![doc("b", "2024-02-01", "Rule", "EPA")])).unwrap();
    assert!(state.error.is_none());
    assert_eq!(state.documents.len(), 1);
    assert_eq!(state.documents[0].id, "b");
}

#[test]
fn blank_failure_message_falls_back_to_the_generic_error() {
    let mut state = new_state();
    state.loading = true;

    handle_event(&mut state, &failed(1, "   ")).unwrap();
    assert_eq!(state.error.as_deref(), Some(GENERIC_FETCH_ERROR));
}

#[test]
fn toggle_bookmark_persists_the_full_updated_set() {
    let mut state = new_state();
    handle_event(&mut state, &loaded(1, true, vec![doc("a", "2024-01-01", "Rule", "EPA")])).unwrap();

    let (_, actions) = handle_event(&mut state, &Event::ToggleBookmark).unwrap();
    assert!(state.bookmarks.contains("a"));
    assert_eq!(
        actions,
        vec![Action::PersistBookmarks {
            ids: vec!["a".to_string()],
        }]
    );

    // Toggling again removes it and persists the empty set.
    let (_, actions) = handle_event(&mut state, &Event::ToggleBookmark).unwrap();
    assert!(!state.bookmarks.contains("a"));
    assert_eq!(actions, vec![Action::PersistBookmarks { ids: vec![] }]);
}

#[test]
fn detail_panel_opens_on_the_selected_card_and_closes_on_demand() {
    let mut state = new_state();
    handle_event(&mut state, &loaded(1, true, vec![doc("a", "2024-01-01", "Rule", "EPA")])).unwrap();

    handle_event(&mut state, &Event::ViewDetails).unwrap();
    assert_eq!(state.selected_document.as_ref().map(|d| d.id.as_str()), Some("a"));

    // The detail panel has its own bookmark toggle.
    handle_event(&mut state, &Event::ToggleBookmark).unwrap();
    assert!(state.bookmarks.contains("a"));

    handle_event(&mut state, &Event::CloseDetails).unwrap();
    assert!(state.selected_document.is_none());
}

#[test]
fn filter_option_cycling_narrows_and_reset_restores() {
    let mut state = new_state();
    let docs = vec![
        doc("a", "2024-01-01", "Rule", "DOT"),
        doc("b", "2024-01-02", "Rule", "EPA"),
    ];
    handle_event(&mut state, &loaded(1, true, docs)).unwrap();
    assert_eq!(state.visible_documents.len(), 2);

    handle_event(&mut state, &Event::FilterMode).unwrap();
    assert!(matches!(state.input_mode, InputMode::Filter(_)));

    // First option after "no filter" is the lexicographically first agency.
    handle_event(&mut state, &Event::FilterOptionNext).unwrap();
    assert_eq!(state.filters.agency, "DOT");
    assert_eq!(state.visible_documents.len(), 1);
    assert_eq!(state.visible_documents[0].id, "a");

    // Cycling back wraps to no filter.
    handle_event(&mut state, &Event::FilterOptionPrev).unwrap();
    assert_eq!(state.filters.agency, "");
    assert_eq!(state.visible_documents.len(), 2);

    handle_event(&mut state, &Event::FilterOptionNext).unwrap();
    handle_event(&mut state, &Event::ResetFilters).unwrap();
    assert_eq!(state.filters.agency, "");
    assert_eq!(state.visible_documents.len(), 2);
}

#[test]
fn typing_a_start_date_filters_live() {
    let mut state = new_state();
    let docs = vec![
        doc("early", "2024-02-01", "Rule", "EPA"),
        doc("late", "2024-08-01", "Rule", "EPA"),
    ];
    handle_event(&mut state, &loaded(1, true, docs)).unwrap();

    handle_event(&mut state, &Event::FilterMode).unwrap();
    handle_event(&mut state, &Event::NextFilterField).unwrap(); // Type
    handle_event(&mut state, &Event::NextFilterField).unwrap(); // From

    for c in "2024-06-01".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }

    assert_eq!(state.filters.start_date, "2024-06-01");
    assert_eq!(state.visible_documents.len(), 1);
    assert_eq!(state.visible_documents[0].id, "late");

    // Backspacing re-widens as the bound shrinks back to empty.
    for _ in 0.."2024-06-01".len() {
        handle_event(&mut state, &Event::Backspace).unwrap();
    }
    assert_eq!(state.visible_documents.len(), 2);
}

#[test]
fn search_mode_edits_the_keyword_and_exit_keeps_it() {
    let mut state = new_state();

    handle_event(&mut state, &Event::SearchMode).unwrap();
    assert_eq!(state.input_mode, InputMode::Search);

    for c in "rules".chars() {
        handle_event(&mut state, &Event::Char(c)).unwrap();
    }
    handle_event(&mut state, &Event::Backspace).unwrap();
    assert_eq!(state.keyword, "rule");

    handle_event(&mut state, &Event::ExitInput).unwrap();
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.keyword, "rule");
}

#[test]
fn selection_wraps_over_the_visible_list() {
    let mut state = new_state();
    let docs = vec![
        doc("a", "2024-01-01", "Rule", "EPA"),
        doc("b", "2024-01-02", "Rule", "EPA"),
        doc("c", "2024-01-03", "Rule", "EPA"),
    ];
    handle_event(&mut state, &loaded(1, true, docs)).unwrap();

    assert_eq!(state.selected_index, 0);
    handle_event(&mut state, &Event::KeyUp).unwrap();
    assert_eq!(state.selected_index, 2);
    handle_event(&mut state, &Event::KeyDown).unwrap();
    assert_eq!(state.selected_index, 0);
}
