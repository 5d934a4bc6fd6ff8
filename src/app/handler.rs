//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and fetch-worker responses, translating them into state changes and action
//! sequences. It serves as the primary control flow coordinator for the
//! application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal or the fetch worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Search**: `SearchMode`, `Char`, `Backspace`, `SubmitSearch`
//! - **Filters**: `FilterMode`, `NextFilterField`, `FilterOptionNext`,
//!   `ResetFilters`
//! - **Documents**: `LoadMore`, `ViewDetails`, `CloseDetails`,
//!   `ToggleBookmark`
//! - **System**: `FetchCompleted`, `ExitInput`, `Quit`

use crate::app::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::fetch::{FetchRequest, FetchResponse};

/// Fallback error-banner text when a failure carries no message of its own.
pub const GENERIC_FETCH_ERROR: &str = "Something went wrong while loading documents";

/// Events triggered by user input or fetch-worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the card cursor down by one position (wraps to top).
    KeyDown,
    /// Moves the card cursor up by one position (wraps to bottom).
    KeyUp,
    /// Exits the application.
    Quit,

    /// Enters search mode, focusing the search bar.
    SearchMode,
    /// Leaves search or filter mode back to normal mode.
    ///
    /// The keyword and filter values are kept; only focus changes.
    ExitInput,
    /// Appends a character to the focused text input (keyword or a date
    /// filter field).
    Char(char),
    /// Removes the last character from the focused text input.
    Backspace,
    /// Submits a fresh search for the current keyword (page 1, replacing
    /// the loaded list on success).
    SubmitSearch,

    /// Requests the next page, appending to the loaded list on success.
    LoadMore,

    /// Enters filter mode, focusing the agency field.
    FilterMode,
    /// Moves filter focus to the next field.
    NextFilterField,
    /// Moves filter focus to the previous field.
    PrevFilterField,
    /// Cycles the focused select field forward through its options.
    FilterOptionNext,
    /// Cycles the focused select field backward through its options.
    FilterOptionPrev,
    /// Clears all four filter fields without refetching.
    ResetFilters,

    /// Toggles the bookmark on the detail-panel document, or on the card
    /// under the cursor.
    ToggleBookmark,
    /// Opens the detail panel for the card under the cursor.
    ViewDetails,
    /// Dismisses the detail panel.
    CloseDetails,

    /// Delivers the outcome of an in-flight fetch.
    FetchCompleted(FetchResponse),
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions to be executed by the event loop.
///
/// # Returns
///
/// A tuple of (should re-render, actions to execute). The action list may be
/// empty when the event requires no side effects.
///
/// # Errors
///
/// Currently infallible in practice; the `Result` return keeps the signature
/// stable for handlers that may fail.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),

        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::ExitInput => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search => {
                state.keyword.push(*c);
                tracing::trace!(keyword = %state.keyword, "keyword updated");
                Ok((true, vec![]))
            }
            InputMode::Filter(field) => {
                let Some(buffer) = state.date_field_buffer(field) else {
                    return Ok((false, vec![]));
                };
                buffer.push(*c);
                state.apply_filters();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search => {
                state.keyword.pop();
                Ok((true, vec![]))
            }
            InputMode::Filter(field) => {
                let Some(buffer) = state.date_field_buffer(field) else {
                    return Ok((false, vec![]));
                };
                buffer.pop();
                state.apply_filters();
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::SubmitSearch => {
            if state.loading {
                tracing::debug!("search ignored, fetch already in flight");
                return Ok((false, vec![]));
            }

            tracing::debug!(keyword = %state.keyword, "submitting search");
            state.loading = true;
            state.input_mode = InputMode::Normal;

            Ok((
                true,
                vec![Action::PostFetch(FetchRequest {
                    keyword: state.keyword.clone(),
                    page: 1,
                    replace: true,
                })],
            ))
        }
        Event::LoadMore => {
            if state.loading || !state.has_more {
                tracing::debug!(
                    loading = state.loading,
                    has_more = state.has_more,
                    "load more ignored"
                );
                return Ok((false, vec![]));
            }

            tracing::debug!(next_page = state.page + 1, "loading next page");
            state.loading = true;

            Ok((
                true,
                vec![Action::PostFetch(FetchRequest {
                    keyword: state.keyword.clone(),
                    page: state.page + 1,
                    replace: false,
                })],
            ))
        }

        Event::FilterMode => {
            state.input_mode = InputMode::Filter(crate::app::modes::FilterField::Agency);
            Ok((true, vec![]))
        }
        Event::NextFilterField => {
            let InputMode::Filter(field) = state.input_mode else {
                return Ok((false, vec![]));
            };
            state.input_mode = InputMode::Filter(field.next());
            Ok((true, vec![]))
        }
        Event::PrevFilterField => {
            let InputMode::Filter(field) = state.input_mode else {
                return Ok((false, vec![]));
            };
            state.input_mode = InputMode::Filter(field.prev());
            Ok((true, vec![]))
        }
        Event::FilterOptionNext | Event::FilterOptionPrev => {
            let InputMode::Filter(field) = state.input_mode else {
                return Ok((false, vec![]));
            };
            if !field.is_select() {
                return Ok((false, vec![]));
            }
            state.cycle_filter_option(field, matches!(event, Event::FilterOptionNext));
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ResetFilters => {
            tracing::debug!("resetting all filters");
            state.filters.reset();
            state.apply_filters();
            Ok((true, vec![]))
        }

        Event::ToggleBookmark => {
            let id = state
                .selected_document
                .as_ref()
                .map(|document| document.id.clone())
                .or_else(|| state.selected_card().map(|document| document.id.clone()));

            let Some(id) = id else {
                tracing::debug!("no document to bookmark");
                return Ok((false, vec![]));
            };

            let bookmarked = state.bookmarks.toggle(&id);
            tracing::debug!(document_id = %id, bookmarked = bookmarked, "bookmark toggled");

            Ok((
                true,
                vec![Action::PersistBookmarks {
                    ids: state.bookmarks.ids().to_vec(),
                }],
            ))
        }
        Event::ViewDetails => {
            let Some(document) = state.selected_card() else {
                tracing::debug!("no card selected");
                return Ok((false, vec![]));
            };
            tracing::debug!(document_id = %document.id, "opening detail panel");
            state.selected_document = Some(document.clone());
            Ok((true, vec![]))
        }
        Event::CloseDetails => {
            if state.selected_document.take().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![]))
        }

        Event::FetchCompleted(response) => {
            state.loading = false;

            match response {
                FetchResponse::Loaded {
                    request,
                    documents,
                    has_more,
                } => {
                    tracing::debug!(
                        count = documents.len(),
                        page = request.page,
                        replace = request.replace,
                        "fetch completed"
                    );

                    state.error = None;

                    if request.replace {
                        state.documents = documents.clone();
                        state.page = 1;
                        state.selected_document = None;
                        state.selected_index = 0;
                    } else {
                        state.documents.extend(documents.iter().cloned());
                        state.page = request.page;
                    }

                    state.has_more = *has_more;
                    state.apply_filters();
                    Ok((true, vec![]))
                }
                FetchResponse::Failed { request, message } => {
                    tracing::debug!(page = request.page, error = %message, "fetch failed");

                    // The previously loaded list stays intact; only the
                    // banner changes.
                    state.error = Some(if message.trim().is_empty() {
                        GENERIC_FETCH_ERROR.to_string()
                    } else {
                        message.clone()
                    });
                    Ok((true, vec![]))
                }
            }
        }
    }
}
