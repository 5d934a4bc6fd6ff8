//! Regbrowse: a terminal browser for Federal Register documents.
//!
//! Regbrowse is an interactive terminal application that provides:
//! - Keyword search against the public Federal Register document API
//! - Page-by-page result accumulation with a "load more" flow
//! - Client-side facet filters (agency, document type, date range)
//! - Bookmarks persisted to a per-user JSON file, surviving restarts
//! - A card list with an on-demand detail panel
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - Filter engine                                    │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Fetch Layer   │
//! │ (ui/)         │   │ (storage/)    │   │ (fetch/)      │
//! │ - Rendering   │   │ - JSON I/O    │   │ - HTTP client │
//! │ - Theming     │   │ - Bookmark    │   │ - Worker task │
//! │ - Components  │   │   port        │   │ - Wire types  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data paths (infrastructure/)                     │
//! │  - Error types (domain/error)                       │
//! │  - Document and bookmark models (domain/)           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber                               │
//! │  - File-based log output                            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Document, BookmarkSet, errors)
//! - [`fetch`]: HTTP client and background fetch worker
//! - [`infrastructure`]: Platform utilities (data paths)
//! - [`storage`]: Bookmark persistence port and JSON backend
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: tracing setup (file-based, terminal stays clean)
//!
//! # Data Flow
//!
//! 1. **Startup** (`main.rs`): parse flags, initialize tracing, load
//!    bookmarks through the storage port, create `AppState`, spawn the
//!    fetch worker, issue the initial page-1 request.
//! 2. **Input**: terminal key events map to [`app::Event`] values.
//! 3. **Handling**: [`app::handle_event`] mutates state and emits
//!    [`app::Action`]s (post a fetch, persist bookmarks, quit).
//! 4. **Fetch completion**: worker responses arrive as events and fold the
//!    page into the accumulator (replace on search, append on load-more).
//! 5. **Rendering**: the view model derives everything on screen from
//!    state; no component holds independent logic.
//!
//! # Key Design Decisions
//!
//! ## Server-Side Search, Client-Side Filters
//!
//! The keyword travels to the API as a query parameter; the agency, type,
//! and date filters run locally over whatever pages are loaded. Facet
//! options are derived from the loaded documents, so filter scope grows as
//! more pages are loaded.
//!
//! ## Lexicographic Date Comparison
//!
//! Publication dates stay ISO `YYYY-MM-DD` strings and date bounds compare
//! lexicographically — valid because the format is fixed-width and
//! zero-padded. `chrono` is only used to pretty-print dates on cards.
//!
//! ## One Request In Flight
//!
//! A single fetch worker task serializes requests; submit and load-more are
//! additionally disabled while a request is pending.

pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, FilterField, InputMode};
pub use domain::{BookmarkSet, Document, RegbrowseError, Result};
pub use ui::Theme;

use std::path::PathBuf;

/// Application configuration assembled by the binary from CLI flags.
///
/// Every field has a sensible default so the library can also be driven
/// from tests with `Config::default()`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint of the document-metadata API.
    ///
    /// Overridable for local testing; defaults to the public Federal
    /// Register endpoint.
    pub api_base_url: String,

    /// Directory holding the bookmark file and the log file.
    pub data_dir: PathBuf,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default:
    /// `"info"`. The `RUST_LOG` environment variable takes precedence.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: fetch::DEFAULT_BASE_URL.to_string(),
            data_dir: infrastructure::paths::data_dir(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

/// Initializes application state from configuration.
///
/// Resolves the theme (custom file, then built-in name, then default) and
/// creates an `AppState` carrying the bookmark set loaded at startup. The
/// document list starts empty; the caller issues the initial fetch.
///
/// # Parameters
///
/// * `config` - Application configuration
/// * `bookmarks` - Bookmark set read through the storage port
pub fn initialize(config: &Config, bookmarks: BookmarkSet) -> AppState {
    tracing::debug!(bookmark_count = bookmarks.len(), "initializing regbrowse");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme, bookmarks)
}
