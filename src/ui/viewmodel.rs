//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application
//! state, following the MVVM pattern. View models are created via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They
//! contain no business logic, only display-ready data: truncated titles,
//! pre-wrapped abstract lines, joined agency names, and derived counts.

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render one frame. The card
/// list is already windowed to the subset that fits on screen, centered on
/// the selection cursor.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Header information (title, loaded count).
    pub header: HeaderInfo,

    /// Error banner from the last failed fetch, if any.
    pub error_banner: Option<ErrorBannerInfo>,

    /// Search bar state.
    pub search_bar: SearchBarInfo,

    /// Filter panel state (four fields plus focus).
    pub filter_panel: FilterPanelInfo,

    /// Windowed card list over the visible subset.
    pub cards: Vec<CardItem>,

    /// Pagination row state.
    pub pagination: PaginationInfo,

    /// Bookmark strip over bookmarked documents still loaded.
    pub bookmark_strip: BookmarkStripInfo,

    /// Detail panel for the selected document, if open.
    pub detail: Option<DetailInfo>,

    /// Optional empty state message (when no cards are available).
    pub empty_state: Option<EmptyState>,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Error banner display information.
///
/// Present only while the last fetch failed; cleared by the next successful
/// fetch. The loaded document list underneath stays intact.
#[derive(Debug, Clone)]
pub struct ErrorBannerInfo {
    /// Displayable failure description.
    pub message: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current keyword text.
    pub query: String,

    /// Whether the search bar has input focus.
    pub focused: bool,
}

/// Filter panel display information.
///
/// Always four fields, in panel order: agency, type, start date, end date.
/// Option lists come from the filter engine derivations (see
/// [`crate::app::filter::agency_options`] and
/// [`crate::app::filter::type_options`]).
#[derive(Debug, Clone)]
pub struct FilterPanelInfo {
    /// Display state of each filter field.
    pub fields: Vec<FilterFieldView>,
}

/// Display state of one filter field.
#[derive(Debug, Clone)]
pub struct FilterFieldView {
    /// Field label ("Agency", "Type", "From", "To").
    pub label: String,

    /// Displayed value ("All" or "—" when the filter is inactive).
    pub value: String,

    /// Whether this field currently has input focus.
    pub focused: bool,
}

/// Display information for a single document card.
///
/// Represents one card in the list. Text is pre-truncated and the abstract
/// pre-wrapped to at most three lines.
#[derive(Debug, Clone)]
pub struct CardItem {
    /// Document title, truncated to the card width.
    pub title: String,

    /// Meta line: formatted date, type, citation joined with separators.
    pub meta: String,

    /// Abstract wrapped to at most three lines (may be empty).
    pub abstract_lines: Vec<String>,

    /// Agency names joined by commas, truncated.
    pub agencies: String,

    /// External source link.
    pub url: String,

    /// Whether this card is under the cursor.
    pub is_selected: bool,

    /// Whether this document is bookmarked.
    pub is_bookmarked: bool,
}

/// Pagination row display information.
#[derive(Debug, Clone)]
pub struct PaginationInfo {
    /// Number of documents passing the filters.
    pub visible_count: usize,

    /// Number of documents loaded across all pages.
    pub loaded_count: usize,

    /// Current page number.
    pub page: u32,

    /// Whether further pages may exist.
    pub has_more: bool,

    /// Whether a fetch is in flight (disables load-more).
    pub loading: bool,
}

/// Bookmark strip display information.
///
/// Lists every bookmarked document still present in the loaded list;
/// persisted ids without a loaded document are omitted from display.
#[derive(Debug, Clone)]
pub struct BookmarkStripInfo {
    /// Titles of bookmarked, currently loaded documents.
    pub titles: Vec<String>,
}

/// Detail panel display information.
///
/// Full fields of the selected document; empty strings stand in for absent
/// optionals.
#[derive(Debug, Clone)]
pub struct DetailInfo {
    pub title: String,
    pub date: String,
    pub document_type: String,
    pub agencies: String,
    pub citation: String,
    pub abstract_text: String,
    pub url: String,
    pub is_bookmarked: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No documents loaded").
    pub message: String,

    /// Secondary explanatory text (e.g., "Press / to search").
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current input mode.
    pub keybindings: String,
}
