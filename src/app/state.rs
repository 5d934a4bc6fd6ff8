//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! application, along with methods for filter application, selection
//! management, and UI view model generation. It serves as the single source
//! of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (loaded documents, bookmark set) from
//! derived state (facet options, visible subset, selection) to maintain
//! consistency and simplify state transitions. View models are computed
//! on-demand from state snapshots.
//!
//! # State Components
//!
//! - **Documents**: ordered list of loaded documents across pages
//! - **Visible documents**: subset after applying the four filter predicates
//! - **Facet options**: derived agency and type option lists
//! - **Pagination**: current page, more-available flag, loading flag
//! - **Bookmarks**: the persisted id set
//! - **Selection**: cursor within the visible list, plus the optional
//!   detail-panel document

use crate::app::filter::{self, FilterState};
use crate::app::modes::{FilterField, InputMode};
use crate::domain::{BookmarkSet, Document};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BookmarkStripInfo, CardItem, DetailInfo, EmptyState, ErrorBannerInfo, FilterFieldView,
    FilterPanelInfo, FooterInfo, HeaderInfo, PaginationInfo, SearchBarInfo, UiViewModel,
};

/// Rows one card occupies: title, meta, three abstract lines, agency line.
const CARD_HEIGHT: usize = 6;

/// Maximum abstract lines shown on a card.
const ABSTRACT_LINES: usize = 3;

/// Chrome rows outside the card area: blank line, header, borders, search
/// bar, filter panel, pagination row, bookmark strip, footer.
const CHROME_ROWS: usize = 13;

/// Central application state container.
///
/// Holds all transient UI state plus the bookmark set. Mutated by the event
/// handler in response to user input and fetch-worker responses. View models
/// are computed on-demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Ordered list of all loaded documents.
    ///
    /// Replaced wholesale on a new search, appended to on load-more.
    /// Duplicates across pages are preserved verbatim; entries are never
    /// mutated individually.
    pub documents: Vec<Document>,

    /// Documents passing the current filters, in load order.
    ///
    /// Recomputed by `apply_filters()` after state changes. Used for
    /// rendering and selection bounds checking.
    pub visible_documents: Vec<Document>,

    /// Distinct agency names across loaded documents, sorted.
    pub agency_options: Vec<String>,

    /// Distinct non-empty document types across loaded documents, sorted.
    pub type_options: Vec<String>,

    /// The four client-side filter fields.
    pub filters: FilterState,

    /// Search keyword bound to the search bar.
    ///
    /// Used verbatim (after trimming, in the client) as the search-term
    /// parameter of the next fetch.
    pub keyword: String,

    /// Current page number; starts at 1, advanced by load-more, reset to 1
    /// on a new search.
    pub page: u32,

    /// Whether further pages may exist, derived from the last response.
    pub has_more: bool,

    /// True while a fetch is in flight; disables submit and load-more.
    pub loading: bool,

    /// Error banner message from the last failed fetch, cleared on success.
    pub error: Option<String>,

    /// The persisted bookmark set.
    pub bookmarks: BookmarkSet,

    /// Document shown in the detail panel, if any.
    pub selected_document: Option<Document>,

    /// Zero-based cursor within `visible_documents`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state with a theme and the bookmark set
    /// loaded at startup.
    ///
    /// All collections start empty; the initial fetch populates them.
    #[must_use]
    pub fn new(theme: Theme, bookmarks: BookmarkSet) -> Self {
        Self {
            documents: vec![],
            visible_documents: vec![],
            agency_options: vec![],
            type_options: vec![],
            filters: FilterState::default(),
            keyword: String::new(),
            page: 1,
            has_more: false,
            loading: false,
            error: None,
            bookmarks,
            selected_document: None,
            selected_index: 0,
            input_mode: InputMode::Normal,
            theme,
        }
    }

    /// Moves the card cursor down by one position, wrapping to the top.
    ///
    /// No-op if the visible list is empty.
    pub fn move_selection_down(&mut self) {
        if self.visible_documents.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible_documents.len();
    }

    /// Moves the card cursor up by one position, wrapping to the bottom.
    ///
    /// No-op if the visible list is empty.
    pub fn move_selection_up(&mut self) {
        if self.visible_documents.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible_documents.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the document under the card cursor, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Document> {
        self.visible_documents.get(self.selected_index)
    }

    /// Recomputes the derived filter state from the loaded documents.
    ///
    /// Rebuilds the facet option lists and the visible subset, then clamps
    /// the selection cursor to valid bounds. Called after every change to
    /// the loaded list or the filter fields.
    ///
    /// # Tracing
    ///
    /// Creates a debug-level span with the loaded count and filter summary.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filters",
            loaded = self.documents.len(),
            agency = %self.filters.agency,
            document_type = %self.filters.document_type,
        )
        .entered();

        self.agency_options = filter::agency_options(&self.documents);
        self.type_options = filter::type_options(&self.documents);
        self.visible_documents = filter::visible_documents(&self.documents, &self.filters);

        if self.visible_documents.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible_documents.len() - 1);
        }

        tracing::debug!(
            visible = self.visible_documents.len(),
            agencies = self.agency_options.len(),
            types = self.type_options.len(),
            "filters applied"
        );
    }

    /// Cycles a select filter field through `[no filter] + options`.
    ///
    /// The empty string (no filter) sits before the first option; cycling
    /// wraps in both directions. Date fields are not select fields and are
    /// ignored here.
    pub fn cycle_filter_option(&mut self, field: FilterField, forward: bool) {
        let options = match field {
            FilterField::Agency => &self.agency_options,
            FilterField::DocumentType => &self.type_options,
            FilterField::StartDate | FilterField::EndDate => return,
        };

        let current = match field {
            FilterField::Agency => &self.filters.agency,
            FilterField::DocumentType => &self.filters.document_type,
            FilterField::StartDate | FilterField::EndDate => unreachable!(),
        };

        let position = if current.is_empty() {
            0
        } else {
            options
                .iter()
                .position(|option| option == current)
                .map_or(0, |index| index + 1)
        };

        let count = options.len() + 1;
        let next = if forward {
            (position + 1) % count
        } else {
            (position + count - 1) % count
        };

        let value = if next == 0 {
            String::new()
        } else {
            options[next - 1].clone()
        };

        match field {
            FilterField::Agency => self.filters.agency = value,
            FilterField::DocumentType => self.filters.document_type = value,
            FilterField::StartDate | FilterField::EndDate => {}
        }
    }

    /// Returns a mutable reference to the text buffer a date filter field
    /// edits, or `None` for select fields.
    pub fn date_field_buffer(&mut self, field: FilterField) -> Option<&mut String> {
        match field {
            FilterField::StartDate => Some(&mut self.filters.start_date),
            FilterField::EndDate => Some(&mut self.filters.end_date),
            FilterField::Agency | FilterField::DocumentType => None,
        }
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// Handles card windowing (a subset of the visible documents centered on
    /// the cursor), abstract truncation to three lines, and the derived
    /// strips (pagination counts, bookmark titles, detail panel).
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UiViewModel {
        let capacity = self.card_capacity(rows);

        let mut visible_start = self.selected_index.saturating_sub(capacity / 2);
        let visible_end = (visible_start + capacity).min(self.visible_documents.len());

        let actual_count = visible_end - visible_start;
        if actual_count < capacity && self.visible_documents.len() >= capacity {
            visible_start = visible_end.saturating_sub(capacity);
        }

        let cards: Vec<CardItem> = self.visible_documents[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, document)| {
                self.compute_card(document, visible_start + relative_idx, cols)
            })
            .collect();

        UiViewModel {
            header: self.compute_header(),
            error_banner: self.error.clone().map(|message| ErrorBannerInfo { message }),
            search_bar: SearchBarInfo {
                query: self.keyword.clone(),
                focused: self.input_mode == InputMode::Search,
            },
            filter_panel: self.compute_filter_panel(),
            cards,
            pagination: PaginationInfo {
                visible_count: self.visible_documents.len(),
                loaded_count: self.documents.len(),
                page: self.page,
                has_more: self.has_more,
                loading: self.loading,
            },
            bookmark_strip: self.compute_bookmark_strip(),
            detail: self.selected_document.as_ref().map(|d| self.compute_detail(d)),
            empty_state: self.compute_empty_state(),
            footer: self.compute_footer(),
        }
    }

    /// Builds the card view model for one visible document.
    fn compute_card(&self, document: &Document, absolute_idx: usize, cols: usize) -> CardItem {
        let text_width = cols.saturating_sub(4).max(20);

        let mut meta_parts: Vec<String> = vec![document.formatted_date()];
        if let Some(doc_type) = document.document_type.as_deref() {
            if !doc_type.is_empty() {
                meta_parts.push(doc_type.to_string());
            }
        }
        if let Some(citation) = document.citation.as_deref() {
            if !citation.is_empty() {
                meta_parts.push(citation.to_string());
            }
        }

        let abstract_lines = document.abstract_text.as_deref().map_or_else(Vec::new, |text| {
            crate::ui::helpers::clip_lines(text, text_width, ABSTRACT_LINES)
        });

        CardItem {
            title: crate::ui::helpers::truncate(&document.title, text_width),
            meta: meta_parts.join("  ·  "),
            abstract_lines,
            agencies: crate::ui::helpers::truncate(&document.agency_line(), text_width),
            url: document.source_url.clone(),
            is_selected: absolute_idx == self.selected_index,
            is_bookmarked: self.bookmarks.contains(&document.id),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Federal Register Browser ({} loaded) ", self.documents.len()),
        }
    }

    fn compute_filter_panel(&self) -> FilterPanelInfo {
        let focused = match self.input_mode {
            InputMode::Filter(field) => Some(field),
            InputMode::Normal | InputMode::Search => None,
        };

        let field_view = |field: FilterField, value: &str| FilterFieldView {
            label: field.label().to_string(),
            value: if value.is_empty() {
                if field.is_select() { "All".to_string() } else { "—".to_string() }
            } else {
                value.to_string()
            },
            focused: focused == Some(field),
        };

        FilterPanelInfo {
            fields: vec![
                field_view(FilterField::Agency, &self.filters.agency),
                field_view(FilterField::DocumentType, &self.filters.document_type),
                field_view(FilterField::StartDate, &self.filters.start_date),
                field_view(FilterField::EndDate, &self.filters.end_date),
            ],
        }
    }

    /// Builds the bookmark strip from bookmarks still present in the loaded
    /// list.
    ///
    /// Persisted ids without a loaded document are silently omitted from
    /// display but remain in the set.
    fn compute_bookmark_strip(&self) -> BookmarkStripInfo {
        let titles = self
            .bookmarks
            .ids()
            .iter()
            .filter_map(|id| {
                self.documents
                    .iter()
                    .find(|document| &document.id == id)
                    .map(|document| document.title.clone())
            })
            .collect();

        BookmarkStripInfo { titles }
    }

    fn compute_detail(&self, document: &Document) -> DetailInfo {
        DetailInfo {
            title: document.title.clone(),
            date: document.formatted_date(),
            document_type: document.document_type.clone().unwrap_or_default(),
            agencies: document.agency_line(),
            citation: document.citation.clone().unwrap_or_default(),
            abstract_text: document.abstract_text.clone().unwrap_or_default(),
            url: document.source_url.clone(),
            is_bookmarked: self.bookmarks.contains(&document.id),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.visible_documents.is_empty() || self.selected_document.is_some() {
            return None;
        }

        if self.loading {
            return Some(EmptyState {
                message: "Loading documents...".to_string(),
                subtitle: String::new(),
            });
        }

        if self.documents.is_empty() {
            Some(EmptyState {
                message: "No documents loaded".to_string(),
                subtitle: "Press / to enter a keyword, Enter to search".to_string(),
            })
        } else {
            Some(EmptyState {
                message: "No documents match the active filters".to_string(),
                subtitle: "Press r to reset filters".to_string(),
            })
        }
    }

    /// Computes footer keybinding hints for the current mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.selected_document.is_some() {
            "Space: bookmark  Esc: close details".to_string()
        } else {
            match self.input_mode {
                InputMode::Normal => {
                    "j/k: navigate  /: search  f: filters  Space: bookmark  Enter: details  m: load more  q: quit"
                        .to_string()
                }
                InputMode::Search => {
                    "Enter: run search  Esc: back  Type to edit keyword".to_string()
                }
                InputMode::Filter(field) => {
                    if field.is_select() {
                        "Tab: next field  h/l: change option  r: clear all  Esc: back".to_string()
                    } else {
                        "Tab: next field  Type: edit date (YYYY-MM-DD)  r: clear all  Esc: back"
                            .to_string()
                    }
                }
            }
        };

        FooterInfo { keybindings }
    }

    /// Number of cards that fit after subtracting UI chrome.
    fn card_capacity(&self, total_rows: usize) -> usize {
        let chrome = if self.error.is_some() {
            CHROME_ROWS + 1
        } else {
            CHROME_ROWS
        };
        (total_rows.saturating_sub(chrome) / CARD_HEIGHT).max(1)
    }
}
