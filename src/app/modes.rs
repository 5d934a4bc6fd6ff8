//! Input mode state types for the application.
//!
//! This module defines the state machine enums that control how keyboard
//! input is interpreted. The application operates in one of three primary
//! input modes:
//!
//! - **Normal**: navigation and command mode
//! - **Search**: typing in the search bar
//! - **Filter**: editing one of the four filter fields
//!
//! The active mode determines the footer keybinding hints and which UI
//! element renders as focused.

/// One of the four client-side filter fields.
///
/// Agency and document type are select fields cycled through derived facet
/// options; the two date bounds are free-text ISO date inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Agency facet select.
    Agency,

    /// Document type facet select.
    DocumentType,

    /// Inclusive lower publication-date bound (`YYYY-MM-DD`).
    StartDate,

    /// Inclusive upper publication-date bound (`YYYY-MM-DD`).
    EndDate,
}

impl FilterField {
    /// Returns the field after this one in panel order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Agency => Self::DocumentType,
            Self::DocumentType => Self::StartDate,
            Self::StartDate => Self::EndDate,
            Self::EndDate => Self::Agency,
        }
    }

    /// Returns the field before this one in panel order, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Agency => Self::EndDate,
            Self::DocumentType => Self::Agency,
            Self::StartDate => Self::DocumentType,
            Self::EndDate => Self::StartDate,
        }
    }

    /// Returns whether the field cycles through facet options rather than
    /// accepting typed text.
    #[must_use]
    pub const fn is_select(self) -> bool {
        matches!(self, Self::Agency | Self::DocumentType)
    }

    /// Returns the display label used in the filter panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Agency => "Agency",
            Self::DocumentType => "Type",
            Self::StartDate => "From",
            Self::EndDate => "To",
        }
    }
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how character input is routed.
/// Determines the displayed footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), / (search), f (filters),
    /// Space (bookmark), Enter (details), m (load more), r (reset filters),
    /// q (quit).
    Normal,

    /// Typing in the search bar.
    ///
    /// Characters edit the keyword; Enter submits a fresh search; Esc
    /// returns to normal mode without clearing the keyword.
    Search,

    /// Editing the filter panel with one focused field.
    ///
    /// Tab cycles the focused field; select fields cycle options with the
    /// arrow keys, date fields take typed text. Esc returns to normal mode.
    Filter(FilterField),
}
