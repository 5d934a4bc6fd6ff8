//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with loaded count
//! - [`banner`]: Error banner for failed fetches
//! - [`search`]: Search input box
//! - [`filters`]: Filter panel with the four filter fields
//! - [`cards`]: Document card list
//! - [`pagination`]: "showing M of N loaded" row with the load-more hint
//! - [`bookmarks`]: Bookmark strip
//! - [`detail`]: Detail panel for the selected document
//! - [`footer`]: Keybinding hints
//! - [`empty`]: Empty state message
//!
//! # Layout Modes
//!
//! Two high-level layout functions drive a frame:
//!
//! - [`render_browse_mode`]: chrome + card list + bottom strips
//! - [`render_detail_mode`]: chrome + detail panel + bottom strips

mod banner;
mod bookmarks;
mod cards;
mod detail;
mod empty;
mod filters;
mod footer;
mod header;
mod pagination;
mod search;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailInfo, UiViewModel};

use banner::render_error_banner;
use bookmarks::render_bookmark_strip;
use cards::render_cards;
use detail::render_detail;
use filters::render_filter_panel;
use footer::render_footer;
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/search, filters/cards,
/// strips/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the chrome above the card area and returns the first card row.
///
/// Layout structure:
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Error banner, only when set]
/// [Search bar - 3 lines]
/// [Filter panel]
/// [Border]
/// ```
fn render_top_chrome(vm: &UiViewModel, theme: &Theme, cols: usize) -> usize {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(error) = &vm.error_banner {
        current_row = render_error_banner(current_row, error, theme, cols);
    }

    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_filter_panel(current_row, &vm.filter_panel, theme, cols);
    render_border(current_row, &theme.colors.border, cols)
}

/// Renders the bottom strips: pagination, bookmarks, border, footer.
fn render_bottom_chrome(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let bookmark_row = border_row.saturating_sub(1);
    let pagination_row = bookmark_row.saturating_sub(1);

    render_pagination(pagination_row, &vm.pagination, theme, cols);
    render_bookmark_strip(bookmark_row, &vm.bookmark_strip, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders the browse layout: chrome, card list (or empty state), strips.
pub fn render_browse_mode(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let card_start = render_top_chrome(vm, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(empty, theme, cols, card_start);
    } else {
        render_cards(card_start, &vm.cards, theme, cols);
    }

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the detail layout: chrome, detail panel, strips.
pub fn render_detail_mode(
    vm: &UiViewModel,
    detail: &DetailInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let panel_start = render_top_chrome(vm, theme, cols);
    let area_rows = rows.saturating_sub(panel_start + 4);

    render_detail(panel_start, detail, theme, cols, area_rows);
    render_bottom_chrome(vm, theme, cols, rows);
}
