//! Pagination row renderer.
//!
//! Shows how much of the loaded list passes the filters, the current page,
//! and the load-more affordance. The load-more hint disappears while a fetch
//! is in flight or when no further pages exist, mirroring the disabled
//! control.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// Renders the pagination row at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_pagination(row: usize, info: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let status = if info.loading {
        "loading…".to_string()
    } else if info.has_more {
        "m: load more".to_string()
    } else {
        "all pages loaded".to_string()
    };

    let text = format!(
        " Showing {} of {} loaded  ·  page {}  ·  {}",
        info.visible_count, info.loaded_count, info.page, status
    );
    let text_len = text.chars().count().min(cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(text_len)));
    print!("{}", Theme::reset());
    row + 1
}
