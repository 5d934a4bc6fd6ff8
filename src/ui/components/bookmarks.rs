//! Bookmark strip renderer.
//!
//! One row listing the titles of bookmarked documents that are present in
//! the loaded list. Bookmarks referencing documents not currently loaded
//! stay in the persisted set but are omitted here.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BookmarkStripInfo;

/// Renders the bookmark strip at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_bookmark_strip(
    row: usize,
    strip: &BookmarkStripInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    if strip.titles.is_empty() {
        let text = " ★ Bookmarks: none";
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{text}");
        print!("{}", " ".repeat(cols.saturating_sub(text.chars().count())));
        print!("{}", Theme::reset());
        return row + 1;
    }

    let joined = strip.titles.join("  ▪  ");
    let text = truncate(
        &format!(" ★ Bookmarks ({}): {}", strip.titles.len(), joined),
        cols,
    );
    let text_len = text.chars().count();

    print!("{}", Theme::fg(&theme.colors.bookmark_fg));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(text_len)));
    print!("{}", Theme::reset());
    row + 1
}
