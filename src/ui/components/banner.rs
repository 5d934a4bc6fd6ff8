//! Error banner component renderer.
//!
//! Shown under the header while the last fetch failed. The banner never
//! hides the loaded documents: a failed load-more leaves the existing cards
//! visible beneath it.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ErrorBannerInfo;

/// Renders the error banner at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_error_banner(
    row: usize,
    banner: &ErrorBannerInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let message = truncate(&format!(" ✗ {}", banner.message), cols);
    let message_len = message.chars().count();

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(message_len)));
    print!("{}", Theme::reset());
    row + 1
}
