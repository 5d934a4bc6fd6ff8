//! Empty state component renderer.
//!
//! This module renders the empty state message displayed when no cards are
//! available: before the first load completes, when a search returned
//! nothing, or when the active filters exclude everything.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message inside the card area.
///
/// Displays a centered two-line message. The message uses the
/// `empty_state_fg` theme color, the subtitle uses `text_dim` with dim
/// styling.
///
/// # Parameters
///
/// * `empty` - Empty state information (message and subtitle)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `area_start` - First row of the card area the message centers in
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize, area_start: usize) {
    let msg_len = empty.message.chars().count();
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(area_start + 2, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = empty.subtitle.chars().count();
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cursor(area_start + 3, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
