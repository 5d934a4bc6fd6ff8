//! Document card list renderer.
//!
//! This module renders the windowed card list. Each card occupies a fixed
//! six-row slot: title, meta line, up to three abstract lines, and an
//! agency/link line. Fixed slots keep the windowing arithmetic in the view
//! model simple.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Rows one card occupies, matching the view model's windowing arithmetic.
const CARD_HEIGHT: usize = 6;

/// Renders all cards starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + items × card height)
pub fn render_cards(row: usize, items: &[CardItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_card(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single card in its six-row slot.
///
/// The title line carries the selection background when the card is under
/// the cursor, and a bookmark star when the document is bookmarked. Missing
/// abstract lines render blank so every card consumes the same height.
fn render_card(row: usize, item: &CardItem, theme: &Theme, cols: usize) -> usize {
    // Title line: marker, star, title.
    position_cursor(row, 1);
    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let marker = if item.is_bookmarked { "★ " } else { "  " };
    if item.is_bookmarked && !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.bookmark_fg));
        print!("{marker}");
        print!("{}", Theme::fg(&theme.colors.text_normal));
    } else {
        print!("{marker}");
    }

    print!("{}", item.title);
    let title_len = 2 + item.title.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(title_len)));
    print!("{}", Theme::reset());

    // Meta line: date, type, citation.
    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  {}", truncate(&item.meta, cols.saturating_sub(2)));
    print!("{}", Theme::reset());

    // Abstract lines, padded to three rows.
    for line_idx in 0..3 {
        position_cursor(row + 2 + line_idx, 1);
        if let Some(line) = item.abstract_lines.get(line_idx) {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("  {line}");
            print!("{}", Theme::reset());
        }
    }

    // Agency and link line.
    position_cursor(row + 5, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  {}", item.agencies);
    let used = 2 + item.agencies.chars().count();
    let link_room = cols.saturating_sub(used + 2);
    if !item.url.is_empty() && link_room > 8 {
        print!("  ");
        print!("{}", Theme::fg(&theme.colors.link_fg));
        print!("{}", truncate(&item.url, link_room));
    }
    print!("{}", Theme::reset());

    row + CARD_HEIGHT
}
