//! Detail panel renderer.
//!
//! Renders the full fields of the selected document in the card area:
//! title, date, type, agencies, citation, the complete abstract (wrapped to
//! the available height), the source link, and the bookmark state.

use crate::ui::helpers::{position_cursor, truncate, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

/// Renders the detail panel inside the card area.
///
/// # Parameters
///
/// * `row` - First row of the panel
/// * `detail` - Detail panel content
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `area_rows` - Rows available before the bottom strips begin
pub fn render_detail(row: usize, detail: &DetailInfo, theme: &Theme, cols: usize, area_rows: usize) {
    let text_width = cols.saturating_sub(4).max(20);
    let last_row = row + area_rows.saturating_sub(1);
    let mut current_row = row;

    let line = |current_row: &mut usize, styled: &dyn Fn()| {
        if *current_row > last_row {
            return;
        }
        position_cursor(*current_row, 1);
        styled();
        print!("{}", Theme::reset());
        *current_row += 1;
    };

    // Title with bookmark marker.
    line(&mut current_row, &|| {
        print!("{}", Theme::bold());
        if detail.is_bookmarked {
            print!("{}", Theme::fg(&theme.colors.bookmark_fg));
            print!("  ★ ");
        } else {
            print!("  ");
        }
        print!("{}", Theme::fg(&theme.colors.header_fg));
        print!("{}", truncate(&detail.title, text_width));
    });

    line(&mut current_row, &|| {});

    let labeled = [
        ("Date", detail.date.as_str()),
        ("Type", detail.document_type.as_str()),
        ("Agencies", detail.agencies.as_str()),
        ("Citation", detail.citation.as_str()),
    ];

    for (label, value) in labeled {
        if value.is_empty() {
            continue;
        }
        line(&mut current_row, &|| {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("  {label}: ");
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{}", truncate(value, text_width.saturating_sub(label.len() + 2)));
        });
    }

    if !detail.abstract_text.is_empty() {
        line(&mut current_row, &|| {});
        for wrapped in wrap_text(&detail.abstract_text, text_width) {
            if current_row > last_row.saturating_sub(2) {
                break;
            }
            line(&mut current_row, &|| {
                print!("{}", Theme::fg(&theme.colors.text_normal));
                print!("  {wrapped}");
            });
        }
    }

    if !detail.url.is_empty() {
        line(&mut current_row, &|| {});
        line(&mut current_row, &|| {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("  Link: ");
            print!("{}", Theme::fg(&theme.colors.link_fg));
            print!("{}", truncate(&detail.url, text_width.saturating_sub(8)));
        });
    }
}
