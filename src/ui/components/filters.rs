//! Filter panel component renderer.
//!
//! Renders the four filter fields on one line. The focused field (when in
//! filter mode) takes the highlight color; select fields show their current
//! facet option, date fields the typed bound.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterPanelInfo;

/// Renders the filter panel at the specified row.
///
/// # Layout
///
/// ```text
///  Agency: All   Type: Rule   From: 2024-01-01   To: —
/// ```
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_filter_panel(row: usize, panel: &FilterPanelInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(" ");

    let mut written = 1;
    for field in &panel.fields {
        let text = format!("{}: {}", field.label, field.value);
        let segment_len = text.chars().count() + 3;
        if written + segment_len > cols {
            break;
        }

        if field.focused {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.filter_focus_fg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{text}");
        print!("{}", Theme::reset());
        print!("   ");
        written += segment_len;
    }

    print!("{}", " ".repeat(cols.saturating_sub(written)));
    row + 1
}
