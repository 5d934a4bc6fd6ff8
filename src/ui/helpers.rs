//! Shared rendering utilities and helpers.
//!
//! This module provides low-level text utilities used across multiple UI
//! components: cursor positioning, character-safe truncation, and word
//! wrapping for the three-line card abstracts.

use std::io::Write;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Clears the terminal and homes the cursor.
///
/// Called once per frame before the components repaint the screen.
pub fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[H");
}

/// Flushes buffered frame output to the terminal.
pub fn flush() {
    let _ = std::io::stdout().flush();
}

/// Truncates text to at most `max_width` characters, appending an ellipsis
/// when anything was cut.
///
/// Operates on character counts, not bytes, so multi-byte input cannot be
/// split mid-character.
///
/// # Examples
///
/// ```
/// use regbrowse::ui::helpers::truncate;
///
/// assert_eq!(truncate("short", 10), "short");
/// assert_eq!(truncate("a very long title", 10), "a very lo…");
/// ```
#[must_use]
pub fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        return text.to_string();
    }
    let keep = max_width.saturating_sub(1);
    let mut result: String = chars[..keep].iter().collect();
    result.push('…');
    result
}

/// Wraps text to lines of at most `width` characters, breaking on
/// whitespace.
///
/// A single word longer than `width` is split mid-word rather than
/// overflowing the line.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();

        if !current.is_empty() && current.chars().count() + 1 + word_chars > width {
            lines.push(std::mem::take(&mut current));
        }

        if word_chars > width {
            // Split an oversized word across as many lines as needed.
            let mut remainder: Vec<char> = word.chars().collect();
            while remainder.len() > width {
                let chunk: String = remainder.drain(..width).collect();
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                lines.push(chunk);
            }
            current = remainder.into_iter().collect();
        } else if current.is_empty() {
            current = word.to_string();
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Wraps text and clips it to at most `max_lines` lines, marking truncation
/// with an ellipsis on the last kept line.
///
/// Used for the card abstracts, which show only the first three lines of
/// possibly much longer text.
#[must_use]
pub fn clip_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let wrapped = wrap_text(text, width);
    if wrapped.len() <= max_lines {
        return wrapped;
    }

    let mut clipped: Vec<String> = wrapped[..max_lines].to_vec();
    if let Some(last) = clipped.last_mut() {
        let keep = width.saturating_sub(1);
        if last.chars().count() > keep {
            *last = last.chars().take(keep).collect();
        }
        last.push('…');
    }
    clipped
}
