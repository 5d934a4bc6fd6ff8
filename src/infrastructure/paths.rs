//! Path resolution for application data.
//!
//! This module locates the per-user data directory that holds the bookmark
//! file and the log file. Resolution follows the XDG convention with a home
//! directory fallback, so the application behaves the same whether or not the
//! environment exports `XDG_DATA_HOME`.

use std::path::PathBuf;

/// File name of the persisted bookmark list inside the data directory.
pub const BOOKMARKS_FILE: &str = "bookmarks.json";

/// File name of the tracing log inside the data directory.
pub const LOG_FILE: &str = "regbrowse.log";

/// Returns the data directory for regbrowse storage.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/regbrowse` when `XDG_DATA_HOME` is set and non-empty
/// 2. `$HOME/.local/share/regbrowse` when `HOME` is set and non-empty
/// 3. `.regbrowse` relative to the working directory as a last resort
///
/// The directory is not created here; callers create it before first use.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Some(xdg) = non_empty_env("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("regbrowse");
    }

    if let Some(home) = non_empty_env("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("regbrowse");
    }

    PathBuf::from(".regbrowse")
}

/// Returns the full path of the bookmark file inside a data directory.
#[must_use]
pub fn bookmarks_path(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join(BOOKMARKS_FILE)
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
