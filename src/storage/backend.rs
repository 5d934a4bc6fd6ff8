//! Bookmark storage abstraction.
//!
//! This module defines the [`BookmarkStore`] trait that abstracts over the
//! durable persistence backend for bookmarked document identifiers. The trait
//! is the narrow storage port of the application: the whole id list is read
//! once at startup and rewritten wholesale on every toggle, so the interface
//! is deliberately read-all/write-all rather than a generic key/value API.
//!
//! # Design Philosophy
//!
//! Keeping the port this small lets the persistence side effect be swapped or
//! mocked in tests without touching the event handler, and matches the
//! application's last-write-wins, single-writer storage model.

use crate::domain::error::Result;

/// Abstraction over durable bookmark persistence.
///
/// # Implementations
///
/// - [`JsonBookmarkStore`](crate::storage::JsonBookmarkStore): one JSON file
///   with atomic writes (default)
///
/// # Examples
///
/// ```no_run
/// use regbrowse::storage::{BookmarkStore, JsonBookmarkStore};
/// use std::path::PathBuf;
///
/// let store = JsonBookmarkStore::new(PathBuf::from("/tmp/bookmarks.json"));
/// let ids = store.load()?;
/// # Ok::<(), regbrowse::domain::RegbrowseError>(())
/// ```
pub trait BookmarkStore: Send {
    /// Reads the persisted bookmark id list.
    ///
    /// A missing or unreadable-as-JSON file loads as an empty list rather
    /// than failing: corruption is healed by starting empty and the next
    /// save overwrites whatever was there.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures on a file that exists (for
    /// example a permission problem). Callers absorb even those by falling
    /// back to an empty set; nothing about loading is surfaced to the user.
    fn load(&self) -> Result<Vec<String>>;

    /// Persists the full bookmark id list, replacing any prior content.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. Callers log and continue; a
    /// failed save never interrupts the session.
    fn save(&mut self, ids: &[String]) -> Result<()>;
}
