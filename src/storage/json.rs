//! JSON file-based bookmark store.
//!
//! This module provides the default [`BookmarkStore`] implementation: a single
//! human-readable JSON file holding the array of bookmarked document ids. It
//! uses atomic file writes (write-to-temp + rename) to prevent corruption on
//! crashes.
//!
//! # File Format
//!
//! ```json
//! ["2024-05000", "2024-04817"]
//! ```

use crate::domain::error::Result;
use crate::storage::backend::BookmarkStore;
use std::path::PathBuf;

/// JSON file bookmark store.
///
/// Reads and writes the entire id list on every operation; with a bookmark
/// list this small the simplicity beats incremental updates. The store is
/// `Send` but not `Sync` — it is owned by the main event loop, matching the
/// single-writer storage model.
pub struct JsonBookmarkStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonBookmarkStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is not touched until the first load or save; parent
    /// directories are created on save.
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        tracing::debug!(path = ?file_path, "initializing JSON bookmark store");
        Self { file_path }
    }
}

impl BookmarkStore for JsonBookmarkStore {
    fn load(&self) -> Result<Vec<String>> {
        let _span = tracing::debug_span!("bookmarks_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no bookmark file, starting empty");
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.file_path)?;

        match serde_json::from_str::<Vec<String>>(&contents) {
            Ok(ids) => {
                tracing::debug!(count = ids.len(), "bookmarks loaded");
                Ok(ids)
            }
            Err(e) => {
                // Malformed content heals to the empty set; the next save
                // overwrites it.
                tracing::debug!(error = %e, "bookmark file malformed, starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, ids: &[String]) -> Result<()> {
        let _span =
            tracing::debug_span!("bookmarks_save", path = ?self.file_path, count = ids.len())
                .entered();

        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(ids)
            .map_err(|e| crate::domain::RegbrowseError::Storage(format!("serialize: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("bookmarks saved");
        Ok(())
    }
}
