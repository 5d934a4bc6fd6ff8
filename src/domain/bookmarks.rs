//! Bookmark set domain model.
//!
//! A bookmark set is a collection of document identifiers with set semantics
//! (no duplicates, toggle adds-if-absent/removes-if-present) that is stored as
//! an ordered sequence so the persisted JSON stays stable across writes.

/// An ordered, duplicate-free set of bookmarked document identifiers.
///
/// Insertion order is preserved for persistence and display; membership and
/// toggling behave as a set. This is the only application state that outlives
/// a session — see [`crate::storage`] for the persistence port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkSet {
    ids: Vec<String>,
}

impl BookmarkSet {
    /// Creates an empty bookmark set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a bookmark set from a stored id sequence.
    ///
    /// Duplicates are dropped while preserving first-occurrence order, so a
    /// hand-edited or degraded storage file is healed on load rather than
    /// violating the no-duplicates invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use regbrowse::domain::BookmarkSet;
    ///
    /// let set = BookmarkSet::from_ids(vec![
    ///     "2024-05000".to_string(),
    ///     "2024-05001".to_string(),
    ///     "2024-05000".to_string(),
    /// ]);
    /// assert_eq!(set.ids(), ["2024-05000", "2024-05001"]);
    /// ```
    #[must_use]
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut set = Self::new();
        for id in ids {
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }

    /// Returns whether the given document id is bookmarked.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Toggles a bookmark: adds the id if absent, removes it if present.
    ///
    /// Returns `true` when the id is bookmarked after the toggle. Toggling
    /// twice in succession returns the set to its original content.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(position) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(position);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Returns the bookmarked ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Returns the number of bookmarked documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether no documents are bookmarked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
