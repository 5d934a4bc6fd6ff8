//! Document domain model and display helpers.
//!
//! This module defines the core [`Document`] type representing one federal
//! regulatory document as returned by the document-metadata API. Documents are
//! read-only to this application: the list is replaced or appended to
//! wholesale, entries are never mutated individually.

use serde::{Deserialize, Serialize};

/// A single agency attribution on a document.
///
/// The API returns agencies as an ordered array of objects; only the name is
/// used for faceting and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agency {
    /// Human-readable agency name (e.g., "Environmental Protection Agency").
    pub name: String,
}

/// A federal regulatory document.
///
/// Mirrors the fields the document API exposes. The `id` (the Federal
/// Register document number) is stable and unique and serves as both the
/// list-rendering key and the bookmark key.
///
/// # Fields
///
/// - `id`: Opaque stable identifier (`document_number` upstream)
/// - `title`: Document title
/// - `publication_date`: ISO calendar date `YYYY-MM-DD`, or empty when the
///   API omits it. Compared lexicographically, which is valid only because
///   the format is fixed-width and zero-padded.
/// - `document_type`: Optional type label ("Rule", "Notice", ...)
/// - `agencies`: Ordered agency list, possibly empty
/// - `abstract_text`: Optional abstract, shown verbatim
/// - `citation`: Optional Federal Register citation
/// - `source_url`: External link to the full document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub publication_date: String,
    pub document_type: Option<String>,
    pub agencies: Vec<Agency>,
    pub abstract_text: Option<String>,
    pub citation: Option<String>,
    pub source_url: String,
}

impl Document {
    /// Returns the agency names joined by a comma for card display.
    ///
    /// # Examples
    ///
    /// ```
    /// use regbrowse::domain::{Agency, Document};
    ///
    /// let doc = Document {
    ///     id: "2024-05000".to_string(),
    ///     title: "Air Quality Standards".to_string(),
    ///     publication_date: "2024-03-15".to_string(),
    ///     document_type: Some("Rule".to_string()),
    ///     agencies: vec![
    ///         Agency { name: "EPA".to_string() },
    ///         Agency { name: "DOT".to_string() },
    ///     ],
    ///     abstract_text: None,
    ///     citation: None,
    ///     source_url: String::new(),
    /// };
    /// assert_eq!(doc.agency_line(), "EPA, DOT");
    /// ```
    #[must_use]
    pub fn agency_line(&self) -> String {
        self.agencies
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns the publication date formatted for display ("Mar 15, 2024").
    ///
    /// Falls back to the raw stored string when the date is empty or does not
    /// parse as an ISO calendar date. Filtering never uses this formatting;
    /// date predicates compare the raw ISO strings.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        chrono::NaiveDate::parse_from_str(&self.publication_date, "%Y-%m-%d")
            .map_or_else(
                |_| self.publication_date.clone(),
                |date| date.format("%b %-d, %Y").to_string(),
            )
    }
}
