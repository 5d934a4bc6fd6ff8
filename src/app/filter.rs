//! Client-side filter engine.
//!
//! Pure derivations over the loaded document list: the facet option lists
//! that populate the agency and type selects, and the visibility predicate
//! that computes the visible subset. Everything here is recomputed whenever
//! its inputs change and holds no state of its own.
//!
//! Filtering always runs against the entire currently loaded list, never a
//! single page — the API is not consulted, so the filter scope grows only as
//! more pages are loaded.

use crate::domain::Document;
use std::collections::BTreeSet;

/// The four client-side filter fields.
///
/// An empty string means the corresponding filter is inactive. Date bounds
/// are ISO `YYYY-MM-DD` strings compared lexicographically against document
/// publication dates — valid only because the format is fixed-width and
/// zero-padded, so this comparison must not be replaced with a calendar
/// type without auditing every call site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Exact agency name to require, or empty for no agency filter.
    pub agency: String,

    /// Exact document type to require, or empty for no type filter.
    pub document_type: String,

    /// Inclusive lower publication-date bound, or empty.
    pub start_date: String,

    /// Inclusive upper publication-date bound, or empty.
    pub end_date: String,
}

impl FilterState {
    /// Clears all four fields.
    ///
    /// Resetting filters never refetches; it only widens the visible subset
    /// back to the full loaded list.
    pub fn reset(&mut self) {
        self.agency.clear();
        self.document_type.clear();
        self.start_date.clear();
        self.end_date.clear();
    }
}

/// Derives the agency facet options from the loaded documents.
///
/// Returns every distinct agency name seen across every agency array of
/// every loaded document, lexicographically sorted and duplicate-free.
#[must_use]
pub fn agency_options(documents: &[Document]) -> Vec<String> {
    documents
        .iter()
        .flat_map(|document| document.agencies.iter())
        .map(|agency| agency.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Derives the document-type facet options from the loaded documents.
///
/// Returns every distinct non-empty `document_type` value, lexicographically
/// sorted and duplicate-free.
#[must_use]
pub fn type_options(documents: &[Document]) -> Vec<String> {
    documents
        .iter()
        .filter_map(|document| document.document_type.clone())
        .filter(|doc_type| !doc_type.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Returns whether a document passes all four active filter predicates.
///
/// A document passes when:
///
/// - the agency filter is empty, or its agency list contains the exact
///   selected name, AND
/// - the type filter is empty, or its type matches exactly, AND
/// - the start bound is empty, or its publication date is lexicographically
///   `>=` the bound, AND
/// - the end bound is empty, or its publication date is lexicographically
///   `<=` the bound.
///
/// A document with a missing (empty) publication date fails any active date
/// bound.
#[must_use]
pub fn document_matches(document: &Document, filters: &FilterState) -> bool {
    if !filters.agency.is_empty()
        && !document
            .agencies
            .iter()
            .any(|agency| agency.name == filters.agency)
    {
        return false;
    }

    if !filters.document_type.is_empty()
        && document.document_type.as_deref() != Some(filters.document_type.as_str())
    {
        return false;
    }

    if !filters.start_date.is_empty()
        && (document.publication_date.is_empty()
            || document.publication_date.as_str() < filters.start_date.as_str())
    {
        return false;
    }

    if !filters.end_date.is_empty()
        && (document.publication_date.is_empty()
            || document.publication_date.as_str() > filters.end_date.as_str())
    {
        return false;
    }

    true
}

/// Computes the visible subset of the loaded documents.
///
/// Preserves load order and duplicates; every returned document
/// independently satisfies [`document_matches`].
#[must_use]
pub fn visible_documents(documents: &[Document], filters: &FilterState) -> Vec<Document> {
    documents
        .iter()
        .filter(|document| document_matches(document, filters))
        .cloned()
        .collect()
}
