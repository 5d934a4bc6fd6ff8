//! Wire payload types for the document API.
//!
//! These types mirror the JSON shape of the Federal Register documents
//! endpoint and are deliberately lenient: every field is optional or
//! defaulted, because an unexpected payload shape is tolerated by degrading
//! to empty values rather than rejected. Conversion into the domain
//! [`Document`] happens in one place so the rest of the crate never sees the
//! wire representation.

use crate::domain::{Agency, Document};
use serde::Deserialize;

/// Top-level search response body.
///
/// A body without a `results` field decodes as an empty page; only a body
/// that is not a JSON object at all fails decoding.
#[derive(Debug, Deserialize)]
pub(crate) struct DocumentsPayload {
    #[serde(default)]
    pub results: Vec<DocumentPayload>,
}

/// One document entry inside `results`.
#[derive(Debug, Deserialize)]
pub(crate) struct DocumentPayload {
    pub document_number: Option<String>,
    pub title: Option<String>,
    pub publication_date: Option<String>,
    pub document_type: Option<String>,
    #[serde(default)]
    pub agencies: Vec<AgencyPayload>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub citation: Option<String>,
    pub html_url: Option<String>,
}

/// One agency entry inside a document's `agencies` array.
#[derive(Debug, Deserialize)]
pub(crate) struct AgencyPayload {
    pub name: Option<String>,
}

impl DocumentPayload {
    /// Converts the wire payload into the domain model.
    ///
    /// Missing strings become empty, missing optionals stay `None`, and
    /// agency entries without a name are dropped.
    pub(crate) fn into_document(self) -> Document {
        Document {
            id: self.document_number.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            publication_date: self.publication_date.unwrap_or_default(),
            document_type: self.document_type,
            agencies: self
                .agencies
                .into_iter()
                .filter_map(|agency| agency.name.map(|name| Agency { name }))
                .collect(),
            abstract_text: self.abstract_text,
            citation: self.citation,
            source_url: self.html_url.unwrap_or_default(),
        }
    }
}
