//! HTTP client for the document-metadata API.
//!
//! This module builds and issues the one outbound request this application
//! makes: a GET against the Federal Register documents endpoint with a fixed
//! page size, fixed sort order, a target page, and an optional search term.
//! The client wraps a `reqwest::Client` with a configurable base URL and a
//! request timeout, and maps failures into the crate error taxonomy.

use crate::domain::error::{RegbrowseError, Result};
use crate::domain::Document;
use crate::fetch::payload::{DocumentPayload, DocumentsPayload};
use std::time::Duration;
use url::Url;

/// Fixed number of documents requested per page.
pub const PAGE_SIZE: &str = "20";

/// Fixed sort order: newest documents first.
pub const SORT_ORDER: &str = "newest";

/// Query parameter carrying the search term, present only for non-empty
/// keywords.
pub const TERM_PARAM: &str = "conditions[term]";

/// Default endpoint of the public Federal Register document-metadata API.
pub const DEFAULT_BASE_URL: &str = "https://www.federalregister.gov/api/v1/documents.json";

/// Per-request timeout so a stalled request reports as a failure instead of
/// leaving the loading state stuck.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// One decoded page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Documents returned for the requested page, in API order.
    pub documents: Vec<Document>,

    /// Whether further pages may exist.
    ///
    /// Derived from whether this page returned any items; the API does not
    /// report a total.
    pub has_more: bool,
}

/// HTTP client for the documents endpoint.
///
/// Cheap to clone (the inner `reqwest::Client` is reference-counted); the
/// fetch worker owns one instance for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct DocumentClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DocumentClient {
    /// Creates a client against the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Creates a client against the default Federal Register endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_default_endpoint() -> Result<Self> {
        let base_url = Url::parse(DEFAULT_BASE_URL)
            .map_err(|e| RegbrowseError::Config(format!("invalid default base url: {e}")))?;
        Self::new(base_url)
    }

    /// Fetches one page of search results.
    ///
    /// Query parameters are `per_page` (fixed `"20"`), `order` (fixed
    /// `"newest"`), `page`, and `conditions[term]` — the latter only when
    /// `keyword` is non-empty after trimming, so an empty or whitespace-only
    /// keyword issues an unfiltered listing request.
    ///
    /// # Errors
    ///
    /// - [`RegbrowseError::Request`] when the API answers with a non-success
    ///   status; carries the status code.
    /// - [`RegbrowseError::Http`] when the request cannot complete (transport
    ///   failure, timeout) or the body is not decodable JSON.
    ///
    /// A decodable body without a `results` array is not an error; it yields
    /// an empty page.
    pub async fn fetch_page(&self, keyword: &str, page: u32) -> Result<FetchedPage> {
        let term = keyword.trim();

        tracing::debug!(page = page, has_term = !term.is_empty(), "fetching documents page");

        let mut request = self
            .http
            .get(self.base_url.clone())
            .query(&[("per_page", PAGE_SIZE), ("order", SORT_ORDER)])
            .query(&[("page", page.to_string().as_str())]);

        if !term.is_empty() {
            request = request.query(&[(TERM_PARAM, term)]);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "non-success response");
            return Err(RegbrowseError::Request {
                status: status.as_u16(),
            });
        }

        let payload: DocumentsPayload = response.json().await?;
        let documents: Vec<Document> = payload
            .results
            .into_iter()
            .map(DocumentPayload::into_document)
            .collect();

        let has_more = !documents.is_empty();

        tracing::debug!(
            count = documents.len(),
            has_more = has_more,
            "documents page fetched"
        );

        Ok(FetchedPage {
            documents,
            has_more,
        })
    }
}
