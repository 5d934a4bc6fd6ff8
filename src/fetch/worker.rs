//! Background fetch task serializing API requests.
//!
//! This module implements the asynchronous half of the fetcher: a long-lived
//! task that owns the [`DocumentClient`], receives requests over a channel,
//! and answers with responses the event handler folds back into application
//! state. Because one task processes requests sequentially, at most one
//! network operation is in flight at a time — the same guarantee the UI
//! enforces by disabling its triggering controls while loading.

use crate::domain::Document;
use crate::fetch::client::DocumentClient;
use tokio::sync::mpsc;

/// A request for one page of search results.
///
/// `replace` records the accumulator semantics the caller wants applied to
/// the eventual response: replace the loaded list (new search) or append to
/// it (load more). Carrying it through the round-trip keeps the handler free
/// of request bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Raw keyword from the search bar; trimming happens in the client.
    pub keyword: String,

    /// Target page number (≥ 1).
    pub page: u32,

    /// Whether the response replaces the loaded list or appends to it.
    pub replace: bool,
}

/// The outcome of a fetch request, sent back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResponse {
    /// The page was fetched and decoded.
    Loaded {
        /// The originating request.
        request: FetchRequest,

        /// Documents returned for the page, in API order.
        documents: Vec<Document>,

        /// Whether further pages may exist.
        has_more: bool,
    },

    /// The request failed.
    ///
    /// Covers transport failures, timeouts, non-success statuses, and
    /// undecodable bodies alike; the distinction is already folded into the
    /// message.
    Failed {
        /// The originating request.
        request: FetchRequest,

        /// Displayable failure description.
        message: String,
    },
}

/// Spawns the fetch worker task.
///
/// The task runs until the request channel closes (the event loop dropped its
/// sender) or the response channel closes (the event loop is gone), then
/// exits quietly.
///
/// # Parameters
///
/// * `client` - HTTP client the task takes ownership of
/// * `requests` - Receiving end of the request channel
/// * `responses` - Sending end of the response channel
pub fn spawn(
    client: DocumentClient,
    mut requests: mpsc::UnboundedReceiver<FetchRequest>,
    responses: mpsc::UnboundedSender<FetchResponse>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(request) = requests.recv().await {
            tracing::debug!(
                page = request.page,
                replace = request.replace,
                "fetch worker handling request"
            );

            let response = match client.fetch_page(&request.keyword, request.page).await {
                Ok(page) => {
                    tracing::debug!(count = page.documents.len(), "fetch succeeded");
                    FetchResponse::Loaded {
                        request,
                        documents: page.documents,
                        has_more: page.has_more,
                    }
                }
                Err(e) => {
                    tracing::debug!(error = %e, "fetch failed");
                    FetchResponse::Failed {
                        request,
                        message: e.to_string(),
                    }
                }
            };

            if responses.send(response).is_err() {
                tracing::debug!("response channel closed, fetch worker exiting");
                break;
            }
        }
    })
}
