//! Actions representing side effects to be executed by the binary shim.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! fetch responses. Actions bridge pure state transformations and effectful
//! operations like issuing network requests or writing the bookmark file.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The event loop in
//! `main.rs` executes them in sequence.

use crate::fetch::FetchRequest;

/// Commands representing side effects to be executed by the event loop.
///
/// Actions are produced by the event handler and executed by the binary.
/// They are the boundary between pure state transitions and the network,
/// storage, and terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a request to the background fetch worker.
    ///
    /// Emitted by search submission, the load-more command, and the initial
    /// startup load. The worker answers with a
    /// [`FetchResponse`](crate::fetch::FetchResponse) event.
    PostFetch(FetchRequest),

    /// Persists the full bookmark id list through the storage port.
    ///
    /// Emitted on every bookmark toggle; the write replaces any prior
    /// content. Failures are logged and never surfaced to the user.
    PersistBookmarks {
        /// The complete updated id list, in insertion order.
        ids: Vec<String>,
    },

    /// Exits the application, restoring the terminal.
    Quit,
}
