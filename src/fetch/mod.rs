//! Document fetching layer.
//!
//! This module owns everything about talking to the document-metadata API:
//! request construction with the fixed query parameters, response decoding
//! tolerant of unexpected shapes, and the background task that serializes
//! requests so the UI thread never blocks on the network.
//!
//! # Architecture
//!
//! - `client`: HTTP client building and issuing the GET request
//! - `payload`: lenient wire types and conversion into domain documents
//! - `worker`: request/response protocol and the long-lived fetch task

pub mod client;
mod payload;
pub mod worker;

pub use client::{DocumentClient, FetchedPage, DEFAULT_BASE_URL, PAGE_SIZE, SORT_ORDER};
pub use worker::{FetchRequest, FetchResponse};
