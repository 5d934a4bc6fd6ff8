//! Error types for regbrowse.
//!
//! This module defines the centralized error type [`RegbrowseError`] and a type
//! alias [`Result`] for convenient error handling throughout the application.
//! All errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for regbrowse operations.
///
/// This enum consolidates all error conditions that can occur while the
/// application runs, from API request failures to storage and configuration
/// issues. Most variants wrap underlying errors from external crates using
/// `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use regbrowse::domain::RegbrowseError;
///
/// fn reject_rate_limited() -> Result<(), RegbrowseError> {
///     Err(RegbrowseError::Request { status: 429 })
/// }
/// ```
#[derive(Debug, Error)]
pub enum RegbrowseError {
    /// The document API answered with a non-success HTTP status.
    ///
    /// The request reached the server but was rejected (rate limit, bad
    /// parameters, server error). Carries the status code for display.
    #[error("request failed with status {status}")]
    Request {
        /// HTTP status code returned by the API.
        status: u16,
    },

    /// The request itself could not complete.
    ///
    /// Wraps transport-level failures from `reqwest`: connection refused,
    /// DNS failure, timeout, or an undecodable response body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Bookmark storage operation failed.
    ///
    /// Occurs when reading from or writing to the bookmark store fails.
    /// The string contains a description of what went wrong.
    #[error("storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, including the
    /// terminal setup/teardown calls. Automatically converts from
    /// `std::io::Error` using the `#[from]` attribute.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("theme error: {0}")]
    Theme(String),

    /// Communication with the background fetch worker failed.
    ///
    /// Occurs when the request or response channel to the fetch task is
    /// closed unexpectedly.
    #[error("fetch worker error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configured value (API base URL, data directory) cannot
    /// be used. The string describes the specific problem.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for regbrowse operations.
///
/// This is a type alias for `std::result::Result<T, RegbrowseError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, RegbrowseError>;
