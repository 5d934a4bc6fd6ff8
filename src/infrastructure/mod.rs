//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides utilities for locating per-user application data on
//! the host filesystem.

pub mod paths;

pub use paths::{bookmarks_path, data_dir};
