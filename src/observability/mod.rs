//! File-based logging for a terminal-owning application.
//!
//! The renderer owns stdout, so diagnostic output must never be printed to
//! the terminal. This module wires `tracing` events through a subscriber that
//! appends to `regbrowse.log` in the data directory.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the application configuration
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing early in the binary, before the terminal is set up:
//!
//! ```no_run
//! use regbrowse::observability::init_tracing;
//! use regbrowse::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("application initialized");
//! ```

mod init;

pub use init::init_tracing;
