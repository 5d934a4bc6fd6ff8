//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! binary shim (`main.rs`) and the domain/fetch/storage layers. It implements
//! the event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Fetch Responses ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Pure facet derivation and visibility predicates
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central application state container and view model
//!   computation

pub mod actions;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use filter::FilterState;
pub use handler::{handle_event, Event};
pub use modes::{FilterField, InputMode};
pub use state::AppState;
