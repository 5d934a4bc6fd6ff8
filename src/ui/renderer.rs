//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. It handles layout
//! switching between the browse view and the detail panel.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UiViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! Each frame repaints the whole alternate screen and flushes once.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers;

/// Renders one frame of the application UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// appropriate layout (browse or detail).
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Output
///
/// Prints ANSI-styled output to stdout and flushes it. The caller owns the
/// terminal mode (raw, alternate screen).
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    helpers::clear_screen();

    if let Some(detail) = &viewmodel.detail {
        components::render_detail_mode(&viewmodel, detail, &state.theme, cols, rows);
    } else {
        components::render_browse_mode(&viewmodel, &state.theme, cols, rows);
    }

    helpers::flush();
}
