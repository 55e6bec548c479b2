//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`display`]: Single-line display with the pending-operation marker
//! - [`keypad`]: The 4-column button grid and mouse hit-testing
//! - [`tape`]: Log of key presses for the session
//! - [`status`]: Status bar with memory indicator and keybindings
//!
//! Each pane module exports a `render_*` function. Panes are stateless:
//! everything they draw is passed in by [`App`](crate::ui::App).

pub mod display;
pub mod keypad;
pub mod status;
pub mod tape;

// Re-export render functions for convenience
pub use display::render_display_pane;
pub use keypad::{key_at, keypad_cells, render_keypad_pane};
pub use status::render_status_bar;
pub use tape::render_tape_pane;
