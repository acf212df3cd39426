//! Event handlers for the buoy TUI
//!
//! Keyboard and mouse routing as `impl App` blocks, split out of app.rs.

mod keys;
mod mouse;
