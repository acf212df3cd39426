//! Popover panels for the buoy TUI
//!
//! Panels are anchored to their trigger button, cleared over whatever is
//! underneath, and report their rendered area back for hit testing.

pub mod common;
pub mod panel;
