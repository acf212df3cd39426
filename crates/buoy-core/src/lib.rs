//! Buoy Core - Shared library for the buoy popover widget
//!
//! This crate provides the framework-free half of the widget:
//! - Popover visibility state machine
//! - Global keydown listener registry with owned handles
//! - Pass-through button attributes
//!
//! Rendering and terminal I/O live in the host crate (`buoy-cli`).

pub mod button;
pub mod keys;
pub mod popover;

// Re-exports for convenience
pub use button::ButtonAttrs;
pub use keys::{KeyReaction, KeyRegistry, ListenerId};
pub use popover::Popover;
