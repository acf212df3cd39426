//! Popover visibility state machine
//!
//! A [`Popover`] owns one boolean flag and, while open, exactly one keydown
//! registration in the host's [`KeyRegistry`]. The registration is held as an
//! owned [`ListenerId`] handle: opening always drops the previous handle
//! before installing a fresh one, and closing takes the handle and removes it
//! by id, so a listener can never be doubled or leaked across toggles.
//!
//! The installed listener closes over a clone of the visibility flag, not the
//! widget itself. If it ever runs while the flag is already false (a stale
//! registration) it detaches itself without consuming the key.

use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::button::ButtonAttrs;
use crate::keys::{KeyReaction, KeyRegistry, ListenerId};

/// A popover panel toggled from a trigger button
///
/// Closed initially. Opens and closes via [`Popover::toggle`]; closes via
/// Escape (through the registered listener) or [`Popover::dismiss`] when the
/// host detects a click outside the panel. Reusable indefinitely.
pub struct Popover {
    attrs: ButtonAttrs,
    shown: Rc<Cell<bool>>,
    listener: Option<ListenerId>,
}

impl Popover {
    /// Create a closed popover with the given button attributes
    pub fn new(attrs: ButtonAttrs) -> Self {
        Self {
            attrs,
            shown: Rc::new(Cell::new(false)),
            listener: None,
        }
    }

    /// Attributes forwarded to the rendered button
    pub fn attrs(&self) -> &ButtonAttrs {
        &self.attrs
    }

    /// Whether the panel is currently shown
    pub fn is_open(&self) -> bool {
        self.shown.get()
    }

    /// Flip the panel open or closed
    ///
    /// Opening registers the Escape listener; closing removes it.
    pub fn toggle(&mut self, keys: &mut KeyRegistry) {
        if self.shown.get() {
            self.close(keys);
        } else {
            self.open(keys);
        }
    }

    /// Close the panel in response to a click outside it
    ///
    /// No-op when already closed.
    pub fn dismiss(&mut self, keys: &mut KeyRegistry) {
        if self.shown.get() {
            tracing::debug!(title = %self.attrs.title, "Popover dismissed by outside click");
        }
        self.close(keys);
    }

    /// Close the panel and remove the key listener if present
    ///
    /// Hosts must also call this before dropping the widget so the listener
    /// does not outlive it.
    pub fn close(&mut self, keys: &mut KeyRegistry) {
        self.shown.set(false);
        if let Some(id) = self.listener.take() {
            // Id-based removal: a no-op if the listener already detached
            // itself (Escape path).
            keys.remove(id);
        }
    }

    fn open(&mut self, keys: &mut KeyRegistry) {
        self.shown.set(true);
        // Drop any previous handle before installing a fresh listener so at
        // most one registration is ever live for this widget.
        if let Some(id) = self.listener.take() {
            keys.remove(id);
        }
        let id = keys.register(escape_listener(Rc::clone(&self.shown)));
        self.listener = Some(id);
        tracing::debug!(title = %self.attrs.title, "Popover opened");
    }
}

impl Drop for Popover {
    fn drop(&mut self) {
        // The registry is not owned here, so the listener cannot be removed
        // from Drop; surface the leak instead.
        if self.shown.get() && self.listener.is_some() {
            tracing::warn!(
                title = %self.attrs.title,
                "Popover dropped while open; call close() first or its key listener leaks"
            );
        }
    }
}

/// Keydown listener installed while the popover is open
///
/// Escape clears the shared flag and detaches. A stale invocation (flag
/// already false) detaches without consuming.
fn escape_listener(shown: Rc<Cell<bool>>) -> impl FnMut(KeyCode, KeyModifiers) -> KeyReaction {
    move |code, _modifiers| {
        if !shown.get() {
            return KeyReaction::Detach;
        }
        if code == KeyCode::Esc {
            shown.set(false);
            KeyReaction::HandledDetach
        } else {
            KeyReaction::Pass
        }
    }
}
