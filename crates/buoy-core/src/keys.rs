//! Global keydown listener registry
//!
//! The host event loop owns one `KeyRegistry` and feeds every key event
//! through [`KeyRegistry::dispatch`]. Widgets register a callback while they
//! need global key input and remove it by [`ListenerId`] when they stop.
//! Removal is id-based: a handle taken at registration time always targets
//! the exact entry it was issued for, and removing an id that was already
//! swept is a no-op.

use crossterm::event::{KeyCode, KeyModifiers};

/// Handle to a registered keydown listener. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// What a listener wants done after seeing a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyReaction {
    /// Not interested in this key; keep listening
    Pass,
    /// Key consumed; keep listening
    Handled,
    /// Key consumed; remove this listener
    HandledDetach,
    /// Stale registration; remove this listener without consuming
    Detach,
}

type KeyCallback = Box<dyn FnMut(KeyCode, KeyModifiers) -> KeyReaction>;

struct Entry {
    id: ListenerId,
    callback: KeyCallback,
}

/// Registry of global keydown listeners
///
/// Listeners run in registration order and every listener sees every event;
/// consumption is reported to the caller but does not stop propagation.
#[derive(Default)]
pub struct KeyRegistry {
    entries: Vec<Entry>,
    next_id: u64,
}

impl KeyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a keydown listener and return its handle
    pub fn register(
        &mut self,
        callback: impl FnMut(KeyCode, KeyModifiers) -> KeyReaction + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            callback: Box::new(callback),
        });
        tracing::debug!(id = id.0, total = self.entries.len(), "Key listener registered");
        id
    }

    /// Remove a listener by handle. Returns false if the id is not registered
    /// (already swept or never issued), which is harmless.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        if removed {
            tracing::debug!(id = id.0, total = self.entries.len(), "Key listener removed");
        }
        removed
    }

    /// Feed a key event to every listener. Listeners that ask to detach are
    /// swept after running. Returns true if any listener consumed the key.
    pub fn dispatch(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let mut consumed = false;
        self.entries.retain_mut(|entry| {
            let keep = match (entry.callback)(code, modifiers) {
                KeyReaction::Pass => true,
                KeyReaction::Handled => {
                    consumed = true;
                    true
                }
                KeyReaction::HandledDetach => {
                    consumed = true;
                    false
                }
                KeyReaction::Detach => false,
            };
            if !keep {
                tracing::debug!(id = entry.id.0, "Key listener detached during dispatch");
            }
            keep
        });
        consumed
    }

    /// Number of live listeners
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Check whether a handle still points at a live listener
    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(registry: &mut KeyRegistry, code: KeyCode) -> bool {
        registry.dispatch(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_register_and_remove() {
        let mut registry = KeyRegistry::new();
        assert_eq!(registry.count(), 0);

        let id = registry.register(|_, _| KeyReaction::Pass);
        assert_eq!(registry.count(), 1);
        assert!(registry.contains(id));

        assert!(registry.remove(id));
        assert_eq!(registry.count(), 0);
        assert!(!registry.contains(id));

        // Removing again is a no-op
        assert!(!registry.remove(id));
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut registry = KeyRegistry::new();
        let first = registry.register(|_, _| KeyReaction::Pass);
        registry.remove(first);
        let second = registry.register(|_, _| KeyReaction::Pass);
        assert_ne!(first, second);
        assert!(!registry.contains(first));
        assert!(registry.contains(second));
    }

    #[test]
    fn test_dispatch_reports_consumption() {
        let mut registry = KeyRegistry::new();
        registry.register(|code, _| {
            if code == KeyCode::Esc {
                KeyReaction::Handled
            } else {
                KeyReaction::Pass
            }
        });

        assert!(press(&mut registry, KeyCode::Esc));
        assert!(!press(&mut registry, KeyCode::Char('a')));
        assert_eq!(registry.count(), 1); // Handled keeps the listener
    }

    #[test]
    fn test_dispatch_sweeps_detached_listeners() {
        let mut registry = KeyRegistry::new();
        registry.register(|_, _| KeyReaction::HandledDetach);
        registry.register(|_, _| KeyReaction::Detach);
        registry.register(|_, _| KeyReaction::Pass);

        assert!(press(&mut registry, KeyCode::Enter));
        assert_eq!(registry.count(), 1); // Only the Pass listener survives

        // Detach did not consume on its own
        let mut registry = KeyRegistry::new();
        registry.register(|_, _| KeyReaction::Detach);
        assert!(!press(&mut registry, KeyCode::Enter));
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_all_listeners_see_every_event() {
        use std::cell::Cell;
        use std::rc::Rc;

        let mut registry = KeyRegistry::new();
        let seen = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let seen = Rc::clone(&seen);
            registry.register(move |_, _| {
                seen.set(seen.get() + 1);
                KeyReaction::Handled
            });
        }

        press(&mut registry, KeyCode::Esc);
        assert_eq!(seen.get(), 3); // Consumption does not stop propagation
    }
}
