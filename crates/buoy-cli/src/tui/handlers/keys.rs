//! Keyboard event handling
//!
//! Global listeners (the open popovers' Escape handlers) get every key
//! first; only unconsumed keys fall through to the app bindings.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::tui::app::App;

impl App {
    /// Handle a key event
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if self.keys.dispatch(code, modifiers) {
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('i') => self.info.toggle(&mut self.keys),
            KeyCode::Char('h') => self.help.toggle(&mut self.keys),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;

    fn app() -> App {
        App::new("terminal", DemoConfig::builtin())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
    }

    #[test]
    fn test_keyboard_toggles() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        assert!(app.info.is_open());
        assert_eq!(app.keys.count(), 1);

        press(&mut app, KeyCode::Char('i'));
        assert!(!app.info.is_open());
        assert_eq!(app.keys.count(), 0);
    }

    #[test]
    fn test_escape_is_consumed_by_open_popover() {
        let mut app = app();
        press(&mut app, KeyCode::Char('h'));
        assert!(app.help.is_open());

        press(&mut app, KeyCode::Esc);
        assert!(!app.help.is_open());
        assert_eq!(app.keys.count(), 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut with_q = app();
        press(&mut with_q, KeyCode::Char('q'));
        assert!(with_q.should_quit);

        let mut with_ctrl_c = app();
        with_ctrl_c.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(with_ctrl_c.should_quit);
    }

    #[test]
    fn test_unbound_keys_are_ignored_while_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Char('a'));
        assert!(app.info.is_open());
        assert_eq!(app.keys.count(), 1);
    }
}
