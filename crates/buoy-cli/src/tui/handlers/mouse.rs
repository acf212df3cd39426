//! Mouse event handling
//!
//! Hit tests clicks against the layout areas cached at render time. A left
//! click on a button toggles its popover; while a popover is open, a left
//! click that lands outside its panel (and not on its own button) dismisses
//! it. Hit testing panels here is the host's side of the outside-click
//! contract - the widget itself only exposes `dismiss`.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::tui::app::App;
use crate::tui::state::HoverTarget;

fn hits(area: Option<Rect>, pos: Position) -> bool {
    area.is_some_and(|area| area.contains(pos))
}

impl App {
    /// Handle mouse events for clicking and hover
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_left_click(mouse.column, mouse.row);
            }
            MouseEventKind::Moved => {
                self.update_hover(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    fn handle_left_click(&mut self, x: u16, y: u16) {
        let pos = Position::new(x, y);
        let on_info_button = hits(self.layout.info.button, pos);
        let on_help_button = hits(self.layout.help.button, pos);

        // Outside-click dismissal: an open panel closes unless the click is
        // inside it or on its own button (the button toggles instead).
        if self.info.is_open() && !on_info_button && !hits(self.layout.info.panel, pos) {
            self.info.dismiss(&mut self.keys);
        }
        if self.help.is_open() && !on_help_button && !hits(self.layout.help.panel, pos) {
            self.help.dismiss(&mut self.keys);
        }

        if on_info_button {
            self.info.toggle(&mut self.keys);
        } else if on_help_button {
            self.help.toggle(&mut self.keys);
        }
    }

    fn update_hover(&mut self, x: u16, y: u16) {
        let pos = Position::new(x, y);
        self.hover = if hits(self.layout.info.button, pos) {
            Some(HoverTarget::InfoButton)
        } else if hits(self.layout.help.button, pos) {
            Some(HoverTarget::HelpButton)
        } else {
            None
        };
    }
}
