//! Main TUI application
//!
//! Core application state and event loop.
//! Handler implementations are in the handlers/ module.

use std::io;

use anyhow::Result;
use buoy_core::{KeyRegistry, Popover};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use crate::config::DemoConfig;
use crate::tui::components::{status_bar, toolbar};
use crate::tui::popups::panel;
use crate::tui::state::{HoverTarget, LayoutState};
use crate::tui::themes::{Theme, THEME_REGISTRY};

/// Application state
pub struct App {
    pub theme: Theme,
    /// Global keydown listeners; each open popover keeps one registered here
    pub keys: KeyRegistry,
    pub info: Popover,
    pub help: Popover,
    pub info_body: Vec<String>,
    pub help_body: Vec<String>,
    /// Cached areas for hit testing
    pub layout: LayoutState,
    pub hover: Option<HoverTarget>,
    pub should_quit: bool,
    // Dirty-tracking for render optimization
    needs_redraw: bool,
}

impl App {
    /// Create the app from a theme name and demo config
    pub fn new(theme_name: &str, config: DemoConfig) -> Self {
        let theme = THEME_REGISTRY.get_or_default(theme_name).clone();

        Self {
            theme,
            keys: KeyRegistry::new(),
            info: Popover::new(config.info.button),
            help: Popover::new(config.help.button),
            info_body: config.info.body,
            help_body: config.help.body,
            layout: LayoutState::default(),
            hover: None,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        // Unmount discipline: remove key listeners before the widgets go away
        self.info.close(&mut self.keys);
        self.help.close(&mut self.keys);
        if self.keys.count() > 0 {
            tracing::warn!(count = self.keys.count(), "Key listeners survived shutdown");
        }

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        // Async event stream so the runtime is never blocked waiting on input
        let mut event_stream = EventStream::new();

        loop {
            // Only render if something changed
            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            match event_stream.next().await {
                Some(Ok(event)) => match event {
                    Event::Key(key) => {
                        self.handle_key(key.code, key.modifiers);
                        self.needs_redraw = true;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_event(mouse);
                        self.needs_redraw = true;
                    }
                    Event::Resize(_, _) => {
                        self.needs_redraw = true;
                    }
                    _ => {}
                },
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "Event stream error");
                }
                None => break,
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    fn ui(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Toolbar
                Constraint::Min(0),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());

        let buttons = toolbar::render_toolbar(f, chunks[0], &self.theme, &self.info, &self.help);
        self.layout.info.button = Some(buttons.info);
        self.layout.help.button = Some(buttons.help);

        self.render_content(f, chunks[1]);

        let any_open = self.info.is_open() || self.help.is_open();
        status_bar::render_status_bar(f, chunks[2], &self.theme, any_open, self.hover_text());

        // Panels last so they float over the content; their areas are cached
        // for outside-click hit testing.
        self.layout.info.panel = if self.info.is_open() {
            Some(panel::render_panel(
                f,
                buttons.info,
                self.info.attrs(),
                &self.info_body,
                &self.theme,
            ))
        } else {
            None
        };
        self.layout.help.panel = if self.help.is_open() {
            Some(panel::render_panel(
                f,
                buttons.help,
                self.help.attrs(),
                &self.help_body,
                &self.theme,
            ))
        } else {
            None
        };
    }

    fn render_content(&self, f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    "Click a toolbar button (or press i / h) to open its popover.",
                    Style::default().fg(self.theme.text_color),
                ),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    "Escape or a click anywhere else closes it.",
                    Style::default().fg(self.theme.dim_color),
                ),
            ]),
        ];

        let content = Paragraph::new(lines).style(Style::default().bg(self.theme.bg_color));
        f.render_widget(content, area);
    }

    /// Alt text of the hovered button, for the status bar
    fn hover_text(&self) -> Option<&str> {
        let attrs = match self.hover? {
            HoverTarget::InfoButton => self.info.attrs(),
            HoverTarget::HelpButton => self.help.attrs(),
        };
        (!attrs.alt_text.is_empty()).then_some(attrs.alt_text.as_str())
    }
}
