//! Status bar - key hints and hover text

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

/// Render the bottom status bar
///
/// Left: key hints (the close hint only while a popover is open).
/// Right: the hovered button's alt text, if any.
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    any_open: bool,
    hover_text: Option<&str>,
) {
    let right_width = hover_text.map(|text| text.width() as u16 + 2).unwrap_or(0);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    let mut hints = vec![("i", "info"), ("h", "help")];
    if any_open {
        hints.push(("esc", "close"));
    }
    hints.push(("q", "quit"));

    let mut spans = vec![Span::raw(" ")];
    for (key, label) in hints {
        spans.push(Span::styled(
            key,
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(": {}  ", label),
            Style::default().fg(theme.dim_color),
        ));
    }

    let left = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg_color));
    f.render_widget(left, chunks[0]);

    if let Some(text) = hover_text {
        let right = Paragraph::new(Span::styled(
            format!("{} ", text),
            Style::default()
                .fg(theme.dim_color)
                .add_modifier(Modifier::ITALIC),
        ))
        .style(Style::default().bg(theme.bg_color))
        .alignment(Alignment::Right);
        f.render_widget(right, chunks[1]);
    }
}
