//! Toolbar component - top bar holding the popover trigger buttons
//!
//! Returns the clickable button areas so the mouse handler can hit-test
//! against them.

use buoy_core::Popover;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

/// Clickable areas of the rendered toolbar buttons
#[derive(Debug, Clone, Copy)]
pub struct ButtonAreas {
    pub info: Rect,
    pub help: Rect,
}

/// Render the toolbar with both trigger buttons
pub fn render_toolbar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    info: &Popover,
    help: &Popover,
) -> ButtonAreas {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .style(Style::default().bg(theme.bg_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(inner);

    // Buttons, left to right, with their screen positions tracked as the
    // spans are laid down
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    let mut x = chunks[0].x + 1;
    let info_area = push_button(&mut spans, &mut x, chunks[0], info, theme);
    spans.push(Span::raw("  "));
    x += 2;
    let help_area = push_button(&mut spans, &mut x, chunks[0], help, theme);

    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    // Right side: app name
    let name = Paragraph::new(Span::styled(
        "buoy ",
        Style::default().fg(theme.dim_color),
    ))
    .alignment(Alignment::Right);
    f.render_widget(name, chunks[1]);

    ButtonAreas {
        info: info_area,
        help: help_area,
    }
}

/// Append one button's spans and return its clickable area
fn push_button(
    spans: &mut Vec<Span<'static>>,
    x: &mut u16,
    row: Rect,
    popover: &Popover,
    theme: &Theme,
) -> Rect {
    let attrs = popover.attrs();
    let label = if attrs.title.is_empty() {
        format!(" {} ", attrs.icon)
    } else {
        format!(" {} {} ", attrs.icon, attrs.title)
    };
    let width = label.width() as u16;

    let mut style = Style::default()
        .fg(theme.variant_color(&attrs.variant))
        .add_modifier(Modifier::BOLD);
    if popover.is_open() {
        // Pressed look while the panel is up
        style = style.add_modifier(Modifier::REVERSED);
    }

    let button_area = Rect::new(*x, row.y, width, 1).intersection(row);
    spans.push(Span::styled(label, style));
    *x += width;

    button_area
}

#[cfg(test)]
mod tests {
    use super::*;
    use buoy_core::ButtonAttrs;

    #[test]
    fn test_button_area_matches_label_width() {
        let popover = Popover::new(ButtonAttrs {
            icon: "?".to_string(),
            title: "Help".to_string(),
            ..Default::default()
        });
        let row = Rect::new(1, 1, 40, 1);
        let theme = crate::tui::themes::THEME_REGISTRY.get_or_default("terminal");

        let mut spans = Vec::new();
        let mut x = 2;
        let area = push_button(&mut spans, &mut x, row, &popover, theme);

        // " ? Help " is 8 columns
        assert_eq!(area, Rect::new(2, 1, 8, 1));
        assert_eq!(x, 10);
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_button_area_clips_to_row() {
        let popover = Popover::new(ButtonAttrs {
            title: "A very long button title".to_string(),
            ..Default::default()
        });
        let row = Rect::new(0, 0, 10, 1);
        let theme = crate::tui::themes::THEME_REGISTRY.get_or_default("terminal");

        let mut spans = Vec::new();
        let mut x = 0;
        let area = push_button(&mut spans, &mut x, row, &popover, theme);
        assert!(area.right() <= row.right());
    }
}
