//! Popover panel rendering
//!
//! One panel per trigger button, anchored underneath it. The rendered area
//! is returned so the mouse handler can tell inside clicks from outside
//! clicks.

use buoy_core::ButtonAttrs;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::common::{anchor_rect, inset_x, popup_block, popup_title, render_popup_background};
use crate::tui::themes::Theme;

const MIN_CONTENT_WIDTH: u16 = 18;
const MAX_CONTENT_WIDTH: u16 = 42;

/// Content width for a panel: wide enough for the title and body, within
/// fixed bounds and the screen
fn content_width(attrs: &ButtonAttrs, body: &[String], screen: Rect) -> u16 {
    let title_width = attrs.title.width() as u16;
    let body_width = body.iter().map(|line| line.width() as u16).max().unwrap_or(0);

    title_width
        .max(body_width)
        .clamp(MIN_CONTENT_WIDTH, MAX_CONTENT_WIDTH)
        .min(screen.width.saturating_sub(6))
}

/// Wrap body paragraphs to the given width, preserving blank lines
fn wrap_body(body: &[String], width: usize) -> Vec<String> {
    let width = width.max(1);
    body.iter()
        .flat_map(|paragraph| {
            if paragraph.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(paragraph, width)
                    .into_iter()
                    .map(|line| line.into_owned())
                    .collect()
            }
        })
        .collect()
}

/// Render the panel anchored to its button; returns the panel area
pub fn render_panel(
    f: &mut Frame,
    button: Rect,
    attrs: &ButtonAttrs,
    body: &[String],
    theme: &Theme,
) -> Rect {
    let screen = f.area();
    let width = content_width(attrs, body, screen);
    let lines = wrap_body(body, width as usize);

    // Borders plus the title block plus the wrapped body
    let height = (lines.len() as u16 + 4).min(screen.height);
    let area = anchor_rect(button, width + 4, height, screen);

    render_popup_background(f, area, theme);
    let block = popup_block(theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let title = Paragraph::new(popup_title(&attrs.title, theme));
    f.render_widget(title, inset_x(chunks[0]));

    let body_lines: Vec<Line> = lines.into_iter().map(Line::from).collect();
    let content = Paragraph::new(body_lines).style(Style::default().fg(theme.text_color));
    f.render_widget(content, inset_x(chunks[1]));

    area
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(title: &str) -> ButtonAttrs {
        ButtonAttrs {
            title: title.to_string(),
            ..Default::default()
        }
    }

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_content_width_tracks_longest_line() {
        let body = vec!["short".to_string(), "a somewhat longer line".to_string()];
        let width = content_width(&attrs("Hi"), &body, SCREEN);
        assert_eq!(width, 22);
    }

    #[test]
    fn test_content_width_bounds() {
        assert_eq!(content_width(&attrs(""), &[], SCREEN), MIN_CONTENT_WIDTH);

        let long = vec!["x".repeat(200)];
        assert_eq!(content_width(&attrs(""), &long, SCREEN), MAX_CONTENT_WIDTH);

        // A tiny screen caps the width below the fixed minimum
        let tiny = Rect::new(0, 0, 20, 10);
        assert_eq!(content_width(&attrs(""), &long, tiny), 14);
    }

    #[test]
    fn test_wrap_body_preserves_blank_lines() {
        let body = vec!["one".to_string(), String::new(), "two".to_string()];
        assert_eq!(wrap_body(&body, 20), vec!["one", "", "two"]);
    }

    #[test]
    fn test_wrap_body_wraps_long_paragraphs() {
        let body = vec!["alpha beta gamma delta".to_string()];
        let wrapped = wrap_body(&body, 11);
        assert!(wrapped.len() > 1);
        assert!(wrapped.iter().all(|line| line.width() <= 11));
    }
}
