//! Common popup utilities

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::tui::themes::Theme;

/// Place a popup of the given size next to its anchor, clamped to the screen
///
/// Prefers the row below the anchor, left-aligned with it. Flips above the
/// anchor when there is no room underneath, and shifts left when the right
/// edge would run off-screen.
pub fn anchor_rect(anchor: Rect, width: u16, height: u16, screen: Rect) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);

    let max_x = screen.right().saturating_sub(width);
    let x = anchor.x.min(max_x).max(screen.x);

    let below = anchor.bottom();
    let y = if below + height <= screen.bottom() {
        below
    } else if anchor.y >= screen.y + height {
        // Flip above the anchor
        anchor.y - height
    } else {
        screen.bottom().saturating_sub(height).max(screen.y)
    };

    Rect::new(x, y, width, height)
}

/// Render popup background (clear + theme bg)
pub fn render_popup_background(f: &mut Frame, area: Rect, theme: &Theme) {
    f.render_widget(Clear, area);
    let bg = Block::default().style(Style::default().bg(theme.bg_color));
    f.render_widget(bg, area);
}

/// Standard popup block with rounded borders
pub fn popup_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .style(Style::default().bg(theme.bg_color))
}

/// Popup title line plus a separator matching its width
pub fn popup_title(title: &str, theme: &Theme) -> Vec<Line<'static>> {
    let separator: String = "─".repeat(title.chars().count().max(8));

    vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            separator,
            Style::default().fg(theme.border_color),
        )),
    ]
}

/// Shave one column of horizontal padding off each side
pub fn inset_x(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_anchor_below_when_room() {
        let button = Rect::new(2, 1, 8, 1);
        let area = anchor_rect(button, 20, 6, SCREEN);
        assert_eq!(area, Rect::new(2, 2, 20, 6));
    }

    #[test]
    fn test_anchor_shifts_left_at_right_edge() {
        let button = Rect::new(70, 1, 8, 1);
        let area = anchor_rect(button, 20, 6, SCREEN);
        assert_eq!(area.right(), SCREEN.right());
        assert_eq!(area.y, 2);
    }

    #[test]
    fn test_anchor_flips_above_at_bottom() {
        let button = Rect::new(2, 20, 8, 1);
        let area = anchor_rect(button, 20, 6, SCREEN);
        assert_eq!(area.bottom(), button.y);
    }

    #[test]
    fn test_anchor_clamps_oversized_popup() {
        let button = Rect::new(2, 1, 8, 1);
        let area = anchor_rect(button, 200, 100, SCREEN);
        assert_eq!(area, SCREEN);
    }

    #[test]
    fn test_inset_x() {
        let area = Rect::new(4, 2, 10, 3);
        assert_eq!(inset_x(area), Rect::new(5, 2, 8, 3));

        // Degenerate widths do not underflow
        assert_eq!(inset_x(Rect::new(0, 0, 1, 1)).width, 0);
    }
}
