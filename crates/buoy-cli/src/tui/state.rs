//! UI state shared across handlers
//!
//! Layout rects are cached at render time for mouse hit testing.

use ratatui::layout::Rect;

/// Cached screen areas for one popover widget
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetAreas {
    /// Trigger button, always present after the first render
    pub button: Option<Rect>,
    /// Panel, present only while the popover is open
    pub panel: Option<Rect>,
}

/// Cached areas for hit testing
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutState {
    pub info: WidgetAreas,
    pub help: WidgetAreas,
}

/// Which button the mouse is over, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    InfoButton,
    HelpButton,
}
