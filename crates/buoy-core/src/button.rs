//! Pass-through attributes for the popover trigger button

use serde::Deserialize;

/// Display attributes for the trigger button
///
/// These are forwarded to the rendered button unchanged. `variant` is a
/// free-form color name the host resolves against its theme; unknown names
/// fall back to the default text color rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ButtonAttrs {
    /// Glyph shown on the button
    pub icon: String,
    /// Short description surfaced by the host (status bar on hover)
    pub alt_text: String,
    /// Button label, reused as the panel title
    pub title: String,
    /// Color variant name (e.g. "success", "warning", "error", "info")
    pub variant: String,
}

impl Default for ButtonAttrs {
    fn default() -> Self {
        Self {
            icon: "ℹ".to_string(),
            alt_text: String::new(),
            title: String::new(),
            variant: "success".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let attrs = ButtonAttrs::default();
        assert_eq!(attrs.icon, "ℹ");
        assert_eq!(attrs.variant, "success");
        assert!(attrs.title.is_empty());
        assert!(attrs.alt_text.is_empty());
    }
}
