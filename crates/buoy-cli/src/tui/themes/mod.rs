//! Themes for the buoy TUI

mod definitions;
mod registry;

use once_cell::sync::Lazy;
use ratatui::style::Color;

pub use registry::ThemeRegistry;

/// Global theme registry
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// A color theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub display_name: String,
    pub bg_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub border_color: Color,
    pub title_color: Color,
    pub accent_color: Color,
    pub success_color: Color,
    pub warning_color: Color,
    pub error_color: Color,
    pub info_color: Color,
}

impl Theme {
    /// Resolve a button variant name to a theme color
    ///
    /// Variant names are free-form; anything unrecognized gets the default
    /// text color rather than an error.
    pub fn variant_color(&self, variant: &str) -> Color {
        match variant {
            "success" => self.success_color,
            "warning" => self.warning_color,
            "error" | "destructive" => self.error_color,
            "info" => self.info_color,
            "brand" | "accent" => self.accent_color,
            _ => self.text_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_lookup() {
        let theme = THEME_REGISTRY.get_or_default("buoy");
        assert_eq!(theme.variant_color("success"), theme.success_color);
        assert_eq!(theme.variant_color("destructive"), theme.error_color);
        assert_eq!(theme.variant_color("brand"), theme.accent_color);
    }

    #[test]
    fn test_unknown_variant_falls_back_to_text() {
        let theme = THEME_REGISTRY.get_or_default("buoy");
        assert_eq!(theme.variant_color("sparkly"), theme.text_color);
        assert_eq!(theme.variant_color(""), theme.text_color);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let theme = THEME_REGISTRY.get_or_default("no-such-theme");
        assert_eq!(theme.name, "buoy");
    }
}
