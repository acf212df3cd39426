//! Theme registry for discovering and accessing themes

use super::Theme;

/// Registry of all built-in themes, in registration order
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    pub fn new() -> Self {
        use super::definitions::*;

        Self {
            themes: vec![
                // System/Terminal theme - uses native terminal colors
                terminal(),
                buoy(),
                tokyo_night(),
                dracula(),
                nord(),
            ],
        }
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes
            .iter()
            .find(|theme| theme.name == name)
            .or_else(|| self.themes.iter().find(|theme| theme.name == "buoy"))
            .expect("Default theme must exist")
    }

    /// All themes in registration order
    pub fn list(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    /// Number of registered themes
    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
