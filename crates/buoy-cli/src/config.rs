//! Demo configuration
//!
//! Button attributes and panel content for the two demo popovers, optionally
//! loaded from a TOML file:
//!
//! ```toml
//! [info]
//! body = ["First line.", "", "Another paragraph."]
//!
//! [info.button]
//! icon = "ℹ"
//! title = "About"
//! alt_text = "About this tool"
//! variant = "info"
//! ```

use std::path::Path;

use buoy_core::ButtonAttrs;
use serde::Deserialize;
use thiserror::Error;

/// Config loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// File is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One popover: its trigger button plus the panel body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub button: ButtonAttrs,
    /// Panel body, one entry per paragraph; empty strings are blank lines
    pub body: Vec<String>,
}

/// Full demo configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub info: PanelConfig,
    pub help: PanelConfig,
}

impl DemoConfig {
    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// The built-in demo content used when no config file is given
    pub fn builtin() -> Self {
        Self {
            info: PanelConfig {
                button: ButtonAttrs {
                    icon: "ℹ".to_string(),
                    alt_text: "About this demo".to_string(),
                    title: "About".to_string(),
                    variant: "info".to_string(),
                },
                body: vec![
                    "Buoy is a popover button widget for terminal UIs.".to_string(),
                    String::new(),
                    "Each button owns one panel and registers a global".to_string(),
                    "Escape listener only while that panel is open.".to_string(),
                ],
            },
            help: PanelConfig {
                button: ButtonAttrs {
                    icon: "?".to_string(),
                    alt_text: "Keyboard shortcuts".to_string(),
                    title: "Shortcuts".to_string(),
                    variant: "success".to_string(),
                },
                body: vec![
                    "i      toggle the info popover".to_string(),
                    "h      toggle this popover".to_string(),
                    "esc    close open popovers".to_string(),
                    "q      quit".to_string(),
                ],
            },
        }
    }
}
