//! LEPEVA materials browser library
//!
//! Exposes the pure layers (model, logic, config, services) for the binary
//! and for testing.

pub mod config;
pub mod logic;
pub mod model;
pub mod services;

/// Visual theme for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Jungle,
    Ocean,
    Space,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Default, Theme::Jungle, Theme::Ocean, Theme::Space];

    pub fn as_str(&self) -> &str {
        match self {
            Theme::Default => "Default",
            Theme::Jungle => "Jungle",
            Theme::Ocean => "Ocean",
            Theme::Space => "Space",
        }
    }

    /// Parse a theme name as typed on the command line
    pub fn from_name(name: &str) -> Option<Theme> {
        match name.trim().to_lowercase().as_str() {
            "default" | "home" => Some(Theme::Default),
            "jungle" => Some(Theme::Jungle),
            "ocean" => Some(Theme::Ocean),
            "space" => Some(Theme::Space),
            _ => None,
        }
    }
}

/// Which top-level screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,   // Marketing page
    Materials, // File/folder dashboard
}

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons (📁, 📄, etc.)
    NerdFont, // Nerd Fonts icons (U+E5FF, etc.)
}

impl IconMode {
    /// Parse the icon mode string from the config file
    pub fn from_config(value: &str) -> IconMode {
        match value.to_lowercase().as_str() {
            "nerdfont" | "nerd" | "nf" => IconMode::NerdFont,
            _ => IconMode::Emoji,
        }
    }
}
