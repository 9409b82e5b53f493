//! Per-theme icon sets, characters and messages

use lepeva::Theme;
use ratatui::style::Color;

/// Everything that changes when the theme changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyle {
    // Breadcrumb bar
    pub home_icon: &'static str,
    pub back_icon: &'static str,
    pub separator_icon: &'static str,
    pub crumb_icon: &'static str,
    pub active_crumb_icon: &'static str,

    // Contents grid
    pub folder_icon: &'static str,
    pub empty_icon: &'static str,
    pub empty_message: &'static str,

    // Uploader panel
    pub uploader_character: &'static str,
    pub uploader_message: &'static str,

    // Guide character in the header
    pub guide_name: &'static str,
    pub guide_icon: &'static str,

    pub accent: Color,
}

const DEFAULT: ThemeStyle = ThemeStyle {
    home_icon: "🏠",
    back_icon: "⬅️",
    separator_icon: "📂",
    crumb_icon: "📁",
    active_crumb_icon: "📂",
    folder_icon: "📁",
    empty_icon: "🔍",
    empty_message: "This folder is empty!",
    uploader_character: "🦊",
    uploader_message: "Drop your files here!",
    guide_name: "Teacher",
    guide_icon: "👩‍🏫",
    accent: Color::Rgb(0x4D, 0x9D, 0xE0),
};

const JUNGLE: ThemeStyle = ThemeStyle {
    home_icon: "🌴",
    back_icon: "🦁",
    separator_icon: "🌿",
    crumb_icon: "🍃",
    active_crumb_icon: "🌿",
    folder_icon: "🌿",
    empty_icon: "🦁",
    empty_message: "No animals in this part of the jungle!",
    uploader_character: "🐵",
    uploader_message: "Swing your files into the jungle!",
    guide_name: "Panda",
    guide_icon: "🐼",
    accent: Color::Rgb(0x39, 0xB5, 0x4A),
};

const OCEAN: ThemeStyle = ThemeStyle {
    home_icon: "🏝️",
    back_icon: "🐠",
    separator_icon: "🌊",
    crumb_icon: "🐚",
    active_crumb_icon: "🌊",
    folder_icon: "🐚",
    empty_icon: "🐠",
    empty_message: "No fish in this part of the ocean!",
    uploader_character: "🐠",
    uploader_message: "Splash your files into the ocean!",
    guide_name: "Penguin",
    guide_icon: "🐧",
    accent: Color::Rgb(0x1E, 0x88, 0xE5),
};

const SPACE: ThemeStyle = ThemeStyle {
    home_icon: "🚀",
    back_icon: "👽",
    separator_icon: "🌠",
    crumb_icon: "🌟",
    active_crumb_icon: "🌠",
    folder_icon: "🌟",
    empty_icon: "👽",
    empty_message: "No aliens in this galaxy!",
    uploader_character: "👾",
    uploader_message: "Blast your files into space!",
    guide_name: "Fox",
    guide_icon: "🦊",
    accent: Color::Rgb(0xE1, 0x5C, 0xD5),
};

pub fn style_for(theme: Theme) -> &'static ThemeStyle {
    match theme {
        Theme::Default => &DEFAULT,
        Theme::Jungle => &JUNGLE,
        Theme::Ocean => &OCEAN,
        Theme::Space => &SPACE,
    }
}
