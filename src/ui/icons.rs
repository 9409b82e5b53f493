use ratatui::{
    style::{Color, Style},
    text::Span,
};

use super::theme::ThemeStyle;
use lepeva::logic::file::FileKind;
use lepeva::IconMode;

/// Icon colors using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub image_color: Color,
    pub pdf_color: Color,
    pub document_color: Color,
    pub spreadsheet_color: Color,
    pub presentation_color: Color,
    pub audio_color: Color,
    pub video_color: Color,
    pub other_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            image_color: Color::Magenta,
            pdf_color: Color::Red,
            document_color: Color::Blue,
            spreadsheet_color: Color::Green,
            presentation_color: Color::Yellow,
            audio_color: Color::Cyan,
            video_color: Color::LightMagenta,
            other_color: Color::Gray,
        }
    }
}

/// Icon renderer that handles both emoji and Nerd Font modes
#[derive(Debug, Clone)]
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode, theme: IconTheme) -> Self {
        Self { mode, theme }
    }

    /// Folder card icon; emoji mode follows the visual theme
    pub fn folder_icon(&self, style: &ThemeStyle) -> Span<'static> {
        match self.mode {
            IconMode::Emoji => Span::styled(style.folder_icon, Style::default().fg(style.accent)),
            IconMode::NerdFont => Span::styled("\u{F07B}", Style::default().fg(style.accent)),
        }
    }

    /// File card icon chosen by MIME category
    pub fn file_icon(&self, kind: FileKind) -> Span<'static> {
        let (emoji_icon, nerd_icon, color) = match kind {
            FileKind::Image => ("🖼️", "\u{F1C5}", self.theme.image_color),
            FileKind::Pdf => ("📄", "\u{F1C1}", self.theme.pdf_color),
            FileKind::Document => ("📝", "\u{F1C2}", self.theme.document_color),
            FileKind::Spreadsheet => ("📊", "\u{F1C3}", self.theme.spreadsheet_color),
            FileKind::Presentation => ("📽️", "\u{F1C4}", self.theme.presentation_color),
            FileKind::Audio => ("🎵", "\u{F1C7}", self.theme.audio_color),
            FileKind::Video => ("🎬", "\u{F1C8}", self.theme.video_color),
            FileKind::Other => ("📁", "\u{F15B}", self.theme.other_color),
        };

        let icon = match self.mode {
            IconMode::Emoji => emoji_icon,
            IconMode::NerdFont => nerd_icon,
        };

        Span::styled(icon, Style::default().fg(color))
    }

    /// Marker drawn next to the item being carried
    pub fn drag_marker(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "✋",
            IconMode::NerdFont => "\u{F256}",
        }
    }
}
