use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Icon and border color for a toast message
fn toast_style(message: &str) -> (&'static str, Color) {
    if message.starts_with("Error:") {
        ("✗ ", Color::Red)
    } else {
        ("✓ ", Color::Green)
    }
}

/// Centered toast box near the top of `area`
fn toast_area(area: Rect, message: &str) -> Rect {
    let max_width = area.width.min(80);
    let toast_width = ((message.width() + 6) as u16).min(max_width);

    Rect {
        x: area.x + area.width.saturating_sub(toast_width) / 2,
        y: area.y + 3.min(area.height.saturating_sub(1)),
        width: toast_width,
        height: 4.min(area.height),
    }
}

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_area(area, message);

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    let (icon, color) = toast_style(message);
    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(message.to_string()),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_toasts_are_red() {
        assert_eq!(toast_style("Error: Cannot move a folder into itself"), ("✗ ", Color::Red));
        assert_eq!(toast_style("Folder \"Songs\" created!"), ("✓ ", Color::Green));
    }

    #[test]
    fn test_toast_area_fits_screen() {
        let screen = Rect::new(0, 0, 40, 10);
        let area = toast_area(screen, &"x".repeat(200));
        assert_eq!(area.width, 40);
        assert_eq!(area.x, 0);

        let area = toast_area(Rect::new(0, 0, 100, 30), "Moved Cat picture.jpg into Colors");
        assert!(area.width < 100);
        assert_eq!(area.x, (100 - area.width) / 2);
    }
}
