use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::ThemeStyle;
use lepeva::model::types::Folder;

/// Caption under the crumbs
pub fn location_caption(path: &[Folder]) -> String {
    match path.last() {
        Some(folder) => format!("Current folder: {}", folder.name),
        None => "You're at the root folder".to_string(),
    }
}

/// Build the crumb spans: back button, home, then one crumb per ancestor
fn build_crumb_spans(path: &[Folder], style: &ThemeStyle) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let accent = Style::default().fg(style.accent).add_modifier(Modifier::BOLD);

    if !path.is_empty() {
        spans.push(Span::styled(
            format!("{} Back ", style.back_icon),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::raw("│ "));
    }

    let home = format!("{} Home", style.home_icon);
    if path.is_empty() {
        spans.push(Span::styled(home, accent));
    } else {
        spans.push(Span::raw(home));
    }

    for (idx, folder) in path.iter().enumerate() {
        spans.push(Span::raw(format!(" {} ", style.separator_icon)));
        let is_current = idx + 1 == path.len();
        if is_current {
            spans.push(Span::styled(
                format!("{} {}", style.active_crumb_icon, folder.name),
                accent,
            ));
        } else {
            // Alt+N jumps here
            spans.push(Span::styled(
                format!("{} {}", style.crumb_icon, folder.name),
                Style::default().fg(Color::White),
            ));
            spans.push(Span::styled(
                format!("[{}]", idx + 1),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    spans
}

/// Render the breadcrumb bar
pub fn render_breadcrumb_bar(f: &mut Frame, area: Rect, path: &[Folder], style: &ThemeStyle) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.accent))
        .title(location_caption(path));

    let paragraph = Paragraph::new(Line::from(build_crumb_spans(path, style))).block(block);
    f.render_widget(paragraph, area);
}
