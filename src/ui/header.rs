use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{style_for, ThemeStyle};
use lepeva::logic::ui::tip_text;
use lepeva::Theme;

/// Theme buttons with the active one highlighted (extracted for testability)
fn build_theme_spans(active: Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (idx, theme) in Theme::ALL.iter().enumerate() {
        let label = format!(" {} {} ", idx + 1, theme.as_str());
        if *theme == active {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(style_for(*theme).accent)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(Color::Gray)));
        }
        spans.push(Span::raw(" "));
    }
    spans
}

/// The guide sways one column every half second
fn guide_indent(started_at: Instant, now: Instant) -> &'static str {
    if (now.saturating_duration_since(started_at).as_millis() / 500) % 2 == 0 {
        ""
    } else {
        " "
    }
}

/// Render the dashboard header: title, theme buttons and the guide's tip
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    theme: Theme,
    active_tip: usize,
    style: &ThemeStyle,
    started_at: Instant,
    now: Instant,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.accent));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "📚 My Lesson Materials",
            Style::default().fg(style.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(build_theme_spans(theme)),
    ]);
    f.render_widget(title, columns[0]);

    let guide = Paragraph::new(vec![
        Line::from(vec![
            Span::raw(guide_indent(started_at, now)),
            Span::raw(style.guide_icon),
            Span::styled(
                format!(" {} says:", style.guide_name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("💬 {}", tip_text(active_tip)),
            Style::default().fg(Color::White),
        )),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(guide, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_active_theme_is_highlighted() {
        let spans = build_theme_spans(Theme::Ocean);
        let active: Vec<&str> = spans
            .iter()
            .filter(|s| s.style.bg.is_some())
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(active.len(), 1);
        assert!(active[0].contains("3"));
    }

    #[test]
    fn test_guide_sways() {
        let start = Instant::now();
        assert_eq!(guide_indent(start, start), "");
        assert_eq!(guide_indent(start, start + Duration::from_millis(600)), " ");
    }
}
