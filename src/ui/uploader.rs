//! Uploader panel: themed character, progress and the inline error

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::ThemeStyle;
use lepeva::logic::upload::UploadPolicy;
use lepeva::model::types::UploadPhase;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "file"
    } else {
        "files"
    }
}

/// Panel body for the current phase (extracted for testability)
fn build_uploader_lines(
    phase: &UploadPhase,
    error: Option<&str>,
    policy: &UploadPolicy,
    style: &ThemeStyle,
    now: Instant,
) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from("")];

    match phase {
        UploadPhase::Uploading { count, started_at } => {
            let frame = (now.saturating_duration_since(*started_at).as_millis() / 150) as usize;
            lines.push(Line::from(Span::styled(
                SPINNER[frame % SPINNER.len()].to_string(),
                Style::default().fg(style.accent),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Uploading {} {}...", count, plural(*count)),
                bold,
            )));
        }
        UploadPhase::Complete { count, .. } => {
            lines.push(Line::from("🎉"));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Upload Complete!",
                bold.fg(Color::Green),
            )));
            lines.push(Line::from(format!("{} {} added", count, plural(*count))));
        }
        UploadPhase::Idle => {
            lines.push(Line::from(style.uploader_character));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(style.uploader_message, bold)));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw("Press "),
                Span::styled("u", Style::default().fg(Color::Yellow)),
                Span::raw(" to pick files"),
            ]));
            lines.push(Line::from(Span::styled(
                format!(
                    "Up to {} files, {}MB each",
                    policy.max_files, policy.max_size_mb
                ),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    if let Some(error) = error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    lines
}

/// Render the uploader panel
pub fn render_uploader(
    f: &mut Frame,
    area: Rect,
    phase: &UploadPhase,
    error: Option<&str>,
    policy: &UploadPolicy,
    style: &ThemeStyle,
    now: Instant,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.accent))
        .title(" Upload ");

    let paragraph = Paragraph::new(build_uploader_lines(phase, error, policy, style, now))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
