use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use lepeva::logic::upload::UploadPolicy;
use lepeva::model::types::InputDialog;

/// Title, prompt and hint lines for a dialog (extracted for testability)
fn dialog_text(
    dialog: &InputDialog,
    folder_label: &str,
    policy: &UploadPolicy,
) -> (&'static str, Vec<String>) {
    match dialog {
        InputDialog::CreateFolder { .. } => (
            "Create New Folder",
            vec![
                format!("New folder inside {}", folder_label),
                String::new(),
                "Folder name:".to_string(),
            ],
        ),
        InputDialog::Upload { .. } => {
            let types = if policy.accepted_types.is_empty() {
                "any type".to_string()
            } else {
                policy.accepted_types.join(", ")
            };
            (
                "Upload Files",
                vec![
                    format!("Upload into {}", folder_label),
                    format!(
                        "Up to {} files, {}MB each ({})",
                        policy.max_files, policy.max_size_mb, types
                    ),
                    "Path or glob (e.g. ~/Pictures/*.png):".to_string(),
                ],
            )
        }
    }
}

/// Render a text input dialog centered on screen
pub fn render_input_dialog(
    f: &mut Frame,
    dialog: &InputDialog,
    folder_label: &str,
    policy: &UploadPolicy,
) {
    let (title, prompt) = dialog_text(dialog, folder_label, policy);

    let mut lines: Vec<Line> = prompt.into_iter().map(Line::from).collect();
    lines.push(Line::from(vec![
        Span::styled(
            format!("> {}", dialog.buffer()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "█",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter to confirm, Esc to cancel",
        Style::default().fg(Color::DarkGray),
    )));

    // Center the prompt
    let area = f.area();
    let dialog_width = 60.min(area.width);
    let dialog_height = (lines.len() as u16 + 2).min(area.height);
    let dialog_area = Rect {
        x: (area.width.saturating_sub(dialog_width)) / 2,
        y: (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    let prompt = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, dialog_area);
    f.render_widget(prompt, dialog_area);
}
