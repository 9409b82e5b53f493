use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use lepeva::logic::formatting::{format_date, format_file_size};
use lepeva::model::types::Entry;

/// Build the status text (extracted for testability)
fn build_status_line(
    folder_label: Option<&str>,
    folder_count: usize,
    file_count: usize,
    selected: Option<Entry<'_>>,
    carrying: Option<&str>,
) -> String {
    let location = match folder_label {
        Some(name) => format!("Folder: {}", name),
        None => "Folder: Home".to_string(),
    };

    let counts = format!("{} folders, {} files", folder_count, file_count);

    let selection = match selected {
        Some(Entry::Folder(folder)) => format!(
            "{} (created {})",
            folder.name,
            format_date(&folder.created_at)
        ),
        Some(Entry::File(material)) => format!(
            "{} ({}, {})",
            material.name,
            format_file_size(material.size),
            format_date(&material.last_modified)
        ),
        None => "-".to_string(),
    };

    let mut line = format!("{:<25} │ {:>20} │ {}", location, counts, selection);
    if let Some(name) = carrying {
        line.push_str(&format!(" │ Carrying: {}", name));
    }
    line
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    folder_label: Option<&str>,
    folder_count: usize,
    file_count: usize,
    selected: Option<Entry<'_>>,
    carrying: Option<&str>,
) {
    let status_line = build_status_line(folder_label, folder_count, file_count, selected, carrying);

    let paragraph = Paragraph::new(Line::from(vec![Span::raw(status_line)]))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lepeva::model::types::Material;

    #[test]
    fn test_status_for_selected_file() {
        let material = Material {
            id: "material-1".to_string(),
            name: "Cat picture.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            size: 1024 * 1024 * 5 / 2,
            last_modified: Utc.with_ymd_and_hms(2025, 3, 7, 9, 0, 0).unwrap(),
            folder_id: "folder-1".to_string(),
            url: None,
            session_id: None,
        };
        let line = build_status_line(Some("Animals"), 2, 1, Some(Entry::File(&material)), None);
        assert!(line.contains("Folder: Animals"));
        assert!(line.contains("2 folders, 1 files"));
        assert!(line.contains("Cat picture.jpg (2.5 MB, Mar 7, 2025)"));
    }

    #[test]
    fn test_status_at_root_while_carrying() {
        let line = build_status_line(None, 3, 2, None, Some("Colors"));
        assert!(line.starts_with("Folder: Home"));
        assert!(line.ends_with("Carrying: Colors"));
    }
}
