//! Folder Contents Grid
//!
//! Folder cards first, then file cards, laid out in rows. Highlights the
//! selection, the carried item and the folder it would land in.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::icons::IconRenderer;
use super::theme::ThemeStyle;
use lepeva::logic::file::file_kind;
use lepeva::logic::formatting::{format_date, format_file_size};
use lepeva::logic::layout::{first_visible_row, grid_columns, grid_rows, CARD_HEIGHT, CARD_WIDTH};
use lepeva::model::types::{DragItem, Entry};

/// Cut `text` to at most `max_width` columns, marking the cut with '…'
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// How a card is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardState {
    Normal,
    Selected,
    Carried,
    DropTarget,
}

fn card_state(entry: &Entry<'_>, is_selected: bool, drag: Option<&DragItem>) -> CardState {
    let is_carried = drag.is_some_and(|d| d.kind == entry.kind() && d.id == entry.id());
    if is_carried {
        CardState::Carried
    } else if is_selected && drag.is_some() && matches!(entry, Entry::Folder(_)) {
        CardState::DropTarget
    } else if is_selected {
        CardState::Selected
    } else {
        CardState::Normal
    }
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    entry: &Entry<'_>,
    state: CardState,
    icons: &IconRenderer,
    style: &ThemeStyle,
) {
    let (border_type, border_style) = match state {
        CardState::Normal => (BorderType::Rounded, Style::default().fg(Color::DarkGray)),
        CardState::Selected => (
            BorderType::Thick,
            Style::default().fg(style.accent).add_modifier(Modifier::BOLD),
        ),
        CardState::Carried => (BorderType::Double, Style::default().fg(Color::Yellow)),
        CardState::DropTarget => (
            BorderType::Thick,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let name_width = area.width.saturating_sub(6) as usize;
    let (icon, meta) = match entry {
        Entry::Folder(_) => (icons.folder_icon(style), "Folder".to_string()),
        Entry::File(material) => (
            icons.file_icon(file_kind(&material.mime_type)),
            format!(
                "{} · {}",
                format_file_size(material.size),
                format_date(&material.last_modified)
            ),
        ),
    };

    let mut title_spans = vec![icon, Span::raw(" ")];
    if state == CardState::Carried {
        title_spans.insert(0, Span::raw(icons.drag_marker()));
    }
    title_spans.push(Span::styled(
        truncate_to_width(entry.name(), name_width),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let lines = vec![
        Line::from(title_spans),
        Line::from(Span::styled(
            truncate_to_width(&meta, area.width.saturating_sub(2) as usize),
            Style::default().fg(Color::Gray),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the contents grid and return the number of columns used
pub fn render_contents(
    f: &mut Frame,
    area: Rect,
    entries: &[Entry<'_>],
    selected: Option<usize>,
    drag: Option<&DragItem>,
    search_query: &str,
    icons: &IconRenderer,
    style: &ThemeStyle,
) -> usize {
    let title = if search_query.is_empty() {
        format!(" Materials ({}) ", entries.len())
    } else {
        format!(" Materials ({} matching \"{}\") ", entries.len(), search_query)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.accent))
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = grid_columns(inner.width);

    if entries.is_empty() {
        let message = if search_query.is_empty() {
            style.empty_message.to_string()
        } else {
            format!("Nothing here matches \"{}\"", search_query)
        };
        let lines = vec![
            Line::from(""),
            Line::from(style.empty_icon),
            Line::from(""),
            Line::from(Span::styled(message, Style::default().add_modifier(Modifier::BOLD))),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        return columns;
    }

    let visible_rows = grid_rows(inner.height);
    let first_row = first_visible_row(selected, columns, visible_rows);
    let start = first_row * columns;

    for (offset, entry) in entries.iter().enumerate().skip(start) {
        let slot = offset - start;
        let row = slot / columns;
        if row >= visible_rows {
            break;
        }
        let col = slot % columns;

        let card_area = Rect {
            x: inner.x + col as u16 * CARD_WIDTH,
            y: inner.y + row as u16 * CARD_HEIGHT,
            width: CARD_WIDTH.min(inner.width),
            height: CARD_HEIGHT.min(inner.height),
        };
        let state = card_state(entry, selected == Some(offset), drag);
        render_card(f, card_area, entry, state, icons, style);
    }

    columns
}
