use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for the materials dashboard
pub struct LayoutInfo {
    /// Title, theme buttons and guide character
    pub header_area: Rect,
    /// Breadcrumb bar
    pub breadcrumb_area: Rect,
    /// Folder and file cards
    pub contents_area: Rect,
    /// Uploader panel beside the cards
    pub uploader_area: Rect,
    /// Search input area (if visible)
    pub search_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all dashboard components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16, search_visible: bool) -> LayoutInfo {
    let search_height = if search_visible { 3 } else { 0 };

    // Header + breadcrumb + body + search + legend + status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),             // Header (title line, guide line, borders)
            Constraint::Length(3),             // Breadcrumb bar
            Constraint::Min(6),                // Cards + uploader
            Constraint::Length(search_height), // Search input (3 lines when visible, 0 when hidden)
            Constraint::Length(legend_height), // Legend area (dynamic height, exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    // Uploader gets a fixed share; narrow terminals still keep a usable panel
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Min(24)])
        .split(main_chunks[2]);

    LayoutInfo {
        header_area: main_chunks[0],
        breadcrumb_area: main_chunks[1],
        contents_area: body[0],
        uploader_area: body[1],
        search_area: if search_visible {
            Some(main_chunks[3])
        } else {
            None
        },
        legend_area: main_chunks[4],
        status_area: main_chunks[5],
    }
}
