use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the legend needs to know to pick its keys
#[derive(Debug, Clone, Copy, Default)]
pub struct LegendContext {
    pub vim_mode: bool,
    pub at_root: bool,
    pub dragging: bool,
    pub search_mode: bool,
    pub has_search_query: bool,
}

fn key(k: &'static str) -> Span<'static> {
    Span::styled(k, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(ctx: LegendContext) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Carrying an item narrows the useful keys
    if ctx.dragging {
        hotkey_spans.extend(vec![
            key("←↑↓→"),
            Span::raw(":Move  "),
            key("Enter/m"),
            Span::raw(":Drop on folder  "),
            key("p"),
            Span::raw(":Drop here  "),
            key("Esc"),
            Span::raw(":Cancel  "),
        ]);
        if !ctx.at_root {
            hotkey_spans.extend(vec![key("⌫"), Span::raw(":Back  ")]);
        }
        return hotkey_spans;
    }

    // Navigation keys (different for vim mode)
    if ctx.vim_mode {
        hotkey_spans.extend(vec![
            key("hjkl"),
            Span::raw(":Nav  "),
            key("gg/G"),
            Span::raw(":First/Last  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            key("←↑↓→"),
            Span::raw(":Nav  "),
            key("Enter"),
            Span::raw(":Open  "),
        ]);
    }

    // Back and home only mean something below the root
    if !ctx.at_root {
        hotkey_spans.extend(vec![
            key("⌫"),
            Span::raw(":Back  "),
            key("H"),
            Span::raw(":Home  "),
            key("Alt+1-9"),
            Span::raw(":Crumb  "),
        ]);
    }

    // Search key - contextual based on search state
    if ctx.search_mode {
        hotkey_spans.extend(vec![key("Esc"), Span::raw(":Exit Search  ")]);
    } else if ctx.has_search_query {
        hotkey_spans.extend(vec![key("Esc"), Span::raw(":Clear Search  ")]);
    } else {
        let search_key = if ctx.vim_mode { "/" } else { "^F" };
        hotkey_spans.extend(vec![key(search_key), Span::raw(":Search  ")]);
    }

    hotkey_spans.extend(vec![
        key("m"),
        Span::raw(":Move  "),
        key("n"),
        Span::raw(":New Folder  "),
        key("u"),
        Span::raw(":Upload  "),
        key("t/1-4"),
        Span::raw(":Theme  "),
        key("L"),
        Span::raw(":Home Page  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(ctx: LegendContext) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(ctx));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, ctx: LegendContext) {
    f.render_widget(build_legend_paragraph(ctx), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, ctx: LegendContext) -> u16 {
    // Count lines without the block; line_count() ignores attached borders
    let paragraph_for_counting = Paragraph::new(vec![Line::from(build_hotkey_spans(ctx))])
        .wrap(ratatui::widgets::Wrap { trim: false });

    // Calculate available width (subtract left + right borders)
    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
