//! Landing Page
//!
//! Logo, hero, floating letters, feature cards and the call to action.
//! `Enter` starts learning (opens the materials dashboard).

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::ThemeStyle;

const FLOATING_ITEMS: [&str; 6] = ["A", "B", "C", "1", "2", "3"];

/// One bob cycle, ms
const BOB_PERIOD_MS: u128 = 3000;

/// Stagger between neighbouring letters, ms
const BOB_STAGGER_MS: u128 = 200;

const PRIMARY: Color = Color::Rgb(0x4A, 0x90, 0xE2);
const SECONDARY: Color = Color::Rgb(0xFF, 0x99, 0x00);
const ACCENT: Color = Color::Rgb(0xE1, 0x5C, 0xD5);

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    color: Color,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Fun Interactive Games",
        description: "Learn through play with our collection of educational games!",
        icon: "🎮",
        color: PRIMARY,
    },
    Feature {
        title: "Friendly Teachers",
        description: "Connect with dedicated Filipino teachers who make learning fun!",
        icon: "👩‍🏫",
        color: SECONDARY,
    },
    Feature {
        title: "Learn at Your Pace",
        description: "Flexible scheduling that fits your child's learning style!",
        icon: "⏱️",
        color: ACCENT,
    },
];

/// Vertical lift (0 or 1 rows) of floating item `index` after `elapsed_ms`
///
/// Items rise during the middle half of their cycle, each one a little
/// behind its left neighbour.
fn bob_offset(elapsed_ms: u128, index: usize) -> u16 {
    let delay = index as u128 * BOB_STAGGER_MS;
    let Some(local) = elapsed_ms.checked_sub(delay) else {
        return 0;
    };
    let phase = local % BOB_PERIOD_MS;
    if (BOB_PERIOD_MS / 4..BOB_PERIOD_MS * 3 / 4).contains(&phase) {
        1
    } else {
        0
    }
}

fn item_color(index: usize) -> Color {
    match index % 3 {
        0 => PRIMARY,
        1 => SECONDARY,
        _ => ACCENT,
    }
}

fn render_floating_items(f: &mut Frame, area: Rect, elapsed_ms: u128) {
    if area.height < 2 || area.width == 0 {
        return;
    }
    let spacing = area.width / (FLOATING_ITEMS.len() as u16 + 1);
    for (i, item) in FLOATING_ITEMS.iter().enumerate() {
        let x = area.x + spacing * (i as u16 + 1);
        let y = area.y + 1 - bob_offset(elapsed_ms, i);
        let cell = Rect::new(x.saturating_sub(1), y, 3.min(area.width), 1);
        let letter = Paragraph::new(Span::styled(
            format!(" {} ", item),
            Style::default()
                .fg(Color::White)
                .bg(item_color(i))
                .add_modifier(Modifier::BOLD),
        ));
        f.render_widget(letter, cell);
    }
}

fn hero_lines(style: &ThemeStyle) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    vec![
        Line::from(vec![
            Span::styled("Fun English Learning ", bold),
            Span::styled("for Kids!", bold.fg(ACCENT)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Connect with friendly Filipino teachers and learn English through"),
            Span::styled(" interactive games", bold.fg(SECONDARY)),
            Span::raw(" and"),
            Span::styled(" fun activities", bold.fg(ACCENT)),
            Span::raw("!"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " ▶ Start Learning Now (Enter) ",
                Style::default()
                    .fg(Color::White)
                    .bg(style.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(" Watch Demo ", Style::default().fg(SECONDARY)),
        ]),
    ]
}

fn render_features(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let heading = Paragraph::new(Line::from(vec![
        Span::raw("Why Kids "),
        Span::styled("Love", Style::default().fg(SECONDARY)),
        Span::raw(" LEPEVA?"),
    ]))
    .alignment(Alignment::Center)
    .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(heading, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    for (feature, column) in FEATURES.iter().zip(columns.iter()) {
        let card = Paragraph::new(vec![
            Line::from(feature.icon),
            Line::from(Span::styled(
                feature.title,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                feature.description,
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(feature.color)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        f.render_widget(card, *column);
    }
}

fn call_to_action_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Start Your Child's English Learning Adventure Today!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Join thousands of happy kids improving their English skills while having fun!"),
        Line::from(Span::styled(
            " Get Started For Free ",
            Style::default()
                .fg(Color::Black)
                .bg(SECONDARY)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

/// Render the landing page
pub fn render_landing(f: &mut Frame, area: Rect, style: &ThemeStyle, started_at: Instant, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Logo bar
            Constraint::Length(7), // Hero
            Constraint::Length(3), // Floating letters
            Constraint::Min(7),    // Features
            Constraint::Length(5), // Call to action
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled(" L ", Style::default().fg(Color::White).bg(PRIMARY).add_modifier(Modifier::BOLD)),
        Span::styled(" LEPEVA", Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(logo, chunks[0]);

    let hero = Paragraph::new(hero_lines(style))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(hero, chunks[1]);

    let elapsed_ms = now.saturating_duration_since(started_at).as_millis();
    render_floating_items(f, chunks[2], elapsed_ms);

    render_features(f, chunks[3]);

    let cta = Paragraph::new(call_to_action_lines())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(style.accent)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(cta, chunks[4]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(":Start  "),
        Span::styled("t", Style::default().fg(Color::Yellow)),
        Span::raw(":Theme  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]))
    .style(Style::default().fg(Color::Gray));
    f.render_widget(hints, chunks[5]);
}
