use std::time::Instant;

use ratatui::{layout::Rect, style::Color, Frame};

use lepeva::logic::confetti::{Confetti, CONFETTI_COLORS, CONFETTI_GLYPHS};

/// Map a normalized particle position onto a cell in `area`
fn to_cell(area: Rect, x: f32, y: f32) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    // Particles drift past the edges; NaN fails the range check too
    if !(0.0..1.0).contains(&x) || !(0.0..1.0).contains(&y) {
        return None;
    }
    let col = (x * area.width as f32) as u16;
    let row = (y * area.height as f32) as u16;
    if col >= area.width || row >= area.height {
        return None;
    }
    Some((area.x + col, area.y + row))
}

/// Draw the burst over whatever is already on screen
pub fn render_confetti(f: &mut Frame, area: Rect, confetti: &Confetti, now: Instant) {
    let buf = f.buffer_mut();
    for (x, y, color, glyph) in confetti.visible(now) {
        let Some(position) = to_cell(area, x, y) else {
            continue;
        };
        let (r, g, b) = CONFETTI_COLORS[color];
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_char(CONFETTI_GLYPHS[glyph]);
            cell.set_fg(Color::Rgb(r, g, b));
        }
    }
}
