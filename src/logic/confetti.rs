//! Confetti burst
//!
//! Particles live in normalized screen space: x and y in 0.0..1.0, y growing
//! downwards. Positions are a pure function of elapsed time so rendering
//! never mutates the burst.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::logic::ui::CONFETTI_MS;

/// Particles per burst
pub const PARTICLE_COUNT: usize = 100;

/// Coral, green, sunshine, sky and orchid
pub const CONFETTI_COLORS: [(u8, u8, u8); 5] = [
    (0xFF, 0x5E, 0x5B),
    (0x39, 0xB5, 0x4A),
    (0xFF, 0xDE, 0x59),
    (0x4D, 0x9D, 0xE0),
    (0xE1, 0x5C, 0xD5),
];

/// Glyphs a particle may be drawn with
pub const CONFETTI_GLYPHS: [char; 4] = ['■', '●', '▲', '◆'];

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    /// Horizontal drift per second
    pub vx: f32,
    /// Fall speed per second
    pub vy: f32,
    pub color: usize,
    pub glyph: usize,
}

impl Particle {
    /// Position after `secs` seconds, `None` once off screen
    pub fn position_at(&self, secs: f32) -> Option<(f32, f32)> {
        let x = self.x + self.vx * secs;
        let y = self.y + self.vy * secs;
        if (0.0..1.0).contains(&x) && (0.0..1.0).contains(&y) {
            Some((x, y))
        } else {
            None
        }
    }
}

/// A running burst
#[derive(Clone, Debug)]
pub struct Confetti {
    pub particles: Vec<Particle>,
    pub started_at: Instant,
}

impl Confetti {
    /// Scatter a fresh burst above the top edge
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, started_at: Instant) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(-0.3..0.0),
                vx: rng.gen_range(-0.08..0.08),
                vy: rng.gen_range(0.35..0.7),
                color: rng.gen_range(0..CONFETTI_COLORS.len()),
                glyph: rng.gen_range(0..CONFETTI_GLYPHS.len()),
            })
            .collect();

        Self {
            particles,
            started_at,
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.elapsed(now).as_millis() >= CONFETTI_MS
    }

    /// Visible particles at `now` as (x, y, color index, glyph index)
    pub fn visible(&self, now: Instant) -> Vec<(f32, f32, usize, usize)> {
        let secs = self.elapsed(now).as_secs_f32();
        self.particles
            .iter()
            .filter_map(|p| p.position_at(secs).map(|(x, y)| (x, y, p.color, p.glyph)))
            .collect()
    }
}
