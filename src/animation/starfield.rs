use std::f32::consts::TAU;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

/// Seconds for one full twinkle.
const TWINKLE_PERIOD: f32 = 3.0;
/// Horizontal drift, in screen widths per second.
const DRIFT_SPEED: f32 = 0.004;
const MIN_BRIGHTNESS: f32 = 0.2;

#[derive(Debug, Clone, PartialEq)]
struct Star {
    x: f32,
    y: f32,
    phase: f32,
    depth: f32,
}

/// Deterministic twinkling background.
#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..1.0),
                phase: rng.gen_range(0.0..1.0),
                depth: rng.gen_range(0.3..1.0),
            })
            .collect();
        Self { stars }
    }

    /// Widget view of the field at `elapsed` since the view started.
    pub fn at(&self, elapsed: Duration) -> StarfieldView<'_> {
        StarfieldView {
            field: self,
            t: elapsed.as_secs_f32(),
        }
    }
}

pub struct StarfieldView<'a> {
    field: &'a Starfield,
    t: f32,
}

/// Twinkle brightness in `MIN_BRIGHTNESS..=1.0`.
fn brightness(phase: f32, t: f32) -> f32 {
    let wave = 0.5 - 0.5 * (TAU * (t / TWINKLE_PERIOD + phase)).cos();
    MIN_BRIGHTNESS + (1.0 - MIN_BRIGHTNESS) * wave
}

impl Widget for StarfieldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for star in &self.field.stars {
            // Nearer stars drift faster.
            let x = (star.x + DRIFT_SPEED * star.depth * self.t).fract();
            let col = area.x + (x * area.width as f32) as u16 % area.width;
            let row = area.y + (star.y * area.height as f32) as u16 % area.height;

            let level = brightness(star.phase, self.t) * star.depth;
            let glyph = match level {
                l if l > 0.75 => '✦',
                l if l > 0.45 => '*',
                _ => '·',
            };
            let grey = (level * 255.0) as u8;
            if let Some(cell) = buf.cell_mut((col, row)) {
                cell.set_char(glyph).set_fg(Color::Rgb(grey, grey, grey));
            }
        }
    }
}
