use std::time::{Duration, Instant};

use ratatui::style::Color;

/// Fade-in of a freshly selected page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTransition {
    started: Instant,
    duration: Duration,
}

impl PageTransition {
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started: now,
            duration,
        }
    }

    /// Completed transition; renders at full strength.
    pub fn settled(now: Instant) -> Self {
        Self::start(now, Duration::ZERO)
    }

    /// Progress in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Blend `background` towards `target` by `t`. Non-RGB colours snap at the
/// halfway point.
pub fn fade(background: Color, target: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (background, target) {
        (Color::Rgb(br, bg, bb), Color::Rgb(tr, tg, tb)) => {
            Color::Rgb(lerp(br, tr, t), lerp(bg, tg, t), lerp(bb, tb, t))
        }
        _ if t >= 0.5 => target,
        _ => background,
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}
