//! Type/delete text animation as a pure state machine.
//!
//! The machine knows nothing about time. Each call to [`Typewriter::advance`]
//! is one scheduled firing, and [`Typewriter::delay`] says how long the
//! scheduler should wait before the next one.

use std::time::Duration;

use crate::config::TypewriterConfig;

/// Animation phase. Transitions always run in declaration order and wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Typing,
    HoldFull,
    Deleting,
    HoldEmpty,
}

/// Delays between firings, one per phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_interval: Duration,
    pub hold_full: Duration,
    pub delete_interval: Duration,
    pub hold_empty: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(100),
            hold_full: Duration::from_millis(1000),
            delete_interval: Duration::from_millis(100),
            hold_empty: Duration::from_millis(500),
        }
    }
}

impl From<&TypewriterConfig> for TypewriterTiming {
    fn from(config: &TypewriterConfig) -> Self {
        Self {
            type_interval: Duration::from_millis(config.type_interval_ms),
            hold_full: Duration::from_millis(config.hold_full_ms),
            delete_interval: Duration::from_millis(config.delete_interval_ms),
            hold_empty: Duration::from_millis(config.hold_empty_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    source: String,
    /// Byte offset of every char boundary after the first, so the prefix
    /// can be sliced without re-walking the string.
    boundaries: Vec<usize>,
    /// Number of characters currently shown.
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let boundaries = source
            .char_indices()
            .map(|(offset, ch)| offset + ch.len_utf8())
            .collect::<Vec<_>>();
        // Empty text has nothing to type: go straight to the full-text hold.
        let phase = if boundaries.is_empty() {
            Phase::HoldFull
        } else {
            Phase::Typing
        };
        Self {
            source,
            boundaries,
            shown: 0,
            phase,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Currently displayed prefix of the source text.
    pub fn displayed(&self) -> &str {
        match self.shown {
            0 => "",
            n => &self.source[..self.boundaries[n - 1]],
        }
    }

    /// Length of the source in characters.
    pub fn char_len(&self) -> usize {
        self.boundaries.len()
    }

    /// How long to wait before the next [`advance`](Self::advance).
    pub fn delay(&self, timing: &TypewriterTiming) -> Duration {
        match self.phase {
            Phase::Typing => timing.type_interval,
            Phase::HoldFull => timing.hold_full,
            Phase::Deleting => timing.delete_interval,
            Phase::HoldEmpty => timing.hold_empty,
        }
    }

    /// Perform one firing of the animation.
    pub fn advance(&mut self) {
        let len = self.char_len();
        self.phase = match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    Phase::HoldFull
                } else {
                    Phase::Typing
                }
            }
            Phase::HoldFull if len == 0 => Phase::HoldEmpty,
            Phase::HoldFull => Phase::Deleting,
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    Phase::HoldEmpty
                } else {
                    Phase::Deleting
                }
            }
            Phase::HoldEmpty if len == 0 => Phase::HoldFull,
            Phase::HoldEmpty => Phase::Typing,
        };
    }
}
