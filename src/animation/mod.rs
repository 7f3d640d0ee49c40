//! Time-driven visual effects: the hero typewriter, page fades and the
//! starfield background.

mod starfield;
mod task;
mod transition;
mod typewriter;

pub use starfield::{Starfield, StarfieldView};
pub use task::{TypewriterFrame, TypewriterHandle, TypewriterTask};
pub use transition::{fade, PageTransition};
pub use typewriter::{Phase, Typewriter, TypewriterTiming};
