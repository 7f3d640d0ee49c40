//! Model-View-Intent primitives shared by the UI state machines.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                               │
//!    └──────── input events ─────────┘
//! ```
//!
//! Reducers are pure; anything with a lifetime (timers, HTTP requests)
//! lives next to the state in `App`, not inside it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
