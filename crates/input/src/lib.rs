//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the per-tick [`crate::types::InputSample`]
//! the game reads. Terminals rarely report key releases, so held keys are
//! tracked with a timeout (see [`KeyTracker`]).

pub mod handler;
pub mod map;

pub use tui_eggs_types as types;

pub use handler::KeyTracker;
pub use map::{key_direction, prompt_answer, should_quit, Direction};
