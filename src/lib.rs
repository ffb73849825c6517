//! TUI Eggs (workspace facade crate).
//!
//! Re-exports the member crates under `tui_eggs::{core,input,term,types}` and
//! adds the [`assets`] module that supplies textures to the game.

pub mod assets;

pub use tui_eggs_core as core;
pub use tui_eggs_input as input;
pub use tui_eggs_term as term;
pub use tui_eggs_types as types;
