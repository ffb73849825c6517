//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the composited glyph screen from
//! `core` is turned into a styled framebuffer, which is then flushed to the
//! terminal backend.
//!
//! - [`GameView`] is pure and unit-tested
//! - [`TerminalRenderer`] owns the terminal and redraws only changed rows

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_eggs_core as core;
pub use tui_eggs_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_full_into, encode_rows_into, TerminalRenderer};
