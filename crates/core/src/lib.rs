//! Core game logic - pure, deterministic, and testable
//!
//! Everything that decides what happens in the egg catching game lives here,
//! with **no dependencies** on terminals, files or clocks:
//!
//! - **Deterministic**: the only randomness is a seeded LCG picking emitters
//! - **Testable**: scenarios can be set up directly on the grid
//! - **Portable**: the composited [`Screen`] is plain rows of glyphs
//!
//! # Module Structure
//!
//! - [`sprite`]: glyph rectangles, the texture format and mirroring
//! - [`entity`]: positioned objects with named frames and their builder
//! - [`grid`]: the 20x15 falling-object grid (air, egg, tray, basket)
//! - [`sim`]: one pass of the falling-egg automaton
//! - [`screen`]: the character grid a frame is composited onto
//! - [`game_state`]: spawning, scoring, smashes, game over and restart
//! - [`rng`]: seeded emitter selection
//!
//! # Example
//!
//! ```
//! use tui_eggs_core::{GameState, Screen, TextureSet};
//! use tui_eggs_types::InputSample;
//!
//! let textures = TextureSet {
//!     player_down: "3 2\n(o)\n@| \n".into(),
//!     player_up: "3 2\n@o)\n | \n".into(),
//!     tray_upper: "3 2\n|  \n\\= \n".into(),
//!     tray_lower: "3 2\n   \n\\= \n".into(),
//!     ground: "20 1\n~~~~~~~~~~~~~~~~~~~~\n".into(),
//! };
//! let mut game = GameState::new(&textures, 42).unwrap();
//!
//! // The first tick always drops an egg on one of the emitters.
//! let outcome = game.tick(InputSample::default());
//! assert!(outcome.spawned.is_some());
//! assert_eq!(game.grid().egg_count(), 1);
//!
//! let mut screen = Screen::new();
//! game.compose(&mut screen);
//! assert!(screen.line(0).ends_with("SCORE:0"));
//! ```

pub mod entity;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod screen;
pub mod sim;
pub mod sprite;

pub use tui_eggs_types as types;

// Re-export commonly used types for convenience
pub use entity::{Entity, EntityBuilder, Frame};
pub use game_state::{GameState, TextureSet, TickOutcome};
pub use grid::{Cell, Egg, EggGrid};
pub use rng::SimpleRng;
pub use screen::Screen;
pub use sim::{step, StepReport};
pub use sprite::{mirror_glyph, LoadError, Sprite};
