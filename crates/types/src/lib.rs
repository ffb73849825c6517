//! Core types module - shared data structures and constants
//!
//! Pure data with no external dependencies, usable from the simulation,
//! the terminal view and the input layer alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 15 rows (indexed 0-14), row 0 at the top
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 20 | Real-time length of one tick |
//! | `MAX_EGG_AGE` | 7 | An egg older than this smashes |
//! | `INITIAL_SPAWN_SPEED` | 50 | Ticks between spawns at start and after a smash |
//! | `SPAWN_SPEED_FLOOR` | 1 | Spawn speed never ramps below this |
//! | `SPAWN_RAMP_EVERY_TICKS` | 100 | Spawn speed drops by one this often |
//! | `PROCESSED_RESET_EVERY_TICKS` | 10 | Egg "processed" flags are cleared this often |
//! | `EGG_STEP_EVERY_TICKS` | 1 | Simulation pass cadence |
//! | `GAME_OVER_SMASHES` | 3 | Smashes that end the game |
//! | `SMASH_PAUSE_MS` | 1000 | Blocking pause after a smash |
//!
//! # Examples
//!
//! ```
//! use tui_eggs_types::{Facing, Posture, InputSample, GRID_WIDTH, GRID_HEIGHT};
//!
//! assert_eq!(GRID_WIDTH, 20);
//! assert_eq!(GRID_HEIGHT, 15);
//!
//! let input = InputSample { right: true, up: true, ..InputSample::default() };
//! assert_eq!(input.facing(Facing::Left), Facing::Right);
//! assert_eq!(input.posture(Posture::Down), Posture::Up);
//! ```

/// Grid width in cells (20 columns)
pub const GRID_WIDTH: usize = 20;
/// Grid height in cells (15 rows)
pub const GRID_HEIGHT: usize = 15;

/// Game timing constants
pub const FRAME_MS: u64 = 20;
pub const SMASH_PAUSE_MS: u64 = 1000;

/// Egg rules
pub const MAX_EGG_AGE: u8 = 7;
pub const EGG_GLYPHS: [char; 2] = ['O', 'o'];

/// Spawn schedule (in ticks)
pub const INITIAL_SPAWN_SPEED: u32 = 50;
pub const SPAWN_SPEED_FLOOR: u32 = 1;
pub const SPAWN_RAMP_EVERY_TICKS: u64 = 100;

/// Simulation cadences (in ticks). Kept independent on purpose: an egg that
/// was processed stays frozen until the next flag reset, while the pass
/// itself runs on its own cadence.
pub const PROCESSED_RESET_EVERY_TICKS: u64 = 10;
pub const EGG_STEP_EVERY_TICKS: u64 = 1;

pub const GAME_OVER_SMASHES: u32 = 3;

/// Glyph inside the player's sprites that marks the basket.
pub const BASKET_MARKER: char = '@';
/// Glyph used when a tray cell is shown by a debug view.
pub const TRAY_GLYPH: char = '█';

/// Overlay literals
pub const SCORE_LABEL: &str = "SCORE:";
pub const SMASHED_EGG: &str = "(\\.";
pub const GAME_OVER_TEXT: &str = "GAME OVER!";
pub const RESTART_PROMPT: &str = "Play again? [Y/N]";

/// Layout: tray stamp positions (x, y). The first two are on the left.
pub const TRAY_POSITIONS: [(usize, usize); 4] = [(0, 2), (0, 7), (14, 2), (14, 7)];

/// Egg emitters, one per tray.
pub const EMITTERS: [(usize, usize); 4] = [
    (TRAY_POSITIONS[0].0 + 2, TRAY_POSITIONS[0].1 + 2),
    (TRAY_POSITIONS[1].0 + 2, TRAY_POSITIONS[1].1 + 2),
    (TRAY_POSITIONS[2].0 + 3, TRAY_POSITIONS[2].1 + 2),
    (TRAY_POSITIONS[3].0 + 3, TRAY_POSITIONS[3].1 + 2),
];

pub const GROUND_POSITION: (usize, usize) = (0, 12);
pub const PLAYER_ROW: usize = 5;

/// Which way the player faces. Sprites are authored facing left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

/// Player posture. Doubles as the index of the active sprite frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Posture {
    #[default]
    Down,
    Up,
}

impl Posture {
    pub const COUNT: usize = 2;

    /// Index of the player frame showing this posture.
    pub fn frame_index(&self) -> usize {
        match self {
            Posture::Down => 0,
            Posture::Up => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Posture::Down => "down",
            Posture::Up => "up",
        }
    }
}

/// Instantaneous state of the game keys for one tick.
///
/// This is a state sample, not an event stream: a key counts as long as it
/// is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSample {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub quit: bool,
}

impl InputSample {
    /// Posture after this sample. Up wins when both keys are held.
    pub fn posture(&self, current: Posture) -> Posture {
        if self.up {
            Posture::Up
        } else if self.down {
            Posture::Down
        } else {
            current
        }
    }

    /// Facing after this sample. Right wins when both keys are held.
    pub fn facing(&self, current: Facing) -> Facing {
        if self.right {
            Facing::Right
        } else if self.left {
            Facing::Left
        } else {
            current
        }
    }
}
