//! Texture assets.
//!
//! A texture set is five small text files (`width height` header, then
//! exactly `height` rows of `width` glyphs). The game ships a built-in set and
//! can load a replacement set from a directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::TextureSet;

pub const PLAYER_DOWN_FILE: &str = "wolfd.txt";
pub const PLAYER_UP_FILE: &str = "wolfu.txt";
pub const TRAY_UPPER_FILE: &str = "trayu.txt";
pub const TRAY_LOWER_FILE: &str = "trayd.txt";
pub const GROUND_FILE: &str = "ground.txt";

/// The texture set compiled into the binary.
pub fn builtin() -> TextureSet {
    TextureSet {
        player_down: include_str!("../assets/wolfd.txt").to_string(),
        player_up: include_str!("../assets/wolfu.txt").to_string(),
        tray_upper: include_str!("../assets/trayu.txt").to_string(),
        tray_lower: include_str!("../assets/trayd.txt").to_string(),
        ground: include_str!("../assets/ground.txt").to_string(),
    }
}

/// Read every texture file from `dir`.
///
/// Only reads the files; their contents are validated when the game state is
/// built from them.
pub fn load_dir(dir: &Path) -> Result<TextureSet> {
    let read = |name: &str| {
        let path = dir.join(name);
        fs::read_to_string(&path)
            .with_context(|| format!("failed to read texture {}", path.display()))
    };
    let textures = TextureSet {
        player_down: read(PLAYER_DOWN_FILE)?,
        player_up: read(PLAYER_UP_FILE)?,
        tray_upper: read(TRAY_UPPER_FILE)?,
        tray_lower: read(TRAY_LOWER_FILE)?,
        ground: read(GROUND_FILE)?,
    };
    log::info!("loaded textures from {}", dir.display());
    Ok(textures)
}
