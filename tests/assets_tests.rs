//! Texture asset tests - built-in set and loading from a directory

use std::fs;

use tui_eggs::assets::{
    self, GROUND_FILE, PLAYER_DOWN_FILE, PLAYER_UP_FILE, TRAY_LOWER_FILE, TRAY_UPPER_FILE,
};
use tui_eggs::core::GameState;

fn write_builtin(dir: &std::path::Path) {
    let t = assets::builtin();
    fs::write(dir.join(PLAYER_DOWN_FILE), &t.player_down).unwrap();
    fs::write(dir.join(PLAYER_UP_FILE), &t.player_up).unwrap();
    fs::write(dir.join(TRAY_UPPER_FILE), &t.tray_upper).unwrap();
    fs::write(dir.join(TRAY_LOWER_FILE), &t.tray_lower).unwrap();
    fs::write(dir.join(GROUND_FILE), &t.ground).unwrap();
}

#[test]
fn test_builtin_set_builds_a_game() {
    assert!(GameState::new(&assets::builtin(), 1).is_ok());
}

#[test]
fn test_load_dir_reads_all_files() {
    let dir = tempfile::tempdir().unwrap();
    write_builtin(dir.path());

    let loaded = assets::load_dir(dir.path()).unwrap();
    assert_eq!(loaded, assets::builtin());
}

#[test]
fn test_missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    write_builtin(dir.path());
    fs::remove_file(dir.path().join(TRAY_LOWER_FILE)).unwrap();

    let err = assets::load_dir(dir.path()).unwrap_err();
    assert!(format!("{err}").contains(TRAY_LOWER_FILE));
}

#[test]
fn test_malformed_texture_fails_game_setup() {
    let dir = tempfile::tempdir().unwrap();
    write_builtin(dir.path());
    fs::write(dir.path().join(GROUND_FILE), "20 3\n____________________\n").unwrap();

    let textures = assets::load_dir(dir.path()).unwrap();
    let err = GameState::new(&textures, 1).unwrap_err();
    assert!(format!("{err}").contains("ground"));
}
