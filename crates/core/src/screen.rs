//! Screen module - the character grid one frame is composited onto
//!
//! Every row is a fixed-size array, so rows are bounded on their own and a
//! write can never bleed into the next row.
//!
//! Blits overwrite unconditionally, blanks included; the last writer wins.
//! Nothing here clips: keeping sprites and text inside the grid is the
//! caller's job, and the fixed layout is validated when the game is built.

use crate::entity::Entity;
use crate::grid::EggGrid;
use crate::sprite::Sprite;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

type ScreenRow = [char; GRID_WIDTH];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    rows: [ScreenRow; GRID_HEIGHT],
}

impl Screen {
    pub fn new() -> Self {
        Self {
            rows: [[' '; GRID_WIDTH]; GRID_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn height(&self) -> usize {
        GRID_HEIGHT
    }

    /// Fill every cell with a space.
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(' ');
        }
    }

    /// Copy frame `index` of `entity` onto the screen at the entity position.
    pub fn blit(&mut self, entity: &Entity, index: usize) {
        self.blit_sprite(entity.x(), entity.y(), entity.compose(index));
    }

    /// Copy a sprite's glyph rectangle with its top-left corner at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if the sprite does not fit inside the screen.
    pub fn blit_sprite(&mut self, x: usize, y: usize, sprite: &Sprite) {
        debug_assert!(
            x + sprite.width() <= GRID_WIDTH && y + sprite.height() <= GRID_HEIGHT,
            "sprite {}x{} at ({x}, {y}) leaves the screen",
            sprite.width(),
            sprite.height()
        );
        for (dy, src) in sprite.rows().enumerate() {
            self.rows[y + dy][x..x + src.len()].copy_from_slice(src);
        }
    }

    /// Write `text` left to right starting at (x, y). No wrapping.
    ///
    /// # Panics
    ///
    /// Panics if the text runs past the right edge.
    pub fn draw_text(&mut self, x: usize, y: usize, text: &str) {
        let row = &mut self.rows[y];
        for (i, ch) in text.chars().enumerate() {
            row[x + i] = ch;
        }
    }

    /// Overlay the current glyph of every egg on the grid.
    pub fn draw_eggs(&mut self, grid: &EggGrid) {
        for (x, y, egg) in grid.eggs() {
            self.rows[y as usize][x as usize] = egg.glyph();
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Row `y` as a string.
    pub fn line(&self, y: usize) -> String {
        self.rows[y].iter().collect()
    }

    /// All rows as strings, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        (0..GRID_HEIGHT).map(|y| self.line(y)).collect()
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Egg};

    #[test]
    fn test_blit_overwrites_including_blanks() {
        let mut screen = Screen::new();
        screen.draw_text(0, 0, "xxxx");
        let sprite = Sprite::from_rows(&["a b"]).unwrap();
        screen.blit_sprite(1, 0, &sprite);
        assert_eq!(&screen.line(0)[..4], "xa b");
    }

    #[test]
    fn test_clear_blanks_every_row() {
        let mut screen = Screen::new();
        screen.draw_text(0, 3, "hello");
        screen.clear();
        assert!(screen.lines().iter().all(|l| l.chars().all(|c| c == ' ')));
        assert!(screen.lines().iter().all(|l| l.chars().count() == GRID_WIDTH));
    }

    #[test]
    fn test_text_ending_at_right_edge() {
        let mut screen = Screen::new();
        screen.draw_text(GRID_WIDTH - 3, 1, "abc");
        assert_eq!(screen.get(GRID_WIDTH - 1, 1), Some('c'));
        assert_eq!(screen.get(0, 2), Some(' '));
    }

    #[test]
    #[should_panic]
    fn test_text_past_right_edge_panics() {
        let mut screen = Screen::new();
        screen.draw_text(GRID_WIDTH - 2, 1, "abc");
    }

    #[test]
    fn test_draw_eggs_uses_current_glyph() {
        let mut grid = EggGrid::new();
        let mut egg = Egg::new(['O', 'o']);
        egg.toggle_frame();
        grid.set(7, 9, Cell::Egg(egg));

        let mut screen = Screen::new();
        screen.draw_eggs(&grid);

        assert_eq!(screen.get(7, 9), Some('o'));
    }
}
