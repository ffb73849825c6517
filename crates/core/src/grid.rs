//! Grid module - the falling-object playfield
//!
//! A fixed 20x15 grid of cells, independent of the screen buffer, that the
//! simulation pass runs over. Flat array storage, row-major (y * WIDTH + x).
//! Coordinates are signed so neighbourhood arithmetic can step off the edge
//! and be rejected by the bounds check instead of wrapping.

use crate::entity::Entity;
use crate::types::{EGG_GLYPHS, GRID_HEIGHT, GRID_WIDTH, TRAY_GLYPH};

/// Total number of cells on the grid
pub const GRID_SIZE: usize = GRID_WIDTH * GRID_HEIGHT;

/// Per-egg state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Egg {
    /// Two-glyph animation pair
    pub glyphs: [char; 2],
    /// Which glyph of the pair is showing (0 or 1)
    pub frame: u8,
    /// Passes survived so far
    pub age: u8,
    /// Already handled during the current reset cycle
    pub processed: bool,
}

impl Egg {
    pub fn new(glyphs: [char; 2]) -> Self {
        Self {
            glyphs,
            frame: 0,
            age: 0,
            processed: false,
        }
    }

    pub fn glyph(&self) -> char {
        self.glyphs[(self.frame & 1) as usize]
    }

    pub fn toggle_frame(&mut self) {
        self.frame ^= 1;
    }
}

impl Default for Egg {
    fn default() -> Self {
        Self::new(EGG_GLYPHS)
    }
}

/// One cell of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Air,
    Egg(Egg),
    Tray,
    Basket,
}

impl Cell {
    pub fn glyph(&self) -> char {
        match self {
            Cell::Air | Cell::Basket => ' ',
            Cell::Egg(egg) => egg.glyph(),
            Cell::Tray => TRAY_GLYPH,
        }
    }

    pub fn is_air(&self) -> bool {
        matches!(self, Cell::Air)
    }

    pub fn is_egg(&self) -> bool {
        matches!(self, Cell::Egg(_))
    }
}

/// The falling-object grid.
#[derive(Debug, Clone, PartialEq)]
pub struct EggGrid {
    cells: [Cell; GRID_SIZE],
    basket: Option<(i16, i16)>,
}

impl EggGrid {
    /// Create a grid full of air
    pub fn new() -> Self {
        Self {
            cells: [Cell::Air; GRID_SIZE],
            basket: None,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i16 || y < 0 || y >= GRID_HEIGHT as i16 {
            return None;
        }
        Some((y as usize) * GRID_WIDTH + (x as usize))
    }

    pub fn width(&self) -> usize {
        GRID_WIDTH
    }

    pub fn height(&self) -> usize {
        GRID_HEIGHT
    }

    /// Get cell at (x, y), `None` if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        Self::index(x, y).map(|i| self.cells[i])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    ///
    /// Setting a basket cell moves the basket, so the grid keeps at most one.
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        if cell == Cell::Basket {
            return self.place_basket(x, y);
        }
        match Self::index(x, y) {
            Some(i) => {
                if self.basket == Some((x, y)) {
                    self.basket = None;
                }
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) is inside the grid and holds air
    pub fn is_air(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Cell::Air))
    }

    /// Exchange two in-bounds cells.
    pub fn swap(&mut self, a: (i16, i16), b: (i16, i16)) {
        if let (Some(ia), Some(ib)) = (Self::index(a.0, a.1), Self::index(b.0, b.1)) {
            self.cells.swap(ia, ib);
            if self.basket == Some(a) {
                self.basket = Some(b);
            } else if self.basket == Some(b) {
                self.basket = Some(a);
            }
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Current basket cell, if one has been placed
    pub fn basket(&self) -> Option<(i16, i16)> {
        self.basket
    }

    /// Turn the previous basket cell back into air and mark (x, y) as the
    /// basket. Whatever was at (x, y) is replaced.
    pub fn place_basket(&mut self, x: i16, y: i16) -> bool {
        let Some(i) = Self::index(x, y) else {
            return false;
        };
        self.clear_basket();
        self.cells[i] = Cell::Basket;
        self.basket = Some((x, y));
        true
    }

    pub fn clear_basket(&mut self) {
        if let Some((bx, by)) = self.basket.take() {
            if let Some(i) = Self::index(bx, by) {
                self.cells[i] = Cell::Air;
            }
        }
    }

    /// Clear every egg's "processed" flag
    pub fn clear_processed(&mut self) {
        for cell in &mut self.cells {
            if let Cell::Egg(egg) = cell {
                egg.processed = false;
            }
        }
    }

    /// Turn every egg into air. Returns how many were removed.
    pub fn clear_eggs(&mut self) -> usize {
        let mut removed = 0;
        for cell in &mut self.cells {
            if cell.is_egg() {
                *cell = Cell::Air;
                removed += 1;
            }
        }
        removed
    }

    pub fn egg_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_egg()).count()
    }

    /// Iterate eggs with their coordinates, row-major
    pub fn eggs(&self) -> impl Iterator<Item = (i16, i16, &Egg)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| match cell {
            Cell::Egg(egg) => Some(((i % GRID_WIDTH) as i16, (i / GRID_WIDTH) as i16, egg)),
            _ => None,
        })
    }

    /// Stamp frame `index` of a static entity into the grid: non-blank glyphs
    /// become tray cells, blanks become air.
    pub fn stamp(&mut self, entity: &Entity, index: usize) {
        let sprite = entity.compose(index);
        for (dy, row) in sprite.rows().enumerate() {
            for (dx, &ch) in row.iter().enumerate() {
                let x = (entity.x() + dx) as i16;
                let y = (entity.y() + dy) as i16;
                let cell = if ch != ' ' { Cell::Tray } else { Cell::Air };
                self.set(x, y, cell);
            }
        }
    }

    /// Reset the whole grid to air
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Air);
        self.basket = None;
    }
}

impl Default for EggGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(EggGrid::index(0, 0), Some(0));
        assert_eq!(EggGrid::index(19, 0), Some(19));
        assert_eq!(EggGrid::index(0, 1), Some(20));
        assert_eq!(EggGrid::index(19, 14), Some(299));
        assert_eq!(EggGrid::index(-1, 0), None);
        assert_eq!(EggGrid::index(0, -1), None);
        assert_eq!(EggGrid::index(20, 0), None);
        assert_eq!(EggGrid::index(0, 15), None);
    }

    #[test]
    fn test_single_basket() {
        let mut grid = EggGrid::new();
        assert!(grid.place_basket(3, 4));
        assert!(grid.place_basket(5, 6));

        let baskets = grid.cells().iter().filter(|c| **c == Cell::Basket).count();
        assert_eq!(baskets, 1);
        assert_eq!(grid.basket(), Some((5, 6)));
        assert_eq!(grid.get(3, 4), Some(Cell::Air));
    }

    #[test]
    fn test_basket_outside_grid_is_rejected() {
        let mut grid = EggGrid::new();
        assert!(grid.place_basket(1, 1));
        assert!(!grid.place_basket(-1, 1));
        assert_eq!(grid.basket(), Some((1, 1)));
    }

    #[test]
    fn test_clear_processed_only_touches_eggs() {
        let mut grid = EggGrid::new();
        let mut egg = Egg::default();
        egg.processed = true;
        grid.set(2, 2, Cell::Egg(egg));
        grid.set(3, 3, Cell::Tray);

        grid.clear_processed();

        assert_eq!(grid.get(2, 2), Some(Cell::Egg(Egg::default())));
        assert_eq!(grid.get(3, 3), Some(Cell::Tray));
    }

    #[test]
    fn test_egg_glyph_toggles() {
        let mut egg = Egg::new(['O', 'o']);
        assert_eq!(egg.glyph(), 'O');
        egg.toggle_frame();
        assert_eq!(egg.glyph(), 'o');
        egg.toggle_frame();
        assert_eq!(egg.glyph(), 'O');
    }
}
