//! Simulation module - one pass of the falling-egg automaton
//!
//! A pass visits rows bottom to top and, within a row, columns left to right.
//! The order matters: an egg that moved down lands in a row that was already
//! visited, and an egg that moved right lands on a cell visited later but
//! already flagged as processed, so no egg is handled twice in one pass.
//!
//! Per egg:
//! 1. skip unless unprocessed; flag it and flip its animation glyph
//! 2. bottom row or older than [`MAX_EGG_AGE`]: smash, wipe all eggs, stop the pass
//! 3. otherwise age it; if the basket is in the 3x3 neighbourhood: caught
//! 4. otherwise fall if the cell below is air, else drift sideways toward
//!    the nearest catch lane if that cell is air, else stay put

use arrayvec::ArrayVec;

use crate::grid::{Cell, EggGrid};
use crate::types::{GRID_HEIGHT, GRID_WIDTH, MAX_EGG_AGE};

/// Outcome of a single pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Eggs handled this pass
    pub processed: u32,
    /// Eggs that fell or drifted into a neighbouring cell
    pub moved: u32,
    /// Where eggs were caught. Only the basket's eight neighbours qualify.
    pub caught: ArrayVec<(i16, i16), 8>,
    /// Where the smash happened; the pass stopped there
    pub smashed: Option<(i16, i16)>,
    /// Eggs wiped by the smash, including the one that smashed
    pub cleared: usize,
}

impl StepReport {
    pub fn caught_count(&self) -> u32 {
        self.caught.len() as u32
    }
}

/// Sideways direction for an egg in column `x`: toward larger x on the left
/// half, toward smaller x from the midline on.
pub fn lateral_drift(x: i16) -> i16 {
    if x < (GRID_WIDTH / 2) as i16 {
        1
    } else {
        -1
    }
}

/// Whether the basket is within the 3x3 neighbourhood of (x, y).
/// Neighbours outside the grid are ignored.
pub fn basket_adjacent(grid: &EggGrid, x: i16, y: i16) -> bool {
    (-1..=1).any(|dy| {
        (-1..=1).any(|dx| matches!(grid.get(x + dx, y + dy), Some(Cell::Basket)))
    })
}

/// Advance every unprocessed egg once.
pub fn step(grid: &mut EggGrid) -> StepReport {
    let mut report = StepReport::default();
    let bottom = GRID_HEIGHT as i16 - 1;

    for y in (0..GRID_HEIGHT as i16).rev() {
        for x in 0..GRID_WIDTH as i16 {
            let Some(Cell::Egg(mut egg)) = grid.get(x, y) else {
                continue;
            };
            if egg.processed {
                continue;
            }
            egg.processed = true;
            egg.toggle_frame();
            report.processed += 1;

            if y == bottom || egg.age > MAX_EGG_AGE {
                grid.set(x, y, Cell::Air);
                report.cleared = 1 + grid.clear_eggs();
                report.smashed = Some((x, y));
                return report;
            }
            egg.age = egg.age.saturating_add(1);

            if basket_adjacent(grid, x, y) {
                grid.set(x, y, Cell::Air);
                report.caught.push((x, y));
                continue;
            }

            grid.set(x, y, Cell::Egg(egg));

            let side = lateral_drift(x);
            if grid.is_air(x, y + 1) {
                grid.swap((x, y), (x, y + 1));
                report.moved += 1;
            } else if grid.is_air(x + side, y) {
                grid.swap((x, y), (x + side, y));
                report.moved += 1;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Egg;

    fn egg_at(grid: &mut EggGrid, x: i16, y: i16, age: u8) {
        let mut egg = Egg::default();
        egg.age = age;
        grid.set(x, y, Cell::Egg(egg));
    }

    fn egg(grid: &EggGrid, x: i16, y: i16) -> Option<Egg> {
        match grid.get(x, y) {
            Some(Cell::Egg(egg)) => Some(egg),
            _ => None,
        }
    }

    #[test]
    fn test_drift_funnels_toward_lanes() {
        assert_eq!(lateral_drift(0), 1);
        assert_eq!(lateral_drift(9), 1);
        assert_eq!(lateral_drift(10), -1);
        assert_eq!(lateral_drift(19), -1);
    }

    #[test]
    fn test_egg_falls_one_cell_per_pass() {
        let mut grid = EggGrid::new();
        egg_at(&mut grid, 4, 3, 0);

        let report = step(&mut grid);

        assert_eq!(report.processed, 1);
        assert_eq!(report.moved, 1);
        let moved = egg(&grid, 4, 4).expect("egg should be one row lower");
        assert_eq!(moved.age, 1);
        assert!(moved.processed);
        assert_eq!(moved.frame, 1);
        assert!(grid.is_air(4, 3));
    }

    #[test]
    fn test_processed_egg_is_not_moved_again() {
        let mut grid = EggGrid::new();
        egg_at(&mut grid, 4, 3, 0);

        step(&mut grid);
        let report = step(&mut grid);

        assert_eq!(report.processed, 0);
        assert!(egg(&grid, 4, 4).is_some());
    }

    #[test]
    fn test_blocked_egg_drifts_sideways() {
        let mut grid = EggGrid::new();
        egg_at(&mut grid, 3, 5, 0);
        grid.set(3, 6, Cell::Tray);
        egg_at(&mut grid, 15, 5, 0);
        grid.set(15, 6, Cell::Tray);

        step(&mut grid);

        assert!(egg(&grid, 4, 5).is_some());
        assert!(egg(&grid, 14, 5).is_some());
    }

    #[test]
    fn test_fully_blocked_egg_stays_and_ages() {
        let mut grid = EggGrid::new();
        egg_at(&mut grid, 3, 5, 2);
        grid.set(3, 6, Cell::Tray);
        grid.set(4, 5, Cell::Tray);

        let report = step(&mut grid);

        assert_eq!(report.moved, 0);
        assert_eq!(egg(&grid, 3, 5).map(|e| e.age), Some(3));
    }

    #[test]
    fn test_catch_at_grid_edge_does_not_wrap() {
        let mut grid = EggGrid::new();
        // A basket at the far right of the row above must not be seen as a
        // neighbour of an egg in column 0.
        grid.place_basket(19, 4);
        egg_at(&mut grid, 0, 5, 0);
        grid.set(0, 6, Cell::Tray);

        let report = step(&mut grid);

        assert!(report.caught.is_empty());
        assert!(egg(&grid, 1, 5).is_some());
    }

    #[test]
    fn test_catch_in_corner() {
        let mut grid = EggGrid::new();
        grid.place_basket(1, 1);
        egg_at(&mut grid, 0, 0, 0);

        let report = step(&mut grid);

        assert_eq!(report.caught.as_slice(), &[(0, 0)]);
        assert_eq!(grid.egg_count(), 0);
    }

    #[test]
    fn test_every_neighbour_is_caught_in_one_pass() {
        let mut grid = EggGrid::new();
        grid.place_basket(5, 5);
        for (x, y) in [(4, 4), (5, 4), (6, 4), (4, 5), (6, 5), (4, 6), (5, 6), (6, 6)] {
            egg_at(&mut grid, x, y, 0);
        }

        let report = step(&mut grid);

        assert_eq!(report.caught_count(), 8);
        assert_eq!(report.caught[0], (4, 6));
        assert_eq!(grid.egg_count(), 0);
        assert_eq!(grid.get(5, 5), Some(Cell::Basket));
    }

    #[test]
    fn test_smash_stops_the_pass() {
        let mut grid = EggGrid::new();
        egg_at(&mut grid, 2, 14, 0);
        egg_at(&mut grid, 5, 14, 0);
        egg_at(&mut grid, 8, 3, 0);

        let report = step(&mut grid);

        assert_eq!(report.smashed, Some((2, 14)));
        assert_eq!(report.cleared, 3);
        assert_eq!(report.processed, 1);
        assert_eq!(grid.egg_count(), 0);
    }

    #[test]
    fn test_old_egg_smashes_midair() {
        let mut grid = EggGrid::new();
        egg_at(&mut grid, 6, 6, MAX_EGG_AGE + 1);

        let report = step(&mut grid);

        assert_eq!(report.smashed, Some((6, 6)));
        assert_eq!(grid.egg_count(), 0);
    }

    #[test]
    fn test_egg_at_max_age_survives_one_more_pass() {
        let mut grid = EggGrid::new();
        egg_at(&mut grid, 6, 6, MAX_EGG_AGE);

        let report = step(&mut grid);

        assert_eq!(report.smashed, None);
        assert_eq!(egg(&grid, 6, 7).map(|e| e.age), Some(MAX_EGG_AGE + 1));
    }
}
