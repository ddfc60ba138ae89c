use super::{Cell, Grid};

/// A fixed arrangement of live cells that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub rows: usize,
    pub cols: usize,
    /// Relative (row, col) offsets of alive cells
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().map_or(0, |r| r + 1);
        let cols = cells.iter().map(|(_, c)| *c).max().map_or(0, |c| c + 1);
        Self { name, rows, cols, cells }
    }

    /// Place pattern with its top-left corner at (row, col).
    /// Cells falling outside the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        for (dr, dc) in &self.cells {
            if let (Some(r), Some(c)) = (row.checked_add(*dr), col.checked_add(*dc)) {
                grid.set(r, c, Cell::Alive);
            }
        }
    }
}

/// Classic patterns, mostly useful for building known starting states
pub mod presets {
    use super::*;

    /// Blinker - period 2 oscillator, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", vec![(0, 0), (0, 1), (0, 2)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Block - still life
    pub fn block() -> Pattern {
        Pattern::new("Block", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Glider - moves one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![blinker(), toad(), beacon(), block(), glider()]
    }
}
