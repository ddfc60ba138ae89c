use super::{Cell, LifeRule};
use rand::Rng;
use rayon::prelude::*;

/// Grid holds the 2D automaton state in row-major order.
/// Evolution is functional: each generation is a fresh grid and the
/// previous one is never written to.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::Dead; cols * rows],
        }
    }

    /// Seed a grid where each cell is independently alive with
    /// probability `1 - random_factor`.
    ///
    /// `random_factor` is clamped into `[0, 1]`; NaN seeds an all-dead grid.
    pub fn random<R: Rng + ?Sized>(cols: usize, rows: usize, random_factor: f64, rng: &mut R) -> Self {
        let p_alive = (1.0 - random_factor).clamp(0.0, 1.0);
        let p_alive = if p_alive.is_nan() { 0.0 } else { p_alive };

        let cells = (0..cols * rows)
            .map(|_| Cell::from(rng.random_bool(p_alive)))
            .collect();

        Self { cols, rows, cells }
    }

    /// Build a grid from boolean rows. The first row fixes the width;
    /// shorter rows are padded with dead cells, longer ones truncated.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut grid = Self::new(cols, rows.len());

        for (row, values) in rows.iter().enumerate() {
            for (col, &alive) in values.as_ref().iter().take(cols).enumerate() {
                grid.set(row, col, Cell::from(alive));
            }
        }
        grid
    }

    /// Get grid dimensions as (cols, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Interior cells are the only ones the update rule evaluates
    pub const fn is_interior(&self, row: usize, col: usize) -> bool {
        row >= 1 && col >= 1 && row + 1 < self.rows && col + 1 < self.cols
    }

    /// Count live cells in the Moore neighborhood.
    /// Positions outside the grid count as dead; there is no wrapping.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_state(&self, row: usize, col: usize, rule: &LifeRule) -> Cell {
        if !self.is_interior(row, col) {
            return Cell::Dead;
        }
        rule.evolve(self.cells[self.get_index(row, col)], self.count_live_neighbors(row, col))
    }

    /// Pure functional evolution - returns the next generation (serial).
    /// The outer ring is never evaluated and is always dead in the result.
    pub fn evolve(&self, rule: &LifeRule) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| self.next_state(row, col, rule))
            .collect();

        Self {
            cols: self.cols,
            rows: self.rows,
            cells,
        }
    }

    /// Parallel evolution using rayon; produces exactly what `evolve` does
    pub fn evolve_parallel(&self, rule: &LifeRule) -> Self {
        let cells: Vec<Cell> = (0..self.rows)
            .into_par_iter()
            .flat_map(|row| (0..self.cols).into_par_iter().map(move |col| (row, col)))
            .map(|(row, col)| self.next_state(row, col, rule))
            .collect();

        Self {
            cols: self.cols,
            rows: self.rows,
            cells,
        }
    }

    /// Number of live cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.rows).map(move |row| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Iterate over all cells with their (row, col) positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows()
            .enumerate()
            .flat_map(|(row, cells)| cells.iter().enumerate().map(move |(col, &cell)| (row, col, cell)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn alive_positions(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    fn border_is_dead(grid: &Grid) -> bool {
        grid.iter_cells()
            .filter(|&(row, col, _)| !grid.is_interior(row, col))
            .all(|(_, _, cell)| !cell.is_alive())
    }

    #[test]
    fn test_dimensions() {
        let grid = Grid::new(256, 144);
        assert_eq!(grid.dimensions(), (256, 144));
        assert_eq!(grid.rows().count(), 144);
        assert!(grid.rows().all(|row| row.len() == 256));
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(4, 3);
        grid.set(2, 3, Cell::Alive);
        assert_eq!(grid.get(2, 3), Some(Cell::Alive));
        assert_eq!(grid.get(3, 2), None);
        assert_eq!(grid.get(0, 4), None);

        // Out of bounds writes are ignored, not panics
        grid.set(10, 10, Cell::Alive);
        assert_eq!(grid.count_alive(), 1);
    }

    #[test]
    fn test_from_rows_pads_and_truncates() {
        let grid = Grid::from_rows(&[
            vec![true, false, true],
            vec![true],
            vec![false, true, true, true],
        ]);
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(alive_positions(&grid), vec![(0, 0), (0, 2), (1, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_count_neighbors_without_wrapping() {
        let mut grid = Grid::new(5, 5);
        grid.set(0, 0, Cell::Alive);
        grid.set(4, 4, Cell::Alive);
        grid.set(1, 1, Cell::Alive);

        // Corner only sees (1, 1); the opposite corner is not a neighbor
        assert_eq!(grid.count_live_neighbors(0, 0), 1);
        assert_eq!(grid.count_live_neighbors(1, 1), 1);
        assert_eq!(grid.count_live_neighbors(2, 2), 1);
        assert_eq!(grid.count_live_neighbors(3, 3), 1);
    }

    #[test]
    fn test_random_factor_one_is_all_dead() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2 {
            let grid = Grid::random(64, 36, 1.0, &mut rng);
            assert_eq!(grid.count_alive(), 0);
        }
    }

    #[test]
    fn test_random_factor_zero_is_all_alive() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2 {
            let grid = Grid::random(64, 36, 0.0, &mut rng);
            assert_eq!(grid.count_alive(), 64 * 36);
        }
    }

    #[test]
    fn test_random_factor_is_roughly_respected() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = Grid::random(200, 200, 0.25, &mut rng);
        let ratio = grid.count_alive() as f64 / 40_000.0;
        assert!((0.72..0.78).contains(&ratio), "alive ratio was {}", ratio);
    }

    #[test]
    fn test_random_factor_out_of_range_is_clamped() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Grid::random(10, 10, 3.0, &mut rng).count_alive(), 0);
        assert_eq!(Grid::random(10, 10, -1.0, &mut rng).count_alive(), 100);
        assert_eq!(Grid::random(10, 10, f64::NAN, &mut rng).count_alive(), 0);
    }

    #[test]
    fn test_vertical_blinker_becomes_horizontal() {
        let rule = LifeRule::default();
        let mut grid = Grid::new(5, 5);
        grid.set(1, 2, Cell::Alive);
        grid.set(2, 2, Cell::Alive);
        grid.set(3, 2, Cell::Alive);

        let next = grid.evolve(&rule);

        assert_eq!(alive_positions(&next), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let rule = LifeRule::default();
        let next = Grid::new(5, 5).evolve(&rule);
        assert_eq!(next, Grid::new(5, 5));
    }

    #[test]
    fn test_full_grid_dies() {
        let rule = LifeRule::default();
        let full = Grid::from_rows(&[[true; 5]; 5]);

        let next = full.evolve(&rule);

        // Interior cells have 4+ neighbors, border is never kept
        assert_eq!(next.dimensions(), (5, 5));
        assert_eq!(next.count_alive(), 0);
    }

    #[test]
    fn test_border_is_dead_after_evolve() {
        let rule = LifeRule::default();
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::random(30, 20, 0.0, &mut rng);
        assert!(!border_is_dead(&grid));

        let next = grid.evolve(&rule);
        assert!(border_is_dead(&next));
        assert_eq!(next.dimensions(), grid.dimensions());

        let random = Grid::random(30, 20, 0.5, &mut rng).evolve(&rule);
        assert!(border_is_dead(&random));
    }

    #[test]
    fn test_border_cells_do_not_come_alive() {
        // (0, 2) has exactly three live neighbors but sits on the border
        let rule = LifeRule::default();
        let grid = Grid::from_rows(&[
            [false, false, false, false, false],
            [false, true, true, true, false],
            [false, false, false, false, false],
            [false, false, false, false, false],
            [false, false, false, false, false],
        ]);
        assert_eq!(grid.count_live_neighbors(0, 2), 3);

        let next = grid.evolve(&rule);
        assert_eq!(next.get(0, 2), Some(Cell::Dead));
    }

    #[test]
    fn test_evolve_is_deterministic() {
        let rule = LifeRule::default();
        let mut rng = StdRng::seed_from_u64(11);
        let grid = Grid::random(40, 30, 0.4, &mut rng);

        let first = grid.evolve(&rule);
        let second = grid.evolve(&rule);
        assert_eq!(first, second);
    }

    #[test]
    fn test_block_still_life() {
        let rule = LifeRule::default();
        let mut grid = Grid::new(6, 6);
        for (row, col) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
            grid.set(row, col, Cell::Alive);
        }

        assert_eq!(grid.evolve(&rule), grid);
    }

    #[test]
    fn test_tiny_grids_have_no_interior() {
        let rule = LifeRule::default();
        for (cols, rows) in [(0, 0), (0, 5), (5, 0), (2, 2), (1, 7)] {
            let full = Grid::from_rows(&vec![vec![true; cols]; rows]);
            let next = full.evolve(&rule);
            assert_eq!(next.count_alive(), 0);
            assert_eq!(next.rows().count(), rows);
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let rule = LifeRule::default();
        let mut rng = StdRng::seed_from_u64(99);
        let grid = Grid::random(97, 53, 0.6, &mut rng);

        let serial = grid.evolve(&rule);
        let parallel = grid.evolve_parallel(&rule);
        assert_eq!(serial, parallel);
    }
}
