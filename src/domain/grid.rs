use std::fmt;

use rand::Rng;

use super::Cell;
use crate::error::ConfigError;

/// Grid is the toroidal board: a fixed-size, row-major array of cells
/// addressed by (row, col). Dimensions never change after construction, and
/// evolution is functional: the next generation is always a new grid built
/// entirely from reads of this one.
///
/// Equality is cell-wise: two grids compare equal iff their dimensions and
/// every cell state match.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead.
    pub fn new(height: usize, width: usize) -> Result<Self, ConfigError> {
        if height == 0 || width == 0 {
            return Err(ConfigError::Dimensions { height, width });
        }
        Ok(Self {
            height,
            width,
            cells: vec![Cell::Dead; height * width],
        })
    }

    /// Create a grid where each cell is independently alive with probability
    /// `rate`.
    pub fn random(height: usize, width: usize, rate: f64) -> Result<Self, ConfigError> {
        Self::random_with(height, width, rate, &mut rand::rng())
    }

    /// Random construction with a caller-supplied generator, so callers can
    /// seed deterministically.
    pub fn random_with<R: Rng>(
        height: usize,
        width: usize,
        rate: f64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigError::Rate(rate));
        }
        let mut grid = Self::new(height, width)?;
        for cell in &mut grid.cells {
            if rng.random_bool(rate) {
                *cell = Cell::Alive;
            }
        }
        Ok(grid)
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    /// Convert (row, col) to an index into the backing storage
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Cell state at (row, col).
    ///
    /// Panics on an out-of-range coordinate: the only legitimate coordinate
    /// sources are the wrap-around neighbor arithmetic and iteration bounded
    /// by the grid's own dimensions, so a violation is an internal bug.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.height && col < self.width,
            "coordinate ({row}, {col}) outside {}x{} grid",
            self.height,
            self.width
        );
        self.cells[self.index(row, col)]
    }

    /// Set the cell state at (row, col). Same range precondition as `get`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!(
            row < self.height && col < self.width,
            "coordinate ({row}, {col}) outside {}x{} grid",
            self.height,
            self.width
        );
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Count live neighbors of (row, col) with toroidal wrapping: row 0's
    /// northern neighbor is row height-1, column 0's western neighbor is
    /// column width-1, and symmetrically at the far edges.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let h = self.height as isize;
        let w = self.width as isize;

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dy, dx)))
            .filter(|&(dy, dx)| dy != 0 || dx != 0)
            .map(|(dy, dx)| {
                let r = (row as isize + dy).rem_euclid(h) as usize;
                let c = (col as isize + dx).rem_euclid(w) as usize;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the next generation into fresh storage. Every neighbor count
    /// reads this grid, so a pass never observes its own updates.
    pub fn next_generation(&self) -> Self {
        let cells = (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .map(|(row, col)| {
                self.get(row, col)
                    .evolve(self.count_live_neighbors(row, col))
            })
            .collect();

        Self {
            height: self.height,
            width: self.width,
            cells,
        }
    }
}

impl fmt::Display for Grid {
    /// Render as `height` lines of `width` glyphs: `■` for a live cell, a
    /// space for a dead one. Rows are joined with line breaks, nothing else.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                f.write_str("\n")?;
            }
            for col in 0..self.width {
                f.write_str(if self.get(row, col).is_alive() { "■" } else { " " })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::presets;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(ConfigError::Dimensions { height: 0, width: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(ConfigError::Dimensions { height: 5, width: 0 })
        );
    }

    #[test]
    fn rejects_rate_outside_unit_interval() {
        assert!(matches!(Grid::random(3, 3, -0.1), Err(ConfigError::Rate(_))));
        assert!(matches!(Grid::random(3, 3, 1.1), Err(ConfigError::Rate(_))));
    }

    #[test]
    fn random_rate_extremes_are_deterministic() {
        let dead = Grid::random(4, 4, 0.0).unwrap();
        assert_eq!(dead, Grid::new(4, 4).unwrap());

        let alive = Grid::random(4, 4, 1.0).unwrap();
        assert!((0..4).all(|r| (0..4).all(|c| alive.get(r, c).is_alive())));
    }

    #[test]
    fn neighbor_count_wraps_around_corners() {
        let mut grid = Grid::new(4, 5).unwrap();
        grid.set(3, 4, Cell::Alive);

        // (3,4) is the diagonal neighbor of (0,0) across both edges
        assert_eq!(grid.count_live_neighbors(0, 0), 1);
        assert_eq!(grid.count_live_neighbors(2, 3), 1);
        // the live cell itself is not its own neighbor
        assert_eq!(grid.count_live_neighbors(3, 4), 0);
    }

    #[test]
    fn neighbor_count_caps_at_eight() {
        let mut grid = Grid::new(3, 3).unwrap();
        for r in 0..3 {
            for c in 0..3 {
                grid.set(r, c, Cell::Alive);
            }
        }
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
    }

    #[test]
    fn all_dead_grid_stays_dead() {
        let grid = Grid::new(6, 6).unwrap();
        assert_eq!(grid.next_generation(), grid);
    }

    #[test]
    fn lone_cell_dies_of_underpopulation() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, Cell::Alive);

        assert_eq!(grid.next_generation(), Grid::new(5, 5).unwrap());
    }

    #[test]
    fn block_is_a_still_life() {
        let mut grid = Grid::new(6, 6).unwrap();
        presets::block().place_on(&mut grid, 2, 2);

        assert_eq!(grid.next_generation(), grid);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let mut horizontal = Grid::new(5, 5).unwrap();
        presets::blinker().place_on(&mut horizontal, 2, 1);

        let mut vertical = Grid::new(5, 5).unwrap();
        vertical.set(1, 2, Cell::Alive);
        vertical.set(2, 2, Cell::Alive);
        vertical.set(3, 2, Cell::Alive);

        let step1 = horizontal.next_generation();
        assert_eq!(step1, vertical);
        assert_eq!(step1.next_generation(), horizontal);
    }

    #[test]
    fn equality_is_cell_wise() {
        let mut a = Grid::new(4, 4).unwrap();
        a.set(1, 2, Cell::Alive);
        let mut b = a.clone();
        assert_eq!(a, b);

        b.set(3, 3, Cell::Alive);
        assert_ne!(a, b);
    }

    #[test]
    fn render_uses_block_glyphs_and_spaces() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(0, 0, Cell::Alive);
        grid.set(1, 2, Cell::Alive);

        assert_eq!(grid.to_string(), "■  \n  ■");
    }

    #[test]
    fn render_is_idempotent() {
        let grid = Grid::random(4, 6, 0.5).unwrap();
        assert_eq!(grid.to_string(), grid.to_string());
    }
}
