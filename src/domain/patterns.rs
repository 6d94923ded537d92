use super::{Cell, Grid};

/// A named arrangement of live cells, stored as (row, col) offsets from the
/// pattern's top-left corner.
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a pattern from the offsets of its live cells
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().map_or(0, |m| m + 1);
        let width = cells.iter().map(|(_, c)| *c).max().map_or(0, |m| m + 1);
        Self {
            name,
            height,
            width,
            cells,
        }
    }

    /// Stamp the pattern onto a grid with its top-left corner at (row, col).
    /// The pattern must fit inside the grid, as with `Grid::set`.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        for (dr, dc) in &self.cells {
            grid.set(row + dr, col + dc, Cell::Alive);
        }
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Block - simplest still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator, drawn horizontally
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

    /// Glider - simplest spaceship, moves diagonally with period 4
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

    /// All bundled patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_derive_from_offsets() {
        let blinker = presets::blinker();
        assert_eq!((blinker.height, blinker.width), (1, 3));

        let glider = presets::glider();
        assert_eq!((glider.height, glider.width), (3, 3));
    }

    #[test]
    fn place_on_sets_only_the_pattern_cells() {
        let mut grid = Grid::new(5, 5).unwrap();
        presets::blinker().place_on(&mut grid, 2, 1);

        let live: Vec<(usize, usize)> = (0..5)
            .flat_map(|r| (0..5).map(move |c| (r, c)))
            .filter(|&(r, c)| grid.get(r, c).is_alive())
            .collect();
        assert_eq!(live, vec![(2, 1), (2, 2), (2, 3)]);
    }
}
