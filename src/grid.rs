use std::fmt;

use crate::utils::{Coordinate, GridError, Result};


/// Square field of cells with dead surroundings (no wraparound).
///
/// Cells are stored row-major in a single owned buffer: `(x, y)` lives at
/// `x * dimension + y`, so `x` selects the row and `y` the column.
/// A generation step never mutates the grid, it builds a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dimension: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead field with dimensions `dimension x dimension`
    pub fn blank(dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(GridError::ZeroDimension);
        }
        let size = dimension
            .checked_mul(dimension)
            .ok_or(GridError::DimensionTooLarge(dimension))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size)
            .map_err(|_| GridError::DimensionTooLarge(dimension))?;
        cells.resize(size, false);
        Ok(Self { dimension, cells })
    }

    /// Create a field where exactly the given coordinates are alive.
    ///
    /// Fails on the first coordinate that doesn't fit the field.
    pub fn new(dimension: usize, live: impl IntoIterator<Item = Coordinate>) -> Result<Self> {
        let mut grid = Self::blank(dimension)?;
        for c in live {
            let idx = grid
                .index(c.x, c.y)
                .ok_or(GridError::CoordinateOutOfBounds {
                    x: c.x,
                    y: c.y,
                    dimension,
                })?;
            grid.cells[idx] = true;
        }
        Ok(grid)
    }

    /// Create a field with random cells
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(dimension: usize, seed: Option<u64>, fill_rate: f64) -> Result<Self> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(GridError::InvalidFillRate(fill_rate));
        }
        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut result = Self::blank(dimension)?;
        for cell in result.cells.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
        Ok(result)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if self.is_valid_coordinate(x, y) {
            Some(x as usize * self.dimension + y as usize)
        } else {
            None
        }
    }

    pub fn is_valid_coordinate(&self, x: i64, y: i64) -> bool {
        let in_range = |v: i64| usize::try_from(v).is_ok_and(|v| v < self.dimension);
        in_range(x) && in_range(y)
    }

    /// State of a single cell, `None` outside of the field.
    pub fn get(&self, x: i64, y: i64) -> Option<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    fn neighbors_in_bounds(&self, x: i64, y: i64) -> impl Iterator<Item = Coordinate> + '_ {
        self.is_valid_coordinate(x, y)
            .then(|| Coordinate::new(x, y).neighbors())
            .into_iter()
            .flatten()
            .filter(move |c| self.is_valid_coordinate(c.x, c.y))
    }

    /// Moore neighbors of `(x, y)` that lie inside the field, in clockwise
    /// order starting from `(x, y + 1)`.
    ///
    /// Empty if `(x, y)` itself is outside of the field.
    pub fn valid_neighbor_coordinates(&self, x: i64, y: i64) -> Vec<Coordinate> {
        self.neighbors_in_bounds(x, y).collect()
    }

    /// Neighbors outside of the field are not counted, so the result is
    /// at most 3 in a corner and at most 5 on an edge.
    pub fn count_live_neighbors(&self, x: i64, y: i64) -> usize {
        self.neighbors_in_bounds(x, y)
            .filter(|c| self.get(c.x, c.y) == Some(true))
            .count()
    }

    /// State of `(x, y)` in the next generation, computed from this one.
    pub fn next_cell_state(&self, x: i64, y: i64) -> bool {
        let Some(alive) = self.get(x, y) else {
            return false;
        };
        let neibs = self.count_live_neighbors(x, y);
        if alive {
            neibs == 2 || neibs == 3
        } else {
            neibs == 3
        }
    }

    /// Build the next generation; `self` stays untouched.
    pub fn next_grid(&self) -> Self {
        let n = self.dimension;
        let mut next = Self {
            dimension: n,
            cells: vec![false; self.cells.len()],
        };
        for x in 0..n {
            for y in 0..n {
                next.cells[x * n + y] = self.next_cell_state(x as i64, y as i64);
            }
        }
        next
    }

    pub fn is_there_life(&self) -> bool {
        self.cells.iter().any(|&alive| alive)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let n = self.dimension;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| Coordinate::new((i / n) as i64, (i % n) as i64))
    }

    /// Same dimension and the same state of every cell.
    pub fn is_equal(&self, other: &Self) -> bool {
        self == other
    }

    /// Write the [`Display`](fmt::Display) rendering to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

/// One line per row, every cell as `1 ` or `0 ` (the trailing space is kept).
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.dimension) {
            for &alive in row {
                write!(f, "{} ", alive as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
