use super::{Coordinate, Result};
use crate::Grid;

/// Built-in starting patterns, anchored at the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Pattern {
    /// Travels by (+1, +1) every 4 generations
    #[default]
    Glider,
    Block,
    Blinker,
    Beacon,
    Toad,
    Empty,
    /// Every cell is alive with probability `fill_rate`
    Random,
}

impl Pattern {
    /// Live cells of a fixed preset; empty for `Random`.
    pub fn cells(self) -> &'static [(i64, i64)] {
        match self {
            Self::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            Self::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            Self::Blinker => &[(1, 0), (1, 1), (1, 2)],
            Self::Beacon => &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
            Self::Toad => &[(1, 1), (1, 2), (1, 3), (2, 0), (2, 1), (2, 2)],
            Self::Empty | Self::Random => &[],
        }
    }

    /// Place the pattern on a blank `dimension x dimension` field.
    ///
    /// `seed` and `fill_rate` are only used by `Random`.
    pub fn grid(self, dimension: usize, seed: Option<u64>, fill_rate: f64) -> Result<Grid> {
        match self {
            Self::Random => Grid::random(dimension, seed, fill_rate),
            _ => Grid::new(
                dimension,
                self.cells().iter().copied().map(Coordinate::from),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::GridError;

    #[test]
    fn test_glider_grid() {
        let g = Pattern::Glider.grid(10, None, 0.).unwrap();
        assert_eq!(g.population(), 5);
        assert_eq!(g.get(0, 1), Some(true));
        assert_eq!(g.get(2, 2), Some(true));
    }

    #[test]
    fn test_still_lifes() {
        for pattern in [Pattern::Block, Pattern::Empty] {
            let g = pattern.grid(6, None, 0.).unwrap();
            assert_eq!(g, g.next_grid());
        }
    }

    #[test]
    fn test_oscillators_have_period_two() {
        for pattern in [Pattern::Blinker, Pattern::Beacon, Pattern::Toad] {
            let g = pattern.grid(6, None, 0.).unwrap();
            let next = g.next_grid();
            assert_ne!(g, next, "{pattern:?}");
            assert_eq!(g, next.next_grid(), "{pattern:?}");
        }
    }

    #[test]
    fn test_pattern_too_large() {
        assert_eq!(
            Pattern::Glider.grid(2, None, 0.),
            Err(GridError::CoordinateOutOfBounds {
                x: 1,
                y: 2,
                dimension: 2
            })
        );
    }

    #[test]
    fn test_random_pattern() {
        let a = Pattern::Random.grid(32, Some(7), 0.5).unwrap();
        assert_eq!(a, Grid::random(32, Some(7), 0.5).unwrap());
        assert!(a.is_there_life());
    }
}
