use crate::{Grid, Pattern, Result};

/// Parameters of a single simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub dimension: usize,
    pub pattern: Pattern,
    /// Only used by [`Pattern::Random`]; `None` draws a seed from entropy.
    pub seed: Option<u64>,
    pub fill_rate: f64,
    /// Stop after this many printed generations even without a fixed point.
    /// `None` keeps going until the grid stops changing, forever for oscillators.
    pub max_generations: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dimension: Self::DEFAULT_DIMENSION,
            pattern: Pattern::default(),
            seed: None,
            fill_rate: Self::DEFAULT_FILL_RATE,
            max_generations: None,
        }
    }
}

impl Config {
    pub const DEFAULT_DIMENSION: usize = 10;
    pub const DEFAULT_FILL_RATE: f64 = 0.3;

    /// Width of the `=` line printed after each generation.
    pub const SEPARATOR_WIDTH: usize = 45;

    pub fn initial_grid(&self) -> Result<Grid> {
        self.pattern.grid(self.dimension, self.seed, self.fill_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinate;

    #[test]
    fn test_default_is_glider_on_10x10() {
        let grid = Config::default().initial_grid().unwrap();
        assert_eq!(grid.dimension(), 10);
        let glider: [(i64, i64); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        assert_eq!(
            grid.live_cells().collect::<Vec<_>>(),
            glider.map(Coordinate::from)
        );
    }
}
