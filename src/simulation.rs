use std::io::{self, Write};

use crate::{Config, Grid};

/// Successive generations of a grid, starting from the initial one.
///
/// Ends after yielding the first generation that equals its successor; the
/// successor itself is not yielded. Only fixed points are detected, so a
/// pattern that oscillates with period 2 or more never ends.
pub struct Generations {
    current: Option<Grid>,
}

impl Generations {
    pub fn new(initial: Grid) -> Self {
        Self {
            current: Some(initial),
        }
    }
}

impl Iterator for Generations {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        let current = self.current.take()?;
        let next = current.next_grid();
        if !current.is_equal(&next) {
            self.current = Some(next);
        }
        Some(current)
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The last printed generation equals its successor.
    FixedPoint { generations: u64 },
    /// The generation limit was hit first.
    Capped { generations: u64 },
}

/// Print every generation followed by a separator line until a fixed point
/// (or `max_generations` printed generations).
pub fn run<W: Write>(
    initial: Grid,
    max_generations: Option<u64>,
    out: &mut W,
) -> io::Result<Outcome> {
    let separator = "=".repeat(Config::SEPARATOR_WIDTH);
    let mut generations = Generations::new(initial);
    let mut printed = 0;

    while max_generations.map_or(true, |max| printed < max) {
        let Some(grid) = generations.next() else {
            tracing::info!(generations = printed, "Reached a fixed point");
            return Ok(Outcome::FixedPoint {
                generations: printed,
            });
        };
        write!(out, "{grid}")?;
        writeln!(out, "{separator}")?;
        printed += 1;
        tracing::debug!(generation = printed, population = grid.population());
    }

    // The cap may coincide with the fixed point.
    if generations.current.is_none() {
        tracing::info!(generations = printed, "Reached a fixed point");
        return Ok(Outcome::FixedPoint {
            generations: printed,
        });
    }
    tracing::warn!(generations = printed, "Stopped before reaching a fixed point");
    Ok(Outcome::Capped {
        generations: printed,
    })
}
