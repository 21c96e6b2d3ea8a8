use thiserror::Error;

/// Errors raised while building a grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Grid dimension must be positive")]
    ZeroDimension,

    #[error("Grid dimension {0} is too large to allocate")]
    DimensionTooLarge(usize),

    #[error("Coordinate ({x}, {y}) is out of bounds for a grid of dimension {dimension}")]
    CoordinateOutOfBounds { x: i64, y: i64, dimension: usize },

    #[error("Fill rate {0} is outside of [0, 1]")]
    InvalidFillRate(f64),
}

pub type Result<T> = std::result::Result<T, GridError>;
