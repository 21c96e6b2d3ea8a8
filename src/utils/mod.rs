mod coordinate;
mod error;
mod patterns;

pub use coordinate::Coordinate;
pub use error::{GridError, Result};
pub use patterns::Pattern;
