mod config;
mod grid;
mod simulation;
mod utils;

pub use config::Config;
pub use grid::Grid;
pub use simulation::{run, Generations, Outcome};
pub use utils::{Coordinate, GridError, Pattern, Result};
