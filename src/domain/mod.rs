mod algorithm;
mod cell;
mod error;
mod grid;
mod patterns;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use error::LifeError;
pub use grid::Grid;
pub use patterns::{Template, presets};
