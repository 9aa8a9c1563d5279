mod config;
mod driver;
mod universe;

pub use config::SimulationConfig;
pub use driver::{Driver, StopHandle};
pub use universe::{SeedOutcome, Universe, UniverseState};
