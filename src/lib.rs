// Domain layer - grid, cells, update rule, templates
pub mod domain;

// Application layer - universe lifecycle and the run loop
pub mod application;

// Infrastructure layer - text rendering and command-line input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Grid, LifeError, Template, presets};
pub use application::{
    Driver, SeedOutcome, SimulationConfig, StopHandle, Universe, UniverseState,
};
pub use rendering::{DisplaySink, TerminalSink, render_frame};
