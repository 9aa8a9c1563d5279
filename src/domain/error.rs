use thiserror::Error;

/// Errors raised by the simulation core and its display sink.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Grid dimensions must both be positive and the grid must fit in memory.
    #[error("invalid dimension {cols}x{rows}: dimensions must be positive and fit in memory")]
    InvalidDimension { cols: usize, rows: usize },

    /// The display sink failed to write a frame.
    #[error("failed to render frame")]
    Render(#[from] std::io::Error),

    /// The Ctrl-C handler could not be installed.
    #[error("failed to install interrupt handler")]
    Interrupt(#[from] ctrlc::Error),
}
