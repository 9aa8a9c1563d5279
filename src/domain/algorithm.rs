//! Algorithm enum for selecting the evolution implementation.
//!
//! Both strategies build the next generation into a fresh buffer from
//! reads of the current one; they differ only in how the work is split.

/// Available evolution strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Rows evolved concurrently with rayon
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for logs and benchmark output
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Short description
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Cell enum array, serial",
            Algorithm::Parallel => "Cell enum array, one rayon task per row",
        }
    }
}
