use crate::application::SimulationConfig;
use crate::domain::{Algorithm, presets};
use clap::Parser;
use std::time::Duration;

/// Conway's Game of Life on a toroidal grid, drawn in the terminal.
#[derive(Parser, Debug)]
#[command(name = "toroidal_life", version)]
pub struct Args {
    /// Built-in template to start from; anything else seeds the grid randomly
    #[arg(long_help = template_help())]
    pub template: Option<String>,

    /// Number of columns
    #[arg(long, default_value_t = 25)]
    pub cols: usize,

    /// Number of rows
    #[arg(long, default_value_t = 25)]
    pub rows: usize,

    /// Pause between generations, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Seed for random initialization
    #[arg(long)]
    pub seed: Option<u64>,

    /// Evolve rows in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Stop after this many generations
    #[arg(long)]
    pub generations: Option<u64>,
}

impl Args {
    /// Simulation settings described by these arguments
    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            cols: self.cols,
            rows: self.rows,
            delay: Duration::from_millis(self.delay_ms),
            algorithm: if self.parallel {
                Algorithm::Parallel
            } else {
                Algorithm::Serial
            },
            rng_seed: self.seed,
            max_generations: self.generations,
        }
    }

    /// Template name to seed with, as given on the command line
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }
}

fn template_help() -> String {
    format!(
        "Built-in template to start from: {}.\n\
         Any other value, or none, seeds the grid randomly.",
        presets::summary()
    )
}
