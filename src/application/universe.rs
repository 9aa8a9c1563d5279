use crate::domain::{Algorithm, Grid, LifeError, presets};
use rand::Rng;

/// Lifecycle of a universe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UniverseState {
    /// Constructed, all cells dead, never seeded
    Uninitialized,
    /// Seeded at least once
    Running,
}

/// What a call to `Universe::seed` ended up doing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// A built-in template was stamped at the given offset
    Template { name: &'static str, offset: (isize, isize) },
    /// Every cell was randomized
    Random,
}

/// Universe owns the grid and drives generational transitions.
pub struct Universe {
    grid: Grid,
    algorithm: Algorithm,
    state: UniverseState,
    generation: u64,
}

impl Universe {
    /// Create an all-dead universe. Both dimensions must be positive.
    pub fn new(cols: usize, rows: usize) -> Result<Self, LifeError> {
        Ok(Self {
            grid: Grid::new(cols, rows)?,
            algorithm: Algorithm::default(),
            state: UniverseState::Uninitialized,
            generation: 0,
        })
    }

    /// Select the evolution algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Seed the grid from a named template, or randomly when the name is
    /// absent or unknown. Replaces the whole grid and resets the generation
    /// counter, so seeding a running universe restarts it.
    pub fn seed<R: Rng + ?Sized>(&mut self, template: Option<&str>, rng: &mut R) -> SeedOutcome {
        let outcome = match template.map(|name| (name, presets::find(name))) {
            Some((_, Some(template))) => {
                let offset = self.grid.stamp_centered(template);
                log::debug!("stamped template {} at offset {:?}", template.name, offset);
                SeedOutcome::Template { name: template.name, offset }
            }
            Some((name, None)) => {
                log::warn!(
                    "unknown template {name:?} (known: {}), falling back to random seeding",
                    presets::summary()
                );
                self.grid.randomize(rng);
                SeedOutcome::Random
            }
            None => {
                self.grid.randomize(rng);
                SeedOutcome::Random
            }
        };

        if self.state == UniverseState::Running {
            log::debug!("re-seeded at generation {}", self.generation);
        }
        self.state = UniverseState::Running;
        self.generation = 0;
        outcome
    }

    /// Compute the next generation and swap it in
    pub fn advance(&mut self) {
        self.grid = match self.algorithm {
            Algorithm::Serial => self.grid.evolve(),
            Algorithm::Parallel => self.grid.evolve_parallel(),
        };
        self.generation += 1;
        log::trace!(
            "generation {} population {}",
            self.generation,
            self.grid.population()
        );
    }

    /// Read-only view of the current generation
    pub fn snapshot(&self) -> &Grid {
        &self.grid
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn state(&self) -> UniverseState {
        self.state
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}
