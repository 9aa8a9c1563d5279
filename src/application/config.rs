use crate::domain::Algorithm;
use std::time::Duration;

/// Settings for one simulation run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub cols: usize,
    pub rows: usize,
    /// Pause between a render and the next advance
    pub delay: Duration,
    pub algorithm: Algorithm,
    /// Fixed rng seed; `None` seeds from the operating system
    pub rng_seed: Option<u64>,
    /// Stop after this many generations; `None` runs until stopped
    pub max_generations: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cols: 25,
            rows: 25,
            delay: Duration::from_millis(100),
            algorithm: Algorithm::default(),
            rng_seed: None,
            max_generations: None,
        }
    }
}

impl SimulationConfig {
    /// Build the rng used for random seeding
    pub fn rng(&self) -> rand::rngs::StdRng {
        use rand::SeedableRng;

        match self.rng_seed {
            Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
            None => rand::rngs::StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = SimulationConfig::default();
        assert_eq!((config.cols, config.rows), (25, 25));
        assert_eq!(config.delay, Duration::from_millis(100));
        assert_eq!(config.algorithm, Algorithm::Serial);
        assert_eq!(config.max_generations, None);
    }

    #[test]
    fn test_fixed_seed_gives_repeatable_rng() {
        let config = SimulationConfig {
            rng_seed: Some(11),
            ..Default::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
