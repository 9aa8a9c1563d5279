use super::{SimulationConfig, Universe};
use crate::domain::LifeError;
use crate::rendering::DisplaySink;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cloneable flag that asks a running driver to stop
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Trigger this handle on Ctrl-C. Only one handler may be installed per process.
    pub fn stop_on_interrupt(&self) -> Result<(), LifeError> {
        let handle = self.clone();
        ctrlc::set_handler(move || {
            log::info!("interrupt received, stopping");
            handle.stop();
        })?;
        Ok(())
    }
}

/// Driver runs the advance, render, sleep loop.
pub struct Driver<S: DisplaySink> {
    universe: Universe,
    sink: S,
    config: SimulationConfig,
}

impl<S: DisplaySink> Driver<S> {
    pub fn new(universe: Universe, sink: S, config: SimulationConfig) -> Self {
        Self { universe, sink, config }
    }

    /// Loop until `stop` is triggered or the generation limit is hit.
    /// Returns the number of generations advanced.
    pub fn run(&mut self, stop: &StopHandle) -> Result<u64, LifeError> {
        let (cols, rows) = self.universe.dimensions();
        log::info!(
            "running {cols}x{rows} universe ({:?}), {} evolution, {:?} between generations",
            self.universe.state(),
            self.universe.algorithm().name(),
            self.config.delay
        );
        let mut ticks = 0;

        loop {
            if stop.is_stopped() || self.limit_reached(ticks) {
                break;
            }

            self.universe.advance();
            self.sink.render(self.universe.snapshot(), self.universe.generation())?;
            ticks += 1;

            // No pause after the last generation
            if !self.config.delay.is_zero() && !self.limit_reached(ticks) {
                std::thread::sleep(self.config.delay);
            }
        }

        log::info!("simulation stopped after {ticks} generations");
        Ok(ticks)
    }

    fn limit_reached(&self, ticks: u64) -> bool {
        self.config.max_generations.is_some_and(|max| ticks >= max)
    }
}
