use anyhow::{Context, Result};
use clap::Parser;
use toroidal_life::{Driver, SeedOutcome, StopHandle, TerminalSink, Universe, input::Args};

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.config();

    let mut universe = Universe::new(config.cols, config.rows)
        .context("cannot create universe")?
        .with_algorithm(config.algorithm);

    let mut rng = config.rng();
    match universe.seed(args.template(), &mut rng) {
        SeedOutcome::Template { name, offset } => {
            log::info!("seeded with template {name} at {offset:?}")
        }
        SeedOutcome::Random => log::info!("seeded randomly"),
    }

    let stop = StopHandle::new();
    stop.stop_on_interrupt().context("cannot install Ctrl-C handler")?;

    let mut driver = Driver::new(universe, TerminalSink::stdout(), config);
    driver.run(&stop).context("simulation loop failed")?;

    Ok(())
}
