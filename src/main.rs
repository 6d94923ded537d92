use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lifegame::{ConsolePresenter, Simulation};

#[derive(Parser)]
#[clap(name = "lifegame")]
#[clap(about = "Conway's Game of Life on a toroidal grid, animated in the terminal", long_about = None)]
struct Cli {
    /// Field height
    height: usize,

    /// Field width
    width: usize,

    /// Percentage of surviving cells of the first generation
    init_rate: f64,

    /// Time to evolve to the next generation, in seconds
    interval: f64,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never corrupt the animation frame
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut simulation = Simulation::new(cli.height, cli.width, cli.init_rate, cli.interval)
        .context("invalid simulation parameters")?;

    simulation.run(&mut ConsolePresenter::new())?;
    Ok(())
}
