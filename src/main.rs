#![warn(clippy::all)]

use anyhow::Context;
use bounded_life::{Config, Pattern};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Side length of the square grid
    #[arg(short, long, default_value_t = Config::DEFAULT_DIMENSION)]
    dimension: usize,

    /// Starting pattern, placed at the top-left corner
    #[arg(short, long, value_enum, default_value_t = Pattern::Glider)]
    pattern: Pattern,

    /// Seed for the random pattern
    #[arg(long)]
    seed: Option<u64>,

    /// Probability of a cell being alive in the random pattern
    #[arg(long, default_value_t = Config::DEFAULT_FILL_RATE)]
    fill_rate: f64,

    /// Stop after this many generations even if the grid keeps changing
    #[arg(long)]
    max_generations: Option<u64>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            dimension: args.dimension,
            pattern: args.pattern,
            seed: args.seed,
            fill_rate: args.fill_rate,
            max_generations: args.max_generations,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(Args::parse());
    tracing::debug!(?config, "Starting simulation");

    let grid = config
        .initial_grid()
        .with_context(|| format!("Failed to seed a {0}x{0} grid", config.dimension))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = bounded_life::run(grid, config.max_generations, &mut out)
        .context("Failed to write to stdout")?;
    tracing::debug!(?outcome, "Simulation finished");
    Ok(())
}
