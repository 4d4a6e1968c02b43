//! CLI frontend for the ogre skirmish simulator.

mod commands;

use std::process;

use clap::Parser;
use skirmish_mechanics::SimConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "skirmish",
    about = "Monte Carlo simulator for the party-versus-ogres fight",
    version
)]
struct Cli {
    /// Number of silent matches to tally (omit to narrate a single match)
    trials: Option<u32>,

    /// Tally the default number of matches
    #[arg(short, long, conflicts_with = "trials")]
    batch: bool,

    /// RNG seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = SimConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let result = match (cli.trials, cli.batch) {
        (Some(trials), _) => commands::batch::run(&config.with_trials(trials), cli.json),
        (None, true) => commands::batch::run(&config, cli.json),
        (None, false) => commands::fight::run(&config, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
