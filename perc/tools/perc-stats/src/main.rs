#![forbid(unsafe_code)]

use clap::Parser;
use log::{info, LevelFilter};
use perc::PercolationStats;
use rand::{rngs::StdRng, SeedableRng};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

////////////////////////////////////////////////////////////////////////////////

/// Estimates the percolation threshold of an N-by-N grid by Monte Carlo
/// simulation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid dimension N.
    #[arg(allow_negative_numbers = true)]
    grid_size: i64,

    /// Number of independent trials T.
    #[arg(allow_negative_numbers = true)]
    trials: i64,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    TermLogger::init(
        level_filter(args.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let stats = match args.seed {
        Some(seed) => {
            info!("Using seed {seed}");
            PercolationStats::run_with_rng(
                args.grid_size,
                args.trials,
                &mut StdRng::seed_from_u64(seed),
            )?
        }
        None => PercolationStats::run(args.grid_size, args.trials)?,
    };

    println!("{stats}");
    Ok(())
}
