//! Rock-Paper-Scissors CFR training binary.
//!
//! Usage:
//!   cargo run --release --bin train -- [OPTIONS]
//!
//! Set `RUST_LOG=debug` together with `--log-interval` to watch the current
//! strategies evolve.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use rps_cfr::cfr::{CfrError, Trainer, TrainerConfig, TrainingResult};
use rps_cfr::games::rps::RockPaperScissors;

/// Train a Rock-Paper-Scissors strategy by CFR self-play and print the average.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of self-play iterations
    #[arg(short, long)]
    iterations: Option<u64>,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON configuration file; command line flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log the current strategies every N iterations (at debug level)
    #[arg(long)]
    log_interval: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Show a progress bar
    #[arg(long)]
    progress: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<TrainerConfig, CfrError> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("loading configuration from {}", path.display());
            TrainerConfig::from_json_file(path)?
        }
        None => TrainerConfig::default(),
    };

    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(interval) = args.log_interval {
        config.log_interval = Some(interval);
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<(), CfrError> {
    let config = load_config(args)?;
    let mut trainer = Trainer::new(RockPaperScissors, config);

    let result = if args.progress {
        let iterations = trainer.config().iterations;
        let bar = ProgressBar::new(iterations);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} iterations ({per_sec}, eta {eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        let interval = (iterations / 100).max(1);
        let result = trainer.run_with_callback(interval, |stats| {
            bar.set_position(stats.iterations);
        });
        bar.finish_and_clear();
        result?
    } else {
        trainer.run()?
    };

    print_result(&result, args.json);
    Ok(())
}

fn print_result(result: &TrainingResult, json: bool) {
    if json {
        match serde_json::to_string_pretty(result) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error serializing result: {}", e),
        }
        return;
    }

    println!("{}", result.strategy());
    log::info!(
        "P2 average {} ({} iterations, {:.0} it/s)",
        result.average_strategies[1],
        result.stats.iterations,
        result.stats.iterations_per_second
    );
}
