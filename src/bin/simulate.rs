//! Monte Carlo match between two fixed Rock-Paper-Scissors strategies.
//!
//! Usage:
//!   cargo run --release --bin simulate -- --hands 100000 --p1 0.1,0.1,0.8 --p2 0.8,0.2,0

use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rps_cfr::cfr::{expected_value, simulate, CfrError, Strategy};
use rps_cfr::games::rps::RockPaperScissors;

/// Play two fixed strategies against each other and report EV per hand.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of hands to play
    #[arg(short = 'n', long, default_value_t = 100_000)]
    hands: u64,

    /// Player 1 strategy as Rock,Paper,Scissors probabilities
    #[arg(long, value_parser = parse_strategy, default_value = "0.1,0.1,0.8")]
    p1: Strategy,

    /// Player 2 strategy as Rock,Paper,Scissors probabilities
    #[arg(long, value_parser = parse_strategy, default_value = "0.8,0.2,0")]
    p2: Strategy,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<f64>().map_err(|e| format!("{:?}: {}", v, e)))
        .collect::<Result<Vec<f64>, String>>()?;
    let probabilities: [f64; 3] = values
        .try_into()
        .map_err(|v: Vec<f64>| format!("expected 3 probabilities, got {}", v.len()))?;
    Strategy::new(probabilities).map_err(|e| e.to_string())
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

fn run(args: &Args) -> Result<(), CfrError> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let game = RockPaperScissors;
    let result = simulate(&game, args.hands, &args.p1, &args.p2, &mut rng)?;
    log::info!(
        "P1 {} vs P2 {}: exact EV {:+.4}",
        args.p1,
        args.p2,
        expected_value(&game, &args.p1, &args.p2)
    );

    println!("EV per hand:");
    println!("P1: {}", result.p1_ev);
    println!("P2: {}", result.p2_ev);
    Ok(())
}
