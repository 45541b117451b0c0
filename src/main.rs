use clap::Parser;
use futuresight::simulation::params::{DEFAULT_PLAYS_PER_ROUND, DEFAULT_SEED, DEFAULT_TRIALS};
use futuresight::simulation::{
    run_batch_parallel, run_batch_with_progress, BatchConfig, BatchOutcome, GameParams,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "futuresight")]
#[command(
    about = "Stats about the number of cards a conditional future sight effect can yield in a game",
    long_about = None
)]
struct Cli {
    /// Size of the deck
    decksize: usize,

    /// Number of cards in the deck that can be played from the top of the deck
    numhits: usize,

    /// Maximum number of cards that can be played from the top of the deck per turn
    #[arg(long, default_value_t = DEFAULT_PLAYS_PER_ROUND)]
    hpt: usize,

    /// Number of non-qualifying top cards that can be put on the bottom per turn
    #[arg(long, default_value_t = 0)]
    scry: usize,

    /// Number of simulations to run
    #[arg(long = "trials", visible_alias = "t", default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Seed to recreate a simulation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Stop resolving future sight after this many turns
    #[arg(short, long)]
    rounds: Option<usize>,

    /// Cards drawn into the opening hand before the first turn
    #[arg(long, default_value_t = 0)]
    hand: usize,

    /// Simulate games on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Serialize)]
struct BatchReport<'a> {
    params: &'a GameParams,
    config: &'a BatchConfig,
    outcome: &'a BatchOutcome,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let params = match GameParams::new(cli.numhits, cli.decksize, cli.hpt, cli.scry) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("✗ Invalid parameters: {}", e);
            std::process::exit(1);
        }
    };
    let config = BatchConfig {
        trials: cli.trials,
        round_cap: cli.rounds,
        initial_hand_size: cli.hand,
        base_seed: cli.seed,
    };

    let start = std::time::Instant::now();
    let result = if cli.parallel {
        run_batch_parallel(&params, &config)
    } else {
        let progress = progress_bar(config.trials, cli.quiet || cli.json);
        let result = run_batch_with_progress(&params, &config, |done| {
            progress.set_position(done as u64)
        });
        progress.finish_and_clear();
        result
    };
    let elapsed = start.elapsed();

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("✗ Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    if cli.json {
        let report = BatchReport {
            params: &params,
            config: &config,
            outcome: &outcome,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("✗ Failed to serialize results: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print_results(&params, &config, &outcome);
    println!(
        "\nSimulation completed in {:.2?} ({:.0} games/sec)",
        elapsed,
        config.trials as f64 / elapsed.as_secs_f64()
    );
}

fn progress_bar(trials: usize, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(trials as u64);
    let style = ProgressStyle::with_template("{bar:40} {pos}/{len} games ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}

fn print_results(params: &GameParams, config: &BatchConfig, outcome: &BatchOutcome) {
    println!("\n=== Future Sight Simulator ===\n");
    println!(
        "Deck: {} cards, {} hits ({:.1}%)",
        params.n(),
        params.m(),
        params.quality_ratio() * 100.0
    );
    println!(
        "Per turn: up to {} plays, {} scry",
        params.max_plays_per_round(),
        params.max_peeks_per_round()
    );
    if let Some(rounds) = config.round_cap {
        println!("Turns: {}", rounds);
    }
    if config.initial_hand_size > 0 {
        println!("Opening hand: {} cards", config.initial_hand_size);
    }
    println!("Games: {}", outcome.trials);
    println!("Seed: {}", config.base_seed);
    println!();

    println!("=== Results ===\n");
    println!("Result: {:.4} cards per turn", outcome.overall_average);
    println!();

    println!("Extra cards per turn:");
    for (extra, count) in outcome.histogram.iter().enumerate() {
        let pct = outcome.frequency(extra) * 100.0;
        let bar = "█".repeat((pct / 2.0) as usize);
        println!("  {:2}: {:5.1}% {} ({})", extra, pct, bar, count);
    }
}
