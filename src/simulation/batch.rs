use crate::game::DeckError;
use crate::rng::trial_seed;
use crate::simulation::engine::{simulate_game, GameOutcome};
use crate::simulation::params::{GameParams, DEFAULT_SEED, DEFAULT_TRIALS};
use log::debug;
use rayon::prelude::*;
use serde::Serialize;

/// How a batch of games is run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchConfig {
    pub trials: usize,
    pub round_cap: Option<usize>,
    pub initial_hand_size: usize,
    pub base_seed: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            trials: DEFAULT_TRIALS,
            round_cap: None,
            initial_hand_size: 0,
            base_seed: DEFAULT_SEED,
        }
    }
}

/// Aggregate of many independent games
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub trials: usize,
    /// Mean of each game's average extra draws per round
    pub overall_average: f64,
    /// `histogram[v]` counts the (game, round) pairs with exactly `v` extra draws
    pub histogram: Vec<u64>,
}

impl BatchOutcome {
    /// Total (game, round) pairs counted in the histogram
    pub fn total_rounds(&self) -> u64 {
        self.histogram.iter().sum()
    }

    /// Share of rounds with exactly `extra` extra draws
    pub fn frequency(&self, extra: usize) -> f64 {
        let total = self.total_rounds();
        match self.histogram.get(extra) {
            Some(&count) if total > 0 => count as f64 / total as f64,
            _ => 0.0,
        }
    }
}

/// Folds game outcomes, in trial order, into a [`BatchOutcome`]
struct Aggregator {
    trials: usize,
    average_sum: f64,
    histogram: Vec<u64>,
}

impl Aggregator {
    fn new(params: &GameParams) -> Self {
        Aggregator {
            trials: 0,
            average_sum: 0.0,
            histogram: vec![0; params.max_plays_per_round() + 1],
        }
    }

    fn add(&mut self, outcome: &GameOutcome) {
        self.trials += 1;
        self.average_sum += outcome.average_extra_draws_per_round;
        for &extra in &outcome.extra_draws_per_round {
            // resolve_round never plays more than max_plays_per_round
            self.histogram[extra] += 1;
        }
    }

    fn finish(self) -> BatchOutcome {
        let overall_average = if self.trials > 0 {
            self.average_sum / self.trials as f64
        } else {
            0.0
        };
        BatchOutcome {
            trials: self.trials,
            overall_average,
            histogram: self.histogram,
        }
    }
}

/// Run `trial_count` games, trial `i` seeded with `base_seed + i`
pub fn run_batch(
    params: &GameParams,
    trial_count: usize,
    round_cap: Option<usize>,
    initial_hand_size: usize,
    base_seed: u64,
) -> Result<BatchOutcome, DeckError> {
    let config = BatchConfig {
        trials: trial_count,
        round_cap,
        initial_hand_size,
        base_seed,
    };
    run_batch_with_progress(params, &config, |_| {})
}

/// Sequential batch that calls `on_trial` with the number of finished trials
pub fn run_batch_with_progress<F>(
    params: &GameParams,
    config: &BatchConfig,
    mut on_trial: F,
) -> Result<BatchOutcome, DeckError>
where
    F: FnMut(usize),
{
    params.validate()?;
    debug!("running {} trials sequentially: {:?} {:?}", config.trials, params, config);

    let mut aggregator = Aggregator::new(params);
    for i in 0..config.trials {
        let outcome = simulate_game(
            params,
            trial_seed(config.base_seed, i),
            config.round_cap,
            config.initial_hand_size,
        )?;
        aggregator.add(&outcome);
        on_trial(i + 1);
    }

    Ok(aggregator.finish())
}

/// Same result as [`run_batch_with_progress`], with games simulated on the rayon pool.
///
/// Outcomes are collected in trial order and folded sequentially, so the
/// floating point sum matches the sequential run bit for bit.
pub fn run_batch_parallel(params: &GameParams, config: &BatchConfig) -> Result<BatchOutcome, DeckError> {
    params.validate()?;
    debug!("running {} trials in parallel: {:?} {:?}", config.trials, params, config);

    let outcomes: Vec<GameOutcome> = (0..config.trials)
        .into_par_iter()
        .map(|i| {
            simulate_game(
                params,
                trial_seed(config.base_seed, i),
                config.round_cap,
                config.initial_hand_size,
            )
        })
        .collect::<Result<_, _>>()?;

    let mut aggregator = Aggregator::new(params);
    for outcome in &outcomes {
        aggregator.add(outcome);
    }
    Ok(aggregator.finish())
}
