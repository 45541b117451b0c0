use crate::game::{Deck, DeckError, FutureSight, RoundPolicy};
use crate::rng::GameRng;
use crate::simulation::params::GameParams;
use log::{debug, trace};
use serde::Serialize;

/// Result of a single game simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameOutcome {
    /// Rounds in which the normal draw happened, including a round cut by the cap
    pub rounds_played: usize,
    /// Extra cards played in each resolved round
    pub extra_draws_per_round: Vec<usize>,
    pub average_extra_draws_per_round: f64,
}

impl GameOutcome {
    fn from_rounds(rounds_played: usize, extra_draws_per_round: Vec<usize>) -> Self {
        let total: usize = extra_draws_per_round.iter().sum();
        let average_extra_draws_per_round = if rounds_played > 0 {
            total as f64 / rounds_played as f64
        } else {
            0.0
        };
        GameOutcome {
            rounds_played,
            extra_draws_per_round,
            average_extra_draws_per_round,
        }
    }

    pub fn total_extra_draws(&self) -> usize {
        self.extra_draws_per_round.iter().sum()
    }

    /// Rounds whose extra plays were resolved (all but a round cut by the cap)
    pub fn resolved_rounds(&self) -> usize {
        self.extra_draws_per_round.len()
    }
}

/// Build the unshuffled deck for `params`: ids `0..n`, the first `m` with the quality
pub fn build_deck(params: &GameParams) -> Result<Deck, DeckError> {
    Deck::with_quality_ratio(params.m(), params.n())
}

/// Simulate one future sight game with the standard policy.
///
/// The game goes on until the deck is empty or `round_cap` rounds have been
/// resolved, whichever comes first. The first `initial_hand_size` cards are
/// removed before the first round to account for the opening hand.
pub fn simulate_game(
    params: &GameParams,
    seed: u64,
    round_cap: Option<usize>,
    initial_hand_size: usize,
) -> Result<GameOutcome, DeckError> {
    simulate_game_with_policy(params, &FutureSight, seed, round_cap, initial_hand_size)
}

pub fn simulate_game_with_policy<P: RoundPolicy + ?Sized>(
    params: &GameParams,
    policy: &P,
    seed: u64,
    round_cap: Option<usize>,
    initial_hand_size: usize,
) -> Result<GameOutcome, DeckError> {
    let mut rng = GameRng::new(seed);
    let mut deck = build_deck(params)?;
    deck.shuffle(&mut rng);

    let discarded = deck.discard_top(initial_hand_size);
    if discarded < initial_hand_size {
        trace!("seed {}: deck ran out after {} opening hand cards", seed, discarded);
    }

    let mut rounds_played = 0;
    let mut extra_draws_per_round = Vec::new();

    while !deck.is_empty() {
        // Normal draw for the turn
        deck.draw_top()?;
        rounds_played += 1;

        if round_cap.is_some_and(|cap| rounds_played > cap) {
            break;
        }

        let played = policy.resolve_round(
            &mut deck,
            params.max_plays_per_round(),
            params.max_peeks_per_round(),
        )?;
        trace!(
            "seed {} round {}: {} extra, {} left in deck",
            seed,
            rounds_played,
            played,
            deck.size()
        );
        extra_draws_per_round.push(played);
    }

    let outcome = GameOutcome::from_rounds(rounds_played, extra_draws_per_round);
    debug!(
        "seed {}: {} rounds, {} extra draws ({:.3} per round)",
        seed,
        outcome.rounds_played,
        outcome.total_extra_draws(),
        outcome.average_extra_draws_per_round
    );
    Ok(outcome)
}
