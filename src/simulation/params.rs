use crate::game::DeckError;
use serde::Serialize;

pub const DEFAULT_SEED: u64 = 20220610;
pub const DEFAULT_TRIALS: usize = 10_000;
pub const DEFAULT_PLAYS_PER_ROUND: usize = 1;

/// Setting of a conditional future sight game.
///
/// A deck of `n` cards where `m` have the quality; each round up to
/// `max_plays_per_round` of them may be played off the top, with up to
/// `max_peeks_per_round` bricks buried along the way. An Oracle of Mul Daya
/// in a 99 card deck with 42 lands is `GameParams::new(42, 99, 1, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameParams {
    m: usize,
    n: usize,
    max_plays_per_round: usize,
    max_peeks_per_round: usize,
}

impl GameParams {
    pub fn new(
        m: usize,
        n: usize,
        max_plays_per_round: usize,
        max_peeks_per_round: usize,
    ) -> Result<Self, DeckError> {
        let params = GameParams {
            m,
            n,
            max_plays_per_round,
            max_peeks_per_round,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), DeckError> {
        if self.m > self.n {
            return Err(DeckError::InvalidParameters {
                quality: self.m,
                size: self.n,
            });
        }
        Ok(())
    }

    /// Number of cards with the quality
    pub fn m(&self) -> usize {
        self.m
    }

    /// Deck size
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn max_plays_per_round(&self) -> usize {
        self.max_plays_per_round
    }

    pub fn max_peeks_per_round(&self) -> usize {
        self.max_peeks_per_round
    }

    /// Fraction of the deck that has the quality
    pub fn quality_ratio(&self) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            self.m as f64 / self.n as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_params() {
        let params = GameParams::new(42, 99, 1, 0).expect("valid params");
        assert_eq!(params.m(), 42);
        assert_eq!(params.n(), 99);
        assert_eq!(params.max_plays_per_round(), 1);
        assert_eq!(params.max_peeks_per_round(), 0);
        assert!((params.quality_ratio() - 42.0 / 99.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_deck_params_are_valid() {
        let params = GameParams::new(0, 0, 1, 0).expect("empty deck is a valid game");
        assert_eq!(params.quality_ratio(), 0.0);
    }

    #[test]
    fn test_more_hits_than_cards_rejected() {
        for (m, n) in [(1, 0), (5, 4), (100, 99)] {
            let err = GameParams::new(m, n, 1, 0).unwrap_err();
            assert_eq!(err, DeckError::InvalidParameters { quality: m, size: n });
        }
    }

    #[test]
    fn test_params_serialize() {
        let params = GameParams::new(2, 10, 3, 1).unwrap();
        let json = serde_json::to_value(params).unwrap();
        assert_eq!(json["m"], 2);
        assert_eq!(json["n"], 10);
        assert_eq!(json["max_plays_per_round"], 3);
        assert_eq!(json["max_peeks_per_round"], 1);
    }
}
