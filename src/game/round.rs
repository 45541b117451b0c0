use crate::card::Card;
use crate::game::deck::{Deck, DeckError};

/// Decides how many cards a conditional future sight effect plays in one round
pub trait RoundPolicy {
    fn resolve_round(
        &self,
        deck: &mut Deck,
        max_plays: usize,
        max_peeks: usize,
    ) -> Result<usize, DeckError>;
}

/// Cards played and peeks spent during one round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundResult {
    pub played: usize,
    pub peeks_used: usize,
}

/// Play every qualifying top card, burying bricks while peeks remain.
///
/// A qualifying top card is always played, even with peeks left. The round
/// ends once plays run out, the deck empties, or a brick shows up with no
/// peeks left.
#[derive(Debug, Clone, Copy, Default)]
pub struct FutureSight;

impl FutureSight {
    pub fn wants(card: &Card) -> bool {
        card.has_quality()
    }

    pub fn resolve(
        &self,
        deck: &mut Deck,
        max_plays: usize,
        max_peeks: usize,
    ) -> Result<RoundResult, DeckError> {
        let mut plays_remaining = max_plays;
        let mut peeks_remaining = max_peeks;
        let mut result = RoundResult::default();

        while !deck.is_empty() && plays_remaining > 0 {
            if peeks_remaining > 0 && deck.peek_and_bury_if_unwanted(Self::wants) {
                result.peeks_used += 1;
                peeks_remaining -= 1;
                continue;
            }
            // A lone brick cannot be buried past itself, so it ends the round too
            if !Self::wants(deck.peek_top()?) {
                break;
            }
            deck.draw_top()?;
            result.played += 1;
            plays_remaining -= 1;
        }

        Ok(result)
    }
}

impl RoundPolicy for FutureSight {
    fn resolve_round(
        &self,
        deck: &mut Deck,
        max_plays: usize,
        max_peeks: usize,
    ) -> Result<usize, DeckError> {
        self.resolve(deck, max_plays, max_peeks).map(|r| r.played)
    }
}

/// Resolve one round with the standard [`FutureSight`] policy
pub fn resolve_round(deck: &mut Deck, max_plays: usize, max_peeks: usize) -> Result<usize, DeckError> {
    FutureSight.resolve_round(deck, max_plays, max_peeks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;

    /// Deck from a top-to-bottom description, `true` = quality
    fn deck_from_top(pattern: &[bool]) -> Deck {
        let cards = pattern
            .iter()
            .enumerate()
            .rev()
            .map(|(i, &q)| Card::new(i as u32, q))
            .collect();
        Deck::from_cards(cards)
    }

    #[test]
    fn test_plays_qualifying_cards_up_to_limit() {
        let mut deck = deck_from_top(&[true, true, true, false]);
        assert_eq!(resolve_round(&mut deck, 2, 0).unwrap(), 2);
        assert_eq!(deck.size(), 2);
        assert_eq!(deck.peek_top().unwrap().id(), 2);
    }

    #[test]
    fn test_brick_without_peeks_ends_round() {
        let mut deck = deck_from_top(&[false, true, true]);
        assert_eq!(resolve_round(&mut deck, 3, 0).unwrap(), 0);
        assert_eq!(deck.size(), 3, "nothing moves when the round ends on a brick");
        assert_eq!(deck.peek_top().unwrap().id(), 0);
    }

    #[test]
    fn test_peek_buries_brick_and_continues() {
        let mut deck = deck_from_top(&[false, true, false, true]);
        assert_eq!(resolve_round(&mut deck, 3, 1).unwrap(), 1);
        // brick 0 went to the bottom, 1 was played, brick 2 stopped the round
        let order: Vec<u32> = deck.iter().map(|c| c.id()).collect();
        assert_eq!(order, vec![0, 3, 2]);
    }

    #[test]
    fn test_quality_card_preferred_over_peek() {
        let mut deck = deck_from_top(&[true, false]);
        assert_eq!(resolve_round(&mut deck, 1, 5).unwrap(), 1);
        assert_eq!(deck.size(), 1);
        assert_eq!(deck.peek_top().unwrap().id(), 1, "no peek spent once plays ran out");
    }

    #[test]
    fn test_empty_deck_plays_nothing() {
        let mut deck = Deck::new();
        assert_eq!(resolve_round(&mut deck, 3, 3).unwrap(), 0);
    }

    #[test]
    fn test_zero_plays_never_touches_deck() {
        let mut deck = deck_from_top(&[false, true]);
        assert_eq!(resolve_round(&mut deck, 0, 4).unwrap(), 0);
        assert_eq!(deck.peek_top().unwrap().id(), 0);
    }

    #[test]
    fn test_all_bricks_spend_every_peek_and_terminate() {
        let mut deck = deck_from_top(&[false; 5]);
        let result = FutureSight.resolve(&mut deck, 2, 100).unwrap();
        assert_eq!(result, RoundResult { played: 0, peeks_used: 100 });
        assert_eq!(deck.size(), 5);
    }

    #[test]
    fn test_lone_brick_keeps_peeks() {
        let mut deck = deck_from_top(&[false]);
        let result = FutureSight.resolve(&mut deck, 1, 3).unwrap();
        assert_eq!(result, RoundResult { played: 0, peeks_used: 0 });
        assert_eq!(deck.size(), 1);
    }

    #[test]
    fn test_peeks_rotate_the_pile() {
        let mut deck = deck_from_top(&[false, false, false, true, false]);
        let result = FutureSight.resolve(&mut deck, 1, 2).unwrap();
        assert_eq!(result, RoundResult { played: 0, peeks_used: 2 });
        assert_eq!(deck.peek_top().unwrap().id(), 2);
    }

    #[test]
    fn test_budgets_hold_for_random_decks() {
        for seed in 0..200u64 {
            let mut rng = GameRng::new(seed);
            let size = rng.random_range(15);
            let quality = rng.random_range(size + 1);
            let max_plays = rng.random_range(4);
            let max_peeks = rng.random_range(4);

            let mut deck = Deck::with_quality_ratio(quality, size).unwrap();
            deck.shuffle(&mut rng);
            let before = deck.size();

            let RoundResult { played, peeks_used } =
                FutureSight.resolve(&mut deck, max_plays, max_peeks).unwrap();
            assert!(played <= max_plays, "seed {}: played {} > {}", seed, played, max_plays);
            assert!(peeks_used <= max_peeks, "seed {}: buried {} > {}", seed, peeks_used, max_peeks);
            assert_eq!(deck.size(), before - played, "only played cards leave the deck");
            assert_eq!(deck.quality_count(), quality - played, "only quality cards are played");
        }
    }
}
