use crate::card::Card;
use crate::rng::GameRng;
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("cannot build a deck where {quality} out of {size} cards have the quality")]
    InvalidParameters { quality: usize, size: usize },
    #[error("library is empty")]
    EmptyDeck,
}

/// Library of cards as an ordered pile.
///
/// The back of the queue is the top of the pile, the front is the bottom.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Deck { cards: VecDeque::new() }
    }

    /// Build a pile from cards listed bottom to top
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards: cards.into() }
    }

    /// Build a deck of `size` cards where the first `quality` ids have the quality
    pub fn with_quality_ratio(quality: usize, size: usize) -> Result<Self, DeckError> {
        if quality > size {
            return Err(DeckError::InvalidParameters { quality, size });
        }

        let cards = (0..size)
            .map(|i| Card::new(i as u32, i < quality))
            .collect();
        Ok(Deck { cards })
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards left that satisfy the future sight predicate
    pub fn quality_count(&self) -> usize {
        self.cards.iter().filter(|c| c.has_quality()).count()
    }

    /// Cards from bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Look at the top card without removing it
    pub fn peek_top(&self) -> Result<&Card, DeckError> {
        self.cards.back().ok_or(DeckError::EmptyDeck)
    }

    /// Remove and return the top card
    pub fn draw_top(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_back().ok_or(DeckError::EmptyDeck)
    }

    /// Move the top card to the bottom. Empty and single-card piles stay as they are.
    pub fn bury_top(&mut self) {
        if self.cards.len() <= 1 {
            return;
        }
        if let Some(card) = self.cards.pop_back() {
            self.cards.push_front(card);
        }
    }

    /// Bury the top card if it fails `wanted`. Returns true if a card moved.
    pub fn peek_and_bury_if_unwanted<F>(&mut self, wanted: F) -> bool
    where
        F: Fn(&Card) -> bool,
    {
        if self.cards.len() <= 1 {
            return false;
        }
        let unwanted = self.cards.back().is_some_and(|top| !wanted(top));
        if unwanted {
            self.bury_top();
        }
        unwanted
    }

    /// Remove up to `count` cards from the top, returning how many were removed
    pub fn discard_top(&mut self, count: usize) -> usize {
        let removed = count.min(self.cards.len());
        self.cards.truncate(self.cards.len() - removed);
        removed
    }
}
