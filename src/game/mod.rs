pub mod deck;
pub mod round;

pub use deck::{Deck, DeckError};
pub use round::{resolve_round, FutureSight, RoundPolicy, RoundResult};
