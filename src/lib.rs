//! Monte-Carlo estimates of how many extra cards a conditional future sight
//! effect plays per round.

pub mod card;
pub mod game;
pub mod rng;
pub mod simulation;
