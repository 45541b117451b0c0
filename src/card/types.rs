use serde::{Deserialize, Serialize};

/// A card as seen by a conditional future sight effect.
///
/// Only `has_quality` drives the simulation. `unique_quality` (e.g. which party
/// member a card counts as) and `mana_value` are carried along for richer
/// predicates but nothing branches on them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: u32,
    has_quality: bool,
    #[serde(default)]
    unique_quality: u32,
    #[serde(default)]
    mana_value: Option<u32>,
}

impl Card {
    pub fn new(id: u32, has_quality: bool) -> Self {
        Card {
            id,
            has_quality,
            unique_quality: 0,
            mana_value: None,
        }
    }

    pub fn with_unique_quality(mut self, unique_quality: u32) -> Self {
        self.unique_quality = unique_quality;
        self
    }

    pub fn with_mana_value(mut self, mana_value: u32) -> Self {
        self.mana_value = Some(mana_value);
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Whether the card can be played straight off the top of the deck
    pub fn has_quality(&self) -> bool {
        self.has_quality
    }

    pub fn unique_quality(&self) -> u32 {
        self.unique_quality
    }

    pub fn mana_value(&self) -> Option<u32> {
        self.mana_value
    }
}
