//! Deck entries - a card and how many copies the deck holds.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// One card in a deck with its copy count.
///
/// Serialized as the card's own fields plus `count`, so a saved entry reads
/// like a catalog card with a count attached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    #[serde(flatten)]
    pub card: Card,
    pub count: u32,
}

impl DeckEntry {
    /// Create an entry holding a single copy.
    #[must_use]
    pub fn new(card: Card) -> Self {
        Self { card, count: 1 }
    }

    /// Create an entry with an explicit count.
    #[must_use]
    pub fn with_count(card: Card, count: u32) -> Self {
        Self { card, count }
    }

    /// Shorthand for `self.card.id`.
    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.card.id
    }
}
