//! Card catalog.
//!
//! The `Catalog` holds the full, ordered card list published by the static
//! card-data document. It provides fast lookup by `CardId` and keeps the
//! document order for display and search.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::definition::{Card, CardId};
use super::search::search;
use crate::core::error::CatalogError;

/// Shape of the static card-data document.
#[derive(Deserialize)]
struct CatalogDocument {
    cards: Vec<Card>,
}

/// Immutable, ordered list of every available card.
///
/// ## Example
///
/// ```
/// use deck_builder::cards::Catalog;
///
/// let json = r#"{ "cards": [
///     { "id": "a", "name": "Pikachu", "type": "Lightning", "hp": 60, "stage": "Basic",
///       "attacks": [], "weakness": "", "resistance": "", "retreat": 1,
///       "imageUrl": "/a.png", "regulation": "G" }
/// ] }"#;
///
/// let catalog = Catalog::from_json(json).unwrap();
/// assert_eq!(catalog.get("a").unwrap().name, "Pikachu");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl Catalog {
    /// Build a catalog from cards in display order.
    ///
    /// Fails if two cards share an id.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();
        index.reserve(cards.len());
        for (position, card) in cards.iter().enumerate() {
            if index.insert(card.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateCard(card.id.to_string()));
            }
        }
        Ok(Self { cards, index })
    }

    /// Parse a `{ "cards": [...] }` document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_cards(document.cards)
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Card> {
        self.index.get(id.as_ref()).map(|&i| &self.cards[i])
    }

    /// Check if a card ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.get(id).is_some()
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in document order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over all cards in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cards whose name contains `query`, ignoring case.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Card> {
        search(&self.cards, query)
    }
}
