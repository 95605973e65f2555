//! The in-progress deck and its cardinality rules.
//!
//! Entries are held in an `im::Vector`, so taking a snapshot for a saved
//! deck is O(1) and later edits never reach the snapshot.

use im::Vector;

use super::entry::DeckEntry;
use crate::cards::Card;
use crate::core::config::DeckConfig;
use crate::core::error::DeckError;

/// A named, ordered collection of deck entries.
///
/// Card ids are unique across entries and every count is at least 1.
/// New cards are appended, so iteration order is insertion order.
///
/// ## Example
///
/// ```
/// use deck_builder::cards::Card;
/// use deck_builder::core::{DeckConfig, DeckError};
/// use deck_builder::deck::Deck;
///
/// let config = DeckConfig::standard();
/// let pikachu = Card::new("sv1-025", "Pikachu");
///
/// let mut deck = Deck::new();
/// deck.add_card(&pikachu, &config).unwrap();
/// deck.add_card(&pikachu, &config).unwrap();
///
/// assert!(matches!(
///     deck.add_card(&pikachu, &config),
///     Err(DeckError::CopyLimitExceeded { limit: 2, .. })
/// ));
/// assert_eq!(deck.total_cards(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    name: String,
    entries: Vector<DeckEntry>,
}

impl Deck {
    /// Create an empty, unnamed deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck from existing parts without checking any limits.
    ///
    /// Callers must check the result with `satisfies` before handing it out.
    #[must_use]
    pub(crate) fn from_parts(name: impl Into<String>, entries: Vector<DeckEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name. Empty names are allowed until save time.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &Vector<DeckEntry> {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &DeckEntry> {
        self.entries.iter()
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total copies across all entries, saturating at `u32::MAX`.
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.entries.iter().fold(0u32, |acc, e| acc.saturating_add(e.count))
    }

    /// Copies of `card_id` in the deck (0 if absent).
    #[must_use]
    pub fn count_of(&self, card_id: &str) -> u32 {
        self.position(card_id)
            .map_or(0, |i| self.entries[i].count)
    }

    /// True when the deck holds exactly `max_deck_size` cards.
    #[must_use]
    pub fn is_complete(&self, config: &DeckConfig) -> bool {
        self.total_cards() == config.max_deck_size
    }

    /// Add one copy of `card`.
    ///
    /// The deck-size check runs before the per-card check. A rejected add
    /// leaves the deck unchanged.
    pub fn add_card(&mut self, card: &Card, config: &DeckConfig) -> Result<(), DeckError> {
        if self.total_cards() >= config.max_deck_size {
            return Err(DeckError::DeckFull {
                max: config.max_deck_size,
            });
        }

        match self.position(card.id.as_str()) {
            Some(i) => {
                let entry = &mut self.entries[i];
                if entry.count >= config.per_card_limit {
                    return Err(DeckError::CopyLimitExceeded {
                        card_id: card.id.to_string(),
                        limit: config.per_card_limit,
                    });
                }
                entry.count += 1;
            }
            None => self.entries.push_back(DeckEntry::new(card.clone())),
        }
        Ok(())
    }

    /// Remove one copy of `card_id`, dropping the entry when it reaches 0.
    ///
    /// Returns `false` (and does nothing) if the card is not in the deck.
    pub fn remove_one_copy(&mut self, card_id: &str) -> bool {
        let Some(i) = self.position(card_id) else {
            return false;
        };

        if self.entries[i].count <= 1 {
            self.entries.remove(i);
        } else {
            self.entries[i].count -= 1;
        }
        true
    }

    /// Check every deck invariant against `config`.
    ///
    /// Used when adopting a deck from storage, where the data may have been
    /// written under different limits or edited by hand.
    #[must_use]
    pub fn satisfies(&self, config: &DeckConfig) -> bool {
        let mut seen = rustc_hash::FxHashSet::default();
        let entries_ok = self.entries.iter().all(|e| {
            (1..=config.per_card_limit).contains(&e.count) && seen.insert(e.id().as_str())
        });
        entries_ok && self.total_cards() <= config.max_deck_size
    }

    fn position(&self, card_id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id().as_str() == card_id)
    }
}
