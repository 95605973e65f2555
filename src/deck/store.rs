//! Deck store - the single active deck plus its persistence.
//!
//! The store is built explicitly with a configuration and a storage backend.
//! Construction hydrates the deck from the newest saved deck; after that the
//! deck changes only through `add_card`, `remove_one_copy` and `set_name`.
//! Every rule violation comes back as a `DeckError` value and leaves the deck
//! as it was. The store never talks to the user.

use chrono::{DateTime, Utc};

use super::collection::Deck;
use super::entry::DeckEntry;
use crate::cards::Card;
use crate::core::config::DeckConfig;
use crate::core::error::{ConfigError, DeckError};
use crate::storage::{SavedDeck, SavedDeckLog, Storage};

/// Owner of the active deck.
///
/// ## Example
///
/// ```
/// use deck_builder::cards::Card;
/// use deck_builder::core::DeckConfig;
/// use deck_builder::deck::DeckStore;
/// use deck_builder::storage::MemoryStorage;
///
/// let config = DeckConfig::standard().with_max_deck_size(2);
/// let mut store = DeckStore::new(config, MemoryStorage::new()).unwrap();
///
/// let pikachu = Card::new("sv1-025", "Pikachu");
/// store.add_card(&pikachu).unwrap();
/// store.add_card(&pikachu).unwrap();
/// store.set_name("Sparks");
///
/// let saved = store.save().unwrap();
/// assert_eq!(saved.total_cards(), 2);
/// assert_eq!(store.saved_decks().len(), 1);
/// ```
#[derive(Debug)]
pub struct DeckStore<S> {
    config: DeckConfig,
    deck: Deck,
    history: SavedDeckLog,
    storage: S,
}

impl<S: Storage> DeckStore<S> {
    /// Create a store and hydrate it from `storage`.
    ///
    /// The newest saved deck becomes the active deck. Missing, corrupt or
    /// empty storage gives an empty, unnamed deck, as does a saved deck that
    /// breaks the current limits.
    pub fn new(config: DeckConfig, storage: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let history = SavedDeckLog::new(config.storage_key.clone(), config.max_saved_decks);
        let deck = Self::hydrate(&config, &history, &storage);

        Ok(Self {
            config,
            deck,
            history,
            storage,
        })
    }

    fn hydrate(config: &DeckConfig, history: &SavedDeckLog, storage: &S) -> Deck {
        let Some(saved) = history.latest(storage) else {
            return Deck::new();
        };

        let deck = Deck::from_parts(saved.name, saved.cards);
        if !deck.satisfies(config) {
            log::warn!(
                "saved deck {:?} does not fit a {}-card, {}-copy deck; starting empty",
                deck.name(),
                config.max_deck_size,
                config.per_card_limit
            );
            return Deck::new();
        }

        log::debug!("restored deck {:?} ({} cards)", deck.name(), deck.total_cards());
        deck
    }

    /// Add one copy of `card`.
    ///
    /// Fails with `DeckFull` when the deck already holds `max_deck_size`
    /// cards, or `CopyLimitExceeded` when this card is at `per_card_limit`.
    pub fn add_card(&mut self, card: &Card) -> Result<(), DeckError> {
        match self.deck.add_card(card, &self.config) {
            Ok(()) => {
                log::debug!("added {} ({}/{})", card.id, self.total_cards(), self.config.max_deck_size);
                Ok(())
            }
            Err(err) => {
                log::debug!("rejected {}: {err}", card.id);
                Err(err)
            }
        }
    }

    /// Remove one copy of `card_id`. Unknown ids are ignored.
    pub fn remove_one_copy(&mut self, card_id: &str) {
        if self.deck.remove_one_copy(card_id) {
            log::debug!("removed {card_id} ({}/{})", self.total_cards(), self.config.max_deck_size);
        } else {
            log::debug!("ignored removal of {card_id}: not in deck");
        }
    }

    /// Replace the deck name. Empty names are only rejected by `save`.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.deck.set_name(name);
    }

    /// Check that the deck can be saved right now.
    ///
    /// The name is checked before the card count.
    pub fn validate_for_save(&self) -> Result<(), DeckError> {
        if self.deck.name().is_empty() {
            return Err(DeckError::EmptyName);
        }
        let total = self.total_cards();
        if total != self.config.max_deck_size {
            return Err(DeckError::IncompleteDeck {
                total,
                required: self.config.max_deck_size,
            });
        }
        Ok(())
    }

    /// True when `save` would pass validation.
    #[must_use]
    pub fn can_save(&self) -> bool {
        self.validate_for_save().is_ok()
    }

    /// Snapshot the deck into the saved-deck log, stamped with the current
    /// time.
    pub fn save(&mut self) -> Result<SavedDeck, DeckError> {
        self.save_at(Utc::now())
    }

    /// Snapshot the deck into the saved-deck log with an explicit timestamp.
    ///
    /// Nothing is written when validation fails.
    pub fn save_at(&mut self, created_at: DateTime<Utc>) -> Result<SavedDeck, DeckError> {
        self.validate_for_save()?;

        let snapshot = SavedDeck {
            name: self.deck.name().to_string(),
            cards: self.deck.entries().clone(),
            created_at,
        };
        let written = self.history.push(&mut self.storage, snapshot.clone())?;

        log::info!(
            "saved deck {:?} ({} saved deck(s) kept)",
            snapshot.name,
            written.len()
        );
        Ok(snapshot)
    }

    /// Saved decks currently in storage, newest first.
    #[must_use]
    pub fn saved_decks(&self) -> Vec<SavedDeck> {
        self.history.read(&self.storage)
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.deck.name()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &DeckEntry> {
        self.deck.iter()
    }

    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.deck.total_cards()
    }

    #[must_use]
    pub fn count_of(&self, card_id: &str) -> u32 {
        self.deck.count_of(card_id)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.deck.is_complete(&self.config)
    }

    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give up the store and return its storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
