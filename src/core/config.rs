//! Deck-building configuration.
//!
//! Formats differ in how big a deck is and how many copies of one card it
//! may hold. Callers pick a preset or build their own `DeckConfig`; the
//! store never hardcodes either limit.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::storage::is_valid_storage_key;

/// Default storage slot for the saved-deck log.
pub const DEFAULT_STORAGE_KEY: &str = "decks";

/// Limits and persistence settings for a `DeckStore`.
///
/// ## Example
///
/// ```
/// use deck_builder::core::DeckConfig;
///
/// let config = DeckConfig::constructed().with_max_saved_decks(5);
///
/// assert_eq!(config.max_deck_size, 60);
/// assert_eq!(config.per_card_limit, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Exact number of cards a complete deck holds.
    pub max_deck_size: u32,

    /// Maximum copies of a single card id.
    pub per_card_limit: u32,

    /// Capacity of the persisted saved-deck log (oldest evicted first).
    pub max_saved_decks: usize,

    /// Storage slot holding the saved-deck log.
    pub storage_key: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl DeckConfig {
    /// Create a configuration with the given limits and default persistence.
    #[must_use]
    pub fn new(max_deck_size: u32, per_card_limit: u32) -> Self {
        Self {
            max_deck_size,
            per_card_limit,
            max_saved_decks: 10,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// 20-card decks, 2 copies per card.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(20, 2)
    }

    /// 60-card decks, 4 copies per card.
    #[must_use]
    pub fn constructed() -> Self {
        Self::new(60, 4)
    }

    /// Set the deck size.
    #[must_use]
    pub fn with_max_deck_size(mut self, size: u32) -> Self {
        self.max_deck_size = size;
        self
    }

    /// Set the per-card copy limit.
    #[must_use]
    pub fn with_per_card_limit(mut self, limit: u32) -> Self {
        self.per_card_limit = limit;
        self
    }

    /// Set the saved-deck log capacity.
    #[must_use]
    pub fn with_max_saved_decks(mut self, max: usize) -> Self {
        self.max_saved_decks = max;
        self
    }

    /// Set the storage slot name.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Check that the limits are usable together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_deck_size == 0 {
            return Err(ConfigError::ZeroDeckSize);
        }
        if self.per_card_limit == 0 {
            return Err(ConfigError::ZeroCopyLimit);
        }
        if self.per_card_limit > self.max_deck_size {
            return Err(ConfigError::CopyLimitAboveDeckSize {
                limit: self.per_card_limit,
                max: self.max_deck_size,
            });
        }
        if self.max_saved_decks == 0 {
            return Err(ConfigError::ZeroSavedDecks);
        }
        if self.storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if !is_valid_storage_key(&self.storage_key) {
            return Err(ConfigError::InvalidStorageKey(self.storage_key.clone()));
        }
        Ok(())
    }
}
