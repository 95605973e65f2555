//! Error types.
//!
//! Every failure in the crate is a recoverable value. Deck validation
//! failures leave the deck untouched; storage and catalog failures degrade
//! to a usable state at the call site.

use thiserror::Error;

/// Rejected deck mutation or save.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The deck already holds `max` copies.
    #[error("deck is full ({max} cards maximum)")]
    DeckFull { max: u32 },

    /// The card is already present `limit` times.
    #[error("card {card_id} is limited to {limit} copies")]
    CopyLimitExceeded { card_id: String, limit: u32 },

    /// Save attempted without a deck name.
    #[error("deck name must not be empty")]
    EmptyName,

    /// Save attempted with a deck that is not exactly full.
    ///
    /// `total` tells "too few" apart from "too many".
    #[error("deck must contain exactly {required} cards (has {total})")]
    IncompleteDeck { total: u32, required: u32 },

    /// The saved-deck log could not be written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl DeckError {
    /// True for the rule violations a presentation layer shows to the user,
    /// as opposed to storage failures.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, DeckError::Storage(_))
    }
}

/// Failure of a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO failure in a file-backed store.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure while fetching or parsing the card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source reported a failure (e.g. a non-success status).
    #[error("failed to fetch card data: {0}")]
    Fetch(String),

    /// The static asset could not be read.
    #[error("failed to read card data: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a valid `{ "cards": [...] }` object.
    #[error("failed to parse card data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two catalog entries share an id.
    #[error("duplicate card id in catalog: {0}")]
    DuplicateCard(String),
}

/// Invalid `DeckConfig`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_deck_size must be positive")]
    ZeroDeckSize,

    #[error("per_card_limit must be positive")]
    ZeroCopyLimit,

    #[error("per_card_limit ({limit}) exceeds max_deck_size ({max})")]
    CopyLimitAboveDeckSize { limit: u32, max: u32 },

    #[error("max_saved_decks must be positive")]
    ZeroSavedDecks,

    #[error("storage_key must not be empty")]
    EmptyStorageKey,

    #[error("storage_key {0:?} may only use ASCII letters, digits, '-', '_' and '.', and must not start with '.'")]
    InvalidStorageKey(String),
}
