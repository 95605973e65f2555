//! # deck-builder
//!
//! Core of a trading-card deck builder: load a static card catalog, search
//! it, assemble a deck under cardinality rules, and persist named decks to a
//! local key-value slot.
//!
//! ## Design Principles
//!
//! 1. **Configuration Over Convention**: Deck size and per-card copy limits
//!    come from `DeckConfig`. Nothing assumes a particular format.
//!
//! 2. **Explicit State**: One `DeckStore` per session, built with an explicit
//!    configuration and storage backend. No globals.
//!
//! 3. **Errors Are Values**: Every rejected mutation returns a `DeckError`
//!    and leaves the deck unchanged. Presentation decides how to show it.
//!
//! ## Modules
//!
//! - `core`: Configuration and error types
//! - `cards`: Card definitions, catalog, search and one-shot loading
//! - `deck`: Deck entries, the deck, and the deck store
//! - `storage`: Storage backends and the saved-deck log

pub mod core;
pub mod cards;
pub mod deck;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{CatalogError, ConfigError, DeckConfig, DeckError, StorageError};

pub use crate::cards::{
    search, Attack, Card, CardId, Catalog, CatalogLoader, CatalogSource, FileSource, LoadStatus,
    StaticSource,
};

pub use crate::deck::{Deck, DeckEntry, DeckStore};

pub use crate::storage::{FileStorage, MemoryStorage, SavedDeck, SavedDeckLog, Storage};
