//! Saved-deck log.
//!
//! The log lives in a single storage slot as a JSON array of `SavedDeck`,
//! newest first. It is read once when a store starts and read-modify-written
//! on every successful save. A slot that cannot be read or parsed counts as
//! an empty log when a store starts; the failure is only logged. A save only
//! starts a fresh log over unparsable data. If the slot cannot be read at all,
//! the save fails and the old log stays in place.

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

use super::backend::Storage;
use crate::core::error::StorageError;
use crate::deck::DeckEntry;

/// Immutable snapshot of a completed deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDeck {
    pub name: String,
    pub cards: Vector<DeckEntry>,
    pub created_at: DateTime<Utc>,
}

impl SavedDeck {
    /// Total copies across all entries.
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.cards.iter().fold(0u32, |acc, e| acc.saturating_add(e.count))
    }
}

/// Bounded, most-recent-first list of saved decks in one storage slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedDeckLog {
    key: String,
    capacity: usize,
}

impl SavedDeckLog {
    pub fn new(key: impl Into<String>, capacity: usize) -> Self {
        Self {
            key: key.into(),
            capacity,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Read and parse the log, reporting any failure.
    ///
    /// An empty slot is an empty log, not an error.
    pub fn try_read<S: Storage + ?Sized>(&self, storage: &S) -> Result<Vec<SavedDeck>, StorageError> {
        match storage.get_item(&self.key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Read the log, treating unreadable or corrupt data as empty.
    pub fn read<S: Storage + ?Sized>(&self, storage: &S) -> Vec<SavedDeck> {
        self.try_read(storage).unwrap_or_else(|err| {
            log::warn!("ignoring unreadable saved decks in {:?}: {err}", self.key);
            Vec::new()
        })
    }

    /// Most recent saved deck, if any.
    pub fn latest<S: Storage + ?Sized>(&self, storage: &S) -> Option<SavedDeck> {
        self.read(storage).into_iter().next()
    }

    /// Prepend `deck`, evict the oldest entries past capacity, and write the
    /// log back.
    ///
    /// Returns the log as written. Corrupt data in the slot is replaced by a
    /// fresh log; a failed read is returned and nothing is written.
    pub fn push<S: Storage + ?Sized>(
        &self,
        storage: &mut S,
        deck: SavedDeck,
    ) -> Result<Vec<SavedDeck>, StorageError> {
        let mut decks = match self.try_read(storage) {
            Ok(decks) => decks,
            Err(StorageError::Serialization(err)) => {
                log::warn!("replacing corrupt saved decks in {:?}: {err}", self.key);
                Vec::new()
            }
            Err(err) => return Err(err),
        };
        decks.insert(0, deck);
        decks.truncate(self.capacity);

        let json = serde_json::to_string(&decks)?;
        storage.set_item(&self.key, &json)?;
        Ok(decks)
    }
}
