//! Deck assembly: entries, the deck itself, and the store that owns it.
//!
//! ## Key Types
//!
//! - `DeckEntry`: A card and its copy count
//! - `Deck`: Named, ordered entries with the cardinality rules
//! - `DeckStore`: The active deck plus hydration and saving

pub mod collection;
pub mod entry;
pub mod store;

pub use collection::Deck;
pub use entry::DeckEntry;
pub use store::DeckStore;
