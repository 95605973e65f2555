//! Persistence: storage backends and the saved-deck log.
//!
//! - `Storage`: string-keyed slot storage (local-storage semantics)
//! - `MemoryStorage` / `FileStorage`: in-process and on-disk backends
//! - `SavedDeckLog`: bounded, newest-first JSON log of `SavedDeck`

pub mod backend;
pub mod history;

pub use backend::{is_valid_storage_key, FileStorage, MemoryStorage, Storage};
pub use history::{SavedDeck, SavedDeckLog};
