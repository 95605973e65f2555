//! Core types shared by every module: configuration and errors.

pub mod config;
pub mod error;

pub use config::{DeckConfig, DEFAULT_STORAGE_KEY};
pub use error::{CatalogError, ConfigError, DeckError, StorageError};
