//! One-shot catalog loading.
//!
//! The catalog is fetched once at startup from a static source. The loader
//! exposes a loading flag while the fetch is in flight and caches the
//! outcome (catalog or human-readable error) afterwards.
//!
//! Hosts that fetch on another thread or event loop use the split
//! `begin`/`complete` entry points. A loader that has been torn down
//! discards any late completion without touching its state.

use std::fs;
use std::path::{Path, PathBuf};

use super::registry::Catalog;
use crate::core::error::CatalogError;

/// Default location of the static card-data asset.
pub const DEFAULT_CATALOG_PATH: &str = "data/cards.json";

/// Where the raw catalog document comes from.
pub trait CatalogSource {
    /// Fetch the raw `{ "cards": [...] }` document.
    fn fetch(&self) -> Result<String, CatalogError>;
}

/// Catalog document stored as a static asset on disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_PATH)
    }
}

impl CatalogSource for FileSource {
    fn fetch(&self) -> Result<String, CatalogError> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// Catalog document already held in memory.
#[derive(Clone, Debug)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl CatalogSource for StaticSource {
    fn fetch(&self) -> Result<String, CatalogError> {
        Ok(self.text.clone())
    }
}

/// Progress of a catalog load.
#[derive(Clone, Debug, Default)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Fetch in flight.
    Loading,
    /// Catalog available.
    Ready(Catalog),
    /// Fetch or parse failed; holds the message shown to the user.
    Failed(String),
}

/// Proof that `begin` was called. Consumed by `complete`.
#[derive(Debug)]
#[must_use = "a load ticket must be passed to `complete`"]
pub struct LoadTicket {
    _private: (),
}

/// Loads the catalog from a `CatalogSource` exactly once.
///
/// ## Example
///
/// ```
/// use deck_builder::cards::{CatalogLoader, StaticSource};
///
/// let mut loader = CatalogLoader::new(StaticSource::new(r#"{ "cards": [] }"#));
/// assert!(!loader.is_loading());
///
/// loader.load();
/// assert!(loader.catalog().unwrap().is_empty());
/// ```
#[derive(Debug)]
pub struct CatalogLoader<S> {
    source: S,
    status: LoadStatus,
    torn_down: bool,
}

impl<S: CatalogSource> CatalogLoader<S> {
    /// Create an idle loader.
    pub fn new(source: S) -> Self {
        Self {
            source,
            status: LoadStatus::Idle,
            torn_down: false,
        }
    }

    /// Fetch and parse synchronously, once.
    ///
    /// Later calls return the cached outcome without refetching.
    pub fn load(&mut self) -> &LoadStatus {
        if let Some(ticket) = self.begin() {
            let fetched = self.source.fetch();
            self.complete(ticket, fetched);
        }
        &self.status
    }

    /// Mark the load as in flight.
    ///
    /// Returns `None` if a load was already started or the loader was torn
    /// down.
    pub fn begin(&mut self) -> Option<LoadTicket> {
        if self.torn_down || !matches!(self.status, LoadStatus::Idle) {
            return None;
        }
        self.status = LoadStatus::Loading;
        Some(LoadTicket { _private: () })
    }

    /// Record the fetched document (or fetch error).
    ///
    /// Returns `false` if the result was discarded because the loader was
    /// torn down first.
    pub fn complete(&mut self, _ticket: LoadTicket, fetched: Result<String, CatalogError>) -> bool {
        if self.torn_down {
            log::warn!("discarding catalog result received after teardown");
            return false;
        }

        let outcome = fetched.and_then(|text| Catalog::from_json(&text));
        self.status = match outcome {
            Ok(catalog) => {
                log::info!("loaded card catalog ({} cards)", catalog.len());
                LoadStatus::Ready(catalog)
            }
            Err(err) => {
                log::error!("failed to load card catalog: {err}");
                LoadStatus::Failed(err.to_string())
            }
        };
        true
    }

    /// Stop accepting results. State is left as it was.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// True while a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    /// The loaded catalog, if the load succeeded.
    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.status {
            LoadStatus::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// The load error message, if the load failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
