//! Card system: definitions, catalog, search and loading.
//!
//! ## Key Types
//!
//! - `CardId`: Catalog-wide card identifier
//! - `Card`: Static card record (attacks, weakness, retreat cost, ...)
//! - `Catalog`: Ordered card list with id lookup
//! - `CatalogLoader`: One-shot loader with loading/error status
//!
//! Cards are immutable once loaded; the deck holds its own copies.

pub mod definition;
pub mod loader;
pub mod registry;
pub mod search;

pub use definition::{Attack, Card, CardId, EnergyCost};
pub use loader::{
    CatalogLoader, CatalogSource, FileSource, LoadStatus, LoadTicket, StaticSource,
    DEFAULT_CATALOG_PATH,
};
pub use registry::Catalog;
pub use search::search;
