//! Movie catalog - a fixed, read-only collection loaded once at startup.
//!
//! The store owns the movies and an id index; the query engine filters them
//! by name, id, and genre without touching any shared state.

mod query;
mod source;
mod store;
mod types;

pub use query::{has_valid_criteria, search, search_by_genre, search_by_name, MovieFilter};
pub use source::{dataset_from_config, EmbeddedDataset, FileDataset, StaticDataset};
pub use store::{load_all, parse_dataset, CatalogStore};
pub use types::*;

/// Supplier of raw dataset text.
///
/// The store only needs the text; where it comes from (bundled asset, file
/// on disk, test string) is up to the implementation.
pub trait DatasetSource: Send + Sync {
    /// Read the entire dataset.
    fn read(&self) -> Result<String, CatalogError>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}
