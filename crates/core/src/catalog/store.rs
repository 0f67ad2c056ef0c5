//! In-memory catalog store, built once from a dataset source.

use std::collections::{HashMap, HashSet};

use tracing::{error, info};

use super::{CatalogError, DatasetSource, Movie};

/// Read the whole dataset and parse it into movies, in source order.
///
/// Any failure rejects the dataset as a whole; nothing is partially loaded.
pub fn load_all(source: &dyn DatasetSource) -> Result<Vec<Movie>, CatalogError> {
    let text = source.read()?;
    parse_dataset(&text)
}

/// Parse and validate dataset text.
pub fn parse_dataset(text: &str) -> Result<Vec<Movie>, CatalogError> {
    let movies: Vec<Movie> =
        serde_json::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))?;
    validate_dataset(&movies)?;
    Ok(movies)
}

fn validate_dataset(movies: &[Movie]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(movies.len());
    for (position, movie) in movies.iter().enumerate() {
        if movie.id <= 0 {
            return Err(CatalogError::InvalidDataset(format!(
                "entry {} has non-positive id {}",
                position, movie.id
            )));
        }
        if movie.title.trim().is_empty() {
            return Err(CatalogError::InvalidDataset(format!(
                "movie {} has an empty title",
                movie.id
            )));
        }
        if !seen.insert(movie.id) {
            return Err(CatalogError::InvalidDataset(format!(
                "duplicate movie id {}",
                movie.id
            )));
        }
    }
    Ok(())
}

/// Read-only catalog of movies with an id index.
///
/// Never mutated after construction, so it can be shared across request
/// handlers without locking.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    movies: Vec<Movie>,
    index: HashMap<i64, usize>,
}

impl CatalogStore {
    /// Load the catalog from a dataset source.
    ///
    /// A missing or malformed dataset is logged and yields an empty catalog
    /// so the service still starts.
    pub fn new(source: &dyn DatasetSource) -> Self {
        match load_all(source) {
            Ok(movies) => {
                info!(
                    "Loaded {} movies from {}",
                    movies.len(),
                    source.describe()
                );
                Self::from_movies(movies)
            }
            Err(e) => {
                error!(
                    "Failed to load movies from {}: {}; starting with an empty catalog",
                    source.describe(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Build a store from already parsed movies.
    ///
    /// If an id repeats, lookups resolve to its first occurrence.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let mut index = HashMap::with_capacity(movies.len());
        for (position, movie) in movies.iter().enumerate() {
            index.entry(movie.id).or_insert(position);
        }
        Self { movies, index }
    }

    /// All movies in load order.
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a movie by id. Absent and non-positive ids find nothing.
    pub fn get(&self, id: Option<i64>) -> Option<&Movie> {
        let id = id.filter(|id| *id > 0)?;
        self.index.get(&id).map(|&position| &self.movies[position])
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
