//! The query surface consumed by the HTTP and view layers.

use crate::catalog::{self, CatalogStore, DatasetSource, Movie, SearchCriteria};

/// Read-only movie service over a loaded catalog.
///
/// These six methods are everything the request layer calls.
#[derive(Debug, Clone, Default)]
pub struct MovieService {
    store: CatalogStore,
}

impl MovieService {
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }

    /// Load the catalog from `source` and wrap it.
    pub fn from_source(source: &dyn DatasetSource) -> Self {
        Self::new(CatalogStore::new(source))
    }

    pub fn get_all_movies(&self) -> &[Movie] {
        self.store.all()
    }

    pub fn get_movie_by_id(&self, id: Option<i64>) -> Option<&Movie> {
        self.store.get(id)
    }

    /// Conjunctive search; absent or blank criteria are inactive.
    pub fn search_movies(
        &self,
        name: Option<&str>,
        id: Option<i64>,
        genre: Option<&str>,
    ) -> Vec<&Movie> {
        let criteria = SearchCriteria::from_parts(name, id, genre);
        catalog::search(self.store.all(), &criteria)
    }

    /// Title search; blank input returns nothing.
    pub fn search_movies_by_name(&self, name: Option<&str>) -> Vec<&Movie> {
        catalog::search_by_name(self.store.all(), name)
    }

    /// Genre search; blank input returns nothing.
    pub fn search_movies_by_genre(&self, genre: Option<&str>) -> Vec<&Movie> {
        catalog::search_by_genre(self.store.all(), genre)
    }

    pub fn has_valid_search_parameters(
        &self,
        name: Option<&str>,
        id: Option<i64>,
        genre: Option<&str>,
    ) -> bool {
        catalog::has_valid_criteria(name, id, genre)
    }

    pub fn movie_count(&self) -> usize {
        self.store.len()
    }
}
