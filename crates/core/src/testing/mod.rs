//! Testing utilities shared by unit and integration tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use marquee_core::testing::fixtures;
//! use marquee_core::{CatalogStore, MovieService};
//!
//! let service = MovieService::new(CatalogStore::from_movies(fixtures::sample_movies()));
//! assert_eq!(service.search_movies_by_name(Some("prison")).len(), 1);
//! ```

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::Movie;

    /// Create a test movie with reasonable defaults.
    pub fn movie(id: i64, title: &str, genre: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            director: "Test Director".to_string(),
            year: 2000,
            genre: genre.to_string(),
            description: format!("A movie called {}.", title),
            duration_minutes: 120,
            rating: 4.0,
        }
    }

    /// A small catalog covering single and compound genres.
    ///
    /// | id | title             | genre         |
    /// |----|-------------------|---------------|
    /// | 1  | The Prison Escape | Drama         |
    /// | 2  | The Family Boss   | Crime/Drama   |
    /// | 3  | The Masked Hero   | Action/Crime  |
    /// | 4  | Dream Heist       | Action/Sci-Fi |
    pub fn sample_movies() -> Vec<Movie> {
        vec![
            movie(1, "The Prison Escape", "Drama"),
            movie(2, "The Family Boss", "Crime/Drama"),
            movie(3, "The Masked Hero", "Action/Crime"),
            movie(4, "Dream Heist", "Action/Sci-Fi"),
        ]
    }

    /// [`sample_movies`] encoded in the dataset JSON format.
    pub fn sample_dataset_json() -> String {
        serde_json::to_string_pretty(&sample_movies()).unwrap_or_else(|_| "[]".to_string())
    }
}
