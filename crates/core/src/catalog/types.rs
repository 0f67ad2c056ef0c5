//! Types for the movie catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single movie record, immutable once loaded.
///
/// Field names on the wire follow the bundled dataset (`movieName`,
/// `duration`, `imdbRating`), and the same shape is served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique positive id assigned by the dataset.
    pub id: i64,
    /// Movie title.
    #[serde(rename = "movieName")]
    pub title: String,
    /// Director name.
    pub director: String,
    /// Release year.
    pub year: i32,
    /// Genre, possibly several joined with '/' (e.g., "Crime/Drama").
    pub genre: String,
    /// Short synopsis.
    pub description: String,
    /// Running time in minutes.
    #[serde(rename = "duration")]
    pub duration_minutes: i32,
    /// Rating score.
    #[serde(rename = "imdbRating")]
    pub rating: f64,
}

/// Optional (name, id, genre) triple supplied to a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Partial title match, case-insensitive.
    #[serde(default)]
    pub name: Option<String>,
    /// Exact id match.
    #[serde(default)]
    pub id: Option<i64>,
    /// Partial genre match, case-insensitive.
    #[serde(default)]
    pub genre: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Build criteria from borrowed optional parts.
    pub fn from_parts(name: Option<&str>, id: Option<i64>, genre: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            id,
            genre: genre.map(str::to_string),
        }
    }
}

/// Errors for loading the catalog.
///
/// Only the load step produces these; queries never fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read dataset: {0}")]
    Io(String),

    #[error("Failed to parse dataset: {0}")]
    Parse(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
}
