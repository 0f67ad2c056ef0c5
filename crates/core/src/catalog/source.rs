//! Dataset sources feeding the catalog store.

use std::path::PathBuf;

use super::{CatalogError, DatasetSource};
use crate::config::CatalogConfig;

/// Dataset compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("../../data/movies.json");

/// The bundled movie dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDataset;

impl DatasetSource for EmbeddedDataset {
    fn read(&self) -> Result<String, CatalogError> {
        Ok(BUNDLED_DATASET.to_string())
    }

    fn describe(&self) -> String {
        "embedded movies.json".to_string()
    }
}

/// A JSON dataset read from disk.
#[derive(Debug, Clone)]
pub struct FileDataset {
    path: PathBuf,
}

impl FileDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileDataset {
    fn read(&self) -> Result<String, CatalogError> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| CatalogError::Io(format!("{}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Dataset text held in memory.
#[derive(Debug, Clone)]
pub struct StaticDataset(pub String);

impl DatasetSource for StaticDataset {
    fn read(&self) -> Result<String, CatalogError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "in-memory dataset".to_string()
    }
}

/// Pick the dataset source for a catalog configuration.
///
/// Uses the configured file when `dataset_path` is set, the bundled dataset otherwise.
pub fn dataset_from_config(config: &CatalogConfig) -> Box<dyn DatasetSource> {
    match &config.dataset_path {
        Some(path) => Box::new(FileDataset::new(path.clone())),
        None => Box::new(EmbeddedDataset),
    }
}
