pub mod catalog;
pub mod config;
pub mod service;
pub mod testing;

pub use catalog::{
    dataset_from_config, has_valid_criteria, load_all, parse_dataset, search, search_by_genre,
    search_by_name, CatalogError, CatalogStore, DatasetSource, EmbeddedDataset, FileDataset, Movie,
    MovieFilter, SearchCriteria, StaticDataset,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogConfig, Config, ConfigError,
    SanitizedConfig, ServerConfig,
};
pub use service::MovieService;
