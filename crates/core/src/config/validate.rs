use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Catalog dataset path, when set, is not blank
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if let Some(path) = &config.catalog.dataset_path {
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "catalog.dataset_path cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}
