use marquee_core::{Config, MovieService, SanitizedConfig};

/// Shared application state
pub struct AppState {
    config: Config,
    movies: MovieService,
}

impl AppState {
    pub fn new(config: Config, movies: MovieService) -> Self {
        Self { config, movies }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn movies(&self) -> &MovieService {
        &self.movies
    }
}
