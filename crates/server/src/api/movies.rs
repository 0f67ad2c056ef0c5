//! Movie API handlers.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use marquee_core::Movie;
use serde::Serialize;
use tracing::{info, warn};

use super::params::SearchParams;
use crate::metrics::{record_search, search_outcome};
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub movies: Vec<Movie>,
    pub total: usize,
}

/// Envelope returned by the search endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub message: String,
    pub results: Vec<Movie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_results: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_parameters: Option<SearchParams>,
}

impl SearchResponse {
    fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            results: Vec::new(),
            total_results: None,
            search_parameters: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub const MISSING_CRITERIA_MESSAGE: &str =
    "At least one search parameter is required. Try searching by name, id, or genre.";

pub const NO_RESULTS_MESSAGE: &str = "No movies found matching your search criteria.";

/// "Found 1 movie matching your search." / "Found 3 movies ..."
pub fn results_message(count: usize) -> String {
    format!(
        "Found {} movie{} matching your search.",
        count,
        if count == 1 { "" } else { "s" }
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/movies
///
/// List the whole catalog in load order.
pub async fn list_movies(State(state): State<Arc<AppState>>) -> Json<MovieListResponse> {
    let movies = state.movies().get_all_movies().to_vec();
    let total = movies.len();
    Json(MovieListResponse { movies, total })
}

/// GET /api/v1/movies/{id}
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Movie>, (StatusCode, Json<ErrorResponse>)> {
    let Path(id) = id.map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.body_text(),
            }),
        )
    })?;

    match state.movies().get_movie_by_id(Some(id)) {
        Some(movie) => Ok(Json(movie.clone())),
        None => {
            warn!("Movie with ID {} not found", id);
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Movie with ID {} was not found.", id),
                }),
            ))
        }
    }
}

/// GET /api/v1/movies/search?name=&id=&genre=
///
/// Rejects requests without a usable criterion; otherwise returns every
/// movie matching all the given criteria.
pub async fn search_movies(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(e) => {
            warn!("Rejected search query: {}", e);
            record_search("api", "invalid");
            return (
                StatusCode::BAD_REQUEST,
                Json(SearchResponse::rejected(e.body_text())),
            )
                .into_response();
        }
    };

    info!(
        "Search request received - name: {:?}, id: {:?}, genre: {:?}",
        params.name, params.id, params.genre
    );

    let movies = state.movies();
    if !movies.has_valid_search_parameters(params.name(), params.id, params.genre()) {
        warn!("No valid search parameters provided");
        record_search("api", "invalid");
        return (
            StatusCode::BAD_REQUEST,
            Json(SearchResponse::rejected(MISSING_CRITERIA_MESSAGE)),
        )
            .into_response();
    }

    let results: Vec<Movie> = movies
        .search_movies(params.name(), params.id, params.genre())
        .into_iter()
        .cloned()
        .collect();
    let count = results.len();
    record_search("api", search_outcome(count));

    let message = if count == 0 {
        NO_RESULTS_MESSAGE.to_string()
    } else {
        results_message(count)
    };

    Json(SearchResponse {
        success: true,
        message,
        results,
        total_results: Some(count),
        search_parameters: Some(params),
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_message_pluralization() {
        assert_eq!(results_message(1), "Found 1 movie matching your search.");
        assert_eq!(results_message(4), "Found 4 movies matching your search.");
    }

    #[test]
    fn test_rejected_response_shape() {
        let json = serde_json::to_value(SearchResponse::rejected("nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "nope");
        assert_eq!(json["results"], serde_json::json!([]));
        assert!(json.get("totalResults").is_none());
        assert!(json.get("searchParameters").is_none());
    }

    #[test]
    fn test_success_response_uses_camel_case() {
        let response = SearchResponse {
            success: true,
            message: results_message(0),
            results: Vec::new(),
            total_results: Some(0),
            search_parameters: Some(SearchParams {
                name: Some("x".to_string()),
                id: None,
                genre: None,
            }),
        };
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["totalResults"], 0);
        assert_eq!(json["searchParameters"]["name"], "x");
        assert!(json["searchParameters"]["id"].is_null());
    }
}
