//! Server-rendered HTML pages: movie list, details, and the search form.

use std::fmt::Write;
use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use marquee_core::Movie;
use tracing::{info, warn};

use super::movies::{results_message, NO_RESULTS_MESSAGE};
use super::params::SearchParams;
use crate::metrics::{record_search, search_outcome};
use crate::state::AppState;

const FORM_MISSING_CRITERIA: &str = "Please provide at least one search parameter.";
const FORM_INVALID_ID: &str = "Movie ID must be a whole number.";

/// Everything the list page can show.
#[derive(Debug, Default)]
struct MoviesPage<'a> {
    movies: Vec<&'a Movie>,
    /// Values to refill the search form with.
    search: Option<&'a SearchParams>,
    search_error: Option<&'a str>,
    search_message: Option<String>,
    total_results: Option<usize>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
pub async fn index() -> Redirect {
    Redirect::to("/movies")
}

/// GET /movies
pub async fn list_movies(State(state): State<Arc<AppState>>) -> Html<String> {
    info!("Fetching movies");
    let page = MoviesPage {
        movies: state.movies().get_all_movies().iter().collect(),
        ..Default::default()
    };
    Html(render_movies_page(&page))
}

/// GET /movies/{id}/details
pub async fn movie_details(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Response {
    let id = match id {
        Ok(Path(id)) => id,
        Err(e) => {
            warn!("Invalid movie id in details path: {}", e);
            return error_page(
                StatusCode::BAD_REQUEST,
                "Invalid Movie ID",
                "Movie ID must be a whole number.",
            );
        }
    };

    info!("Fetching details for movie ID: {}", id);
    match state.movies().get_movie_by_id(Some(id)) {
        Some(movie) => Html(render_details_page(movie)).into_response(),
        None => {
            warn!("Movie with ID {} not found", id);
            error_page(
                StatusCode::NOT_FOUND,
                "Movie Not Found",
                &format!("Movie with ID {} was not found.", id),
            )
        }
    }
}

/// GET /movies/search/form?name=&id=&genre=
///
/// Without a usable criterion the full list is shown with an error banner.
pub async fn search_form(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Html<String> {
    let movies = state.movies();

    let params = match params {
        Ok(Query(params)) => params,
        Err(e) => {
            warn!("Rejected search form query: {}", e);
            record_search("form", "invalid");
            let page = MoviesPage {
                movies: movies.get_all_movies().iter().collect(),
                search_error: Some(FORM_INVALID_ID),
                ..Default::default()
            };
            return Html(render_movies_page(&page));
        }
    };

    info!(
        "HTML form search request - name: {:?}, id: {:?}, genre: {:?}",
        params.name, params.id, params.genre
    );

    if !movies.has_valid_search_parameters(params.name(), params.id, params.genre()) {
        warn!("No valid search parameters in form submission");
        record_search("form", "invalid");
        let page = MoviesPage {
            movies: movies.get_all_movies().iter().collect(),
            search: Some(&params),
            search_error: Some(FORM_MISSING_CRITERIA),
            ..Default::default()
        };
        return Html(render_movies_page(&page));
    }

    let results = movies.search_movies(params.name(), params.id, params.genre());
    let count = results.len();
    record_search("form", search_outcome(count));
    info!("Form search completed, found {} movies", count);

    let page = MoviesPage {
        movies: results,
        search: Some(&params),
        search_error: None,
        search_message: Some(if count == 0 {
            NO_RESULTS_MESSAGE.to_string()
        } else {
            results_message(count)
        }),
        total_results: Some(count),
    };
    Html(render_movies_page(&page))
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    error_page(
        StatusCode::NOT_FOUND,
        "Page Not Found",
        "The page you requested does not exist.",
    )
}

// ============================================================================
// Rendering
// ============================================================================

fn error_page(status: StatusCode, title: &str, message: &str) -> Response {
    let body = format!(
        "<section class=\"error\">\n<h1>{}</h1>\n<p class=\"message\">{}</p>\n\
         <p><a href=\"/movies\">Back to all movies</a></p>\n</section>\n",
        escape_html(title),
        escape_html(message)
    );
    (status, Html(layout(title, &body))).into_response()
}

fn render_movies_page(page: &MoviesPage<'_>) -> String {
    let mut body = String::new();
    body.push_str("<h1>Movies</h1>\n");
    body.push_str(&render_search_form(page.search));

    if let Some(error) = page.search_error {
        let _ = writeln!(
            body,
            "<p class=\"search-error\">{}</p>",
            escape_html(error)
        );
    }
    if let Some(message) = &page.search_message {
        let _ = writeln!(
            body,
            "<p class=\"search-message\">{}</p>",
            escape_html(message)
        );
    }
    if let Some(total) = page.total_results {
        let _ = writeln!(
            body,
            "<p class=\"total-results\">Results: {}</p>",
            total
        );
    }

    if page.movies.is_empty() {
        body.push_str("<p class=\"empty\">No movies to show.</p>\n");
    } else {
        body.push_str("<ul class=\"movies\">\n");
        for movie in &page.movies {
            let _ = writeln!(
                body,
                "<li class=\"movie\" data-id=\"{id}\"><a href=\"/movies/{id}/details\">{title}</a> \
                 ({year}) &middot; {genre} &middot; {rating:.1}</li>",
                id = movie.id,
                title = escape_html(&movie.title),
                year = movie.year,
                genre = render_genre_links(&movie.genre),
                rating = movie.rating,
            );
        }
        body.push_str("</ul>\n");
    }

    layout("Movies", &body)
}

fn render_search_form(search: Option<&SearchParams>) -> String {
    let name = search.and_then(|s| s.name()).unwrap_or_default();
    let id = search
        .and_then(|s| s.id)
        .map(|id| id.to_string())
        .unwrap_or_default();
    let genre = search.and_then(|s| s.genre()).unwrap_or_default();

    format!(
        "<form class=\"search\" method=\"get\" action=\"/movies/search/form\">\n\
         <label>Name <input type=\"text\" name=\"name\" value=\"{}\"></label>\n\
         <label>ID <input type=\"number\" name=\"id\" min=\"1\" value=\"{}\"></label>\n\
         <label>Genre <input type=\"text\" name=\"genre\" value=\"{}\"></label>\n\
         <button type=\"submit\">Search</button>\n\
         <a href=\"/movies\">Clear</a>\n\
         </form>\n",
        escape_html(name),
        escape_html(&id),
        escape_html(genre)
    )
}

/// Each '/'-separated genre links to a genre search.
fn render_genre_links(genre: &str) -> String {
    genre
        .split('/')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(|g| {
            format!(
                "<a class=\"genre\" href=\"/movies/search/form?genre={}\">{}</a>",
                urlencoding::encode(g),
                escape_html(g)
            )
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn render_details_page(movie: &Movie) -> String {
    let body = format!(
        "<article class=\"movie-details\" data-id=\"{id}\">\n\
         <h1>{title}</h1>\n\
         <dl>\n\
         <dt>Director</dt><dd>{director}</dd>\n\
         <dt>Year</dt><dd>{year}</dd>\n\
         <dt>Genre</dt><dd>{genre}</dd>\n\
         <dt>Duration</dt><dd>{duration} min</dd>\n\
         <dt>Rating</dt><dd>{rating:.1}</dd>\n\
         </dl>\n\
         <p class=\"description\">{description}</p>\n\
         <p><a href=\"/movies\">Back to all movies</a></p>\n\
         </article>\n",
        id = movie.id,
        title = escape_html(&movie.title),
        director = escape_html(&movie.director),
        year = movie.year,
        genre = render_genre_links(&movie.genre),
        duration = movie.duration_minutes,
        rating = movie.rating,
        description = escape_html(&movie.description),
    );
    layout(&movie.title, &body)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} - Marquee</title>\n</head>\n<body>\n<main>\n{}</main>\n</body>\n</html>\n",
        escape_html(title),
        body
    )
}

/// Escape text for HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
