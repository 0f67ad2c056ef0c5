//! Query engine: conjunctive, case-insensitive filtering over the catalog.
//!
//! Every function here is a pure read of the movie slice. Results borrow
//! from the catalog and keep its order.

use tracing::{debug, info, warn};

use super::{Movie, SearchCriteria};

/// One active filter.
///
/// Text terms are stored trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieFilter {
    /// Title contains the term.
    Name(String),
    /// Id equals the value.
    Id(i64),
    /// Genre field contains the term.
    Genre(String),
}

impl MovieFilter {
    /// Name filter, or `None` when the term is absent or blank.
    pub fn name(term: Option<&str>) -> Option<Self> {
        normalize_term(term).map(Self::Name)
    }

    /// Id filter, or `None` when the id is absent or not positive.
    pub fn id(id: Option<i64>) -> Option<Self> {
        id.filter(|id| *id > 0).map(Self::Id)
    }

    /// Genre filter, or `None` when the term is absent or blank.
    pub fn genre(term: Option<&str>) -> Option<Self> {
        normalize_term(term).map(Self::Genre)
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        match self {
            Self::Name(term) => movie.title.to_lowercase().contains(term.as_str()),
            Self::Id(id) => movie.id == *id,
            Self::Genre(term) => movie.genre.to_lowercase().contains(term.as_str()),
        }
    }
}

/// Trims ASCII control characters and spaces (everything up to U+0020).
/// Other Unicode whitespace such as U+3000 is kept as part of the term.
fn normalize_term(term: Option<&str>) -> Option<String> {
    term.map(|t| t.trim_matches(|c: char| c <= ' '))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

impl SearchCriteria {
    /// Active filters in application order: name, id, genre.
    pub fn active_filters(&self) -> Vec<MovieFilter> {
        [
            MovieFilter::name(self.name.as_deref()),
            MovieFilter::id(self.id),
            MovieFilter::genre(self.genre.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// True when at least one criterion would narrow a search.
    pub fn has_valid_criteria(&self) -> bool {
        !self.active_filters().is_empty()
    }
}

/// True iff the trimmed name is non-empty, the id is positive, or the
/// trimmed genre is non-empty.
pub fn has_valid_criteria(name: Option<&str>, id: Option<i64>, genre: Option<&str>) -> bool {
    MovieFilter::name(name).is_some()
        || MovieFilter::id(id).is_some()
        || MovieFilter::genre(genre).is_some()
}

/// Movies matching every active filter.
///
/// With no active filter this is the whole catalog; rejecting empty
/// criteria is left to the caller via [`has_valid_criteria`].
pub fn search<'a>(movies: &'a [Movie], criteria: &SearchCriteria) -> Vec<&'a Movie> {
    let filters = criteria.active_filters();
    debug!(
        "Searching {} movies with filters {:?}",
        movies.len(),
        filters
    );

    let results = apply_filters(movies, &filters);
    info!(
        "Search found {} movies (name: {:?}, id: {:?}, genre: {:?})",
        results.len(),
        criteria.name,
        criteria.id,
        criteria.genre
    );
    results
}

/// Movies whose title contains `name`. Blank input matches nothing.
pub fn search_by_name<'a>(movies: &'a [Movie], name: Option<&str>) -> Vec<&'a Movie> {
    let Some(filter) = MovieFilter::name(name) else {
        warn!("Empty movie name provided for search, returning no results");
        return Vec::new();
    };

    let results = apply_filters(movies, std::slice::from_ref(&filter));
    info!("Found {} movies matching {:?}", results.len(), filter);
    results
}

/// Movies whose genre contains `genre`. Blank input matches nothing.
pub fn search_by_genre<'a>(movies: &'a [Movie], genre: Option<&str>) -> Vec<&'a Movie> {
    let Some(filter) = MovieFilter::genre(genre) else {
        warn!("Empty genre provided for search, returning no results");
        return Vec::new();
    };

    let results = apply_filters(movies, std::slice::from_ref(&filter));
    info!("Found {} movies matching {:?}", results.len(), filter);
    results
}

fn apply_filters<'a>(movies: &'a [Movie], filters: &[MovieFilter]) -> Vec<&'a Movie> {
    movies
        .iter()
        .filter(|movie| filters.iter().all(|filter| filter.matches(movie)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    fn ids(movies: &[&Movie]) -> Vec<i64> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_active_filters_order_and_normalization() {
        let criteria = SearchCriteria::new()
            .with_genre(" Drama ")
            .with_id(2)
            .with_name("  The FAMILY ");
        assert_eq!(
            criteria.active_filters(),
            vec![
                MovieFilter::Name("the family".to_string()),
                MovieFilter::Id(2),
                MovieFilter::Genre("drama".to_string()),
            ]
        );
    }

    #[test]
    fn test_inactive_filters_are_dropped() {
        let criteria = SearchCriteria::new()
            .with_name("   ")
            .with_id(0)
            .with_genre("");
        assert!(criteria.active_filters().is_empty());
        assert!(!criteria.has_valid_criteria());
    }

    #[test]
    fn test_has_valid_criteria_truth_table() {
        assert!(has_valid_criteria(Some("test"), None, None));
        assert!(has_valid_criteria(None, Some(1), None));
        assert!(has_valid_criteria(None, None, Some("Drama")));
        assert!(has_valid_criteria(Some("test"), Some(1), Some("Drama")));
        assert!(has_valid_criteria(Some(""), Some(-5), Some(" x ")));

        assert!(!has_valid_criteria(None, None, None));
        assert!(!has_valid_criteria(Some(""), None, None));
        assert!(!has_valid_criteria(Some("   "), None, None));
        assert!(!has_valid_criteria(None, Some(0), None));
        assert!(!has_valid_criteria(None, Some(-1), None));
        assert!(!has_valid_criteria(None, None, Some("")));
        assert!(!has_valid_criteria(None, None, Some("   ")));
        assert!(!has_valid_criteria(Some("\t"), Some(0), Some(" ")));
    }

    #[test]
    fn test_method_and_function_agree() {
        let cases = [
            (Some("x"), None, None),
            (None, Some(0), Some(" ")),
            (None, Some(4), None),
            (Some(" "), None, Some("crime")),
        ];
        for (name, id, genre) in cases {
            let criteria = SearchCriteria::from_parts(name, id, genre);
            assert_eq!(
                criteria.has_valid_criteria(),
                has_valid_criteria(name, id, genre)
            );
        }
    }

    #[test]
    fn test_search_without_criteria_returns_everything_in_order() {
        let movies = fixtures::sample_movies();
        let results = search(&movies, &SearchCriteria::new());
        assert_eq!(results, movies.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_search_by_name_partial_case_insensitive() {
        let movies = fixtures::sample_movies();
        assert_eq!(ids(&search_by_name(&movies, Some("prison"))), vec![1]);
        assert_eq!(ids(&search_by_name(&movies, Some("FAMILY"))), vec![2]);
        assert_eq!(ids(&search_by_name(&movies, Some("family"))), vec![2]);
    }

    #[test]
    fn test_search_by_name_is_sound_and_complete() {
        let movies = fixtures::sample_movies();
        let results = search_by_name(&movies, Some("the"));
        for movie in &movies {
            let expected = movie.title.to_lowercase().contains("the");
            assert_eq!(results.contains(&movie), expected, "movie {}", movie.id);
        }
    }

    #[test]
    fn test_search_by_name_blank_returns_empty() {
        let movies = fixtures::sample_movies();
        assert!(search_by_name(&movies, None).is_empty());
        assert!(search_by_name(&movies, Some("")).is_empty());
        assert!(search_by_name(&movies, Some("   ")).is_empty());
    }

    #[test]
    fn test_search_by_genre_matches_inside_compound_genre() {
        let movies = fixtures::sample_movies();
        assert_eq!(ids(&search_by_genre(&movies, Some("drama"))), vec![1, 2]);
        assert_eq!(ids(&search_by_genre(&movies, Some("crime"))), vec![2, 3]);
        assert_eq!(ids(&search_by_genre(&movies, Some("ACTION"))), vec![3, 4]);
    }

    #[test]
    fn test_search_by_genre_blank_returns_empty() {
        let movies = fixtures::sample_movies();
        assert!(search_by_genre(&movies, None).is_empty());
        assert!(search_by_genre(&movies, Some("")).is_empty());
        assert!(search_by_genre(&movies, Some("   ")).is_empty());
    }

    #[test]
    fn test_search_by_id_is_exact() {
        let movies = fixtures::sample_movies();
        let by_one = search(&movies, &SearchCriteria::new().with_id(1));
        assert_eq!(ids(&by_one), vec![1]);
        assert!(search(&movies, &SearchCriteria::new().with_id(999)).is_empty());
    }

    #[test]
    fn test_search_non_positive_id_is_inactive() {
        let movies = fixtures::sample_movies();
        let results = search(&movies, &SearchCriteria::new().with_id(-3));
        assert_eq!(results.len(), movies.len());
    }

    #[test]
    fn test_search_is_conjunctive() {
        let movies = fixtures::sample_movies();

        let criteria = SearchCriteria::new().with_name("the").with_genre("drama");
        assert_eq!(ids(&search(&movies, &criteria)), vec![1, 2]);

        let criteria = SearchCriteria::new().with_name("prison").with_genre("crime");
        assert!(search(&movies, &criteria).is_empty());

        let criteria = SearchCriteria::new().with_name("family").with_id(1);
        assert!(search(&movies, &criteria).is_empty());
    }

    #[test]
    fn test_search_trims_whitespace() {
        let movies = fixtures::sample_movies();
        let padded = search(&movies, &SearchCriteria::new().with_name("  Prison  "));
        let plain = search(&movies, &SearchCriteria::new().with_name("Prison"));
        assert_eq!(padded, plain);
        assert_eq!(ids(&plain), vec![1]);
    }

    #[test]
    fn test_trim_strips_control_characters_only() {
        let movies = fixtures::sample_movies();
        let padded = search(&movies, &SearchCriteria::new().with_name("\u{1}prison\t\u{1f}"));
        assert_eq!(ids(&padded), vec![1]);

        assert!(!has_valid_criteria(Some("\u{1}\n \u{1f}"), None, None));
        assert!(has_valid_criteria(Some("\u{3000}"), None, None));
        assert!(search_by_name(&movies, Some("\u{3000}")).is_empty());
        assert_eq!(
            MovieFilter::genre(Some("\u{a0}crime")),
            Some(MovieFilter::Genre("\u{a0}crime".into()))
        );
    }

    #[test]
    fn test_search_is_idempotent() {
        let movies = fixtures::sample_movies();
        let criteria = SearchCriteria::new().with_genre("a");
        assert_eq!(search(&movies, &criteria), search(&movies, &criteria));
        assert_eq!(
            search_by_name(&movies, Some("the")),
            search_by_name(&movies, Some("the"))
        );
    }

    #[test]
    fn test_search_on_empty_catalog() {
        let movies: Vec<Movie> = Vec::new();
        assert!(search(&movies, &SearchCriteria::new()).is_empty());
        assert!(search_by_name(&movies, Some("prison")).is_empty());
    }
}
