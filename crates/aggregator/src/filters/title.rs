//! Filter for title search.
//!
//! Keeps movies whose title contains the query, ignoring case.

use crate::traits::Filter;
use data_loader::Movie;

/// Case-insensitive substring match on the title.
///
/// An empty (or all-whitespace) query matches every movie, so searching
/// for nothing shows the whole catalog.
pub struct TitleFilter {
    /// Lowercased, trimmed query
    query: String,
}

impl TitleFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
        }
    }
}

impl Filter for TitleFilter {
    fn name(&self) -> &str {
        "TitleFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Vec<Movie> {
        if self.query.is_empty() {
            return movies;
        }

        movies
            .into_iter()
            .filter(|movie| movie.title.to_lowercase().contains(&self.query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Movie> {
        vec![
            Movie::new(1, "The Batman", 2022, "Crime", "p", "plot"),
            Movie::new(2, "Spider-Man: Into the Spider-Verse", 2018, "Animation", "p", "plot"),
            Movie::new(3, "Inception", 2010, "Sci-Fi", "p", "plot"),
        ]
    }

    #[test]
    fn test_title_filter_ignores_case() {
        let filtered = TitleFilter::new("BATMAN").apply(catalog());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "The Batman");
    }

    #[test]
    fn test_title_filter_matches_substring() {
        let filtered = TitleFilter::new("man").apply(catalog());
        let ids: Vec<_> = filtered.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        assert_eq!(TitleFilter::new("").apply(catalog()), catalog());
        assert_eq!(TitleFilter::new("   ").apply(catalog()), catalog());
    }

    #[test]
    fn test_no_match() {
        assert!(TitleFilter::new("zzz").apply(catalog()).is_empty());
    }
}
