//! Filter to keep only movies of one genre.

use crate::traits::Filter;
use data_loader::Movie;

/// Case-insensitive exact match on the genre.
///
/// Unlike TitleFilter this is not a substring match: "Fi" does not match
/// "Sci-Fi". An empty genre matches every movie.
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: &str) -> Self {
        Self {
            genre: genre.trim().to_lowercase(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Vec<Movie> {
        if self.genre.is_empty() {
            return movies;
        }

        movies
            .into_iter()
            .filter(|movie| movie.genre.to_lowercase() == self.genre)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Movie> {
        vec![
            Movie::new(1, "Inception", 2010, "Sci-Fi", "p", "plot"),
            Movie::new(2, "Parasite", 2019, "Drama", "p", "plot"),
            Movie::new(3, "The Matrix", 1999, "Sci-Fi", "p", "plot"),
        ]
    }

    #[test]
    fn test_genre_filter_ignores_case() {
        let filtered = GenreFilter::new("sci-fi").apply(catalog());
        let ids: Vec<_> = filtered.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_genre_filter_is_exact() {
        assert!(GenreFilter::new("Fi").apply(catalog()).is_empty());
        assert!(GenreFilter::new("Dram").apply(catalog()).is_empty());
    }

    #[test]
    fn test_empty_genre_keeps_everything() {
        assert_eq!(GenreFilter::new("").apply(catalog()).len(), 3);
        assert_eq!(GenreFilter::new("  ").apply(catalog()).len(), 3);
    }
}
