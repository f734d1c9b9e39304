//! Lookups and transformations over a catalog snapshot.
//!
//! Rust concepts you'll learn here:
//! - Borrowing slices (`&[Movie]`) vs. taking ownership (`Vec<Movie>`)
//! - `Option` as the "not found" signal instead of an error
//! - BTreeSet for deduplicated, sorted output

use std::collections::BTreeSet;

use data_loader::{Movie, MovieId, Review, ReviewId};

use crate::filters::{GenreFilter, TitleFilter};
use crate::traits::Filter;

/// Find a movie by id with a linear scan.
///
/// Returns `None` if no movie has that id.
pub fn lookup_by_id(movies: &[Movie], id: MovieId) -> Option<&Movie> {
    movies.iter().find(|movie| movie.id == id)
}

/// Movies whose title contains `query`, ignoring case.
///
/// An empty query returns the whole catalog, not an empty list.
pub fn search_by_title(movies: &[Movie], query: &str) -> Vec<Movie> {
    TitleFilter::new(query).apply(movies.to_vec())
}

/// Movies whose genre equals `genre`, ignoring case.
///
/// An empty genre returns the whole catalog.
pub fn filter_by_genre(movies: &[Movie], genre: &str) -> Vec<Movie> {
    GenreFilter::new(genre).apply(movies.to_vec())
}

/// Every genre in the catalog, once each, in ascending order
pub fn distinct_genres(movies: &[Movie]) -> Vec<String> {
    movies
        .iter()
        .map(|movie| movie.genre.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Remove a review from a list by id.
///
/// Returns the removed review, or `None` (and leaves the list alone) if
/// no review has that id.
pub fn remove_review(reviews: &mut Vec<Review>, id: ReviewId) -> Option<Review> {
    let position = reviews.iter().position(|review| review.id == id)?;
    Some(reviews.remove(position))
}

/// Remove a review from whichever movie owns it.
///
/// Deleting an id that does not exist is a no-op, not an error.
pub fn delete_review(movies: &mut [Movie], id: ReviewId) -> Option<Review> {
    movies
        .iter_mut()
        .find_map(|movie| remove_review(&mut movie.reviews, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use data_loader::NewReview;

    fn catalog() -> Vec<Movie> {
        let mut batman = Movie::new(1, "The Batman", 2022, "Crime", "p", "plot");
        batman.reviews = vec![
            NewReview::new("Ann", 5, "Dark").into_review(10, 1, Utc::now()),
            NewReview::new("Bob", 3, "Long").into_review(11, 1, Utc::now()),
        ];
        let mut matrix = Movie::new(2, "The Matrix", 1999, "Sci-Fi", "p", "plot");
        matrix.reviews = vec![NewReview::new("Cy", 4, "Whoa").into_review(12, 2, Utc::now())];

        vec![
            batman,
            matrix,
            Movie::new(3, "Inception", 2010, "Sci-Fi", "p", "plot"),
            Movie::new(4, "Heat", 1995, "Crime", "p", "plot"),
        ]
    }

    #[test]
    fn test_lookup_by_id() {
        let movies = catalog();
        assert_eq!(lookup_by_id(&movies, 3).map(|m| m.title.as_str()), Some("Inception"));
        assert!(lookup_by_id(&movies, 99).is_none());
    }

    #[test]
    fn test_search_by_title() {
        let movies = catalog();
        assert_eq!(search_by_title(&movies, ""), movies);

        let found = search_by_title(&movies, "BATMAN");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "The Batman");
    }

    #[test]
    fn test_filter_by_genre() {
        let movies = catalog();
        let ids: Vec<_> = filter_by_genre(&movies, "CRIME").iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(filter_by_genre(&movies, "").len(), 4);
    }

    #[test]
    fn test_distinct_genres_sorted_and_unique() {
        assert_eq!(distinct_genres(&catalog()), vec!["Crime", "Sci-Fi"]);
        assert!(distinct_genres(&[]).is_empty());
    }

    #[test]
    fn test_delete_review() {
        let mut movies = catalog();

        let removed = delete_review(&mut movies, 11).unwrap();
        assert_eq!(removed.reviewer_name, "Bob");
        assert_eq!(movies[0].reviews.len(), 1);
        assert_eq!(movies[1].reviews.len(), 1);
    }

    #[test]
    fn test_delete_missing_review_is_noop() {
        let mut movies = catalog();
        let before = movies.clone();

        assert!(delete_review(&mut movies, 999).is_none());
        assert_eq!(movies, before);
    }
}
