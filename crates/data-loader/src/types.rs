//! Core domain types for the movie-review catalog.
//!
//! This module defines the plain records passed between the store, the
//! aggregator, and the presentation layer.
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (MovieId, ReviewId)
//! - Structs with public fields
//! - Owned collections (`Vec<Review>`) nested inside a record
//! - Derive macros for common traits, including serde

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up review IDs with movie IDs

/// Unique identifier for a movie
pub type MovieId = u32;

/// Unique identifier for a review
pub type ReviewId = u32;

/// Poster used when an imported movie has no poster URL
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/300x450?text=No+Poster";

/// Display format used for review timestamps, e.g. "05 Mar 2024 at 14:07"
pub const CREATED_AT_FORMAT: &str = "%d %b %Y at %H:%M";

// =============================================================================
// Movie
// =============================================================================

/// Represents a movie in the catalog together with its reviews.
///
/// Rust concepts:
/// - `#[derive(Debug, Clone)]` automatically implements these traits
/// - `PartialEq` lets tests compare whole movies with `assert_eq!`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Release year
    pub year: u16,
    /// A single free-text genre such as "Sci-Fi" or "Drama"
    pub genre: String,
    /// URL to the poster image
    pub poster: String,
    /// Plot summary
    pub plot: String,
    /// Reviews for this movie. Order carries no meaning.
    ///
    /// Rust concept: `#[serde(default)]` lets a snapshot omit the field
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Movie {
    /// Create a movie with no reviews yet
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        year: u16,
        genre: impl Into<String>,
        poster: impl Into<String>,
        plot: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            year,
            genre: genre.into(),
            poster: poster.into(),
            plot: plot.into(),
            reviews: Vec::new(),
        }
    }
}

// =============================================================================
// Review Types
// =============================================================================

/// A stored review of a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub movie_id: MovieId,
    pub reviewer_name: String,
    /// Star rating. The UI asks for 1-5; the core does not enforce it.
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Human-friendly timestamp, e.g. "05 Mar 2024 at 14:07"
    pub fn created_at_display(&self) -> String {
        self.created_at.format(CREATED_AT_FORMAT).to_string()
    }
}

/// The data a user submits for a new review.
///
/// The store fills in `id`, `movie_id` and `created_at` on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: String,
}

impl NewReview {
    pub fn new(reviewer_name: impl Into<String>, rating: i32, comment: impl Into<String>) -> Self {
        Self {
            reviewer_name: reviewer_name.into(),
            rating,
            comment: comment.into(),
        }
    }

    /// Turn this submission into a stored review
    pub fn into_review(self, id: ReviewId, movie_id: MovieId, created_at: DateTime<Utc>) -> Review {
        Review {
            id,
            movie_id,
            reviewer_name: self.reviewer_name,
            rating: self.rating,
            comment: self.comment,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_created_at_display() {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
        let review = NewReview::new("Alice", 5, "Amazing!").into_review(1, 2, created_at);

        assert_eq!(review.created_at_display(), "05 Mar 2024 at 14:07");
        assert_eq!(review.movie_id, 2);
        assert_eq!(review.reviewer_name, "Alice");
    }

    #[test]
    fn test_movie_without_reviews_field_deserializes() {
        let json = r#"{"id":1,"title":"Inception","year":2010,"genre":"Sci-Fi","poster":"p","plot":"dreams"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert!(movie.reviews.is_empty());
        assert_eq!(movie.genre, "Sci-Fi");
    }
}
