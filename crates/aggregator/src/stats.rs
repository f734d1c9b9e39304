//! Rating statistics for movies.
//!
//! Everything here is recomputed from the reviews it is handed; nothing
//! is cached, so a deleted review stops counting on the next call.
//!
//! Rust concepts demonstrated:
//! - Iterator adaptors (`map`, `sum`)
//! - Integer arithmetic to avoid floating-point rounding surprises
//! - Data-parallel mapping with Rayon that keeps input order

use data_loader::{Movie, MovieId, Review};
use rayon::prelude::*;

use crate::catalog::lookup_by_id;

/// A movie together with its derived rating numbers.
///
/// This is what list pages show: the movie plus "4.5 stars (12 reviews)".
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    pub movie: Movie,
    /// Rounded to one decimal place; 0.0 means "no reviews yet"
    pub avg_rating: f64,
    pub review_count: usize,
}

impl MovieSummary {
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            movie: movie.clone(),
            avg_rating: average_rating(&movie.reviews),
            review_count: review_count(&movie.reviews),
        }
    }

    /// Whether at least one review contributed to the average
    pub fn is_rated(&self) -> bool {
        self.avg_rating > 0.0
    }
}

/// Mean of the review ratings, rounded to one decimal place.
///
/// Ties round half away from zero, so 4.45 becomes 4.5. The rounding is
/// done on whole tenths with integers, so the result does not depend on how
/// the mean happens to be stored as a float.
///
/// Returns 0.0 when there are no reviews. Callers should read that as
/// "unrated", not "rated zero".
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }

    let count = reviews.len() as i64;
    let scaled_total: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum::<i64>() * 10;

    let mut tenths = scaled_total / count;
    let remainder = scaled_total % count;
    if 2 * remainder.abs() >= count {
        tenths += scaled_total.signum();
    }

    tenths as f64 / 10.0
}

/// Number of reviews in the set
pub fn review_count(reviews: &[Review]) -> usize {
    reviews.len()
}

/// Number of reviews for a movie in the catalog, 0 if the movie is unknown
pub fn review_count_for(movies: &[Movie], id: MovieId) -> usize {
    lookup_by_id(movies, id)
        .map(|movie| review_count(&movie.reviews))
        .unwrap_or(0)
}

/// Compute a summary for every movie, keeping catalog order.
///
/// Hint: `par_iter().map(..).collect()` on a slice preserves order
pub fn summarize(movies: &[Movie]) -> Vec<MovieSummary> {
    movies.par_iter().map(MovieSummary::from_movie).collect()
}
