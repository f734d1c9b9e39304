//! Top-rated ranking across the catalog.

use data_loader::Movie;

use crate::stats::{MovieSummary, summarize};

/// How many movies the "top rated" section shows by default
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// The highest-rated movies, best first.
///
/// ## Algorithm
/// 1. Summarize every movie (average + count)
/// 2. Drop movies without reviews (average of 0)
/// 3. Sort by average, highest first
/// 4. Keep the first `limit`
///
/// `sort_by` is stable, so movies with the same average keep their catalog
/// order. Stores hand out the catalog sorted by id, which makes the lower
/// id win a tie.
///
/// Returns fewer than `limit` movies when fewer have reviews.
pub fn top_rated(movies: &[Movie], limit: usize) -> Vec<MovieSummary> {
    let mut rated: Vec<MovieSummary> = summarize(movies)
        .into_iter()
        .filter(MovieSummary::is_rated)
        .collect();

    rated.sort_by(|a, b| b.avg_rating.total_cmp(&a.avg_rating));
    rated.truncate(limit);

    tracing::debug!("Ranked {} of {} movies as top rated", rated.len(), movies.len());
    rated
}
