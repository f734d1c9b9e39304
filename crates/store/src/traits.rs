//! The persistence seam between the catalog and whatever stores it.

use data_loader::{Movie, MovieId, NewReview, Review, ReviewId};

use crate::error::Result;

/// Storage for movies and their reviews.
///
/// Every read returns a fully materialized snapshot: movies come back
/// with all of their reviews, sorted by ascending id. Each call is a
/// complete unit of work; nothing stays open between calls.
///
/// ## Design Note
/// - Reads take `&self`, writes take `&mut self`
/// - "Not found" is a value (`None` / `false`), not an error
/// - Storage failures are returned unchanged and never retried
pub trait MovieStore {
    /// Short name for logs
    fn name(&self) -> &str;

    /// All movies with their reviews, ordered by id
    fn fetch_all(&self) -> Result<Vec<Movie>>;

    /// One movie with its reviews
    fn fetch_movie(&self, id: MovieId) -> Result<Option<Movie>>;

    /// Store a new review.
    ///
    /// Returns the stored review with its assigned id and timestamp, or
    /// `None` if no movie has `movie_id`.
    fn insert_review(&mut self, movie_id: MovieId, review: NewReview) -> Result<Option<Review>>;

    /// Delete a review by id.
    ///
    /// Returns `false` when there was nothing to delete.
    fn delete_review(&mut self, review_id: ReviewId) -> Result<bool>;

    /// How many movies are stored
    fn movie_count(&self) -> Result<usize>;

    /// Throw away every movie and review and store `movies` instead.
    ///
    /// Returns how many movies were stored.
    fn replace_catalog(&mut self, movies: Vec<Movie>) -> Result<usize>;

    /// Store `movies` only if the store has no movies yet.
    ///
    /// Returns how many movies were added (0 if it was already seeded).
    fn seed_if_empty(&mut self, movies: Vec<Movie>) -> Result<usize> {
        if self.movie_count()? > 0 {
            tracing::debug!("{} already has movies, skipping seed", self.name());
            return Ok(0);
        }
        self.replace_catalog(movies)
    }
}
