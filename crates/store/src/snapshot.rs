//! The catalog snapshot shared by every store implementation.
//!
//! Both stores keep their data as a `CatalogSnapshot`: MemoryStore holds
//! one in a field, JsonStore reads one from disk for each call. All
//! mutation rules live here so the two stores cannot drift apart.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use data_loader::{Movie, MovieId, NewReview, Review, ReviewId};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Every movie and review, with movies kept sorted by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    movies: Vec<Movie>,
}

impl CatalogSnapshot {
    /// Build a snapshot, sorting movies by id and checking invariants
    pub fn new(movies: Vec<Movie>) -> Result<Self> {
        let mut snapshot = Self { movies };
        snapshot.movies.sort_by_key(|movie| movie.id);
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn into_movies(self) -> Vec<Movie> {
        self.movies
    }

    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        aggregator::lookup_by_id(&self.movies, id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Next free review id: one past the largest id in use
    fn next_review_id(&self) -> Result<ReviewId> {
        let largest = self
            .movies
            .iter()
            .flat_map(|movie| movie.reviews.iter())
            .map(|review| review.id)
            .max()
            .unwrap_or(0);

        largest.checked_add(1).ok_or_else(|| StoreError::Corrupt {
            reason: format!("review id {} leaves no room for another review", largest),
        })
    }

    /// Attach a new review to its movie.
    ///
    /// Returns `Ok(None)` (and changes nothing) if the movie does not exist.
    pub fn insert_review(
        &mut self,
        movie_id: MovieId,
        review: NewReview,
        created_at: DateTime<Utc>,
    ) -> Result<Option<Review>> {
        let Some(idx) = self.movies.iter().position(|movie| movie.id == movie_id) else {
            return Ok(None);
        };
        let id = self.next_review_id()?;

        let review = review.into_review(id, movie_id, created_at);
        self.movies[idx].reviews.push(review.clone());
        Ok(Some(review))
    }

    /// Remove a review by id; `None` if it was not there
    pub fn delete_review(&mut self, review_id: ReviewId) -> Option<Review> {
        aggregator::delete_review(&mut self.movies, review_id)
    }

    /// Check the invariants a loaded snapshot must satisfy
    ///
    /// Check that:
    /// - Movie ids are unique
    /// - Review ids are unique across the whole catalog
    /// - Every review points at the movie that holds it
    pub fn validate(&self) -> Result<()> {
        let mut movie_ids = HashSet::new();
        let mut review_ids = HashSet::new();

        for movie in &self.movies {
            if !movie_ids.insert(movie.id) {
                return Err(StoreError::Corrupt {
                    reason: format!("duplicate movie id {}", movie.id),
                });
            }
            for review in &movie.reviews {
                if !review_ids.insert(review.id) {
                    return Err(StoreError::Corrupt {
                        reason: format!("duplicate review id {}", review.id),
                    });
                }
                if review.movie_id != movie.id {
                    return Err(StoreError::Corrupt {
                        reason: format!(
                            "review {} is stored under movie {} but references movie {}",
                            review.id, movie.id, review.movie_id
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}
