//! An in-memory store.
//!
//! Useful for tests and for a quick look at the seed catalog without
//! touching the disk. Data is lost when the store is dropped.

use chrono::Utc;
use data_loader::{Movie, MovieId, NewReview, Review, ReviewId, seed_movies};
use tracing::info;

use crate::error::Result;
use crate::snapshot::CatalogSnapshot;
use crate::traits::MovieStore;

/// Keeps the whole catalog in a `CatalogSnapshot`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    catalog: CatalogSnapshot,
}

impl MemoryStore {
    /// An empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the built-in seed catalog
    pub fn seeded() -> Self {
        Self {
            // The seed list has unique ids, so this cannot fail validation
            catalog: CatalogSnapshot::new(seed_movies()).unwrap_or_default(),
        }
    }

    /// A store holding `movies`
    pub fn with_movies(movies: Vec<Movie>) -> Result<Self> {
        Ok(Self {
            catalog: CatalogSnapshot::new(movies)?,
        })
    }
}

impl MovieStore for MemoryStore {
    fn name(&self) -> &str {
        "MemoryStore"
    }

    fn fetch_all(&self) -> Result<Vec<Movie>> {
        Ok(self.catalog.movies().to_vec())
    }

    fn fetch_movie(&self, id: MovieId) -> Result<Option<Movie>> {
        Ok(self.catalog.movie(id).cloned())
    }

    fn insert_review(&mut self, movie_id: MovieId, review: NewReview) -> Result<Option<Review>> {
        let stored = self.catalog.insert_review(movie_id, review, Utc::now())?;
        if let Some(review) = &stored {
            info!("Stored review {} for movie {}", review.id, movie_id);
        }
        Ok(stored)
    }

    fn delete_review(&mut self, review_id: ReviewId) -> Result<bool> {
        let removed = self.catalog.delete_review(review_id).is_some();
        if removed {
            info!("Deleted review {}", review_id);
        }
        Ok(removed)
    }

    fn movie_count(&self) -> Result<usize> {
        Ok(self.catalog.len())
    }

    fn replace_catalog(&mut self, movies: Vec<Movie>) -> Result<usize> {
        self.catalog = CatalogSnapshot::new(movies)?;
        info!("Replaced catalog with {} movies", self.catalog.len());
        Ok(self.catalog.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store() {
        let store = MemoryStore::seeded();
        assert_eq!(store.movie_count().unwrap(), 12);
        assert_eq!(store.fetch_movie(2).unwrap().unwrap().title, "Inception");
        assert!(store.fetch_movie(99).unwrap().is_none());
    }

    #[test]
    fn test_insert_and_delete_review() {
        let mut store = MemoryStore::seeded();

        let review = store
            .insert_review(1, NewReview::new("Alice", 5, "Amazing!"))
            .unwrap()
            .unwrap();
        assert_eq!(store.fetch_movie(1).unwrap().unwrap().reviews.len(), 1);

        assert!(store.delete_review(review.id).unwrap());
        assert!(store.fetch_movie(1).unwrap().unwrap().reviews.is_empty());
    }

    #[test]
    fn test_delete_missing_review_is_not_an_error() {
        let mut store = MemoryStore::seeded();
        let before = store.fetch_all().unwrap();

        assert!(!store.delete_review(12345).unwrap());
        assert_eq!(store.fetch_all().unwrap(), before);
    }

    #[test]
    fn test_insert_for_unknown_movie() {
        let mut store = MemoryStore::seeded();
        assert!(store.insert_review(999, NewReview::new("Bob", 3, "?")).unwrap().is_none());
    }

    #[test]
    fn test_seed_if_empty() {
        let mut store = MemoryStore::new();
        assert_eq!(store.seed_if_empty(seed_movies()).unwrap(), 12);
        assert_eq!(store.seed_if_empty(seed_movies()).unwrap(), 0);
        assert_eq!(store.movie_count().unwrap(), 12);
    }

    #[test]
    fn test_with_movies() {
        let movies = vec![
            Movie::new(7, "Heat", 1995, "Crime", "p", "plot"),
            Movie::new(3, "Alien", 1979, "Sci-Fi", "p", "plot"),
        ];
        let store = MemoryStore::with_movies(movies).unwrap();

        let ids: Vec<_> = store.fetch_all().unwrap().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 7]);

        let duplicate = vec![
            Movie::new(1, "Heat", 1995, "Crime", "p", "plot"),
            Movie::new(1, "Alien", 1979, "Sci-Fi", "p", "plot"),
        ];
        assert!(matches!(
            MemoryStore::with_movies(duplicate),
            Err(crate::StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_replace_catalog_drops_reviews() {
        let mut store = MemoryStore::seeded();
        store.insert_review(1, NewReview::new("Alice", 5, "Amazing!")).unwrap();

        let movies = vec![Movie::new(1, "Only Movie", 2001, "Drama", "p", "plot")];
        assert_eq!(store.replace_catalog(movies).unwrap(), 1);

        let all = store.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].reviews.is_empty());
    }
}
