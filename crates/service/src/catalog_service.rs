//! # Catalog Service
//!
//! This module coordinates the store and the aggregator for each page of
//! the app:
//! 1. Fetch a snapshot from the store
//! 2. Run the aggregation functions over it
//! 3. Return a view model the presentation layer can print as-is
//!
//! ## Learning Goals
//!
//! This component teaches you:
//! - Generic structs over a trait (`CatalogService<S: MovieStore>`)
//! - Converting between error types with `?` and `#[from]`
//! - Instrumentation and timing
//! - Combining multiple components into one API

use std::time::Instant;

use tracing::{debug, info};

use aggregator::filters::{GenreFilter, TitleFilter};
use aggregator::{FilterPipeline, MovieSummary};
use data_loader::{Movie, MovieId, Review, ReviewId};
use store::MovieStore;

use crate::error::Result;
use crate::form::ReviewForm;

/// Everything the home page shows
#[derive(Debug, Clone, PartialEq)]
pub struct HomePage {
    /// Every movie in catalog order
    pub movies: Vec<MovieSummary>,
    /// The featured "top rated" section
    pub top_movies: Vec<MovieSummary>,
}

/// One movie with its reviews and rating numbers
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub movie: Movie,
    /// 0.0 means "no reviews yet"
    pub avg_rating: f64,
    pub review_count: usize,
}

/// Search results along with what was searched for
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub query: String,
    pub genre: Option<String>,
    pub movies: Vec<MovieSummary>,
}

/// Main service that answers catalog requests
pub struct CatalogService<S: MovieStore> {
    store: S,
}

impl<S: MovieStore> CatalogService<S> {
    /// Create a service on top of a store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the underlying store (seeding, imports)
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The home page: every movie with its average, plus the top-rated section
    pub fn home(&self, top_limit: usize) -> Result<HomePage> {
        let start = Instant::now();
        let movies = self.store.fetch_all()?;

        let page = HomePage {
            movies: aggregator::summarize(&movies),
            top_movies: aggregator::top_rated(&movies, top_limit),
        };

        debug!(
            "Built home page: {} movies, {} top rated in {:?}",
            page.movies.len(),
            page.top_movies.len(),
            start.elapsed()
        );
        Ok(page)
    }

    /// The movie page, or `None` if the movie does not exist
    pub fn movie_detail(&self, id: MovieId) -> Result<Option<MovieDetail>> {
        let Some(movie) = self.store.fetch_movie(id)? else {
            debug!("Movie {} not found", id);
            return Ok(None);
        };

        Ok(Some(MovieDetail {
            avg_rating: aggregator::average_rating(&movie.reviews),
            review_count: aggregator::review_count(&movie.reviews),
            movie,
        }))
    }

    /// Search titles, optionally narrowed to one genre.
    ///
    /// An empty query (and no genre) returns the whole catalog.
    pub fn search(&self, query: &str, genre: Option<&str>) -> Result<SearchResults> {
        let movies = self.store.fetch_all()?;

        let mut pipeline = FilterPipeline::new().add_filter(TitleFilter::new(query));
        if let Some(genre) = genre {
            pipeline = pipeline.add_filter(GenreFilter::new(genre));
        }
        let matches = pipeline.apply(movies);

        info!("Search for '{}' matched {} movies", query, matches.len());
        Ok(SearchResults {
            query: query.to_string(),
            genre: genre.map(str::to_string),
            movies: aggregator::summarize(&matches),
        })
    }

    /// Movies of one genre (exact, case-insensitive)
    pub fn browse_genre(&self, genre: &str) -> Result<Vec<MovieSummary>> {
        let movies = self.store.fetch_all()?;
        let matches = aggregator::filter_by_genre(&movies, genre);
        Ok(aggregator::summarize(&matches))
    }

    /// Every genre in the catalog, sorted
    pub fn genres(&self) -> Result<Vec<String>> {
        let movies = self.store.fetch_all()?;
        Ok(aggregator::distinct_genres(&movies))
    }

    /// The top `limit` movies by average rating
    pub fn top_rated(&self, limit: usize) -> Result<Vec<MovieSummary>> {
        let movies = self.store.fetch_all()?;
        Ok(aggregator::top_rated(&movies, limit))
    }

    /// Average rating for one movie; 0.0 if it has no reviews or does not exist
    pub fn average_rating(&self, movie_id: MovieId) -> Result<f64> {
        Ok(self
            .store
            .fetch_movie(movie_id)?
            .map(|movie| aggregator::average_rating(&movie.reviews))
            .unwrap_or(0.0))
    }

    /// Number of reviews for one movie; 0 if it does not exist
    pub fn review_count(&self, movie_id: MovieId) -> Result<usize> {
        let movies = self.store.fetch_all()?;
        Ok(aggregator::review_count_for(&movies, movie_id))
    }

    /// Validate and store a review.
    ///
    /// # Returns
    /// * `Ok(Some(review))` - stored
    /// * `Ok(None)` - the movie does not exist
    /// * `Err(InvalidInput)` - the form failed validation; nothing was stored
    pub fn submit_review(&mut self, movie_id: MovieId, form: ReviewForm) -> Result<Option<Review>> {
        let review = form.validate()?;
        let stored = self.store.insert_review(movie_id, review)?;

        match &stored {
            Some(review) => info!(
                "{} rated movie {} with {} stars",
                review.reviewer_name, movie_id, review.rating
            ),
            None => debug!("Review for unknown movie {} was not stored", movie_id),
        }
        Ok(stored)
    }

    /// Delete a review. Returns `false` if it did not exist.
    pub fn delete_review(&mut self, review_id: ReviewId) -> Result<bool> {
        Ok(self.store.delete_review(review_id)?)
    }
}
