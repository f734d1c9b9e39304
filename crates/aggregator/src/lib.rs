//! Rating aggregation over a catalog snapshot.
//!
//! This crate provides:
//! - Statistics: average rating and review count per movie
//! - Ranking: the top-rated movies across the catalog
//! - Catalog queries: lookup by id, title search, genre filter, genre list
//! - A Filter trait and FilterPipeline for composing catalog filters
//!
//! ## Architecture
//! Every operation is a plain function over data that was already fetched
//! from a store. Nothing here keeps state or talks to storage, so the
//! functions can be called in any order and return the same answer for
//! the same snapshot.
//!
//! ## Example Usage
//! ```ignore
//! use aggregator::{average_rating, search_by_title, top_rated, DEFAULT_TOP_LIMIT};
//!
//! let movies = store.fetch_all()?;
//!
//! let top = top_rated(&movies, DEFAULT_TOP_LIMIT);
//! let batman = search_by_title(&movies, "batman");
//! let avg = average_rating(&movies[0].reviews);
//! ```

pub mod catalog;
pub mod filter_pipeline;
pub mod filters;
pub mod ranking;
pub mod stats;
pub mod traits;

// Re-export main types
pub use catalog::{
    delete_review, distinct_genres, filter_by_genre, lookup_by_id, remove_review, search_by_title,
};
pub use filter_pipeline::FilterPipeline;
pub use ranking::{DEFAULT_TOP_LIMIT, top_rated};
pub use stats::{MovieSummary, average_rating, review_count, review_count_for, summarize};
pub use traits::Filter;
