//! Service crate for the ReelReviews catalog.
//!
//! This crate contains the CatalogService that coordinates the store and
//! the aggregator, plus validation for submitted reviews.

pub mod catalog_service;
pub mod error;
pub mod form;

pub use catalog_service::{CatalogService, HomePage, MovieDetail, SearchResults};
pub use error::{Result, ServiceError};
pub use form::{MAX_RATING, MIN_RATING, ReviewForm};
