//! # Data Loader Crate
//!
//! This crate holds the movie-review domain records and the ways a catalog
//! gets loaded: the built-in seed list and TMDB CSV exports.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Review, NewReview)
//! - **seed**: The twelve starter movies
//! - **parser**: Parse TMDB CSV exports into movies
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{parser, seed_movies};
//! use std::path::Path;
//!
//! // Start from the built-in catalog
//! let movies = seed_movies();
//!
//! // Or import a TMDB export, reading at most 1000 rows
//! let report = parser::parse_tmdb_csv(Path::new("data/tmdb.csv"), Some(1000))?;
//! println!("Loaded {} movies ({} skipped)", report.loaded, report.skipped);
//! ```
//!
//! ## Learning Goals
//!
//! This crate demonstrates several key Rust concepts:
//!
//! 1. **Ownership**: Movies own their reviews; callers get owned snapshots
//! 2. **Error Handling**: Using Result<T> and custom error types
//! 3. **Type Safety**: Type aliases (MovieId, ReviewId) name what an id refers to
//! 4. **Serde**: Deriving Serialize/Deserialize for plain data records
//! 5. **Modules**: Organizing code into logical units

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod seed;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::ImportReport;
pub use seed::seed_movies;
pub use types::{
    // Type aliases
    MovieId,
    ReviewId,
    // Core types
    Movie,
    NewReview,
    Review,
    // Constants
    PLACEHOLDER_POSTER,
};
