//! # Store Crate
//!
//! This crate is the persistence side of the catalog: it hands out
//! snapshots of movies with their reviews and applies single writes
//! (insert a review, delete a review, replace the catalog).
//!
//! ## Components
//!
//! - **MovieStore**: the trait every store implements
//! - **MemoryStore**: keeps everything in memory (tests, quick demos)
//! - **JsonStore**: keeps everything in one JSON file on disk
//! - **CatalogSnapshot**: the shared data and mutation rules behind both
//!
//! ## Example Usage
//!
//! ```ignore
//! use store::{JsonStore, MovieStore};
//! use data_loader::{seed_movies, NewReview};
//!
//! let mut store = JsonStore::new("data/movies.json");
//! store.seed_if_empty(seed_movies())?;
//!
//! store.insert_review(1, NewReview::new("Alice", 5, "Amazing!"))?;
//! let movies = store.fetch_all()?;
//! ```
//!
//! ## Learning Goals
//!
//! 1. **Traits**: one interface, two interchangeable implementations
//! 2. **Default methods**: `seed_if_empty` is written once on the trait
//! 3. **Scoped resources**: files are opened and closed inside each call
//! 4. **Serde**: the whole catalog round-trips through `serde_json`

pub mod error;
pub mod json;
pub mod memory;
pub mod snapshot;
pub mod traits;

pub use error::{Result, StoreError};
pub use json::JsonStore;
pub use memory::MemoryStore;
pub use snapshot::CatalogSnapshot;
pub use traits::MovieStore;
