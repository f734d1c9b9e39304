//! Filter implementations for the catalog.
//!
//! This module contains the concrete filters that can be composed
//! into a FilterPipeline.

pub mod genre;
pub mod title;

// Re-export for convenience
pub use genre::GenreFilter;
pub use title::TitleFilter;
