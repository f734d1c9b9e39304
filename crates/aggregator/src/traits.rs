//! Core traits for the catalog filters.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a catalog snapshot.

use data_loader::Movie;

/// Core trait for narrowing down a list of movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across threads
/// - Filters take ownership of the Vec<Movie> and return a filtered Vec
/// - This allows for efficient transformations without unnecessary cloning
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of movies.
    ///
    /// # Arguments
    /// * `movies` - The movies to filter (takes ownership)
    ///
    /// # Returns
    /// The movies that pass, in their original order
    fn apply(&self, movies: Vec<Movie>) -> Vec<Movie>;
}
