//! A store backed by one JSON snapshot file.
//!
//! Every call reads the file, works on the snapshot, and (for writes) saves
//! it back before returning. The file is only held open inside `load` and
//! `save`, so it is released on every exit path, including errors.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;
use data_loader::{Movie, MovieId, NewReview, Review, ReviewId};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::snapshot::CatalogSnapshot;
use crate::traits::MovieStore;

/// Persists the catalog as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot from disk
    ///
    /// A missing file is an empty catalog, not an error.
    fn load(&self) -> Result<CatalogSnapshot> {
        if !self.path.exists() {
            debug!("Catalog file {:?} does not exist, starting empty", self.path);
            return Ok(CatalogSnapshot::default());
        }

        let start = Instant::now();
        let data = std::fs::read(&self.path)?;
        let decoded: CatalogSnapshot = serde_json::from_slice(&data)?;

        // Re-check ordering and invariants; the file may have been hand-edited
        let snapshot = CatalogSnapshot::new(decoded.into_movies())?;
        debug!(
            "Loaded {} movies from {:?} in {:?}",
            snapshot.len(),
            self.path,
            start.elapsed()
        );
        Ok(snapshot)
    }

    /// Write the snapshot to disk
    fn save(&self, snapshot: &CatalogSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let encoded = serde_json::to_vec_pretty(snapshot)?;

        // Atomic write: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, encoded)?;
        std::fs::rename(&temp_path, &self.path)?;

        debug!("Saved {} movies to {:?}", snapshot.len(), self.path);
        Ok(())
    }
}

impl MovieStore for JsonStore {
    fn name(&self) -> &str {
        "JsonStore"
    }

    fn fetch_all(&self) -> Result<Vec<Movie>> {
        Ok(self.load()?.into_movies())
    }

    fn fetch_movie(&self, id: MovieId) -> Result<Option<Movie>> {
        Ok(self.load()?.movie(id).cloned())
    }

    fn insert_review(&mut self, movie_id: MovieId, review: NewReview) -> Result<Option<Review>> {
        let mut snapshot = self.load()?;
        let Some(stored) = snapshot.insert_review(movie_id, review, Utc::now())? else {
            return Ok(None);
        };

        self.save(&snapshot)?;
        info!("Stored review {} for movie {}", stored.id, movie_id);
        Ok(Some(stored))
    }

    fn delete_review(&mut self, review_id: ReviewId) -> Result<bool> {
        let mut snapshot = self.load()?;
        if snapshot.delete_review(review_id).is_none() {
            return Ok(false);
        }

        self.save(&snapshot)?;
        info!("Deleted review {}", review_id);
        Ok(true)
    }

    fn movie_count(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    fn replace_catalog(&mut self, movies: Vec<Movie>) -> Result<usize> {
        let snapshot = CatalogSnapshot::new(movies)?;

        match self.movie_count() {
            Ok(0) => {}
            Ok(existing) => info!("Clearing {} existing movies...", existing),
            Err(e) => warn!("Overwriting unreadable catalog {:?}: {}", self.path, e),
        }

        self.save(&snapshot)?;
        info!("Stored {} movies in {:?}", snapshot.len(), self.path);
        Ok(snapshot.len())
    }
}
