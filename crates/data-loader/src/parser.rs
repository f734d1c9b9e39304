//! Parser for TMDB movie exports.
//!
//! This module turns a TMDB CSV export into catalog movies. The columns we
//! read are:
//! - Title: movie title
//! - Release_Date: "2021-12-15"; only the year is kept
//! - Genre: comma-separated, e.g. "Action, Adventure"; only the first is kept
//! - Poster_Url: optional, a placeholder is used when blank
//! - Overview: the plot summary
//!
//! Rust concepts you'll learn here:
//! - Reading CSV with the `csv` crate
//! - Error handling with `?` and `#[from]` conversions
//! - Returning `Option` for "maybe there is a value"
//! - Building a report struct instead of printing from library code

use crate::error::{DataLoadError, Result};
use crate::types::*;
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, warn};

/// Columns every TMDB export must provide
const REQUIRED_COLUMNS: [&str; 5] = ["Title", "Release_Date", "Genre", "Poster_Url", "Overview"];

/// Genre used when a row lists none
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Outcome of a TMDB import
#[derive(Debug, Clone)]
pub struct ImportReport {
    /// Movies ready to be stored, numbered from 1 in file order
    pub movies: Vec<Movie>,
    pub loaded: usize,
    /// Rows dropped because title, year or plot was missing
    pub skipped: usize,
}

/// Parse a TMDB CSV export from disk
///
/// `limit` caps how many data rows are read (not how many are kept);
/// `None` or `Some(0)` reads the whole file.
pub fn parse_tmdb_csv(path: &Path, limit: Option<usize>) -> Result<ImportReport> {
    let file = File::open(path).map_err(|_| DataLoadError::FileNotFound {
        path: path.display().to_string(),
    })?;
    info!("Reading TMDB export from {:?}", path);
    parse_tmdb_reader(file, limit)
}

/// Parse a TMDB CSV export from any reader
pub fn parse_tmdb_reader<R: std::io::Read>(input: R, limit: Option<usize>) -> Result<ImportReport> {
    // Short rows are read as-is and skipped below for their blank fields
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);

    // Map header names to column positions
    let headers = reader.headers()?.clone();
    let columns: HashMap<&str, usize> = REQUIRED_COLUMNS
        .iter()
        .map(|&name| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .map(|idx| (name, idx))
                .ok_or_else(|| DataLoadError::MissingColumn {
                    column: name.to_string(),
                })
        })
        .collect::<Result<_>>()?;

    let limit = limit.filter(|&n| n > 0);
    let mut movies = Vec::new();
    let mut skipped = 0;

    for (row_idx, record) in reader.records().enumerate() {
        if limit.is_some_and(|n| row_idx >= n) {
            break;
        }
        let record = record?;

        match movie_from_record(&record, &columns, movies.len() as MovieId + 1) {
            Some(movie) => {
                movies.push(movie);
                if movies.len() % 500 == 0 {
                    debug!("  Parsed {} movies...", movies.len());
                }
            }
            None => {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                warn!(line, "Skipping TMDB row with missing title, year or plot");
                skipped += 1;
            }
        }
    }

    let loaded = movies.len();
    info!("Parsed {} movies ({} skipped due to missing data)", loaded, skipped);
    Ok(ImportReport {
        movies,
        loaded,
        skipped,
    })
}

/// Build a movie from one CSV row, or `None` if a required field is blank
fn movie_from_record(
    record: &StringRecord,
    columns: &HashMap<&str, usize>,
    id: MovieId,
) -> Option<Movie> {
    let field = |name: &str| record.get(columns[name]).unwrap_or("");

    let title = field("Title").trim();
    let year = extract_year(field("Release_Date"))?;
    let plot = field("Overview").trim();
    if title.is_empty() || plot.is_empty() {
        return None;
    }

    let poster = match field("Poster_Url").trim() {
        "" => PLACEHOLDER_POSTER,
        url => url,
    };

    Some(Movie::new(
        id,
        title,
        year,
        primary_genre(field("Genre")),
        poster,
        plot,
    ))
}

/// Extract the year from a release date
///
/// Example: "2021-12-15" -> Some(2021)
///          "" -> None
///          "soon" -> None
fn extract_year(release_date: &str) -> Option<u16> {
    let year = release_date.trim().split('-').next()?;
    year.parse::<u16>().ok().filter(|&y| y > 0)
}

/// Get the first genre from a comma-separated list
///
/// Example: "Action, Adventure" -> "Action"
///          "" -> "Unknown"
fn primary_genre(genres: &str) -> String {
    genres
        .split(',')
        .next()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .unwrap_or(UNKNOWN_GENRE)
        .to_string()
}
