mod config;
mod logging;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{MovieId, ReviewId, parser, seed_movies};
use service::{CatalogService, ReviewForm};
use std::path::PathBuf;
use std::time::Instant;
use store::{JsonStore, MovieStore};
use tracing::info;

use crate::config::Config;

/// ReelReviews - browse movies and share star ratings
#[derive(Parser)]
#[command(name = "reel-reviews")]
#[command(about = "Movie catalog with star ratings and reviews", long_about = None)]
struct Cli {
    /// Path to the catalog JSON file (overrides the config file)
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More logging: -v for debug, -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every movie and the top-rated section
    List,

    /// Show one movie with its reviews
    Show {
        /// Movie ID to display
        #[arg(long)]
        id: MovieId,
    },

    /// Search for movies by title
    Search {
        /// Text to look for in titles (case-insensitive); empty lists everything
        #[arg(long, default_value = "")]
        title: String,

        /// Only show this genre
        #[arg(long)]
        genre: Option<String>,
    },

    /// Show movies of one genre
    Genre {
        /// Genre name, e.g. "Sci-Fi" (case-insensitive, exact)
        #[arg(long)]
        name: String,
    },

    /// List every genre in the catalog
    Genres,

    /// Show the highest-rated movies
    Top {
        /// How many movies to show (defaults to the config's top_limit)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Add or delete reviews
    Review {
        #[command(subcommand)]
        action: ReviewCommand,
    },

    /// Load the built-in starter movies if the catalog is empty
    Seed,

    /// Replace the catalog with movies from a TMDB CSV export
    Import {
        /// Path to the CSV file
        #[arg(long)]
        csv: PathBuf,

        /// Only read the first N rows
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Subcommand)]
enum ReviewCommand {
    /// Rate a movie
    Add {
        /// Movie being reviewed
        #[arg(long)]
        movie_id: MovieId,

        /// Your name
        #[arg(long)]
        name: String,

        /// Stars from 1 to 5
        #[arg(long)]
        rating: String,

        /// What you thought
        #[arg(long)]
        comment: String,
    },

    /// Delete a review by its ID
    Delete {
        #[arg(long)]
        id: ReviewId,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(store_path) = cli.store {
        config.store_path = store_path;
    }

    logging::init_logging(cli.verbose, cli.quiet, config.log_filter.as_deref())?;
    info!("Using catalog at {}", config.store_path.display());

    let mut service = CatalogService::new(JsonStore::new(&config.store_path));

    // A fresh catalog starts with the starter movies, except when an
    // import is about to replace it anyway
    if !matches!(cli.command, Commands::Import { .. } | Commands::Seed) {
        service
            .store_mut()
            .seed_if_empty(seed_movies())
            .context("Failed to seed the catalog")?;
    }

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List => handle_list(&service, &config)?,
        Commands::Show { id } => handle_show(&service, id)?,
        Commands::Search { title, genre } => handle_search(&service, &title, genre.as_deref())?,
        Commands::Genre { name } => handle_genre(&service, &name)?,
        Commands::Genres => handle_genres(&service)?,
        Commands::Top { limit } => handle_top(&service, limit.unwrap_or(config.top_limit))?,
        Commands::Review { action } => match action {
            ReviewCommand::Add {
                movie_id,
                name,
                rating,
                comment,
            } => handle_add_review(&mut service, movie_id, ReviewForm::new(name, rating, comment))?,
            ReviewCommand::Delete { id } => handle_delete_review(&mut service, id)?,
        },
        Commands::Seed => handle_seed(&mut service)?,
        Commands::Import { csv, limit } => handle_import(&mut service, csv, limit)?,
    }

    Ok(())
}

/// Handle the 'list' command (the home page)
fn handle_list(service: &CatalogService<JsonStore>, config: &Config) -> Result<()> {
    let page = service.home(config.top_limit)?;

    output::print_top_rated(&page.top_movies);
    println!();
    output::print_movie_list("All Movies:", &page.movies);
    Ok(())
}

/// Handle the 'show' command (the movie page)
fn handle_show(service: &CatalogService<JsonStore>, id: MovieId) -> Result<()> {
    match service.movie_detail(id)? {
        Some(detail) => output::print_movie_detail(&detail),
        None => println!("{} Movie not found", "✗".red()),
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(service: &CatalogService<JsonStore>, title: &str, genre: Option<&str>) -> Result<()> {
    let results = service.search(title, genre)?;

    let heading = match &results.genre {
        Some(genre) => format!("Search results for '{}' in {}:", results.query, genre),
        None => format!("Search results for '{}':", results.query),
    };
    output::print_movie_list(&heading, &results.movies);
    Ok(())
}

/// Handle the 'genre' command
fn handle_genre(service: &CatalogService<JsonStore>, name: &str) -> Result<()> {
    let movies = service.browse_genre(name)?;
    output::print_movie_list(&format!("{} movies:", name), &movies);
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(service: &CatalogService<JsonStore>) -> Result<()> {
    println!("{}", "Genres:".bold().blue());
    for genre in service.genres()? {
        println!("{}{}", "• ".green(), genre);
    }
    Ok(())
}

/// Handle the 'top' command
fn handle_top(service: &CatalogService<JsonStore>, limit: usize) -> Result<()> {
    let top = service.top_rated(limit)?;
    output::print_top_rated(&top);
    Ok(())
}

/// Handle 'review add'
fn handle_add_review(
    service: &mut CatalogService<JsonStore>,
    movie_id: MovieId,
    form: ReviewForm,
) -> Result<()> {
    let stored = service
        .submit_review(movie_id, form)
        .context("Review was not saved")?;

    match stored {
        Some(review) => println!(
            "{} Saved review {} ({} stars) for movie {}",
            "✓".green(),
            review.id,
            review.rating,
            movie_id
        ),
        None => println!("{} Movie not found", "✗".red()),
    }
    Ok(())
}

/// Handle 'review delete'
fn handle_delete_review(service: &mut CatalogService<JsonStore>, id: ReviewId) -> Result<()> {
    if service.delete_review(id)? {
        println!("{} Deleted review {}", "✓".green(), id);
    } else {
        println!("Review {} does not exist, nothing to delete", id);
    }
    Ok(())
}

/// Handle the 'seed' command
fn handle_seed(service: &mut CatalogService<JsonStore>) -> Result<()> {
    let added = service.store_mut().seed_if_empty(seed_movies())?;
    if added > 0 {
        println!("{} Added {} starter movies", "✓".green(), added);
    } else {
        println!("Catalog already has movies, nothing to seed");
    }
    Ok(())
}

/// Handle the 'import' command
fn handle_import(
    service: &mut CatalogService<JsonStore>,
    csv: PathBuf,
    limit: Option<usize>,
) -> Result<()> {
    println!("Loading TMDB export from {}...", csv.display());
    let start = Instant::now();

    let report = parser::parse_tmdb_csv(&csv, limit).context("Failed to read TMDB export")?;
    service
        .store_mut()
        .replace_catalog(report.movies)
        .context("Failed to store imported movies")?;

    println!(
        "{} Loaded {} movies ({} skipped due to missing data) in {:?}",
        "✓".green(),
        report.loaded,
        report.skipped,
        start.elapsed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_review_add() {
        let cli = Cli::parse_from([
            "reel-reviews",
            "--store",
            "/tmp/movies.json",
            "review",
            "add",
            "--movie-id",
            "3",
            "--name",
            "Alice",
            "--rating",
            "5",
            "--comment",
            "Amazing!",
        ]);

        assert_eq!(cli.store, Some(PathBuf::from("/tmp/movies.json")));
        match cli.command {
            Commands::Review {
                action: ReviewCommand::Add { movie_id, rating, .. },
            } => {
                assert_eq!(movie_id, 3);
                assert_eq!(rating, "5");
            }
            _ => panic!("expected review add"),
        }
    }

    #[test]
    fn test_search_title_defaults_to_empty() {
        let cli = Cli::parse_from(["reel-reviews", "search", "-vv"]);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Search { ref title, genre: None } if title.is_empty()));
    }
}
