//! Terminal formatting for catalog pages.

use aggregator::MovieSummary;
use colored::Colorize;
use data_loader::Review;
use service::MovieDetail;

/// "★★★★☆ 4.5 (12 reviews)" or "not rated yet"
pub fn format_rating(avg_rating: f64, review_count: usize) -> String {
    if review_count == 0 {
        return "not rated yet".to_string();
    }
    let filled = (avg_rating.round().clamp(0.0, 5.0)) as usize;
    let plural = if review_count == 1 { "review" } else { "reviews" };
    format!(
        "{}{} {:.1} ({} {})",
        "★".repeat(filled),
        "☆".repeat(5 - filled),
        avg_rating,
        review_count,
        plural
    )
}

/// One line per movie: id, title, year, genre and rating
pub fn print_movie_list(heading: &str, movies: &[MovieSummary]) {
    println!("{}", heading.bold().blue());
    if movies.is_empty() {
        println!("  {}", "No movies found.".dimmed());
        return;
    }
    for summary in movies {
        let movie = &summary.movie;
        println!(
            "  {:>4}. {} ({}) [{}] {}",
            movie.id.to_string().green(),
            movie.title,
            movie.year,
            movie.genre,
            format_rating(summary.avg_rating, summary.review_count).yellow()
        );
    }
}

/// Ranked list for the top-rated section
pub fn print_top_rated(movies: &[MovieSummary]) {
    println!("{}", "Top Rated:".bold().blue());
    if movies.is_empty() {
        println!("  {}", "No reviews yet - be the first!".dimmed());
        return;
    }
    for (rank, summary) in movies.iter().enumerate() {
        println!(
            "  {}. {} - {}",
            (rank + 1).to_string().green(),
            summary.movie.title,
            format_rating(summary.avg_rating, summary.review_count).yellow()
        );
    }
}

/// Full movie page with its reviews
pub fn print_movie_detail(detail: &MovieDetail) {
    let movie = &detail.movie;
    println!("{}", format!("{} ({})", movie.title, movie.year).bold().blue());
    println!("{}Genre: {}", "• ".green(), movie.genre);
    println!("{}Rating: {}", "• ".green(), format_rating(detail.avg_rating, detail.review_count));
    println!("{}Poster: {}", "• ".green(), movie.poster);
    println!("\n{}\n", movie.plot);

    println!("{}", "Reviews:".bold());
    if movie.reviews.is_empty() {
        println!("  {}", "No reviews yet.".dimmed());
    }
    for review in &movie.reviews {
        print_review(review);
    }
}

fn print_review(review: &Review) {
    println!(
        "  [{}] {} - {}/5 on {}",
        review.id.to_string().cyan(),
        review.reviewer_name.bold(),
        review.rating,
        review.created_at_display()
    );
    println!("      {}", review.comment);
}
