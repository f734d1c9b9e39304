//! Integration tests for the aggregator.
//!
//! These tests run the aggregation functions together over the seed
//! catalog, the way the catalog pages use them.

use aggregator::filters::{GenreFilter, TitleFilter};
use aggregator::*;
use chrono::Utc;
use data_loader::{Movie, NewReview, seed_movies};

fn create_test_catalog() -> Vec<Movie> {
    let mut movies = seed_movies();
    let mut next_id = 1;

    // (movie id, ratings)
    let ratings: [(u32, &[i32]); 5] = [
        (1, &[5, 5, 4]), // The Dark Knight: 4.7
        (2, &[5, 4]),    // Inception: 4.5
        (4, &[5]),       // The Shawshank Redemption: 5.0
        (9, &[3, 4]),    // The Matrix: 3.5
        (12, &[5, 4]),   // Pulp Fiction: 4.5
    ];

    for (movie_id, values) in ratings {
        let movie = movies.iter_mut().find(|m| m.id == movie_id).unwrap();
        for &rating in values {
            movie
                .reviews
                .push(NewReview::new("critic", rating, "noted").into_review(next_id, movie_id, Utc::now()));
            next_id += 1;
        }
    }

    movies
}

#[test]
fn test_top_rated_over_seed_catalog() {
    let movies = create_test_catalog();

    let top = top_rated(&movies, DEFAULT_TOP_LIMIT);
    let titles: Vec<_> = top.iter().map(|s| s.movie.title.as_str()).collect();

    // Inception and Pulp Fiction tie at 4.5; catalog order puts Inception first
    assert_eq!(
        titles,
        vec![
            "The Shawshank Redemption",
            "The Dark Knight",
            "Inception",
            "Pulp Fiction",
            "The Matrix",
        ]
    );
    assert!(top.iter().all(|s| s.review_count > 0));
}

#[test]
fn test_top_rated_never_exceeds_limit() {
    let movies = create_test_catalog();
    for limit in 0..8 {
        assert!(top_rated(&movies, limit).len() <= limit);
    }
}

#[test]
fn test_deleting_a_review_changes_the_average() {
    let mut movies = create_test_catalog();
    let dark_knight = lookup_by_id(&movies, 1).unwrap();
    assert_eq!(average_rating(&dark_knight.reviews), 4.7);

    // Review 3 is the 4-star review of The Dark Knight
    let removed = delete_review(&mut movies, 3).unwrap();
    assert_eq!(removed.rating, 4);

    let dark_knight = lookup_by_id(&movies, 1).unwrap();
    assert_eq!(average_rating(&dark_knight.reviews), 5.0);
    assert_eq!(review_count_for(&movies, 1), 2);

    // Deleting again is a no-op
    let before = movies.clone();
    assert!(delete_review(&mut movies, 3).is_none());
    assert_eq!(movies, before);
}

#[test]
fn test_search_and_genre_queries() {
    let movies = create_test_catalog();

    assert_eq!(search_by_title(&movies, "").len(), movies.len());
    assert_eq!(search_by_title(&movies, "SPIDER").len(), 1);
    assert_eq!(filter_by_genre(&movies, "sci-fi").len(), 3);

    let genres = distinct_genres(&movies);
    assert_eq!(genres, vec!["Action", "Animation", "Crime", "Drama", "Sci-Fi"]);
    let mut sorted = genres.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(genres, sorted);
}

#[test]
fn test_pipeline_combines_title_and_genre() {
    let movies = create_test_catalog();

    let pipeline = FilterPipeline::new()
        .add_filter(TitleFilter::new("the"))
        .add_filter(GenreFilter::new("animation"));

    let matches = pipeline.apply(movies);
    let titles: Vec<_> = matches.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Spider-Man: Into the Spider-Verse", "The Lion King"]);
}
