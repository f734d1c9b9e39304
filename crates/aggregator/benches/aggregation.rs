//! Benchmarks for catalog aggregation
//!
//! Run with: cargo bench --package aggregator
//!
//! Builds a synthetic catalog the size of a full TMDB import and measures
//! the operations the home page runs on every request.

use aggregator::{DEFAULT_TOP_LIMIT, search_by_title, summarize, top_rated};
use chrono::Utc;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_loader::{Movie, NewReview};

fn build_catalog(movie_count: u32, reviews_per_movie: u32) -> Vec<Movie> {
    (1..=movie_count)
        .map(|id| {
            let mut movie = Movie::new(id, format!("Movie {}", id), 2000, "Drama", "poster", "plot");
            movie.reviews = (0..reviews_per_movie)
                .map(|n| {
                    let rating = ((id + n) % 5 + 1) as i32;
                    NewReview::new("bench", rating, "ok").into_review(id * reviews_per_movie + n, id, Utc::now())
                })
                .collect();
            movie
        })
        .collect()
}

fn bench_summarize(c: &mut Criterion) {
    let movies = build_catalog(10_000, 20);

    c.bench_function("summarize", |b| {
        b.iter(|| black_box(summarize(black_box(&movies))))
    });
}

fn bench_top_rated(c: &mut Criterion) {
    let movies = build_catalog(10_000, 20);

    c.bench_function("top_rated", |b| {
        b.iter(|| black_box(top_rated(black_box(&movies), DEFAULT_TOP_LIMIT)))
    });
}

fn bench_search_by_title(c: &mut Criterion) {
    let movies = build_catalog(10_000, 0);

    c.bench_function("search_by_title", |b| {
        b.iter(|| black_box(search_by_title(black_box(&movies), black_box("movie 99"))))
    });
}

criterion_group!(benches, bench_summarize, bench_top_rated, bench_search_by_title);
criterion_main!(benches);
