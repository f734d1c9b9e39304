//! The built-in starter catalog.
//!
//! A fresh store is seeded with these twelve movies so the app has
//! something to show before any TMDB import.

use crate::types::Movie;

/// (title, year, genre, poster, plot)
const SEED_MOVIES: [(&str, u16, &str, &str, &str); 12] = [
    (
        "The Dark Knight",
        2008,
        "Action",
        "https://m.media-amazon.com/images/M/MV5BMTMxNTMwODM0NF5BMl5BanBnXkFtZTcwODAyMTk2Mw@@._V1_SX300.jpg",
        "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
    ),
    (
        "Inception",
        2010,
        "Sci-Fi",
        "https://m.media-amazon.com/images/M/MV5BMjAxMzY3NjcxNF5BMl5BanBnXkFtZTcwNTI5OTM0Mw@@._V1_SX300.jpg",
        "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
    ),
    (
        "Spider-Man: Into the Spider-Verse",
        2018,
        "Animation",
        "https://m.media-amazon.com/images/M/MV5BMjMwNDkxMTgzOF5BMl5BanBnXkFtZTgwNTkwNTQ3NjM@._V1_SX300.jpg",
        "Teen Miles Morales becomes the Spider-Man of his universe, and must join with five spider-powered individuals from other dimensions to stop a threat for all realities.",
    ),
    (
        "The Shawshank Redemption",
        1994,
        "Drama",
        "https://m.media-amazon.com/images/M/MV5BNDE3ODcxYzMtY2YzZC00NmNlLWJiNDMtZDViZWM2MzIxZDYwXkEyXkFqcGdeQXVyNjAwNDUxODI@._V1_SX300.jpg",
        "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
    ),
    (
        "Interstellar",
        2014,
        "Sci-Fi",
        "https://m.media-amazon.com/images/M/MV5BZjdkOTU3MDktN2IxOS00OGEyLWFmMjktY2FiMmZkNWIyODZiXkEyXkFqcGdeQXVyMTMxODk2OTU@._V1_SX300.jpg",
        "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
    ),
    (
        "The Lion King",
        1994,
        "Animation",
        "https://m.media-amazon.com/images/M/MV5BYTYxNGMyZTYtMjE3MS00MzNjLWFjNmYtMDk3N2FmM2JiM2M1XkEyXkFqcGdeQXVyNjY5NDU4NzI@._V1_SX300.jpg",
        "Lion prince Simba and his father are targeted by his bitter uncle, who wants to ascend the throne himself.",
    ),
    (
        "Avengers: Endgame",
        2019,
        "Action",
        "https://m.media-amazon.com/images/M/MV5BMTc5MDE2ODcwNV5BMl5BanBnXkFtZTgwMzI2NzQ2NzM@._V1_SX300.jpg",
        "After the devastating events of Infinity War, the Avengers assemble once more to reverse Thanos' actions and restore balance to the universe.",
    ),
    (
        "Parasite",
        2019,
        "Drama",
        "https://m.media-amazon.com/images/M/MV5BYWZjMjk3ZTItODQ2ZC00NTY5LWE0ZDYtZTI3MjcwN2Q5NTVkXkEyXkFqcGdeQXVyODk4OTc3MTY@._V1_SX300.jpg",
        "Greed and class discrimination threaten the newly formed symbiotic relationship between the wealthy Park family and the destitute Kim clan.",
    ),
    (
        "The Matrix",
        1999,
        "Sci-Fi",
        "https://m.media-amazon.com/images/M/MV5BNzQzOTk3OTAtNDQ0Zi00ZTVkLWI0MTEtMDllZjNkYzNjNTc4L2ltYWdlXkEyXkFqcGdeQXVyNjU0OTQ0OTY@._V1_SX300.jpg",
        "A computer hacker learns about the true nature of reality and his role in the war against its controllers.",
    ),
    (
        "Forrest Gump",
        1994,
        "Drama",
        "https://m.media-amazon.com/images/M/MV5BNWIwODRlZTUtY2U3ZS00Yzg1LWJhNzYtMmZiYmEyNmU1NjMzXkEyXkFqcGdeQXVyMTQxNzMzNDI@._V1_SX300.jpg",
        "The history of the United States from the 1950s to the '70s unfolds from the perspective of an Alabama man with an IQ of 75.",
    ),
    (
        "Toy Story",
        1995,
        "Animation",
        "https://m.media-amazon.com/images/M/MV5BMDU2ZWJlMjktMTRhMy00ZTA5LWEzNDgtYmNmZTEwZTViZWJkXkEyXkFqcGdeQXVyNDQ2OTk4MzI@._V1_SX300.jpg",
        "A cowboy doll is profoundly threatened and jealous when a new spaceman action figure supplants him as top toy in a boy's bedroom.",
    ),
    (
        "Pulp Fiction",
        1994,
        "Crime",
        "https://m.media-amazon.com/images/M/MV5BNGNhMDIzZTUtNTBlZi00MTRlLWFjM2ItYzViMjE3YzI5MjljXkEyXkFqcGdeQXVyNzkwMjQ5NzM@._V1_SX300.jpg",
        "The lives of two mob hitmen, a boxer, a gangster and his wife intertwine in four tales of violence and redemption.",
    ),
];

/// The starter catalog, numbered 1..=12 in listing order, with no reviews
pub fn seed_movies() -> Vec<Movie> {
    SEED_MOVIES
        .iter()
        .zip(1..)
        .map(|(&(title, year, genre, poster, plot), id)| Movie::new(id, title, year, genre, poster, plot))
        .collect()
}
