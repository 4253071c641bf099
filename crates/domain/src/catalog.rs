// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static catalog data and listing filters.

use crate::error::DomainError;
use crate::types::{Movie, MovieId, Price, Rating, Showtime};
use serde::{Deserialize, Serialize};

/// Genre labels offered as filter choices.
pub const GENRE_OPTIONS: [&str; 6] = ["Sci-Fi", "Romantic", "Comedy", "Thriller", "Drama", "Horror"];

/// Language labels offered as filter choices.
pub const LANGUAGE_OPTIONS: [&str; 5] = ["English", "Hindi", "Punjabi", "Tamil", "Telugu"];

/// Poster shown when a movie has no usable image.
pub const POSTER_PLACEHOLDER: &str = "https://placehold.co/300x450/4B5563/F9FAFB?text=NO+IMAGE";

/// Returns the fixed list of showtimes offered for every movie.
#[must_use]
pub fn standard_showtimes() -> Vec<Showtime> {
    vec![
        Showtime::new("10:00 AM", Price::from_dollars(10)),
        Showtime::new("01:00 PM", Price::from_dollars(12)),
        Showtime::new("04:00 PM", Price::from_dollars(12)),
        Showtime::new("07:00 PM", Price::from_dollars(15)),
        Showtime::new("10:00 PM", Price::from_dollars(15)),
    ]
}

/// Looks up a showtime by its time label.
///
/// # Arguments
///
/// * `showtimes` - The showtimes on offer
/// * `time` - The time label to find
///
/// # Errors
///
/// Returns `DomainError::ShowtimeNotFound` if no showtime carries the label.
pub fn find_showtime<'a>(showtimes: &'a [Showtime], time: &str) -> Result<&'a Showtime, DomainError> {
    showtimes
        .iter()
        .find(|showtime| showtime.time == time)
        .ok_or_else(|| DomainError::ShowtimeNotFound(time.to_string()))
}

struct SeedRecord {
    id: &'static str,
    title: &'static str,
    poster: &'static str,
    description: &'static str,
    rating: u8,
    release_date: Option<&'static str>,
    genre: &'static str,
    language: &'static str,
}

const UNEXPECTED_TURN: &str =
    "A delightful comedy of errors that takes an unforeseen twist, leaving audiences in stitches.";
const PLACEHOLDER_POSTER: &str = "https://placehold.co/300x450/4B5563/F9FAFB?text=MOVIE+POSTER";

// Labels of "null" are kept as found in the source data and normalized on load.
const SEED_RECORDS: [SeedRecord; 10] = [
    SeedRecord {
        id: "1",
        title: "Oppenheimer",
        poster: "https://posterspy.com/wp-content/uploads/2023/01/OPPENHEIMER_FINAL-min.jpg",
        description: "A captivating drama about self-discovery, where a mysterious object changes lives.",
        rating: 4,
        release_date: None,
        genre: "Sci-Fi",
        language: "English",
    },
    SeedRecord {
        id: "2",
        title: "La-La Land",
        poster: "https://www.scrolldroll.com/wp-content/uploads/2020/01/LA-LA-Land-Must-Watch-Romantic-Hollywood-Movies-722x1024.jpg",
        description: "An action-packed adventure through the vast, unforgiving dunes, chasing ancient legends.",
        rating: 5,
        release_date: None,
        genre: "Romantic",
        language: "null",
    },
    SeedRecord {
        id: "3",
        title: "Devil Wears Prada",
        poster: "https://www.themoviedb.org/t/p/original/1LwW0W0Zyik00OmQPTnCUjmCh1C.jpg",
        description: "A heroic tale of bravery and sacrifice, following a dedicated team of first responders.",
        rating: 4,
        release_date: None,
        genre: "Drama",
        language: "Hindi",
    },
    SeedRecord {
        id: "4",
        title: "The Unexpected Turn",
        poster: "https://assets.website-files.com/5bf1c2ccde18dd05bd430ccc/5bf1c32c486e7f6bb6d72fd6_598191043fd40e0001129b79_horror-blog-halloween.jpeg",
        description: UNEXPECTED_TURN,
        rating: 3,
        release_date: None,
        genre: "Horror",
        language: "null",
    },
    SeedRecord {
        id: "5",
        title: "Hangover",
        poster: "https://www.discountdisplays.co.uk/our-blog/wp-content/uploads/the-hangover-movie-poster.jpg",
        description: "The cast of a space opera TV series is abducted by aliens who think their show is real.",
        rating: 4,
        release_date: None,
        genre: "Comedy",
        language: "null",
    },
    SeedRecord {
        id: "6",
        title: "Thriller",
        poster: "http://cdn.collider.com/wp-content/uploads/2019/04/thriller-netflix-movie-poster.png",
        description: "A couple undergo a procedure to erase each other from their memories after a bitter breakup.",
        rating: 5,
        release_date: None,
        genre: "Thriller",
        language: "Punjabi",
    },
    SeedRecord {
        id: "7",
        title: "Silver Linings Playbook",
        poster: "https://image.tmdb.org/t/p/original/g1wfh6BLd5rthHzSdbCnykXPYvG.jpg",
        description: "After spending eight months in a mental institution, a former teacher moves back in with his parents and tries to reconcile with his ex-wife.",
        rating: 4,
        release_date: Some("2025-07-15"),
        genre: "Sci-Fi",
        language: "English",
    },
    SeedRecord {
        id: "8",
        title: "Spirited Away",
        poster: PLACEHOLDER_POSTER,
        description: "During her family's move to the suburbs, a sullen 10-year-old girl wanders into a world ruled by gods, witches, and spirits, and where humans are changed into beasts.",
        rating: 5,
        release_date: Some("2025-09-23"),
        genre: "null",
        language: "null",
    },
    SeedRecord {
        id: "9",
        title: "The Unexpected Turn",
        poster: PLACEHOLDER_POSTER,
        description: UNEXPECTED_TURN,
        rating: 3,
        release_date: Some("2025-07-12"),
        genre: "null",
        language: "null",
    },
    SeedRecord {
        id: "10",
        title: "The Unexpected Turn",
        poster: "https://www.filmsourcing.com/wp-content/uploads/2013/03/werethemillers-poster.jpg",
        description: UNEXPECTED_TURN,
        rating: 3,
        release_date: Some("2025-10-11"),
        genre: "null",
        language: "null",
    },
];

/// Returns the sample catalog used to seed an empty movie store.
#[must_use]
pub fn seed_movies() -> Vec<Movie> {
    SEED_RECORDS
        .iter()
        .map(|record| {
            Movie::new(
                MovieId::new(record.id),
                record.title,
                record.poster,
                record.description,
                Rating::clamped(record.rating),
            )
            .with_release_date(record.release_date)
            .with_genre(Some(record.genre))
            .with_language(Some(record.language))
        })
        .collect()
}

/// Criteria for narrowing the catalog listing.
///
/// Every predicate that is set must hold. Unset predicates match
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Exact genre label to match.
    pub genre: Option<String>,
    /// Exact language label to match.
    pub language: Option<String>,
    /// Case-insensitive title substring.
    pub search: String,
}

impl CatalogFilter {
    /// Returns whether a movie satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, movie: &Movie) -> bool {
        let genre_match: bool = self
            .genre
            .as_ref()
            .is_none_or(|genre| movie.genre.as_ref() == Some(genre));
        let language_match: bool = self
            .language
            .as_ref()
            .is_none_or(|language| movie.language.as_ref() == Some(language));
        let search_match: bool = self.search.is_empty()
            || movie
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase());

        genre_match && language_match && search_match
    }

    /// Returns the movies that satisfy the filter, in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, movies: &'a [Movie]) -> Vec<&'a Movie> {
        movies.iter().filter(|movie| self.matches(movie)).collect()
    }

    /// Selects a genre, or clears it when the same genre is chosen again.
    pub fn toggle_genre(&mut self, genre: &str) {
        self.genre = toggled(self.genre.take(), genre);
    }

    /// Selects a language, or clears it when the same language is chosen again.
    pub fn toggle_language(&mut self, language: &str) {
        self.language = toggled(self.language.take(), language);
    }

    /// Returns whether no predicate is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.language.is_none() && self.search.is_empty()
    }
}

fn toggled(current: Option<String>, chosen: &str) -> Option<String> {
    match current {
        Some(existing) if existing == chosen => None,
        _ => Some(chosen.to_string()),
    }
}
