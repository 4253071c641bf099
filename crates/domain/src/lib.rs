// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{
    CatalogFilter, GENRE_OPTIONS, LANGUAGE_OPTIONS, POSTER_PLACEHOLDER, find_showtime,
    seed_movies, standard_showtimes,
};

// Re-export public types
pub use error::DomainError;
pub use types::{
    Movie, MovieId, Price, Rating, Seat, SeatId, SeatLayout, Showtime, normalize_label,
};
pub use validation::{parse_calendar_date, validate_date_not_before, validate_movie_fields};
