// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Movie identifier is empty or invalid.
    InvalidMovieId(String),
    /// Movie title is empty or invalid.
    InvalidTitle(String),
    /// Rating is outside the accepted star range.
    InvalidRating {
        /// The rejected value.
        value: i64,
    },
    /// Price text could not be interpreted as a non-negative amount.
    InvalidPrice(String),
    /// Seat identifier does not name a row letter followed by a seat number.
    InvalidSeatId(String),
    /// Seat layout has no rows, no seats, or repeated row labels.
    InvalidSeatLayout {
        /// Description of the problem.
        reason: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Requested date lies before the current calendar day.
    DateInPast {
        /// The requested date.
        date: time::Date,
        /// The current calendar day.
        today: time::Date,
    },
    /// No showtime carries the requested time label.
    ShowtimeNotFound(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMovieId(msg) => write!(f, "Invalid movie id: {msg}"),
            Self::InvalidTitle(msg) => write!(f, "Invalid title: {msg}"),
            Self::InvalidRating { value } => {
                write!(f, "Invalid rating: {value}. Must be between 1 and 5")
            }
            Self::InvalidPrice(msg) => write!(f, "Invalid price: {msg}"),
            Self::InvalidSeatId(raw) => {
                write!(
                    f,
                    "Invalid seat id '{raw}': expected a row letter followed by a seat number"
                )
            }
            Self::InvalidSeatLayout { reason } => write!(f, "Invalid seat layout: {reason}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateInPast { date, today } => {
                write!(f, "Date {date} is before today ({today})")
            }
            Self::ShowtimeNotFound(time) => write!(f, "No showtime at '{time}'"),
        }
    }
}

impl std::error::Error for DomainError {}
