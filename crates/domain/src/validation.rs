// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Movie;
use time::Date;
use time::macros::format_description;

/// Validates that a movie's required fields are present.
///
/// This function checks that required fields are not empty.
/// It does NOT check for uniqueness of the identifier.
///
/// # Arguments
///
/// * `movie` - The movie to validate
///
/// # Returns
///
/// * `Ok(())` if the movie's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The movie's identifier is empty
/// - The movie's title is empty
pub fn validate_movie_fields(movie: &Movie) -> Result<(), DomainError> {
    if movie.id.value().trim().is_empty() {
        return Err(DomainError::InvalidMovieId(String::from(
            "Movie id cannot be empty",
        )));
    }

    if movie.title.trim().is_empty() {
        return Err(DomainError::InvalidTitle(String::from(
            "Title cannot be empty",
        )));
    }

    // Rating range is enforced by Rating::new()

    Ok(())
}

/// Parses a calendar date in `YYYY-MM-DD` form.
///
/// # Arguments
///
/// * `date_string` - The date text
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the text is not a valid date.
pub fn parse_calendar_date(date_string: &str) -> Result<Date, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(date_string.trim(), format).map_err(|e| DomainError::DateParseError {
        date_string: date_string.to_string(),
        error: e.to_string(),
    })
}

/// Validates that a date is not earlier than today.
///
/// Dates are compared calendrically; today itself is accepted.
///
/// # Errors
///
/// Returns `DomainError::DateInPast` if `date` precedes `today`.
pub fn validate_date_not_before(date: Date, today: Date) -> Result<(), DomainError> {
    if date < today {
        return Err(DomainError::DateInPast { date, today });
    }
    Ok(())
}
