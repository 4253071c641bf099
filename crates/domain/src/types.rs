// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Normalizes an optional category or date label.
///
/// Sample catalog data carries the literal text `"null"` where a value is
/// absent. That text, an empty string, and whitespace are all treated as
/// "no value".
///
/// # Arguments
///
/// * `raw` - The label as supplied by the catalog source
///
/// # Returns
///
/// The trimmed label, or `None` when it carries no value.
#[must_use]
pub fn normalize_label(raw: Option<&str>) -> Option<String> {
    let trimmed: &str = raw?.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        return None;
    }
    Some(trimmed.to_string())
}

/// Identifier of a movie as supplied by the catalog.
///
/// Uniqueness is not enforced; the catalog mutation endpoint accepts
/// repeated identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    /// Creates a new `MovieId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier text
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A star rating between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: u8 = 1;
    /// Highest accepted rating.
    pub const MAX: u8 = 5;

    /// Creates a new `Rating`.
    ///
    /// # Arguments
    ///
    /// * `value` - The number of stars
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside `1..=5`.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        u8::try_from(value)
            .ok()
            .filter(|stars| (Self::MIN..=Self::MAX).contains(stars))
            .map(Self)
            .ok_or(DomainError::InvalidRating { value })
    }

    /// Creates a `Rating`, clamping the value into the accepted range.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Returns the number of stars.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        Self::from(rating.0)
    }
}

/// A movie in the catalog.
///
/// Movies are immutable once constructed. Optional labels are normalized
/// through [`normalize_label`] so that placeholder text never becomes a
/// genre or language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    /// The catalog identifier.
    pub id: MovieId,
    /// The display title.
    pub title: String,
    /// URI of the poster image.
    pub poster: String,
    /// Synopsis shown on the card.
    pub description: String,
    /// Star rating.
    pub rating: Rating,
    /// Release date text, if known.
    pub release_date: Option<String>,
    /// Genre label, if known.
    pub genre: Option<String>,
    /// Language label, if known.
    pub language: Option<String>,
}

impl Movie {
    /// Creates a new `Movie` with no release date, genre or language.
    ///
    /// # Arguments
    ///
    /// * `id` - The catalog identifier
    /// * `title` - The display title
    /// * `poster` - URI of the poster image
    /// * `description` - Synopsis
    /// * `rating` - Star rating
    #[must_use]
    pub fn new(id: MovieId, title: &str, poster: &str, description: &str, rating: Rating) -> Self {
        Self {
            id,
            title: title.to_string(),
            poster: poster.to_string(),
            description: description.to_string(),
            rating,
            release_date: None,
            genre: None,
            language: None,
        }
    }

    /// Sets the release date, normalizing placeholder text to `None`.
    #[must_use]
    pub fn with_release_date(mut self, release_date: Option<&str>) -> Self {
        self.release_date = normalize_label(release_date);
        self
    }

    /// Sets the genre, normalizing placeholder text to `None`.
    #[must_use]
    pub fn with_genre(mut self, genre: Option<&str>) -> Self {
        self.genre = normalize_label(genre);
        self
    }

    /// Sets the language, normalizing placeholder text to `None`.
    #[must_use]
    pub fn with_language(mut self, language: Option<&str>) -> Self {
        self.language = normalize_label(language);
        self
    }
}

/// A non-negative amount of money in whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// The zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates a price from a number of cents.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates a price from a number of whole dollars.
    #[must_use]
    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars.saturating_mul(100))
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Multiplies the price by a ticket count.
    #[must_use]
    pub fn times(&self, count: usize) -> Self {
        let count: u64 = u64::try_from(count).unwrap_or(u64::MAX);
        Self(self.0.saturating_mul(count))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidPrice(s.to_string());
        let trimmed: &str = s.trim().trim_start_matches('$');
        let (whole, fraction): (&str, &str) = trimmed.split_once('.').unwrap_or((trimmed, ""));

        if whole.is_empty() || fraction.len() > 2 {
            return Err(invalid());
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let dollars: u64 = whole.parse().map_err(|_| invalid())?;
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        dollars
            .checked_mul(100)
            .and_then(|total| total.checked_add(cents))
            .map(Self)
            .ok_or_else(invalid)
    }
}

/// A fixed time slot offered for every movie, independent of date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Showtime {
    /// The time label, e.g. `"01:00 PM"`.
    pub time: String,
    /// Price of a single ticket.
    pub price: Price,
}

impl Showtime {
    /// Creates a new `Showtime`.
    #[must_use]
    pub fn new(time: &str, price: Price) -> Self {
        Self {
            time: time.to_string(),
            price,
        }
    }
}

/// Identifier of a seat: a row letter followed by a seat number.
///
/// Ordering is row-major: all of row A before row B, and seats within a
/// row by number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatId {
    row: char,
    number: u8,
}

impl SeatId {
    /// Creates a new `SeatId`.
    ///
    /// # Arguments
    ///
    /// * `row` - The row letter
    /// * `number` - The seat number within the row, starting at 1
    ///
    /// # Errors
    ///
    /// Returns an error if the row is not an ASCII letter or the number is 0.
    pub fn new(row: char, number: u8) -> Result<Self, DomainError> {
        if !row.is_ascii_alphabetic() || number == 0 {
            return Err(DomainError::InvalidSeatId(format!("{row}{number}")));
        }
        Ok(Self {
            row: row.to_ascii_uppercase(),
            number,
        })
    }

    /// Returns the row letter.
    #[must_use]
    pub const fn row(&self) -> char {
        self.row
    }

    /// Returns the seat number within the row.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row, self.number)
    }
}

impl FromStr for SeatId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        let mut chars = trimmed.chars();
        let row: char = chars
            .next()
            .ok_or_else(|| DomainError::InvalidSeatId(s.to_string()))?;
        let digits: &str = chars.as_str();

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidSeatId(s.to_string()));
        }
        let number: u8 = digits
            .parse()
            .map_err(|_| DomainError::InvalidSeatId(s.to_string()))?;

        Self::new(row, number).map_err(|_| DomainError::InvalidSeatId(s.to_string()))
    }
}

impl TryFrom<String> for SeatId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SeatId> for String {
    fn from(id: SeatId) -> Self {
        id.to_string()
    }
}

/// A single seat in a theater layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    id: SeatId,
    is_booked: bool,
}

impl Seat {
    /// Creates a new `Seat`.
    #[must_use]
    pub const fn new(id: SeatId, is_booked: bool) -> Self {
        Self { id, is_booked }
    }

    /// Returns the seat identifier.
    #[must_use]
    pub const fn id(&self) -> SeatId {
        self.id
    }

    /// Returns the row letter.
    #[must_use]
    pub const fn row(&self) -> char {
        self.id.row()
    }

    /// Returns the seat number within the row.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.id.number()
    }

    /// Returns whether the seat has been booked.
    #[must_use]
    pub const fn is_booked(&self) -> bool {
        self.is_booked
    }

    /// Marks the seat as booked. Seats are never unbooked.
    pub const fn mark_booked(&mut self) {
        self.is_booked = true;
    }
}

/// The shape of a theater: an ordered list of row letters and a seat
/// count per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatLayout {
    rows: Vec<char>,
    seats_per_row: u8,
}

impl SeatLayout {
    /// Number of seats in each row of the standard layout.
    pub const STANDARD_SEATS_PER_ROW: u8 = 10;

    /// Creates a new `SeatLayout`.
    ///
    /// # Arguments
    ///
    /// * `rows` - Row letters in display order
    /// * `seats_per_row` - Number of seats in each row
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no rows or no seats per row
    /// - A row label is not an ASCII letter
    /// - A row label appears more than once
    pub fn new(rows: &[char], seats_per_row: u8) -> Result<Self, DomainError> {
        if rows.is_empty() {
            return Err(DomainError::InvalidSeatLayout {
                reason: String::from("layout must have at least one row"),
            });
        }
        if seats_per_row == 0 {
            return Err(DomainError::InvalidSeatLayout {
                reason: String::from("rows must have at least one seat"),
            });
        }

        let mut normalized: Vec<char> = Vec::with_capacity(rows.len());
        for row in rows {
            if !row.is_ascii_alphabetic() {
                return Err(DomainError::InvalidSeatLayout {
                    reason: format!("row label '{row}' is not a letter"),
                });
            }
            let upper: char = row.to_ascii_uppercase();
            if normalized.contains(&upper) {
                return Err(DomainError::InvalidSeatLayout {
                    reason: format!("row label '{upper}' appears more than once"),
                });
            }
            normalized.push(upper);
        }

        Ok(Self {
            rows: normalized,
            seats_per_row,
        })
    }

    /// The standard auditorium: rows A through H, ten seats each.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rows: ('A'..='H').collect(),
            seats_per_row: Self::STANDARD_SEATS_PER_ROW,
        }
    }

    /// Returns the row letters in display order.
    #[must_use]
    pub fn rows(&self) -> &[char] {
        &self.rows
    }

    /// Returns the number of seats in each row.
    #[must_use]
    pub const fn seats_per_row(&self) -> u8 {
        self.seats_per_row
    }

    /// Returns the total number of seats.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.rows.len() * usize::from(self.seats_per_row)
    }

    /// Returns every seat identifier in row-major order.
    #[must_use]
    pub fn seat_ids(&self) -> Vec<SeatId> {
        self.rows
            .iter()
            .flat_map(|row| {
                (1..=self.seats_per_row).map(move |number| SeatId {
                    row: *row,
                    number,
                })
            })
            .collect()
    }
}
