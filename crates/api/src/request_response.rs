// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use red_curtain::{BookingSession, MessageKind, StatusMessage};
use red_curtain_domain::{Movie, Seat, Showtime};
use serde::{Deserialize, Serialize};

/// Query parameters narrowing the catalog listing.
///
/// Blank and `"null"` labels are treated as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListMoviesRequest {
    /// Genre label to match exactly.
    pub genre: Option<String>,
    /// Language label to match exactly.
    pub language: Option<String>,
    /// Case-insensitive title substring.
    pub search: Option<String>,
}

/// A movie as presented to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieInfo {
    /// Catalog identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Poster image URL.
    pub poster: String,
    /// Synopsis.
    pub description: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    /// Release date text.
    pub release_date: Option<String>,
    /// Genre label.
    pub genre: Option<String>,
    /// Language label.
    pub language: Option<String>,
}

impl From<&Movie> for MovieInfo {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.value().to_string(),
            title: movie.title.clone(),
            poster: movie.poster.clone(),
            description: movie.description.clone(),
            rating: movie.rating.value(),
            release_date: movie.release_date.clone(),
            genre: movie.genre.clone(),
            language: movie.language.clone(),
        }
    }
}

/// API response for the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMoviesResponse {
    /// Movies satisfying the filter, in store order.
    pub movies: Vec<MovieInfo>,
    /// Genre choices for the filter controls.
    pub genres: Vec<String>,
    /// Language choices for the filter controls.
    pub languages: Vec<String>,
}

/// API request to append a movie to the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddMovieRequest {
    /// Catalog identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Poster image URL.
    #[serde(default)]
    pub poster: String,
    /// Synopsis.
    #[serde(default)]
    pub description: String,
    /// Star rating, 1 through 5.
    pub rating: i64,
    /// Release date text.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Genre label.
    #[serde(default)]
    pub genre: Option<String>,
    /// Language label.
    #[serde(default)]
    pub language: Option<String>,
}

/// API response for a successful movie insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddMovieResponse {
    /// A success message.
    pub message: String,
    /// The identifier generated by the store.
    pub movie_id: i64,
}

/// API response for a catalog reseed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCatalogResponse {
    /// Number of movies inserted.
    pub inserted: usize,
    /// A success message.
    pub message: String,
}

/// A showtime as presented to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowtimeInfo {
    /// Time-of-day label.
    pub time: String,
    /// Per-ticket price, formatted with two decimals.
    pub price: String,
}

impl From<&Showtime> for ShowtimeInfo {
    fn from(showtime: &Showtime) -> Self {
        Self {
            time: showtime.time.clone(),
            price: showtime.price.to_string(),
        }
    }
}

/// API response listing the showtimes on offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListShowtimesResponse {
    /// Every showtime, earliest first.
    pub showtimes: Vec<ShowtimeInfo>,
}

/// API request to open a booking session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OpenBookingRequest {
    /// Catalog identifier of the movie.
    pub movie_id: String,
}

/// API request to toggle a seat.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectSeatRequest {
    /// Seat label such as `"C7"`.
    pub seat_id: String,
}

/// API request to choose a showtime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChooseShowtimeRequest {
    /// Time label of one of the standard showtimes.
    pub time: String,
}

/// API request to choose a date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChooseDateRequest {
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
}

/// How a seat should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    /// Open for selection.
    Available,
    /// In the viewer's pending selection.
    Selected,
    /// Taken.
    Booked,
}

/// One seat in the booking view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatInfo {
    /// Seat label such as `"C7"`.
    pub id: String,
    /// Seat number within its row.
    pub number: u8,
    /// How the seat should be drawn.
    pub status: SeatStatus,
}

impl SeatInfo {
    pub(crate) fn from_seat(seat: &Seat, session: &BookingSession) -> Self {
        let status: SeatStatus = if seat.is_booked() {
            SeatStatus::Booked
        } else if session.is_selected(seat.id()) {
            SeatStatus::Selected
        } else {
            SeatStatus::Available
        };
        Self {
            id: seat.id().to_string(),
            number: seat.number(),
            status,
        }
    }
}

/// One row of the seat grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRowInfo {
    /// Row letter.
    pub row: char,
    /// Seats in ascending number order.
    pub seats: Vec<SeatInfo>,
}

/// Feedback message as presented to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageInfo {
    /// Either `"rejection"` or `"confirmation"`.
    pub kind: String,
    /// The text shown to the viewer.
    pub text: String,
}

impl From<&StatusMessage> for MessageInfo {
    fn from(message: &StatusMessage) -> Self {
        let kind: &str = match message.kind {
            MessageKind::Rejection => "rejection",
            MessageKind::Confirmation => "confirmation",
        };
        Self {
            kind: kind.to_string(),
            text: message.text.clone(),
        }
    }
}

/// Everything needed to render a booking session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingView {
    /// The movie being booked.
    pub movie: MovieInfo,
    /// The seat grid, row by row.
    pub rows: Vec<SeatRowInfo>,
    /// The showtimes on offer.
    pub showtimes: Vec<ShowtimeInfo>,
    /// Time label of the chosen showtime.
    pub showtime: Option<String>,
    /// The chosen date.
    pub date: Option<String>,
    /// Selected seat labels in row-major order.
    pub selected_seats: Vec<String>,
    /// Selected seats joined for display, or `"None"`.
    pub selected_label: String,
    /// Pending total, `"0.00"` until a showtime is chosen.
    pub total: String,
    /// Current feedback message.
    pub message: Option<MessageInfo>,
    /// Lifecycle phase name.
    pub phase: String,
    /// Whether the confirm control should be enabled.
    pub can_confirm: bool,
}

/// API request to relay a contact message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactRequest {
    /// The sender's name.
    #[serde(default)]
    pub name: String,
    /// The sender's email address.
    #[serde(default)]
    pub email: String,
    /// The sender's phone number.
    #[serde(default)]
    pub phone: String,
    /// The message text.
    #[serde(default)]
    pub message: String,
}

/// API response for a relayed contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    /// Always `true`; failures are reported as errors.
    pub success: bool,
}

/// API request to sign in with a provider-vouched profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInRequest {
    /// Name reported by the identity provider.
    pub display_name: String,
    /// Avatar reported by the identity provider.
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// API response for a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInResponse {
    /// Bearer token for subsequent requests.
    pub session_token: String,
    /// The viewer's display name.
    pub display_name: String,
    /// The viewer's avatar.
    pub photo_url: Option<String>,
    /// When the session expires.
    pub expires_at: String,
}

/// API response describing the signed-in viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    /// The viewer's display name.
    pub display_name: String,
    /// The viewer's avatar.
    pub photo_url: Option<String>,
    /// When the session expires.
    pub expires_at: String,
}
