// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the catalog, booking sessions, identity and
//! the contact relay.

use red_curtain::{
    BookingError, BookingEvent, BookingSession, Command, CoreError, TransitionResult, apply,
    open_session, reject,
};
use red_curtain_domain::{
    CatalogFilter, GENRE_OPTIONS, LANGUAGE_OPTIONS, Movie, MovieId, Rating, SeatId, Showtime,
    find_showtime, normalize_label, parse_calendar_date, seed_movies, standard_showtimes,
    validate_date_not_before, validate_movie_fields,
};
use red_curtain_notify::{ContactMessage, ContactRelay};
use red_curtain_persistence::{Persistence, StoredMovie};
use time::Date;

use crate::auth::{AuthStatus, AuthenticationService, IdentityProfile, Viewer};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AddMovieRequest, AddMovieResponse, BookingView, ChooseDateRequest, ChooseShowtimeRequest,
    ContactRequest, ContactResponse, ListMoviesRequest, ListMoviesResponse, ListShowtimesResponse,
    MessageInfo, MovieInfo, OpenBookingRequest, SeatInfo, SeatRowInfo, SeedCatalogResponse,
    SelectSeatRequest, ShowtimeInfo, SignInRequest, SignInResponse, WhoAmIResponse,
};

/// The result of a booking command.
///
/// A refused command is not an error: the session comes back with the
/// rejection recorded as its feedback message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingCommandOutcome {
    /// The session after the command.
    pub session: BookingSession,
    /// What the command did, when it was accepted.
    pub event: Option<BookingEvent>,
    /// Why the command was refused, when it was.
    pub rejection: Option<BookingError>,
}

impl BookingCommandOutcome {
    /// Returns whether the command was accepted.
    #[must_use]
    pub const fn accepted(&self) -> bool {
        self.rejection.is_none()
    }

    /// Returns whether the command put a new feedback message on the session.
    #[must_use]
    pub const fn emitted_message(&self) -> bool {
        self.rejection.is_some() || matches!(self.event, Some(BookingEvent::BookingConfirmed(_)))
    }
}

fn internal(context: &str, err: &dyn std::fmt::Display) -> ApiError {
    ApiError::Internal {
        message: format!("{context}: {err}"),
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Lists the catalog, narrowed by the request's filter.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - Filter criteria
///
/// # Errors
///
/// Returns an error if the movie store cannot be read.
pub fn list_movies(
    persistence: &mut Persistence,
    request: &ListMoviesRequest,
) -> Result<ListMoviesResponse, ApiError> {
    let stored: Vec<StoredMovie> = persistence
        .list_movies()
        .map_err(|e| internal("Failed to list movies", &e))?;
    let movies: Vec<Movie> = stored.into_iter().map(|row| row.movie).collect();

    let filter: CatalogFilter = CatalogFilter {
        genre: normalize_label(request.genre.as_deref()),
        language: normalize_label(request.language.as_deref()),
        search: request.search.clone().unwrap_or_default(),
    };

    Ok(ListMoviesResponse {
        movies: filter.apply(&movies).into_iter().map(MovieInfo::from).collect(),
        genres: GENRE_OPTIONS.iter().map(|g| (*g).to_string()).collect(),
        languages: LANGUAGE_OPTIONS.iter().map(|l| (*l).to_string()).collect(),
    })
}

/// Appends a movie to the store.
///
/// Catalog identifiers are not required to be unique.
///
/// # Errors
///
/// Returns an error if:
/// - The id or title is blank
/// - The rating is outside 1 through 5
/// - The insert fails
pub fn add_movie(
    persistence: &mut Persistence,
    request: &AddMovieRequest,
) -> Result<AddMovieResponse, ApiError> {
    let rating: Rating = Rating::new(request.rating).map_err(translate_domain_error)?;
    let movie: Movie = Movie::new(
        MovieId::new(request.id.trim()),
        request.title.trim(),
        &request.poster,
        &request.description,
        rating,
    )
    .with_release_date(request.release_date.as_deref())
    .with_genre(request.genre.as_deref())
    .with_language(request.language.as_deref());

    validate_movie_fields(&movie).map_err(translate_domain_error)?;

    let movie_id: i64 = persistence
        .insert_movie(&movie)
        .map_err(|e| internal("Failed to add movie", &e))?;

    tracing::info!(movie_id, title = %movie.title, "Movie added");

    Ok(AddMovieResponse {
        message: String::from("Movie added successfully"),
        movie_id,
    })
}

/// Wipes the movie store and repopulates it with the sample catalog.
///
/// # Errors
///
/// Returns an error if the reseed fails. The store is left unchanged.
pub fn seed_catalog(persistence: &mut Persistence) -> Result<SeedCatalogResponse, ApiError> {
    let inserted: usize = persistence
        .replace_catalog(&seed_movies())
        .map_err(|e| internal("Failed to seed catalog", &e))?;

    tracing::info!(inserted, "Catalog seeded");

    Ok(SeedCatalogResponse {
        inserted,
        message: format!("Seeded {inserted} movies"),
    })
}

/// Lists the showtimes offered for every movie.
#[must_use]
pub fn list_showtimes() -> ListShowtimesResponse {
    ListShowtimesResponse {
        showtimes: standard_showtimes().iter().map(ShowtimeInfo::from).collect(),
    }
}

// ============================================================================
// Booking Sessions
// ============================================================================

/// Opens a booking session for a stored movie with a fresh inventory.
///
/// Opening does not require a signed-in viewer.
///
/// # Errors
///
/// Returns an error if no stored movie carries the identifier.
pub fn open_booking(
    persistence: &mut Persistence,
    request: &OpenBookingRequest,
) -> Result<BookingSession, ApiError> {
    let stored: StoredMovie = persistence
        .find_movie(request.movie_id.trim())
        .map_err(|e| internal("Failed to look up movie", &e))?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Movie"),
            message: format!("Movie '{}' does not exist", request.movie_id),
        })?;

    Ok(open_session(stored.movie))
}

/// Renders a booking session for display.
#[must_use]
pub fn booking_view(session: &BookingSession) -> BookingView {
    let rows: Vec<SeatRowInfo> = session
        .inventory()
        .rows()
        .into_iter()
        .map(|(row, seats)| SeatRowInfo {
            row,
            seats: seats
                .iter()
                .map(|seat| SeatInfo::from_seat(seat, session))
                .collect(),
        })
        .collect();

    let selected_seats: Vec<String> = session.selection().iter().map(ToString::to_string).collect();
    let selected_label: String = if selected_seats.is_empty() {
        String::from("None")
    } else {
        selected_seats.join(", ")
    };

    BookingView {
        movie: MovieInfo::from(session.movie()),
        rows,
        showtimes: standard_showtimes().iter().map(ShowtimeInfo::from).collect(),
        showtime: session.showtime().map(|showtime| showtime.time.clone()),
        date: session.date().map(|date| date.to_string()),
        selected_seats,
        selected_label,
        total: session.pending_total().to_string(),
        message: session.message().map(MessageInfo::from),
        phase: session.phase().to_string(),
        can_confirm: session.ready_to_confirm(),
    }
}

/// Toggles a seat in or out of the selection.
///
/// # Errors
///
/// Returns an error if the seat label is malformed or names no seat in
/// the inventory. A booked seat is a rejection, not an error.
pub fn select_seat(
    session: &BookingSession,
    request: &SelectSeatRequest,
    auth: &AuthStatus,
) -> Result<BookingCommandOutcome, ApiError> {
    let seat_id: SeatId = request.seat_id.parse().map_err(translate_domain_error)?;
    run_command(session, Command::SelectSeat { seat_id }, auth)
}

/// Chooses one of the standard showtimes.
///
/// # Errors
///
/// Returns an error if no standard showtime carries the time label.
pub fn choose_showtime(
    session: &BookingSession,
    request: &ChooseShowtimeRequest,
    auth: &AuthStatus,
) -> Result<BookingCommandOutcome, ApiError> {
    let showtimes: Vec<Showtime> = standard_showtimes();
    let showtime: Showtime = find_showtime(&showtimes, request.time.trim())
        .map_err(translate_domain_error)?
        .clone();
    run_command(session, Command::ChooseShowtime { showtime }, auth)
}

/// Chooses the booking date.
///
/// # Arguments
///
/// * `session` - The current session
/// * `request` - The requested date
/// * `auth` - The caller's auth status
/// * `today` - The current calendar day
///
/// # Errors
///
/// Returns an error if the date is malformed or earlier than `today`.
pub fn choose_date(
    session: &BookingSession,
    request: &ChooseDateRequest,
    auth: &AuthStatus,
    today: Date,
) -> Result<BookingCommandOutcome, ApiError> {
    let date: Date = parse_calendar_date(&request.date).map_err(translate_domain_error)?;
    validate_date_not_before(date, today).map_err(translate_domain_error)?;
    run_command(session, Command::ChooseDate { date }, auth)
}

/// Attempts to book the selected seats.
///
/// # Errors
///
/// Unmet preconditions are rejections, so this only errors if the core
/// reports something other than a booking precondition.
pub fn confirm_booking(
    session: &BookingSession,
    auth: &AuthStatus,
) -> Result<BookingCommandOutcome, ApiError> {
    run_command(session, Command::ConfirmBooking, auth)
}

/// Clears the session's feedback message.
///
/// # Errors
///
/// Never fails in practice; the signature matches the other commands.
pub fn reset_feedback(session: &BookingSession) -> Result<BookingCommandOutcome, ApiError> {
    run_command(session, Command::ResetFeedback, &AuthStatus::Anonymous)
}

fn run_command(
    session: &BookingSession,
    command: Command,
    auth: &AuthStatus,
) -> Result<BookingCommandOutcome, ApiError> {
    let command_name: &'static str = command.name();
    match apply(session, command, &auth.booking_context()) {
        Ok(TransitionResult { new_session, event }) => {
            tracing::debug!(command = command_name, event = event.name(), "Booking command applied");
            if let BookingEvent::BookingConfirmed(receipt) = &event {
                tracing::info!(
                    movie = %receipt.movie_title,
                    tickets = receipt.ticket_count(),
                    total = %receipt.total,
                    "Booking confirmed"
                );
            }
            Ok(BookingCommandOutcome {
                session: new_session,
                event: Some(event),
                rejection: None,
            })
        }
        Err(CoreError::Booking(rejection)) => {
            tracing::debug!(command = command_name, reason = %rejection, "Booking command rejected");
            Ok(BookingCommandOutcome {
                session: reject(session, &rejection),
                event: None,
                rejection: Some(rejection),
            })
        }
        Err(err) => Err(translate_core_error(err)),
    }
}

// ============================================================================
// Contact
// ============================================================================

/// Forwards a contact message through the relay.
///
/// One delivery attempt is made.
///
/// # Errors
///
/// Returns an error if:
/// - Any field is blank
/// - The email address has no `@`
/// - The relay fails
pub async fn submit_contact(
    relay: &dyn ContactRelay,
    request: &ContactRequest,
) -> Result<ContactResponse, ApiError> {
    let message: ContactMessage = ContactMessage {
        name: request.name.trim().to_string(),
        email: request.email.trim().to_string(),
        phone: request.phone.trim().to_string(),
        message: request.message.trim().to_string(),
    };

    if let Some(field) = message.first_blank_field() {
        return Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("{field} is required"),
        });
    }

    if !message.email.contains('@') {
        return Err(ApiError::InvalidInput {
            field: String::from("email"),
            message: format!("'{}' is not an email address", message.email),
        });
    }

    relay.relay(&message).await.map_err(|e| {
        tracing::error!(relay = relay.name(), error = %e, "Contact message not delivered");
        ApiError::RelayFailed {
            message: e.to_string(),
        }
    })?;

    tracing::info!(relay = relay.name(), "Contact message relayed");

    Ok(ContactResponse { success: true })
}

// ============================================================================
// Identity
// ============================================================================

/// Signs a viewer in with the identity provider's profile.
///
/// # Errors
///
/// Returns an error if the display name is blank or the session cannot
/// be stored.
pub fn sign_in(
    persistence: &mut Persistence,
    request: &SignInRequest,
) -> Result<SignInResponse, ApiError> {
    let profile: IdentityProfile = IdentityProfile {
        display_name: request.display_name.clone(),
        photo_url: request.photo_url.clone(),
    };
    let viewer: Viewer = AuthenticationService::sign_in(persistence, &profile)?;

    Ok(SignInResponse {
        session_token: viewer.session_token,
        display_name: viewer.display_name,
        photo_url: viewer.photo_url,
        expires_at: viewer.expires_at,
    })
}

/// Signs a viewer out.
///
/// # Errors
///
/// Returns an error if the session cannot be deleted.
pub fn sign_out(persistence: &mut Persistence, session_token: &str) -> Result<(), ApiError> {
    AuthenticationService::sign_out(persistence, session_token)?;
    Ok(())
}

/// Describes the signed-in viewer.
#[must_use]
pub fn whoami(viewer: &Viewer) -> WhoAmIResponse {
    WhoAmIResponse {
        display_name: viewer.display_name.clone(),
        photo_url: viewer.photo_url.clone(),
        expires_at: viewer.expires_at.clone(),
    }
}
