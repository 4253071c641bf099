// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Red Curtain booking system.
//!
//! Handlers translate request DTOs into domain values and core commands,
//! and translate every lower-layer error explicitly into [`ApiError`].

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
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthStatus, AuthenticationService, IdentityProfile, Viewer};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    BookingCommandOutcome, add_movie, booking_view, choose_date, choose_showtime, confirm_booking,
    list_movies, list_showtimes, open_booking, reset_feedback, seed_catalog, select_seat, sign_in,
    sign_out, submit_contact, whoami,
};
pub use request_response::{
    AddMovieRequest, AddMovieResponse, BookingView, ChooseDateRequest, ChooseShowtimeRequest,
    ContactRequest, ContactResponse, ListMoviesRequest, ListMoviesResponse, ListShowtimesResponse,
    MessageInfo, MovieInfo, OpenBookingRequest, SeatInfo, SeatRowInfo, SeatStatus,
    SeedCatalogResponse, SelectSeatRequest, ShowtimeInfo, SignInRequest, SignInResponse,
    WhoAmIResponse,
};
