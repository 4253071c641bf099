// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use red_curtain_domain::{DomainError, SeatId};

/// A user-correctable reason a booking action was refused.
///
/// The `Display` output is the feedback text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The seat is already booked and cannot be selected.
    SeatUnavailable {
        /// The seat that was clicked.
        seat_id: SeatId,
    },
    /// Confirmation requires a signed-in viewer.
    MissingAuthentication,
    /// Confirmation requires a showtime.
    MissingShowtime,
    /// Confirmation requires a date.
    MissingDate,
    /// Confirmation requires at least one selected seat.
    EmptySelection,
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SeatUnavailable { .. } => write!(f, "This seat is already booked!"),
            Self::MissingAuthentication => write!(f, "Please log in to confirm your booking."),
            Self::MissingShowtime => write!(f, "Please select a showtime."),
            Self::MissingDate => write!(f, "Please select a date."),
            Self::EmptySelection => write!(f, "Please select at least one seat."),
        }
    }
}

impl std::error::Error for BookingError {}

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A booking precondition was not met.
    Booking(BookingError),
    /// The seat is not part of this session's inventory.
    UnknownSeat(SeatId),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Booking(err) => write!(f, "{err}"),
            Self::UnknownSeat(seat_id) => write!(f, "Seat {seat_id} does not exist"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<BookingError> for CoreError {
    fn from(err: BookingError) -> Self {
        Self::Booking(err)
    }
}
