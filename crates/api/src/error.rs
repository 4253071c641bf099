// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use red_curtain::{BookingError, CoreError};
use red_curtain_domain::DomainError;

/// Authentication errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The contact relay could not deliver a message.
    RelayFailed {
        /// A description of the delivery failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::RelayFailed { message } => {
                write!(f, "Failed to send message: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidMovieId(msg) => ApiError::InvalidInput {
            field: String::from("id"),
            message: msg,
        },
        DomainError::InvalidTitle(msg) => ApiError::InvalidInput {
            field: String::from("title"),
            message: msg,
        },
        DomainError::InvalidRating { value } => ApiError::InvalidInput {
            field: String::from("rating"),
            message: format!("Invalid rating: {value}. Must be between 1 and 5"),
        },
        DomainError::InvalidPrice(msg) => ApiError::InvalidInput {
            field: String::from("price"),
            message: msg,
        },
        DomainError::InvalidSeatId(raw) => ApiError::InvalidInput {
            field: String::from("seat_id"),
            message: format!("'{raw}' is not a seat identifier"),
        },
        DomainError::InvalidSeatLayout { reason } => ApiError::Internal {
            message: format!("Invalid seat layout: {reason}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::DateInPast { date, today } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date {date} is before today ({today})"),
        },
        DomainError::ShowtimeNotFound(time) => ApiError::ResourceNotFound {
            resource_type: String::from("Showtime"),
            message: format!("No showtime at '{time}'"),
        },
    }
}

/// Translates a core error into an API error.
///
/// Booking precondition failures are normally reported as rejections on
/// the session rather than as errors; this mapping covers callers that
/// surface them directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Booking(booking_err) => translate_booking_error(&booking_err),
        CoreError::UnknownSeat(seat_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Seat"),
            message: format!("Seat {seat_id} does not exist"),
        },
    }
}

fn translate_booking_error(err: &BookingError) -> ApiError {
    let rule: &str = match err {
        BookingError::SeatUnavailable { .. } => "seat_available",
        BookingError::MissingAuthentication => "signed_in",
        BookingError::MissingShowtime => "showtime_chosen",
        BookingError::MissingDate => "date_chosen",
        BookingError::EmptySelection => "seats_selected",
    };
    ApiError::DomainRuleViolation {
        rule: String::from(rule),
        message: err.to_string(),
    }
}
