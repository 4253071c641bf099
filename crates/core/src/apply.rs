// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::{BookingError, CoreError};
use crate::state::{
    BookingContext, BookingEvent, BookingReceipt, BookingSession, MessageKind, TransitionResult,
};
use red_curtain_domain::{Price, SeatId, Showtime};
use time::Date;

/// Applies a command to a booking session, producing a new session.
///
/// This function is pure: the input session is never modified, and no
/// clock, network or randomness is consulted.
///
/// # Arguments
///
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
/// * `context` - Caller facts observed for this command
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new session and the event
/// * `Err(CoreError)` if the command was refused
///
/// # Errors
///
/// Returns an error if:
/// - The seat is not part of the inventory
/// - The seat is already booked
/// - A confirmation precondition is unmet. Preconditions are checked in a
///   fixed order (sign-in, showtime, date, selection) and only the first
///   failure is reported.
pub fn apply(
    session: &BookingSession,
    command: Command,
    context: &BookingContext,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::SelectSeat { seat_id } => select_seat(session, seat_id),
        Command::ChooseShowtime { showtime } => {
            let mut new_session: BookingSession = session.clone();
            new_session.set_showtime(showtime.clone());
            Ok(TransitionResult {
                new_session,
                event: BookingEvent::ShowtimeChosen(showtime),
            })
        }
        Command::ChooseDate { date } => {
            let mut new_session: BookingSession = session.clone();
            new_session.set_date(date);
            Ok(TransitionResult {
                new_session,
                event: BookingEvent::DateChosen(date),
            })
        }
        Command::ConfirmBooking => confirm_booking(session, context),
        Command::ResetFeedback => {
            let mut new_session: BookingSession = session.clone();
            new_session.clear_message();
            Ok(TransitionResult {
                new_session,
                event: BookingEvent::FeedbackCleared,
            })
        }
    }
}

/// Records a refused action on the session.
///
/// The returned session differs from the input only in its feedback
/// message. Selection, showtime, date and inventory are untouched.
///
/// # Arguments
///
/// * `session` - The session the action was attempted on
/// * `error` - Why the action was refused
#[must_use]
pub fn reject(session: &BookingSession, error: &BookingError) -> BookingSession {
    let mut new_session: BookingSession = session.clone();
    new_session.set_message(MessageKind::Rejection, error.to_string());
    new_session
}

fn select_seat(session: &BookingSession, seat_id: SeatId) -> Result<TransitionResult, CoreError> {
    let seat = session
        .inventory()
        .get(seat_id)
        .ok_or(CoreError::UnknownSeat(seat_id))?;

    if seat.is_booked() {
        return Err(CoreError::Booking(BookingError::SeatUnavailable { seat_id }));
    }

    let mut new_session: BookingSession = session.clone();
    let event: BookingEvent = if new_session.toggle_seat(seat_id) {
        BookingEvent::SeatSelected(seat_id)
    } else {
        BookingEvent::SeatDeselected(seat_id)
    };

    Ok(TransitionResult { new_session, event })
}

fn confirm_booking(
    session: &BookingSession,
    context: &BookingContext,
) -> Result<TransitionResult, CoreError> {
    if !context.authenticated {
        return Err(BookingError::MissingAuthentication.into());
    }
    let showtime: &Showtime = session.showtime().ok_or(BookingError::MissingShowtime)?;
    let date: Date = session.date().ok_or(BookingError::MissingDate)?;
    if session.selection().is_empty() {
        return Err(BookingError::EmptySelection.into());
    }

    let total: Price = showtime.price.times(session.selection().len());
    let mut new_session: BookingSession = session.clone();
    let seats: Vec<SeatId> = new_session.commit_selection();

    let receipt: BookingReceipt = BookingReceipt {
        movie_title: session.movie().title.clone(),
        date,
        showtime: showtime.clone(),
        seats,
        total,
    };
    new_session.set_message(MessageKind::Confirmation, receipt.message());

    Ok(TransitionResult {
        new_session,
        event: BookingEvent::BookingConfirmed(receipt),
    })
}
