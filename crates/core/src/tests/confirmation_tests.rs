// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    anonymous, create_ready_session, create_test_session, matinee, morning, run, run_as, seat,
    signed_in,
};
use crate::{
    BookingError, BookingEvent, BookingPhase, BookingReceipt, BookingSession, Command, CoreError,
    MessageKind, TransitionResult, apply, reject,
};
use red_curtain_domain::{Price, Showtime};
use time::macros::date;

fn confirm_error(session: &BookingSession, authenticated: bool) -> BookingError {
    let context = if authenticated { signed_in() } else { anonymous() };
    match apply(session, Command::ConfirmBooking, &context) {
        Err(CoreError::Booking(err)) => err,
        other => panic!("expected booking error, got {other:?}"),
    }
}

#[test]
fn test_confirm_books_seats_and_clears_selection() {
    let session: BookingSession = create_ready_session(&["A1", "A2"], matinee());

    let result: TransitionResult =
        apply(&session, Command::ConfirmBooking, &signed_in()).unwrap();

    let BookingEvent::BookingConfirmed(receipt) = &result.event else {
        panic!("expected confirmation event");
    };
    assert_eq!(receipt.total, Price::from_dollars(24));
    assert_eq!(receipt.seats, vec![seat("A1"), seat("A2")]);

    let new_session: &BookingSession = &result.new_session;
    assert!(new_session.inventory().get(seat("A1")).unwrap().is_booked());
    assert!(new_session.inventory().get(seat("A2")).unwrap().is_booked());
    assert!(new_session.selection().is_empty());
    assert_eq!(new_session.phase(), BookingPhase::Confirmed);
    // Showtime and date carry over for the next selection.
    assert_eq!(new_session.showtime(), Some(&matinee()));
    assert_eq!(new_session.date(), session.date());
}

#[test]
fn test_confirmation_message_contents() {
    let ten_dollars: Showtime = morning();
    let session: BookingSession = create_ready_session(&["B3"], ten_dollars);

    let result: TransitionResult =
        apply(&session, Command::ConfirmBooking, &signed_in()).unwrap();

    let message = result.new_session.message().unwrap();
    assert_eq!(message.kind, MessageKind::Confirmation);
    assert_eq!(
        message.text,
        "Successfully booked 1 ticket(s) for Silver Linings Playbook on 2025-12-01 at 10:00 AM. Total: $10.00. Enjoy!"
    );
}

#[test]
fn test_receipt_message_matches_session_message() {
    let receipt: BookingReceipt = BookingReceipt {
        movie_title: String::from("Hangover"),
        date: date!(2026 - 03 - 14),
        showtime: Showtime::new("07:00 PM", Price::from_dollars(15)),
        seats: vec![seat("C1"), seat("C2"), seat("C3")],
        total: Price::from_dollars(45),
    };

    assert_eq!(receipt.ticket_count(), 3);
    assert_eq!(
        receipt.message(),
        "Successfully booked 3 ticket(s) for Hangover on 2026-03-14 at 07:00 PM. Total: $45.00. Enjoy!"
    );
}

#[test]
fn test_missing_authentication_takes_priority() {
    // Nothing chosen at all; sign-in is still the reported failure.
    let bare: BookingSession = create_test_session();
    assert_eq!(
        confirm_error(&bare, false),
        BookingError::MissingAuthentication
    );

    let ready: BookingSession = create_ready_session(&["A1"], matinee());
    assert_eq!(
        confirm_error(&ready, false),
        BookingError::MissingAuthentication
    );
}

#[test]
fn test_missing_showtime_before_date_and_seats() {
    let bare: BookingSession = create_test_session();
    assert_eq!(confirm_error(&bare, true), BookingError::MissingShowtime);
}

#[test]
fn test_missing_date_before_seats() {
    let session: BookingSession = run(
        &create_test_session(),
        Command::ChooseShowtime {
            showtime: matinee(),
        },
    );
    assert_eq!(confirm_error(&session, true), BookingError::MissingDate);
}

#[test]
fn test_empty_selection() {
    let session: BookingSession = create_ready_session(&[], matinee());
    assert_eq!(confirm_error(&session, true), BookingError::EmptySelection);
}

#[test]
fn test_failed_confirmation_changes_only_the_message() {
    let ready: BookingSession = create_ready_session(&["A1", "B2"], matinee());
    let no_showtime: BookingSession = [seat("A1"), seat("B2")]
        .into_iter()
        .fold(create_test_session(), |session, seat_id| {
            run(&session, Command::SelectSeat { seat_id })
        });
    let no_date: BookingSession = run(
        &no_showtime,
        Command::ChooseShowtime {
            showtime: matinee(),
        },
    );
    let no_seats: BookingSession = create_ready_session(&[], matinee());

    let cases: [(&BookingSession, bool, BookingError); 4] = [
        (&ready, false, BookingError::MissingAuthentication),
        (&no_showtime, true, BookingError::MissingShowtime),
        (&no_date, true, BookingError::MissingDate),
        (&no_seats, true, BookingError::EmptySelection),
    ];

    for (session, authenticated, expected) in cases {
        let err: BookingError = confirm_error(session, authenticated);
        assert_eq!(err, expected);

        let rejected: BookingSession = reject(session, &err);
        assert_eq!(rejected.selection(), session.selection());
        assert_eq!(rejected.inventory(), session.inventory());
        assert_eq!(rejected.showtime(), session.showtime());
        assert_eq!(rejected.date(), session.date());
        assert_eq!(rejected.phase(), session.phase());
        assert_ne!(rejected.message(), session.message());
        assert_eq!(rejected.message().unwrap().text, expected.to_string());
    }
}

#[test]
fn test_booked_seats_cannot_be_selected_after_confirmation() {
    let session: BookingSession = create_ready_session(&["A1"], matinee());
    let confirmed: BookingSession = run(&session, Command::ConfirmBooking);

    let result: Result<TransitionResult, CoreError> = apply(
        &confirmed,
        Command::SelectSeat { seat_id: seat("A1") },
        &signed_in(),
    );

    assert!(matches!(
        result,
        Err(CoreError::Booking(BookingError::SeatUnavailable { .. }))
    ));
}

#[test]
fn test_new_selection_after_confirmation_returns_to_configuring() {
    let session: BookingSession = create_ready_session(&["A1"], matinee());
    let confirmed: BookingSession = run(&session, Command::ConfirmBooking);
    assert_eq!(confirmed.phase(), BookingPhase::Confirmed);

    let next: BookingSession = run(&confirmed, Command::SelectSeat { seat_id: seat("A2") });
    assert_eq!(next.phase(), BookingPhase::Configuring);
    assert_eq!(next.pending_total(), Price::from_dollars(12));
}

#[test]
fn test_failed_retry_after_confirmation_keeps_confirmed_phase() {
    let session: BookingSession = create_ready_session(&["A1"], matinee());
    let confirmed: BookingSession = run_as(&session, Command::ConfirmBooking, &signed_in());

    assert_eq!(confirm_error(&confirmed, true), BookingError::EmptySelection);
    assert_eq!(confirmed.phase(), BookingPhase::Confirmed);
}

#[test]
fn test_booking_error_messages() {
    assert_eq!(
        BookingError::SeatUnavailable { seat_id: seat("A1") }.to_string(),
        "This seat is already booked!"
    );
    assert_eq!(
        BookingError::MissingAuthentication.to_string(),
        "Please log in to confirm your booking."
    );
    assert_eq!(
        BookingError::MissingShowtime.to_string(),
        "Please select a showtime."
    );
    assert_eq!(BookingError::MissingDate.to_string(), "Please select a date.");
    assert_eq!(
        BookingError::EmptySelection.to_string(),
        "Please select at least one seat."
    );
    assert_eq!(
        CoreError::Booking(BookingError::MissingDate).to_string(),
        "Please select a date."
    );
}
