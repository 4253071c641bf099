// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BookingContext, BookingSession, Command, CoreError, TransitionResult, apply,
    generate_inventory_with,
};
use red_curtain_domain::{Movie, MovieId, Price, Rating, SeatId, SeatLayout, Showtime};
use time::Date;
use time::macros::date;

pub fn create_test_movie() -> Movie {
    Movie::new(
        MovieId::new("7"),
        "Silver Linings Playbook",
        "https://example.com/poster.jpg",
        "A former teacher moves back in with his parents.",
        Rating::new(4).unwrap(),
    )
}

pub fn seat(raw: &str) -> SeatId {
    raw.parse().unwrap()
}

pub fn matinee() -> Showtime {
    Showtime::new("01:00 PM", Price::from_dollars(12))
}

pub fn morning() -> Showtime {
    Showtime::new("10:00 AM", Price::from_dollars(10))
}

pub fn booking_date() -> Date {
    date!(2025 - 12 - 01)
}

pub const fn signed_in() -> BookingContext {
    BookingContext::new(true)
}

pub const fn anonymous() -> BookingContext {
    BookingContext::new(false)
}

/// A two-row, four-seat layout where only A4 and B1 start booked.
pub fn create_test_session() -> BookingSession {
    let layout: SeatLayout = SeatLayout::new(&['A', 'B'], 4).unwrap();
    let booked: [SeatId; 2] = [seat("A4"), seat("B1")];
    let inventory = generate_inventory_with(&layout, |seat_id| booked.contains(&seat_id));
    BookingSession::new(create_test_movie(), inventory)
}

pub fn run(session: &BookingSession, command: Command) -> BookingSession {
    run_as(session, command, &signed_in())
}

pub fn run_as(
    session: &BookingSession,
    command: Command,
    context: &BookingContext,
) -> BookingSession {
    let result: Result<TransitionResult, CoreError> = apply(session, command, context);
    result.unwrap().new_session
}

/// A session with showtime, date and the given seats chosen.
pub fn create_ready_session(seats: &[&str], showtime: Showtime) -> BookingSession {
    let mut session: BookingSession = create_test_session();
    session = run(&session, Command::ChooseShowtime { showtime });
    session = run(
        &session,
        Command::ChooseDate {
            date: booking_date(),
        },
    );
    for raw in seats {
        session = run(&session, Command::SelectSeat { seat_id: seat(raw) });
    }
    session
}
