// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod apply;
mod command;
mod error;
mod inventory;
mod state;

#[cfg(test)]
mod tests;

use red_curtain_domain::{Movie, SeatLayout};

// Re-export public types and functions
pub use apply::{apply, reject};
pub use command::Command;
pub use error::{BookingError, CoreError};
pub use inventory::{BOOKED_PROBABILITY, SeatInventory, generate_inventory, generate_inventory_with};
pub use state::{
    BookingContext, BookingEvent, BookingPhase, BookingReceipt, BookingSession, MessageKind,
    StatusMessage, TransitionResult,
};

/// Opens a booking session for a movie in the standard auditorium.
///
/// The seat inventory is generated fresh and is never shared with
/// another session.
///
/// # Arguments
///
/// * `movie` - The movie the viewer chose to book
#[must_use]
pub fn open_session(movie: Movie) -> BookingSession {
    let layout: SeatLayout = SeatLayout::standard();
    BookingSession::new(movie, generate_inventory(&layout))
}
