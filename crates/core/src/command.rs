// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use red_curtain_domain::{SeatId, Showtime};
use time::Date;

/// A command represents user intent as data only.
///
/// Commands are the only way to request booking session changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle a seat in or out of the selection.
    SelectSeat {
        /// The seat that was clicked.
        seat_id: SeatId,
    },
    /// Replace the chosen showtime.
    ChooseShowtime {
        /// The showtime picked.
        showtime: Showtime,
    },
    /// Replace the chosen date.
    ChooseDate {
        /// The calendar date picked.
        date: Date,
    },
    /// Book every selected seat.
    ConfirmBooking,
    /// Clear the transient feedback message.
    ResetFeedback,
}

impl Command {
    /// Returns a stable name for this command, used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectSeat { .. } => "SelectSeat",
            Self::ChooseShowtime { .. } => "ChooseShowtime",
            Self::ChooseDate { .. } => "ChooseDate",
            Self::ConfirmBooking => "ConfirmBooking",
            Self::ResetFeedback => "ResetFeedback",
        }
    }
}
