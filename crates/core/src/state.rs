// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::inventory::SeatInventory;
use red_curtain_domain::{Movie, Price, SeatId, Showtime};
use std::collections::BTreeSet;
use time::Date;

/// Where a booking session sits in its lifecycle.
///
/// Derived from the session's fields rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingPhase {
    /// Nothing chosen yet.
    Browsing,
    /// At least one of showtime, date or selection is set.
    Configuring,
    /// The last confirmation attempt succeeded.
    Confirmed,
}

impl BookingPhase {
    /// Converts this phase to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Browsing => "Browsing",
            Self::Configuring => "Configuring",
            Self::Confirmed => "Confirmed",
        }
    }
}

impl std::fmt::Display for BookingPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of feedback a status message carries.
///
/// Every message is transient; whoever owns the session clears it with
/// [`Command::ResetFeedback`](crate::Command::ResetFeedback) after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// A refused action.
    Rejection,
    /// A booking summary.
    Confirmation,
}

/// Transient feedback shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// What kind of feedback this is.
    pub kind: MessageKind,
    /// The text shown to the user.
    pub text: String,
}

/// Facts about the caller observed once per command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookingContext {
    /// Whether a viewer is signed in.
    pub authenticated: bool,
}

impl BookingContext {
    /// Creates a new context.
    #[must_use]
    pub const fn new(authenticated: bool) -> Self {
        Self { authenticated }
    }
}

/// The record of a successful confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    /// Title of the booked movie.
    pub movie_title: String,
    /// The booked date.
    pub date: Date,
    /// The booked showtime.
    pub showtime: Showtime,
    /// The seats that were booked, in row-major order.
    pub seats: Vec<SeatId>,
    /// Total charged.
    pub total: Price,
}

impl BookingReceipt {
    /// Returns the number of tickets booked.
    #[must_use]
    pub fn ticket_count(&self) -> usize {
        self.seats.len()
    }

    /// Renders the confirmation text shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Successfully booked {} ticket(s) for {} on {} at {}. Total: ${}. Enjoy!",
            self.ticket_count(),
            self.movie_title,
            self.date,
            self.showtime.time,
            self.total
        )
    }
}

/// One viewer's in-progress booking for a single movie.
///
/// The session owns its seat inventory exclusively. Every seat in the
/// selection is present in the inventory and not booked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSession {
    movie: Movie,
    inventory: SeatInventory,
    selection: BTreeSet<SeatId>,
    showtime: Option<Showtime>,
    date: Option<Date>,
    message: Option<StatusMessage>,
    confirmed: bool,
}

impl BookingSession {
    /// Opens a session for a movie over a freshly generated inventory.
    ///
    /// # Arguments
    ///
    /// * `movie` - The movie being booked
    /// * `inventory` - The seat inventory for this session
    #[must_use]
    pub const fn new(movie: Movie, inventory: SeatInventory) -> Self {
        Self {
            movie,
            inventory,
            selection: BTreeSet::new(),
            showtime: None,
            date: None,
            message: None,
            confirmed: false,
        }
    }

    /// Returns the movie being booked.
    #[must_use]
    pub const fn movie(&self) -> &Movie {
        &self.movie
    }

    /// Returns the seat inventory.
    #[must_use]
    pub const fn inventory(&self) -> &SeatInventory {
        &self.inventory
    }

    /// Returns the selected seats in row-major order.
    #[must_use]
    pub const fn selection(&self) -> &BTreeSet<SeatId> {
        &self.selection
    }

    /// Returns whether a seat is currently selected.
    #[must_use]
    pub fn is_selected(&self, seat_id: SeatId) -> bool {
        self.selection.contains(&seat_id)
    }

    /// Returns the chosen showtime, if any.
    #[must_use]
    pub const fn showtime(&self) -> Option<&Showtime> {
        self.showtime.as_ref()
    }

    /// Returns the chosen date, if any.
    #[must_use]
    pub const fn date(&self) -> Option<Date> {
        self.date
    }

    /// Returns the current feedback message, if any.
    #[must_use]
    pub const fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    /// Derives the lifecycle phase from the session's fields.
    #[must_use]
    pub fn phase(&self) -> BookingPhase {
        if self.confirmed {
            BookingPhase::Confirmed
        } else if self.showtime.is_some() || self.date.is_some() || !self.selection.is_empty() {
            BookingPhase::Configuring
        } else {
            BookingPhase::Browsing
        }
    }

    /// Total for the pending selection at the chosen showtime's price.
    ///
    /// Zero when no showtime is chosen.
    #[must_use]
    pub fn pending_total(&self) -> Price {
        self.showtime.as_ref().map_or(Price::ZERO, |showtime| {
            showtime.price.times(self.selection.len())
        })
    }

    /// Returns whether a showtime and at least one seat are chosen.
    ///
    /// The date is not considered; confirming without one is rejected.
    #[must_use]
    pub fn ready_to_confirm(&self) -> bool {
        self.showtime.is_some() && !self.selection.is_empty()
    }

    pub(crate) fn toggle_seat(&mut self, seat_id: SeatId) -> bool {
        self.confirmed = false;
        if self.selection.remove(&seat_id) {
            false
        } else {
            self.selection.insert(seat_id);
            true
        }
    }

    pub(crate) fn set_showtime(&mut self, showtime: Showtime) {
        self.confirmed = false;
        self.showtime = Some(showtime);
    }

    pub(crate) const fn set_date(&mut self, date: Date) {
        self.confirmed = false;
        self.date = Some(date);
    }

    pub(crate) fn set_message(&mut self, kind: MessageKind, text: String) {
        self.message = Some(StatusMessage { kind, text });
    }

    pub(crate) fn clear_message(&mut self) {
        self.message = None;
    }

    /// Books the selection and clears it, returning the seats booked.
    pub(crate) fn commit_selection(&mut self) -> Vec<SeatId> {
        let booked: BTreeSet<SeatId> = std::mem::take(&mut self.selection);
        self.inventory.book(&booked);
        self.confirmed = true;
        booked.into_iter().collect()
    }
}

/// Describes what a successful transition did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEvent {
    /// A seat was added to the selection.
    SeatSelected(SeatId),
    /// A seat was removed from the selection.
    SeatDeselected(SeatId),
    /// A showtime was chosen.
    ShowtimeChosen(Showtime),
    /// A date was chosen.
    DateChosen(Date),
    /// The selection was booked.
    BookingConfirmed(BookingReceipt),
    /// The feedback message was cleared.
    FeedbackCleared,
}

impl BookingEvent {
    /// Returns a stable name for this event, used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SeatSelected(_) => "SeatSelected",
            Self::SeatDeselected(_) => "SeatDeselected",
            Self::ShowtimeChosen(_) => "ShowtimeChosen",
            Self::DateChosen(_) => "DateChosen",
            Self::BookingConfirmed(_) => "BookingConfirmed",
            Self::FeedbackCleared => "FeedbackCleared",
        }
    }
}

/// The result of a successful state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new session after the transition.
    pub new_session: BookingSession,
    /// What the transition did.
    pub event: BookingEvent,
}
