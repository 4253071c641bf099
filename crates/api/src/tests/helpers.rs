// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use async_trait::async_trait;
use red_curtain::{BookingSession, SeatInventory, generate_inventory_with};
use red_curtain_domain::{Movie, MovieId, Rating, SeatId, SeatLayout};
use red_curtain_notify::{ContactMessage, ContactRelay, RelayError};
use red_curtain_persistence::Persistence;
use std::sync::Mutex;
use time::Date;

use crate::{AuthStatus, AuthenticationService, IdentityProfile, Viewer, seed_catalog};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_seeded_persistence() -> Persistence {
    let mut persistence: Persistence = create_test_persistence();
    seed_catalog(&mut persistence).expect("Failed to seed catalog");
    persistence
}

pub fn create_test_viewer(persistence: &mut Persistence) -> Viewer {
    let profile: IdentityProfile = IdentityProfile {
        display_name: String::from("Ada Lovelace"),
        photo_url: Some(String::from("https://example.com/ada.png")),
    };
    AuthenticationService::sign_in(persistence, &profile).expect("Failed to sign in")
}

pub fn signed_in() -> AuthStatus {
    AuthStatus::SignedIn(Viewer {
        session_token: String::from("session_test"),
        display_name: String::from("Ada Lovelace"),
        photo_url: None,
        expires_at: String::from("+002099-01-01T00:00:00.000000000Z"),
    })
}

pub fn seat(label: &str) -> SeatId {
    label.parse().expect("Valid seat label")
}

pub fn today() -> Date {
    Date::from_calendar_date(2025, time::Month::November, 20).expect("Valid test date")
}

/// A 2x4 session for "Heat" with A4 and B1 booked.
pub fn create_test_session() -> BookingSession {
    let movie: Movie = Movie::new(
        MovieId::new("42"),
        "Heat",
        "https://example.com/heat.jpg",
        "A crew of thieves.",
        Rating::clamped(5),
    );
    let layout: SeatLayout = SeatLayout::new(&['A', 'B'], 4).expect("Valid layout");
    let booked: [SeatId; 2] = [seat("A4"), seat("B1")];
    let inventory: SeatInventory =
        generate_inventory_with(&layout, |seat_id| booked.contains(&seat_id));
    BookingSession::new(movie, inventory)
}

/// Records every message it is asked to deliver.
#[derive(Default)]
pub struct RecordingRelay {
    pub delivered: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl ContactRelay for RecordingRelay {
    async fn relay(&self, message: &ContactMessage) -> Result<(), RelayError> {
        self.delivered.lock().unwrap().push(message.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Fails every delivery with a transport-style error.
pub struct BrokenRelay;

#[async_trait]
impl ContactRelay for BrokenRelay {
    async fn relay(&self, _message: &ContactMessage) -> Result<(), RelayError> {
        Err(RelayError::Build(String::from("connection refused")))
    }

    fn name(&self) -> &'static str {
        "broken"
    }
}
