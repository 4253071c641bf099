// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use red_curtain_domain::{DomainError, Seat, SeatId, SeatLayout};
use std::collections::BTreeSet;

/// Chance that a freshly generated seat starts out booked.
pub const BOOKED_PROBABILITY: f64 = 0.2;

/// The full set of seats for one booking session's auditorium.
///
/// Seats are kept in row-major order and identifiers are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatInventory {
    seats: Vec<Seat>,
}

impl SeatInventory {
    /// Creates an inventory from an arbitrary list of seats.
    ///
    /// # Arguments
    ///
    /// * `seats` - The seats, in any order
    ///
    /// # Errors
    ///
    /// Returns an error if two seats share an identifier.
    pub fn new(mut seats: Vec<Seat>) -> Result<Self, DomainError> {
        seats.sort_by_key(Seat::id);
        if let Some(pair) = seats.windows(2).find(|pair| pair[0].id() == pair[1].id()) {
            return Err(DomainError::InvalidSeatLayout {
                reason: format!("seat {} appears more than once", pair[0].id()),
            });
        }
        Ok(Self { seats })
    }

    /// Returns every seat in row-major order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Looks up a seat by identifier.
    #[must_use]
    pub fn get(&self, seat_id: SeatId) -> Option<&Seat> {
        self.seats
            .binary_search_by_key(&seat_id, Seat::id)
            .ok()
            .map(|index| &self.seats[index])
    }

    /// Groups seats by row, preserving row-major order.
    #[must_use]
    pub fn rows(&self) -> Vec<(char, Vec<Seat>)> {
        let mut rows: Vec<(char, Vec<Seat>)> = Vec::new();
        for seat in &self.seats {
            match rows.last_mut() {
                Some((row, seats)) if *row == seat.row() => seats.push(*seat),
                _ => rows.push((seat.row(), vec![*seat])),
            }
        }
        rows
    }

    /// Returns the number of seats still open.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.seats.iter().filter(|seat| !seat.is_booked()).count()
    }

    /// Marks every listed seat as booked.
    pub(crate) fn book(&mut self, seat_ids: &BTreeSet<SeatId>) {
        for seat in &mut self.seats {
            if seat_ids.contains(&seat.id()) {
                seat.mark_booked();
            }
        }
    }
}

/// Generates a fresh inventory with a random booked/available split.
///
/// Each seat is booked independently with probability
/// [`BOOKED_PROBABILITY`]. Results are not reproducible.
#[must_use]
pub fn generate_inventory(layout: &SeatLayout) -> SeatInventory {
    generate_inventory_with(layout, |_| rand::random::<f64>() < BOOKED_PROBABILITY)
}

/// Generates an inventory, asking `is_booked` for each seat's initial state.
///
/// The inventory holds seats in identifier order whatever the layout's
/// row order.
///
/// # Arguments
///
/// * `layout` - The auditorium shape
/// * `is_booked` - Called once per seat, in the layout's display order
#[must_use]
pub fn generate_inventory_with<F>(layout: &SeatLayout, mut is_booked: F) -> SeatInventory
where
    F: FnMut(SeatId) -> bool,
{
    let mut seats: Vec<Seat> = layout
        .seat_ids()
        .into_iter()
        .map(|seat_id| Seat::new(seat_id, is_booked(seat_id)))
        .collect();

    // Layout rows may come in any display order; lookups need identifier order.
    seats.sort_by_key(Seat::id);
    SeatInventory { seats }
}
