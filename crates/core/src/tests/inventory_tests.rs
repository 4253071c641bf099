// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_movie, seat};
use crate::{
    BookingContext, BookingPhase, BookingSession, Command, SeatInventory, TransitionResult, apply,
    generate_inventory, generate_inventory_with, open_session,
};
use red_curtain_domain::{DomainError, Seat, SeatId, SeatLayout};

#[test]
fn test_generate_inventory_covers_layout() {
    let layout: SeatLayout = SeatLayout::standard();
    let inventory: SeatInventory = generate_inventory(&layout);

    let ids: Vec<SeatId> = inventory.seats().iter().map(Seat::id).collect();
    assert_eq!(ids, layout.seat_ids());
}

#[test]
fn test_generate_inventory_with_asks_once_per_seat() {
    let layout: SeatLayout = SeatLayout::new(&['A', 'B', 'C'], 3).unwrap();
    let mut asked: Vec<SeatId> = Vec::new();

    let inventory: SeatInventory = generate_inventory_with(&layout, |seat_id| {
        asked.push(seat_id);
        seat_id.number() == 2
    });

    assert_eq!(asked, layout.seat_ids());
    assert_eq!(inventory.available_count(), 6);
    assert!(inventory.get(seat("B2")).unwrap().is_booked());
    assert!(!inventory.get(seat("B3")).unwrap().is_booked());
}

#[test]
fn test_generated_booked_share_is_plausible() {
    // 20 auditoriums of 80 seats; expected 320 booked, allow a wide band.
    let layout: SeatLayout = SeatLayout::standard();
    let booked: usize = (0..20)
        .map(|_| {
            let inventory: SeatInventory = generate_inventory(&layout);
            layout.capacity() - inventory.available_count()
        })
        .sum();

    assert!((160..=480).contains(&booked), "booked = {booked}");
}

#[test]
fn test_inventory_rows_group_in_order() {
    let layout: SeatLayout = SeatLayout::new(&['A', 'B'], 2).unwrap();
    let inventory: SeatInventory = generate_inventory_with(&layout, |_| false);

    let rows = inventory.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0, 'A');
    assert_eq!(rows[1].0, 'B');
    assert_eq!(rows[1].1.len(), 2);
    assert_eq!(rows[1].1[0].id(), seat("B1"));
}

#[test]
fn test_inventory_new_sorts_seats() {
    let inventory: SeatInventory = SeatInventory::new(vec![
        Seat::new(seat("B1"), false),
        Seat::new(seat("A2"), true),
        Seat::new(seat("A1"), false),
    ])
    .unwrap();

    let ids: Vec<String> = inventory
        .seats()
        .iter()
        .map(|s| s.id().to_string())
        .collect();
    assert_eq!(ids, vec!["A1", "A2", "B1"]);
}

#[test]
fn test_inventory_new_rejects_duplicate_ids() {
    let result: Result<SeatInventory, DomainError> = SeatInventory::new(vec![
        Seat::new(seat("A1"), false),
        Seat::new(seat("A1"), true),
    ]);

    assert!(matches!(
        result,
        Err(DomainError::InvalidSeatLayout { .. })
    ));
}

#[test]
fn test_open_session_uses_standard_layout() {
    let session: BookingSession = open_session(create_test_movie());

    assert_eq!(session.inventory().seats().len(), 80);
    assert_eq!(session.phase(), BookingPhase::Browsing);
    assert_eq!(session.movie().title, "Silver Linings Playbook");
}

#[test]
fn test_every_seat_reachable_when_rows_are_not_alphabetical() {
    let layout: SeatLayout = SeatLayout::new(&['D', 'C', 'B', 'A'], 10).unwrap();
    let inventory: SeatInventory = generate_inventory_with(&layout, |_| false);

    let unreachable: Vec<SeatId> = layout
        .seat_ids()
        .into_iter()
        .filter(|seat_id| inventory.get(*seat_id).is_none())
        .collect();
    assert!(unreachable.is_empty(), "unreachable seats: {unreachable:?}");
    assert_eq!(inventory.seats().len(), layout.capacity());
}

#[test]
fn test_select_seat_in_reversed_layout() {
    let layout: SeatLayout = SeatLayout::new(&['C', 'B', 'A'], 3).unwrap();
    let inventory: SeatInventory = generate_inventory_with(&layout, |_| false);
    let session: BookingSession = BookingSession::new(create_test_movie(), inventory);

    let result: TransitionResult = apply(
        &session,
        Command::SelectSeat { seat_id: seat("C2") },
        &BookingContext::new(false),
    )
    .unwrap();

    assert!(result.new_session.is_selected(seat("C2")));
}
