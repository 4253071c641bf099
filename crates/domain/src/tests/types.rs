// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Movie, MovieId, Price, Rating, Seat, SeatId, SeatLayout, normalize_label};

fn create_test_movie() -> Movie {
    Movie::new(
        MovieId::new("42"),
        "Arrival",
        "https://example.com/arrival.jpg",
        "Linguist meets visitors.",
        Rating::new(5).unwrap(),
    )
}

#[test]
fn test_normalize_label_treats_null_text_as_absent() {
    assert_eq!(normalize_label(Some("null")), None);
    assert_eq!(normalize_label(Some("NULL")), None);
    assert_eq!(normalize_label(Some("  ")), None);
    assert_eq!(normalize_label(None), None);
    assert_eq!(normalize_label(Some(" Hindi ")), Some(String::from("Hindi")));
}

#[test]
fn test_movie_optional_labels_are_normalized() {
    let movie: Movie = create_test_movie()
        .with_genre(Some("Sci-Fi"))
        .with_language(Some("null"))
        .with_release_date(Some(""));

    assert_eq!(movie.genre.as_deref(), Some("Sci-Fi"));
    assert_eq!(movie.language, None);
    assert_eq!(movie.release_date, None);
}

#[test]
fn test_rating_accepts_one_through_five() {
    for stars in 1..=5 {
        let rating: Rating = Rating::new(stars).unwrap();
        assert_eq!(i64::from(rating.value()), stars);
    }
}

#[test]
fn test_rating_rejects_out_of_range() {
    assert_eq!(Rating::new(0), Err(DomainError::InvalidRating { value: 0 }));
    assert_eq!(Rating::new(6), Err(DomainError::InvalidRating { value: 6 }));
    assert_eq!(
        Rating::new(-1),
        Err(DomainError::InvalidRating { value: -1 })
    );
}

#[test]
fn test_rating_clamped() {
    assert_eq!(Rating::clamped(0).value(), 1);
    assert_eq!(Rating::clamped(3).value(), 3);
    assert_eq!(Rating::clamped(9).value(), 5);
}

#[test]
fn test_price_formats_two_decimal_places() {
    assert_eq!(Price::from_dollars(12).to_string(), "12.00");
    assert_eq!(Price::from_cents(1005).to_string(), "10.05");
    assert_eq!(Price::ZERO.to_string(), "0.00");
}

#[test]
fn test_price_times_count() {
    let price: Price = Price::from_dollars(12);
    assert_eq!(price.times(2), Price::from_dollars(24));
    assert_eq!(price.times(0), Price::ZERO);
}

#[test]
fn test_price_parse() {
    assert_eq!("12".parse::<Price>().unwrap(), Price::from_dollars(12));
    assert_eq!("12.5".parse::<Price>().unwrap(), Price::from_cents(1250));
    assert_eq!("$10.00".parse::<Price>().unwrap(), Price::from_dollars(10));
    assert!("12.345".parse::<Price>().is_err());
    assert!("-1".parse::<Price>().is_err());
    assert!("abc".parse::<Price>().is_err());
}

#[test]
fn test_seat_id_parse_and_display() {
    let seat_id: SeatId = "A1".parse().unwrap();
    assert_eq!(seat_id.row(), 'A');
    assert_eq!(seat_id.number(), 1);
    assert_eq!(seat_id.to_string(), "A1");

    let lower: SeatId = "h10".parse().unwrap();
    assert_eq!(lower.to_string(), "H10");
}

#[test]
fn test_seat_id_rejects_malformed_text() {
    for raw in ["", "A", "1A", "A0", "A-1", "AA1", "A300"] {
        let result: Result<SeatId, DomainError> = raw.parse();
        assert!(result.is_err(), "expected '{raw}' to be rejected");
    }
}

#[test]
fn test_seat_id_row_major_ordering() {
    let a10: SeatId = "A10".parse().unwrap();
    let a2: SeatId = "A2".parse().unwrap();
    let b1: SeatId = "B1".parse().unwrap();

    assert!(a2 < a10);
    assert!(a10 < b1);
}

#[test]
fn test_seat_mark_booked() {
    let mut seat: Seat = Seat::new(SeatId::new('C', 4).unwrap(), false);
    assert!(!seat.is_booked());
    assert_eq!(seat.row(), 'C');
    assert_eq!(seat.number(), 4);

    seat.mark_booked();
    assert!(seat.is_booked());
}

#[test]
fn test_standard_layout_shape() {
    let layout: SeatLayout = SeatLayout::standard();
    let ids: Vec<SeatId> = layout.seat_ids();

    assert_eq!(layout.rows(), &['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H']);
    assert_eq!(layout.capacity(), 80);
    assert_eq!(ids.len(), 80);
    assert_eq!(ids[0].to_string(), "A1");
    assert_eq!(ids[9].to_string(), "A10");
    assert_eq!(ids[10].to_string(), "B1");
    assert_eq!(ids[79].to_string(), "H10");
}

#[test]
fn test_layout_rejects_duplicate_rows() {
    let result: Result<SeatLayout, DomainError> = SeatLayout::new(&['A', 'a'], 4);
    assert!(matches!(
        result,
        Err(DomainError::InvalidSeatLayout { .. })
    ));
}

#[test]
fn test_layout_rejects_empty_shape() {
    assert!(SeatLayout::new(&[], 4).is_err());
    assert!(SeatLayout::new(&['A'], 0).is_err());
    assert!(SeatLayout::new(&['1'], 4).is_err());
}
