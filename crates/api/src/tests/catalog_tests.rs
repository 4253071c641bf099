// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_seeded_persistence, create_test_persistence};
use crate::{
    AddMovieRequest, AddMovieResponse, ApiError, ListMoviesRequest, ListMoviesResponse,
    OpenBookingRequest, add_movie, list_movies, list_showtimes, open_booking, seed_catalog,
};
use red_curtain_persistence::Persistence;

fn titles(response: &ListMoviesResponse) -> Vec<&str> {
    response
        .movies
        .iter()
        .map(|movie| movie.title.as_str())
        .collect()
}

fn create_add_request(id: &str, title: &str, rating: i64) -> AddMovieRequest {
    AddMovieRequest {
        id: id.to_string(),
        title: title.to_string(),
        poster: String::from("https://example.com/poster.jpg"),
        description: String::from("A test film."),
        rating,
        release_date: None,
        genre: Some(String::from("Drama")),
        language: Some(String::from("null")),
    }
}

#[test]
fn test_list_movies_unfiltered_returns_whole_catalog() {
    let mut persistence: Persistence = create_seeded_persistence();

    let response: ListMoviesResponse =
        list_movies(&mut persistence, &ListMoviesRequest::default()).unwrap();

    assert_eq!(response.movies.len(), 10);
    assert_eq!(response.genres.len(), 6);
    assert_eq!(response.languages.len(), 5);
}

#[test]
fn test_list_movies_by_genre() {
    let mut persistence: Persistence = create_seeded_persistence();
    let request: ListMoviesRequest = ListMoviesRequest {
        genre: Some(String::from("Sci-Fi")),
        ..ListMoviesRequest::default()
    };

    let response: ListMoviesResponse = list_movies(&mut persistence, &request).unwrap();

    assert_eq!(
        titles(&response),
        vec!["Oppenheimer", "Silver Linings Playbook"]
    );
}

#[test]
fn test_list_movies_combines_predicates() {
    let mut persistence: Persistence = create_seeded_persistence();
    let request: ListMoviesRequest = ListMoviesRequest {
        genre: Some(String::from("Sci-Fi")),
        language: Some(String::from("English")),
        search: Some(String::from("silver")),
    };

    let response: ListMoviesResponse = list_movies(&mut persistence, &request).unwrap();

    assert_eq!(titles(&response), vec!["Silver Linings Playbook"]);
}

#[test]
fn test_blank_and_null_labels_are_unset() {
    let mut persistence: Persistence = create_seeded_persistence();
    let request: ListMoviesRequest = ListMoviesRequest {
        genre: Some(String::new()),
        language: Some(String::from("null")),
        search: None,
    };

    let response: ListMoviesResponse = list_movies(&mut persistence, &request).unwrap();

    assert_eq!(response.movies.len(), 10);
}

#[test]
fn test_search_with_no_match() {
    let mut persistence: Persistence = create_seeded_persistence();
    let request: ListMoviesRequest = ListMoviesRequest {
        search: Some(String::from("zzz")),
        ..ListMoviesRequest::default()
    };

    let response: ListMoviesResponse = list_movies(&mut persistence, &request).unwrap();

    assert!(response.movies.is_empty());
}

#[test]
fn test_add_movie_appends_to_store() {
    let mut persistence: Persistence = create_test_persistence();

    let response: AddMovieResponse =
        add_movie(&mut persistence, &create_add_request("11", "Heat", 5)).unwrap();

    assert_eq!(response.message, "Movie added successfully");
    let listed: ListMoviesResponse =
        list_movies(&mut persistence, &ListMoviesRequest::default()).unwrap();
    assert_eq!(titles(&listed), vec!["Heat"]);
    assert_eq!(listed.movies[0].genre.as_deref(), Some("Drama"));
    assert_eq!(listed.movies[0].language, None);
}

#[test]
fn test_add_movie_rejects_out_of_range_rating() {
    let mut persistence: Persistence = create_test_persistence();

    let result: Result<AddMovieResponse, ApiError> =
        add_movie(&mut persistence, &create_add_request("11", "Heat", 6));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "rating"
    ));
    assert_eq!(persistence.count_movies().unwrap(), 0);
}

#[test]
fn test_add_movie_rejects_blank_title() {
    let mut persistence: Persistence = create_test_persistence();

    let result: Result<AddMovieResponse, ApiError> =
        add_movie(&mut persistence, &create_add_request("11", "   ", 3));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "title"
    ));
}

#[test]
fn test_seed_catalog_replaces_existing_movies() {
    let mut persistence: Persistence = create_test_persistence();
    add_movie(&mut persistence, &create_add_request("99", "Leftover", 2)).unwrap();

    let response = seed_catalog(&mut persistence).unwrap();

    assert_eq!(response.inserted, 10);
    assert_eq!(persistence.count_movies().unwrap(), 10);
    assert!(persistence.find_movie("99").unwrap().is_none());
}

#[test]
fn test_list_showtimes() {
    let times: Vec<(String, String)> = list_showtimes()
        .showtimes
        .into_iter()
        .map(|showtime| (showtime.time, showtime.price))
        .collect();

    assert_eq!(times.len(), 5);
    assert_eq!(times[0], (String::from("10:00 AM"), String::from("10.00")));
    assert_eq!(times[4], (String::from("10:00 PM"), String::from("15.00")));
}

#[test]
fn test_open_booking_for_stored_movie() {
    let mut persistence: Persistence = create_seeded_persistence();

    let session = open_booking(
        &mut persistence,
        &OpenBookingRequest {
            movie_id: String::from("7"),
        },
    )
    .unwrap();

    assert_eq!(session.movie().title, "Silver Linings Playbook");
    assert_eq!(session.inventory().seats().len(), 80);
    assert!(session.selection().is_empty());
    assert!(session.message().is_none());
}

#[test]
fn test_open_booking_for_unknown_movie() {
    let mut persistence: Persistence = create_seeded_persistence();

    let result = open_booking(
        &mut persistence,
        &OpenBookingRequest {
            movie_id: String::from("404"),
        },
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
