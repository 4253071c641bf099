// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use red_curtain_domain::{Movie, MovieId, Rating};
use tracing::debug;

use crate::data_models::StoredMovie;
use crate::diesel_schema::movies;
use crate::error::PersistenceError;

/// Diesel Queryable struct for movie rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = movies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct MovieRow {
    movie_id: i64,
    external_id: String,
    title: String,
    poster: String,
    description: String,
    rating: i32,
    release_date: Option<String>,
    genre: Option<String>,
    language: Option<String>,
    created_at: String,
}

impl TryFrom<MovieRow> for StoredMovie {
    type Error = PersistenceError;

    fn try_from(row: MovieRow) -> Result<Self, Self::Error> {
        let rating: Rating = Rating::new(i64::from(row.rating)).map_err(|e| {
            PersistenceError::ReconstructionError(format!("movie {}: {e}", row.movie_id))
        })?;

        let movie: Movie = Movie::new(
            MovieId::new(&row.external_id),
            &row.title,
            &row.poster,
            &row.description,
            rating,
        )
        .with_release_date(row.release_date.as_deref())
        .with_genre(row.genre.as_deref())
        .with_language(row.language.as_deref());

        Ok(Self {
            movie_id: row.movie_id,
            movie,
            created_at: row.created_at,
        })
    }
}

/// Lists every stored movie in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be reconstructed.
pub fn list_movies(conn: &mut SqliteConnection) -> Result<Vec<StoredMovie>, PersistenceError> {
    let rows: Vec<MovieRow> = movies::table
        .order(movies::movie_id.asc())
        .select(MovieRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded movies");
    rows.into_iter().map(StoredMovie::try_from).collect()
}

/// Finds the earliest stored movie carrying a catalog identifier.
///
/// Catalog identifiers are not unique; the first insert wins.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be reconstructed.
pub fn find_movie(
    conn: &mut SqliteConnection,
    external_id: &str,
) -> Result<Option<StoredMovie>, PersistenceError> {
    let row: Option<MovieRow> = movies::table
        .filter(movies::external_id.eq(external_id))
        .order(movies::movie_id.asc())
        .select(MovieRow::as_select())
        .first(conn)
        .optional()?;

    row.map(StoredMovie::try_from).transpose()
}

/// Counts stored movies.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_movies(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let count: i64 = movies::table.count().get_result(conn)?;
    count
        .to_usize()
        .ok_or_else(|| PersistenceError::ReconstructionError(format!("invalid count {count}")))
}
