// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use red_curtain_domain::Movie;
use tracing::{debug, info};

use crate::backend::get_last_insert_rowid;
use crate::diesel_schema::movies;
use crate::error::PersistenceError;

/// Appends a movie to the store.
///
/// No uniqueness check is made on the catalog identifier.
///
/// # Returns
///
/// The identifier generated for the new row.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_movie(conn: &mut SqliteConnection, movie: &Movie) -> Result<i64, PersistenceError> {
    diesel::insert_into(movies::table)
        .values((
            movies::external_id.eq(movie.id.value()),
            movies::title.eq(movie.title.as_str()),
            movies::poster.eq(movie.poster.as_str()),
            movies::description.eq(movie.description.as_str()),
            movies::rating.eq(i32::from(movie.rating.value())),
            movies::release_date.eq(movie.release_date.as_deref()),
            movies::genre.eq(movie.genre.as_deref()),
            movies::language.eq(movie.language.as_deref()),
        ))
        .execute(conn)?;

    let movie_id: i64 = get_last_insert_rowid(conn)?;

    debug!(movie_id, external_id = %movie.id, "Movie inserted");
    Ok(movie_id)
}

/// Wipes the store and repopulates it with `catalog`.
///
/// Runs in a single transaction; on failure the previous contents remain.
///
/// # Returns
///
/// The number of movies inserted.
///
/// # Errors
///
/// Returns an error if any delete or insert fails.
pub fn replace_catalog(
    conn: &mut SqliteConnection,
    catalog: &[Movie],
) -> Result<usize, PersistenceError> {
    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let removed: usize = diesel::delete(movies::table).execute(conn)?;
        debug!(removed, "Cleared movie store");

        for movie in catalog {
            insert_movie(conn, movie)?;
        }

        info!(inserted = catalog.len(), "Seeded movie store");
        Ok(catalog.len())
    })
}
