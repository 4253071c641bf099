// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Viewer session mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::{debug, info};

use crate::backend::get_last_insert_rowid;
use crate::diesel_schema::viewer_sessions;
use crate::error::PersistenceError;

/// Creates a new session for a signed-in viewer.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The unique session token
/// * `display_name` - Name reported by the identity provider
/// * `photo_url` - Avatar reported by the identity provider
/// * `expires_at` - ISO 8601 UTC expiry
///
/// # Errors
///
/// Returns an error if the session cannot be created.
pub fn create_viewer_session(
    conn: &mut SqliteConnection,
    session_token: &str,
    display_name: &str,
    photo_url: Option<&str>,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(viewer_sessions::table)
        .values((
            viewer_sessions::session_token.eq(session_token),
            viewer_sessions::display_name.eq(display_name),
            viewer_sessions::photo_url.eq(photo_url),
            viewer_sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    let session_id: i64 = get_last_insert_rowid(conn)?;

    debug!(session_id, expires_at, "Viewer session created");
    Ok(session_id)
}

/// Deletes a session by token.
///
/// # Returns
///
/// Whether a session was removed.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_viewer_session(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<bool, PersistenceError> {
    let rows_affected: usize = diesel::delete(viewer_sessions::table)
        .filter(viewer_sessions::session_token.eq(session_token))
        .execute(conn)?;

    Ok(rows_affected > 0)
}

/// Deletes every session whose expiry precedes `now`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `now` - The current time, ISO 8601 UTC
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_expired_viewer_sessions(
    conn: &mut SqliteConnection,
    now: &str,
) -> Result<usize, PersistenceError> {
    let rows_affected: usize = diesel::delete(viewer_sessions::table)
        .filter(viewer_sessions::expires_at.lt(now))
        .execute(conn)?;

    info!(rows_affected, "Deleted expired viewer sessions");
    Ok(rows_affected)
}
