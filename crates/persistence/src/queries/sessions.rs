// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Viewer session queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::ViewerSessionData;
use crate::diesel_schema::viewer_sessions;
use crate::error::PersistenceError;

/// Diesel Queryable struct for session rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = viewer_sessions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct ViewerSessionRow {
    session_id: i64,
    session_token: String,
    display_name: String,
    photo_url: Option<String>,
    created_at: String,
    expires_at: String,
}

/// Retrieves a session by token.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_viewer_session_by_token(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<Option<ViewerSessionData>, PersistenceError> {
    debug!("Looking up viewer session by token");

    let row: Option<ViewerSessionRow> = viewer_sessions::table
        .filter(viewer_sessions::session_token.eq(session_token))
        .select(ViewerSessionRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(|row| ViewerSessionData {
        session_id: row.session_id,
        session_token: row.session_token,
        display_name: row.display_name,
        photo_url: row.photo_url,
        created_at: row.created_at,
        expires_at: row.expires_at,
    }))
}
