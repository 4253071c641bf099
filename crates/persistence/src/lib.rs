// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Red Curtain booking system.
//!
//! This crate stores the movie catalog and signed-in viewer sessions in
//! `SQLite` through Diesel. Booking sessions are never persisted; they live
//! only in server memory.
//!
//! ## Testing
//!
//! - Tests run against isolated in-memory databases
//! - Migrations are embedded and applied on every connection

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use red_curtain_domain::Movie;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use backend::MIGRATIONS;
pub use data_models::{StoredMovie, ViewerSessionData};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the movie store and viewer sessions.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared in-memory database, so
    /// instances never see each other's rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:red_curtain_mem_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Movies
    // ========================================================================

    /// Appends a movie to the store.
    ///
    /// # Returns
    ///
    /// The identifier generated for the new row.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_movie(&mut self, movie: &Movie) -> Result<i64, PersistenceError> {
        mutations::movies::insert_movie(&mut self.conn, movie)
    }

    /// Lists every stored movie in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_movies(&mut self) -> Result<Vec<StoredMovie>, PersistenceError> {
        queries::movies::list_movies(&mut self.conn)
    }

    /// Finds the earliest stored movie with the given catalog identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_movie(&mut self, external_id: &str) -> Result<Option<StoredMovie>, PersistenceError> {
        queries::movies::find_movie(&mut self.conn, external_id)
    }

    /// Counts stored movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_movies(&mut self) -> Result<usize, PersistenceError> {
        queries::movies::count_movies(&mut self.conn)
    }

    /// Wipes the store and repopulates it from `catalog` atomically.
    ///
    /// # Returns
    ///
    /// The number of movies inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn replace_catalog(&mut self, catalog: &[Movie]) -> Result<usize, PersistenceError> {
        mutations::movies::replace_catalog(&mut self.conn, catalog)
    }

    // ========================================================================
    // Viewer Sessions
    // ========================================================================

    /// Creates a new session for a signed-in viewer.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub fn create_viewer_session(
        &mut self,
        session_token: &str,
        display_name: &str,
        photo_url: Option<&str>,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::sessions::create_viewer_session(
            &mut self.conn,
            session_token,
            display_name,
            photo_url,
            expires_at,
        )
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_viewer_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<ViewerSessionData>, PersistenceError> {
        queries::sessions::get_viewer_session_by_token(&mut self.conn, session_token)
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
    pub fn delete_viewer_session(&mut self, session_token: &str) -> Result<bool, PersistenceError> {
        mutations::sessions::delete_viewer_session(&mut self.conn, session_token)
    }

    /// Deletes every session that expired before `now` (ISO 8601 UTC).
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_expired_viewer_sessions(&mut self, now: &str) -> Result<usize, PersistenceError> {
        mutations::sessions::delete_expired_viewer_sessions(&mut self.conn, now)
    }
}
