// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use red_curtain_domain::Movie;

/// A movie as held in the store, with its generated identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMovie {
    /// Identifier generated by the store on insert.
    pub movie_id: i64,
    /// The catalog record.
    pub movie: Movie,
    /// When the record was inserted.
    pub created_at: String,
}

/// A signed-in viewer's session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSessionData {
    /// Session row identifier.
    pub session_id: i64,
    /// Opaque bearer token.
    pub session_token: String,
    /// Name reported by the identity provider.
    pub display_name: String,
    /// Avatar reported by the identity provider.
    pub photo_url: Option<String>,
    /// When the session was created.
    pub created_at: String,
    /// ISO 8601 UTC expiry.
    pub expires_at: String,
}
