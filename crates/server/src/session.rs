// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Viewer extraction at the server boundary.
//!
//! Both extractors read an `Authorization: Bearer <token>` header and
//! validate the token once per request.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use red_curtain_api::{AuthStatus, AuthenticationService, Viewer};
use tracing::{debug, warn};

use crate::AppState;

/// Extractor for routes that require a signed-in viewer.
///
/// # Errors
///
/// Returns HTTP 401 Unauthorized if:
/// - Authorization header is missing
/// - Authorization header format is invalid
/// - Session token is unknown or expired
pub struct SessionViewer(pub Viewer);

impl FromRequestParts<AppState> for SessionViewer {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token: &str = bearer_token(parts)?.ok_or_else(|| {
            debug!("Missing Authorization header");
            SessionError::MissingAuthorizationHeader
        })?;

        let mut persistence = state.persistence.lock().await;
        let viewer: Viewer = AuthenticationService::validate_session(&mut persistence, token)
            .map_err(|e| {
                warn!(error = %e, "Session validation failed");
                SessionError::InvalidSession(e.to_string())
            })?;

        debug!(display_name = %viewer.display_name, "Session validated successfully");

        Ok(Self(viewer))
    }
}

/// Extractor for routes open to everyone.
///
/// Anything other than a valid session resolves to
/// [`AuthStatus::Anonymous`]; this extractor never rejects.
pub struct OptionalViewer(pub AuthStatus);

impl FromRequestParts<AppState> for OptionalViewer {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token: Option<&str> = bearer_token(parts).unwrap_or_else(|_| {
            warn!("Ignoring malformed Authorization header");
            None
        });

        let mut persistence = state.persistence.lock().await;
        Ok(Self(AuthenticationService::resolve(&mut persistence, token)))
    }
}

fn bearer_token(parts: &Parts) -> Result<Option<&str>, SessionError> {
    let Some(header) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let value: &str = header.to_str().map_err(|_| {
        warn!("Invalid Authorization header encoding");
        SessionError::InvalidAuthorizationHeader
    })?;

    value.strip_prefix("Bearer ").map(Some).ok_or_else(|| {
        warn!("Authorization header does not start with 'Bearer '");
        SessionError::InvalidAuthorizationHeader
    })
}

/// Session extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// Session validation failed.
    InvalidSession(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message: String = match self {
            Self::MissingAuthorizationHeader => String::from("Missing Authorization header"),
            Self::InvalidAuthorizationHeader => String::from(
                "Invalid Authorization header format. Expected: 'Bearer <token>'",
            ),
            Self::InvalidSession(reason) => format!("Session validation failed: {reason}"),
        };

        (StatusCode::UNAUTHORIZED, message).into_response()
    }
}
