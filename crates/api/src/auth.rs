// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Viewer identity and session services.

use red_curtain::BookingContext;
use red_curtain_persistence::{Persistence, ViewerSessionData};
use time::format_description::well_known::Iso8601;
use time::{Duration, OffsetDateTime};

use crate::error::AuthError;

/// The profile handed back by the external identity provider after a
/// successful popup sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityProfile {
    /// The name to greet the viewer with.
    pub display_name: String,
    /// Avatar image, if the provider supplied one.
    pub photo_url: Option<String>,
}

/// A signed-in viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    /// The session token the viewer presented.
    pub session_token: String,
    /// The viewer's display name.
    pub display_name: String,
    /// The viewer's avatar image.
    pub photo_url: Option<String>,
    /// When the session expires (ISO 8601 UTC).
    pub expires_at: String,
}

impl From<ViewerSessionData> for Viewer {
    fn from(session: ViewerSessionData) -> Self {
        Self {
            session_token: session.session_token,
            display_name: session.display_name,
            photo_url: session.photo_url,
            expires_at: session.expires_at,
        }
    }
}

/// Whether the caller of a request is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthStatus {
    /// No valid session was presented.
    #[default]
    Anonymous,
    /// A valid session was presented.
    SignedIn(Viewer),
}

impl AuthStatus {
    /// Returns the signed-in viewer, if any.
    #[must_use]
    pub const fn viewer(&self) -> Option<&Viewer> {
        match self {
            Self::Anonymous => None,
            Self::SignedIn(viewer) => Some(viewer),
        }
    }

    /// Returns the facts the booking state machine needs about the caller.
    #[must_use]
    pub const fn booking_context(&self) -> BookingContext {
        BookingContext::new(matches!(self, Self::SignedIn(_)))
    }
}

/// Issues, validates and revokes viewer sessions.
pub struct AuthenticationService;

impl AuthenticationService {
    /// How long a session stays valid after sign-in.
    pub const DEFAULT_SESSION_EXPIRATION: Duration = Duration::hours(8);

    /// Opens a session for a viewer the identity provider vouched for.
    ///
    /// Expired sessions are swept before the new one is stored.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `profile` - The identity provider's profile
    ///
    /// # Returns
    ///
    /// The newly signed-in viewer, including its session token.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The display name is blank
    /// - The session cannot be stored
    pub fn sign_in(
        persistence: &mut Persistence,
        profile: &IdentityProfile,
    ) -> Result<Viewer, AuthError> {
        let display_name: &str = profile.display_name.trim();
        if display_name.is_empty() {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Display name cannot be empty"),
            });
        }

        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let now_str: String = format_timestamp(now)?;
        let swept: usize = persistence
            .delete_expired_viewer_sessions(&now_str)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to sweep expired sessions: {e}"),
            })?;
        if swept > 0 {
            tracing::debug!(swept, "Removed expired viewer sessions");
        }

        let session_token: String = Self::generate_session_token(now);
        let expires_at: String = format_timestamp(now + Self::DEFAULT_SESSION_EXPIRATION)?;
        let photo_url: Option<String> = profile
            .photo_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(String::from);

        persistence
            .create_viewer_session(
                &session_token,
                display_name,
                photo_url.as_deref(),
                &expires_at,
            )
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        tracing::info!(display_name, "Viewer signed in");

        Ok(Viewer {
            session_token,
            display_name: display_name.to_string(),
            photo_url,
            expires_at,
        })
    }

    /// Validates a session token and returns the signed-in viewer.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown or expired.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<Viewer, AuthError> {
        let session: ViewerSessionData = persistence
            .get_viewer_session_by_token(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Database error: {e}"),
            })?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(&session.expires_at, &Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to parse session expiration: {e}"),
            })?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        Ok(Viewer::from(session))
    }

    /// Resolves an optional bearer token to an auth status.
    ///
    /// Missing, unknown and expired tokens all resolve to
    /// [`AuthStatus::Anonymous`].
    #[must_use]
    pub fn resolve(persistence: &mut Persistence, session_token: Option<&str>) -> AuthStatus {
        let Some(token) = session_token else {
            return AuthStatus::Anonymous;
        };

        match Self::validate_session(persistence, token) {
            Ok(viewer) => AuthStatus::SignedIn(viewer),
            Err(e) => {
                tracing::debug!(error = %e, "Treating caller as anonymous");
                AuthStatus::Anonymous
            }
        }
    }

    /// Signs out by deleting the session.
    ///
    /// Signing out with an unknown token is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn sign_out(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        let removed: bool = persistence
            .delete_viewer_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })?;

        if removed {
            tracing::info!("Viewer signed out");
        }

        Ok(())
    }

    fn generate_session_token(now: OffsetDateTime) -> String {
        format!(
            "session_{}_{}",
            now.unix_timestamp_nanos(),
            rand::random::<u64>()
        )
    }
}

fn format_timestamp(at: OffsetDateTime) -> Result<String, AuthError> {
    at.format(&Iso8601::DEFAULT)
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to format timestamp: {e}"),
        })
}
