// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RelayError;
use crate::message::ContactMessage;
use async_trait::async_trait;

/// Delivers contact messages out of band.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    /// Attempts delivery of one message. No retry is made on failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the message could not be built or delivered.
    async fn relay(&self, message: &ContactMessage) -> Result<(), RelayError>;

    /// A short label for logs.
    fn name(&self) -> &'static str;
}

/// A relay installed when no mail server is configured.
///
/// Every delivery attempt fails with [`RelayError::NotConfigured`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRelay;

#[async_trait]
impl ContactRelay for DisabledRelay {
    async fn relay(&self, message: &ContactMessage) -> Result<(), RelayError> {
        tracing::warn!(
            from = %message.email,
            "Dropping contact message: no mail server configured"
        );
        Err(RelayError::NotConfigured)
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
