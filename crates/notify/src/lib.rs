// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Out-of-band delivery of contact messages.
//!
//! A [`ContactRelay`] accepts a [`ContactMessage`] and attempts delivery
//! once. There are no retries and no idempotency: relaying the same
//! message twice sends it twice.

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

mod error;
mod message;
mod relay;
mod smtp;

#[cfg(test)]
mod tests;

pub use error::RelayError;
pub use message::{CONTACT_SUBJECT, ContactMessage, escape_html};
pub use relay::{ContactRelay, DisabledRelay};
pub use smtp::{DEFAULT_SMTP_PORT, SmtpConfig, SmtpRelay};
