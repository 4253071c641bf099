// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::message_tests::create_test_message;
use crate::{
    CONTACT_SUBJECT, ContactMessage, ContactRelay, DEFAULT_SMTP_PORT, DisabledRelay, RelayError,
    SmtpConfig, SmtpRelay,
};

fn create_test_config() -> SmtpConfig {
    SmtpConfig {
        host: String::from("smtp.example.com"),
        port: DEFAULT_SMTP_PORT,
        username: Some(String::from("box-office@example.com")),
        password: Some(String::from("hunter2")),
        sender: String::from("box-office@example.com"),
        recipient: String::from("front-desk@example.com"),
    }
}

#[tokio::test]
async fn test_disabled_relay_always_fails() {
    let relay: DisabledRelay = DisabledRelay;

    let result: Result<(), RelayError> = relay.relay(&create_test_message()).await;

    assert!(matches!(result, Err(RelayError::NotConfigured)));
    assert_eq!(relay.name(), "disabled");
}

#[test]
fn test_smtp_relay_rejects_malformed_sender() {
    let mut config: SmtpConfig = create_test_config();
    config.sender = String::from("not an address");

    let result = SmtpRelay::new(&config);

    assert!(matches!(result, Err(RelayError::Address(_))));
}

#[test]
fn test_build_message_sets_headers() {
    let relay: SmtpRelay = SmtpRelay::new(&create_test_config()).unwrap();

    let email = relay.build_message(&create_test_message()).unwrap();
    let formatted: String = String::from_utf8_lossy(&email.formatted()).into_owned();

    assert!(formatted.contains(&format!("Subject: {CONTACT_SUBJECT}")));
    assert!(formatted.contains("From: box-office@example.com"));
    assert!(formatted.contains("To: front-desk@example.com"));
    assert!(formatted.contains("Reply-To: ada@example.com"));
    assert!(formatted.contains("Content-Type: text/html"));
}

#[test]
fn test_build_message_rejects_malformed_reply_to() {
    let relay: SmtpRelay = SmtpRelay::new(&create_test_config()).unwrap();
    let mut message: ContactMessage = create_test_message();
    message.email = String::from("ada-at-example");

    let result = relay.build_message(&message);

    assert!(matches!(result, Err(RelayError::Address(_))));
}

#[test]
fn test_relay_error_display() {
    assert_eq!(
        RelayError::NotConfigured.to_string(),
        "Contact relay is not configured"
    );
    assert_eq!(
        RelayError::Build(String::from("missing body")).to_string(),
        "Email build error: missing body"
    );
}
