// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{BrokenRelay, RecordingRelay};
use crate::{ApiError, ContactRequest, ContactResponse, submit_contact};
use red_curtain_notify::DisabledRelay;

fn create_contact_request() -> ContactRequest {
    ContactRequest {
        name: String::from("Ada Lovelace"),
        email: String::from("ada@example.com"),
        phone: String::from("555-0100"),
        message: String::from("  Do you have a student discount?  "),
    }
}

#[tokio::test]
async fn test_submit_contact_relays_message() {
    let relay: RecordingRelay = RecordingRelay::default();

    let response: ContactResponse = submit_contact(&relay, &create_contact_request())
        .await
        .unwrap();

    assert!(response.success);
    let delivered = relay.delivered.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].email, "ada@example.com");
    assert_eq!(delivered[0].message, "Do you have a student discount?");
}

#[tokio::test]
async fn test_submit_contact_requires_every_field() {
    let relay: RecordingRelay = RecordingRelay::default();
    let request: ContactRequest = ContactRequest {
        phone: String::from("   "),
        ..create_contact_request()
    };

    let result: Result<ContactResponse, ApiError> = submit_contact(&relay, &request).await;

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "phone"
    ));
    assert!(relay.delivered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_contact_requires_email_address() {
    let relay: RecordingRelay = RecordingRelay::default();
    let request: ContactRequest = ContactRequest {
        email: String::from("ada.example.com"),
        ..create_contact_request()
    };

    let result: Result<ContactResponse, ApiError> = submit_contact(&relay, &request).await;

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "email"
    ));
}

#[tokio::test]
async fn test_submit_contact_reports_relay_failure() {
    let result: Result<ContactResponse, ApiError> =
        submit_contact(&BrokenRelay, &create_contact_request()).await;

    assert_eq!(
        result,
        Err(ApiError::RelayFailed {
            message: String::from("Email build error: connection refused"),
        })
    );
}

#[tokio::test]
async fn test_submit_contact_without_mail_server() {
    let result: Result<ContactResponse, ApiError> =
        submit_contact(&DisabledRelay, &create_contact_request()).await;

    assert!(matches!(result, Err(ApiError::RelayFailed { .. })));
}
