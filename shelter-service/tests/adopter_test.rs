//! Adopter update integration tests.

mod common;

use common::TestApp;
use serde_json::{json, Value};

async fn contact(app: &TestApp, ssn: &str) -> (String, String) {
    sqlx::query_as("SELECT Phone, Email FROM Adopter WHERE Ssn = ?")
        .bind(ssn.to_string())
        .fetch_one(app.db.pool())
        .await
        .expect("adopter should exist")
}

#[tokio::test]
async fn update_existing_adopter() {
    let app = TestApp::spawn().await;

    let response = app
        .put_json(
            "/adopters/123-45-6789",
            &json!({ "Phone": "555-0142", "Email": "dana.reyes@example.org" }),
        )
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Adopter updated successfully");

    assert_eq!(
        contact(&app, "123-45-6789").await,
        ("555-0142".to_string(), "dana.reyes@example.org".to_string())
    );
}

#[tokio::test]
async fn update_missing_adopter_is_not_found_and_changes_nothing() {
    let app = TestApp::spawn().await;

    let response = app
        .put_json(
            "/adopters/000-00-0000",
            &json!({ "Phone": "555-0000", "Email": "nobody@example.org" }),
        )
        .await;
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Adopter not found");

    assert_eq!(
        contact(&app, "123-45-6789").await,
        ("555-0100".to_string(), "dana@example.org".to_string())
    );
    assert_eq!(
        contact(&app, "987-65-4321").await,
        ("555-0199".to_string(), "sam@example.org".to_string())
    );
}

#[tokio::test]
async fn invalid_contact_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .put_json(
            "/adopters/123-45-6789",
            &json!({ "Phone": "555-0142", "Email": "not-an-email" }),
        )
        .await;
    assert_eq!(response.status(), 422);

    let response = app
        .put_json("/adopters/123-45-6789", &json!({ "Phone": "555-0142" }))
        .await;
    assert_eq!(response.status(), 422);

    assert_eq!(
        contact(&app, "123-45-6789").await,
        ("555-0100".to_string(), "dana@example.org".to_string())
    );
}
