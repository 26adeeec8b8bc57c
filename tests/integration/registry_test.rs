use super::common;

use common::test_server::TestServer;
use leadconnect_signup::adapters::mock_registry::MockRegistry;
use leadconnect_signup::adapters::navigation::RecordingNavigator;
use leadconnect_signup::adapters::registration_client::HttpRegistrationClient;
use leadconnect_signup::application::SignupFlow;
use leadconnect_signup::domain::{RegistrationField, SubmissionError};
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::mock_registry(MockRegistry::new()).await;
    let response = reqwest::get(format!("{}/health", server.base_url)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_register_then_duplicate_is_rejected_with_service_message() {
    let registry = MockRegistry::new();
    let server = TestServer::mock_registry(registry.clone()).await;
    let client = Arc::new(HttpRegistrationClient::new(server.register_url(), None));
    let nav = Arc::new(RecordingNavigator::new());

    let mut flow = SignupFlow::new(client.clone(), nav.clone());
    flow.set_field(RegistrationField::Username, "alice");
    flow.set_field(RegistrationField::Email, "alice@example.com");
    flow.set_field(RegistrationField::Subscription, "Business Tier");

    let response = flow.submit().await.unwrap();
    assert_eq!(response["success"], true);
    assert_eq!(response["id"], 1);

    let err = flow.submit().await.unwrap_err();
    assert_eq!(
        err,
        SubmissionError::Rejected {
            status: 409,
            message: "Username already taken".to_string(),
        }
    );

    assert_eq!(nav.routes(), vec!["/login".to_string()]);
    let users = registry.users().await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].fields.email, "alice@example.com");
    assert_eq!(users[0].fields.subscription, "Business Tier");
}

#[tokio::test]
async fn test_failing_registry_rejects() {
    let server = TestServer::mock_registry(MockRegistry::failing(500)).await;
    let client = Arc::new(HttpRegistrationClient::new(server.register_url(), None));
    let nav = Arc::new(RecordingNavigator::new());
    let mut flow = SignupFlow::new(client, nav.clone());
    flow.set_field(RegistrationField::Username, "alice");

    let err = flow.submit().await.unwrap_err();

    assert!(matches!(err, SubmissionError::Rejected { status: 500, .. }));
    assert!(nav.routes().is_empty());
}
