use super::common;

use axum::http::StatusCode;
use common::log_capture::LogCapture;
use common::test_server::TestServer;
use leadconnect_signup::adapters::navigation::RecordingNavigator;
use leadconnect_signup::adapters::registration_client::HttpRegistrationClient;
use leadconnect_signup::application::SignupFlow;
use leadconnect_signup::domain::{RegistrationField, SubmissionError};
use serde_json::json;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

fn alice_flow(endpoint: String, nav: Arc<RecordingNavigator>) -> SignupFlow {
    let client = Arc::new(HttpRegistrationClient::new(endpoint, Some(Duration::from_secs(5))));
    let mut flow = SignupFlow::new(client, nav);
    flow.set_field(RegistrationField::Username, "alice");
    flow
}

#[tokio::test]
async fn test_created_response_navigates_to_login_once() {
    let (server, received) =
        TestServer::scripted(StatusCode::CREATED, json!({"id": 1}), Duration::ZERO).await;
    let nav = Arc::new(RecordingNavigator::new());
    let flow = alice_flow(server.register_url(), nav.clone());

    let response = flow.submit().await.unwrap();

    assert_eq!(response, json!({"id": 1}));
    assert_eq!(nav.routes(), vec!["/login".to_string()]);

    let bodies = received.bodies();
    assert_eq!(bodies.len(), 1);
    let body = bodies[0].as_object().unwrap();
    let keys: BTreeSet<&str> = body.keys().map(String::as_str).collect();
    let expected: BTreeSet<&str> = RegistrationField::ALL.iter().map(|f| f.key()).collect();
    assert_eq!(keys, expected);
    for (field, value) in flow.draft().entries() {
        assert_eq!(body[field.key()], json!(value));
    }
    assert_eq!(body["username"], "alice");
    assert_eq!(body["password"], "");
}

#[tokio::test]
async fn test_server_error_is_logged_without_navigation() {
    let logs = LogCapture::default();
    let _guard = logs.install();

    let (server, received) = TestServer::scripted(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"success": false, "msg": "database unavailable"}),
        Duration::ZERO,
    )
    .await;
    let nav = Arc::new(RecordingNavigator::new());
    let flow = alice_flow(server.register_url(), nav.clone());

    let err = flow.submit().await.unwrap_err();

    assert_eq!(
        err,
        SubmissionError::Rejected {
            status: 500,
            message: "database unavailable".to_string(),
        }
    );
    assert!(nav.routes().is_empty());
    assert_eq!(received.bodies().len(), 1);

    let output = logs.contents();
    assert!(output.contains("ERROR"), "{}", output);
    assert!(output.contains("database unavailable"), "{}", output);
}

#[tokio::test]
async fn test_network_error_is_logged_without_navigation() {
    let logs = LogCapture::default();
    let _guard = logs.install();

    let nav = Arc::new(RecordingNavigator::new());
    let flow = alice_flow(TestServer::unreachable_endpoint().await, nav.clone());

    let err = flow.submit().await.unwrap_err();

    assert!(matches!(err, SubmissionError::Network(_)), "{:?}", err);
    assert!(nav.routes().is_empty());
    assert!(!flow.is_submitting());
    let output = logs.contents();
    assert!(output.contains("ERROR"), "{}", output);
    assert!(output.contains("Network error"), "{}", output);
}

#[tokio::test]
async fn test_unparseable_success_body_counts_as_network_failure() {
    let app = axum::Router::new().route(
        leadconnect_signup::adapters::mock_registry::REGISTER_PATH,
        axum::routing::post(|| async { "<html>ok</html>" }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let nav = Arc::new(RecordingNavigator::new());
    let flow = alice_flow(
        format!("http://{}/api/users/register", addr),
        nav.clone(),
    );

    let err = flow.submit().await.unwrap_err();

    assert!(matches!(err, SubmissionError::Network(_)), "{:?}", err);
    assert!(nav.routes().is_empty());
}

#[tokio::test]
async fn test_duplicate_submit_while_outstanding_sends_one_request() {
    let (server, received) = TestServer::scripted(
        StatusCode::CREATED,
        json!({"id": 1}),
        Duration::from_millis(200),
    )
    .await;
    let nav = Arc::new(RecordingNavigator::new());
    let flow = alice_flow(server.register_url(), nav.clone());

    let second = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        flow.submit().await
    };
    let (first, second) = tokio::join!(flow.submit(), second);

    assert!(first.is_ok());
    assert_eq!(second.unwrap_err(), SubmissionError::InFlight);
    assert_eq!(received.bodies().len(), 1);
    assert_eq!(nav.routes().len(), 1);
}
