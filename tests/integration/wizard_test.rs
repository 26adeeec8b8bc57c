use super::common;

use common::test_server::TestServer;
use leadconnect_signup::adapters::console::{ConsoleProgress, ConsoleRenderer};
use leadconnect_signup::adapters::mock_registry::MockRegistry;
use leadconnect_signup::adapters::navigation::RecordingNavigator;
use leadconnect_signup::adapters::registration_client::HttpRegistrationClient;
use leadconnect_signup::application::{ScreenOutcome, SignupFlow, SignupScreen};
use std::io::Cursor;
use std::sync::Arc;

const SESSION: &str = "\
alice
hunter22
hunter22
n
Alice
Liddell

alice@example.com
n
Acme
3
7
n

2
Rex
n
Ten years of sales.
2
s
";

#[tokio::test]
async fn test_console_wizard_registers_user() {
    let registry = MockRegistry::new();
    let server = TestServer::mock_registry(registry.clone()).await;
    let client = Arc::new(HttpRegistrationClient::new(server.register_url(), None));
    let nav = Arc::new(RecordingNavigator::new());
    let flow = SignupFlow::new(client, nav.clone());

    let renderer = ConsoleRenderer::new(Cursor::new(SESSION), Vec::new());
    let mut progress_out = Vec::new();
    let mut screen = SignupScreen::new(flow, renderer, ConsoleProgress::new(&mut progress_out));

    let outcome = screen.run().await.unwrap();

    assert!(matches!(outcome, ScreenOutcome::Registered(ref body) if body["id"] == 1));
    assert_eq!(nav.routes(), vec!["/login".to_string()]);
    drop(screen);

    let users = registry.users().await;
    assert_eq!(users.len(), 1);
    let fields = &users[0].fields;
    assert_eq!(fields.username, "alice");
    assert_eq!(fields.confirm_password, "hunter22");
    assert_eq!(fields.last_name, "Liddell");
    assert_eq!(fields.phone_number, "");
    assert_eq!(fields.number_of_employees, "51-200");
    assert_eq!(fields.province, "Ontario");
    assert_eq!(fields.security_question, "What was the name of your first pet?");
    assert_eq!(fields.security_answer, "Rex");
    assert_eq!(fields.my_resume_content, "Ten years of sales.");
    assert_eq!(fields.subscription, "Business Tier");

    let progress = String::from_utf8(progress_out).unwrap();
    assert!(progress.contains("Step 1 of 5 [#----]"));
    assert!(progress.contains("Step 5 of 5 [#####]"));
}

#[tokio::test]
async fn test_console_wizard_quit_registers_nothing() {
    let registry = MockRegistry::new();
    let server = TestServer::mock_registry(registry.clone()).await;
    let client = Arc::new(HttpRegistrationClient::new(server.register_url(), None));
    let nav = Arc::new(RecordingNavigator::new());
    let flow = SignupFlow::new(client, nav.clone());

    let renderer = ConsoleRenderer::new(Cursor::new("bob\n\n\nq\n"), Vec::new());
    let mut screen = SignupScreen::new(flow, renderer, ConsoleProgress::new(std::io::sink()));

    assert_eq!(screen.run().await.unwrap(), ScreenOutcome::Quit);
    assert!(nav.routes().is_empty());
    assert!(registry.users().await.is_empty());
}
