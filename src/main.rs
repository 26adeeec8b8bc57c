use clap::Parser;
use leadconnect_signup::adapters::console::{ConsoleProgress, ConsoleRenderer};
use leadconnect_signup::adapters::mock_registry::{create_mock_app, MockRegistry};
use leadconnect_signup::adapters::navigation::LoggingNavigator;
use leadconnect_signup::adapters::registration_client::HttpRegistrationClient;
use leadconnect_signup::application::{ScreenOutcome, SignupFlow, SignupScreen};
use leadconnect_signup::cli::{Cli, Command};
use leadconnect_signup::config::Settings;
use leadconnect_signup::domain::{RegistrationDraft, RegistrationFields};
use std::net::SocketAddr;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so they don't interleave with the prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;

    match cli.command() {
        Command::Wizard => run_wizard(&settings).await,
        Command::Submit { draft } => submit_file(&settings, &draft).await,
        Command::MockServer { fail_with, .. } => run_mock_server(&settings, fail_with).await,
    }
}

fn build_flow(settings: &Settings, draft: RegistrationDraft) -> SignupFlow {
    let client = Arc::new(HttpRegistrationClient::from_settings(&settings.registration));
    info!(endpoint = client.endpoint(), "Using registration service");

    SignupFlow::with_draft(draft, client, Arc::new(LoggingNavigator::new()))
        .with_login_route(settings.navigation.login_route.clone())
}

async fn run_wizard(settings: &Settings) -> anyhow::Result<ExitCode> {
    let flow = build_flow(settings, RegistrationDraft::new());

    println!("Create your LeadConnect Account");
    let renderer = ConsoleRenderer::new(std::io::stdin().lock(), std::io::stdout());
    let progress = ConsoleProgress::new(std::io::stdout());
    let mut screen = SignupScreen::new(flow, renderer, progress);

    match screen.run().await? {
        ScreenOutcome::Registered(_) => {
            println!("Account created. Continue at {}", settings.navigation.login_route);
            Ok(ExitCode::SUCCESS)
        }
        ScreenOutcome::Quit => Ok(ExitCode::SUCCESS),
    }
}

async fn submit_file(settings: &Settings, path: &Path) -> anyhow::Result<ExitCode> {
    let contents = std::fs::read_to_string(path)?;
    let fields: RegistrationFields = serde_json::from_str(&contents)?;
    let flow = build_flow(settings, RegistrationDraft::from_fields(fields));

    // submit() has already logged the failure
    match flow.submit().await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

async fn run_mock_server(settings: &Settings, fail_with: Option<u16>) -> anyhow::Result<ExitCode> {
    let registry = match fail_with {
        Some(status) => {
            warn!(status = status, "Mock registry will reject every registration");
            MockRegistry::failing(status)
        }
        None => MockRegistry::new(),
    };
    let app = create_mock_app(registry);

    let addr: SocketAddr =
        format!("{}:{}", settings.mock_server.host, settings.mock_server.port).parse()?;
    info!("Mock registration service listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(ExitCode::SUCCESS)
}
