use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// LeadConnect signup - create a LeadConnect account from the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "signup", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "SIGNUP_CONFIG", default_value = "signup.toml")]
    pub config: PathBuf,

    /// Registration endpoint URL
    #[arg(long, env = "SIGNUP_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "SIGNUP_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Route to navigate to after registering
    #[arg(long, env = "SIGNUP_LOGIN_ROUTE")]
    pub login_route: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Walk through the five signup steps interactively (default)
    Wizard,

    /// Submit a draft stored as JSON without prompting
    Submit {
        /// JSON file whose keys are registration field names
        #[arg(long)]
        draft: PathBuf,
    },

    /// Run a local mock of the registration service
    MockServer {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Bind port
        #[arg(long)]
        port: Option<u16>,

        /// Answer every registration with this HTTP status
        #[arg(long)]
        fail_with: Option<u16>,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Wizard)
    }
}
