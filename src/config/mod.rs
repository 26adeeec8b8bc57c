use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod validator;

use crate::adapters::registration_client::DEFAULT_REGISTRATION_ENDPOINT;
use crate::application::signup::DEFAULT_LOGIN_ROUTE;
use crate::cli::{Cli, Command};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub registration: RegistrationSettings,
    pub navigation: NavigationSettings,
    pub mock_server: ServerSettings,
}

/// Where and how drafts are submitted
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrationSettings {
    /// Full URL of the register endpoint
    pub endpoint: String,
    /// Request timeout; no timeout when unset
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavigationSettings {
    /// Route shown after a successful registration
    pub login_route: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            registration: RegistrationSettings {
                endpoint: DEFAULT_REGISTRATION_ENDPOINT.to_string(),
                timeout_seconds: None,
            },
            navigation: NavigationSettings {
                login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            },
            mock_server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 5000,
            },
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(&cli.config)?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    fn load(path: &Path) -> Result<Self, anyhow::Error> {
        let defaults = Settings::default();
        let s = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .set_default("registration.endpoint", defaults.registration.endpoint)?
            .set_default("navigation.login_route", defaults.navigation.login_route)?
            .set_default("mock_server.host", defaults.mock_server.host)?
            .set_default("mock_server.port", i64::from(defaults.mock_server.port))?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    /// Apply CLI argument overrides to settings
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(endpoint) = &cli.endpoint {
            self.registration.endpoint = endpoint.clone();
        }
        if let Some(timeout) = cli.timeout {
            self.registration.timeout_seconds = Some(timeout);
        }
        if let Some(route) = &cli.login_route {
            self.navigation.login_route = route.clone();
        }

        if let Some(Command::MockServer { host, port, .. }) = &cli.command {
            if let Some(host) = host {
                self.mock_server.host = host.clone();
            }
            if let Some(port) = port {
                self.mock_server.port = *port;
            }
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}
