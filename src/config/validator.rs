use thiserror::Error;

use crate::config::{NavigationSettings, RegistrationSettings, ServerSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        errors.extend(Self::validate_registration(&settings.registration));
        errors.extend(Self::validate_navigation(&settings.navigation));
        errors.extend(Self::validate_mock_server(&settings.mock_server));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_registration(registration: &RegistrationSettings) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if registration.endpoint.is_empty() {
            errors.push(ValidationError::MissingField("registration.endpoint".to_string()));
        } else {
            match reqwest::Url::parse(&registration.endpoint) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                Ok(url) => errors.push(ValidationError::InvalidValue {
                    field: "registration.endpoint".to_string(),
                    reason: format!("Unsupported scheme '{}'", url.scheme()),
                }),
                Err(e) => errors.push(ValidationError::InvalidValue {
                    field: "registration.endpoint".to_string(),
                    reason: e.to_string(),
                }),
            }
        }

        if registration.timeout_seconds == Some(0) {
            errors.push(ValidationError::InvalidValue {
                field: "registration.timeout_seconds".to_string(),
                reason: "Timeout must be greater than 0".to_string(),
            });
        }

        errors
    }

    fn validate_navigation(navigation: &NavigationSettings) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if navigation.login_route.is_empty() {
            errors.push(ValidationError::MissingField("navigation.login_route".to_string()));
        } else if !navigation.login_route.starts_with('/') {
            errors.push(ValidationError::InvalidValue {
                field: "navigation.login_route".to_string(),
                reason: "Route must start with '/'".to_string(),
            });
        }

        errors
    }

    fn validate_mock_server(server: &ServerSettings) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("mock_server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "mock_server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        errors
    }
}
