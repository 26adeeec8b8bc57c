//! # LeadConnect Signup
//!
//! Multi-step account registration for LeadConnect. A five-step wizard
//! collects the profile fields into a [`RegistrationDraft`], then submits the
//! whole draft as JSON to the registration service and moves on to the login
//! route when the service accepts it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use leadconnect_signup::adapters::navigation::LoggingNavigator;
//! use leadconnect_signup::adapters::registration_client::HttpRegistrationClient;
//! use leadconnect_signup::application::SignupFlow;
//! use leadconnect_signup::domain::RegistrationField;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Arc::new(HttpRegistrationClient::new(
//!         "http://127.0.0.1:5000/api/users/register",
//!         None,
//!     ));
//!     let mut flow = SignupFlow::new(client, Arc::new(LoggingNavigator::new()));
//!     flow.set_field(RegistrationField::Username, "alice");
//!     flow.advance();
//!     let _ = flow.submit().await;
//! }
//! ```
//!
//! ## Architecture
//!
//! Follows Hexagonal Architecture:
//! - **Domain**: the draft, step counter, field catalogs and the outbound ports
//! - **Application**: the signup flow and the presentation shell
//! - **Adapters**: HTTP client, navigators, terminal renderer, mock service
//! - **Config**: settings file, CLI overrides and validation
//!
//! [`RegistrationDraft`]: domain::RegistrationDraft

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
