//! Signup flow: owns the draft and turns it into a registration request

use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::domain::{
    Navigator, RegistrationDraft, RegistrationField, RegistrationPort, Step, SubmissionError,
    SubmissionResult,
};

pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

/// Form state container plus submission handler for one signup session
pub struct SignupFlow {
    draft: RegistrationDraft,
    registration: Arc<dyn RegistrationPort>,
    navigator: Arc<dyn Navigator>,
    login_route: String,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the submission ends, however it ends
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SignupFlow {
    pub fn new(registration: Arc<dyn RegistrationPort>, navigator: Arc<dyn Navigator>) -> Self {
        Self::with_draft(RegistrationDraft::new(), registration, navigator)
    }

    /// Resume from an existing draft
    pub fn with_draft(
        draft: RegistrationDraft,
        registration: Arc<dyn RegistrationPort>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            draft,
            registration,
            navigator,
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Route to navigate to after a successful registration
    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn step(&self) -> Step {
        self.draft.step()
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    pub fn advance(&mut self) {
        self.draft.advance();
        debug!(step = self.draft.step().get(), "Advanced signup step");
    }

    pub fn retreat(&mut self) {
        self.draft.retreat();
        debug!(step = self.draft.step().get(), "Retreated signup step");
    }

    pub fn set_field(&mut self, field: RegistrationField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Send the whole draft to the registration service.
    ///
    /// At most one submission runs at a time; a call made while another is
    /// outstanding returns [`SubmissionError::InFlight`] without touching the
    /// network. On success the navigator is sent to the login route. Failures
    /// are logged and returned; the draft and step are left as they were.
    pub async fn submit(&self) -> SubmissionResult<Value> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            warn!("Ignoring submit while a registration request is outstanding");
            return Err(SubmissionError::InFlight);
        };

        let payload = match self.draft.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                let err = SubmissionError::from(e);
                error!(error = %err, "Failed to encode registration draft");
                return Err(err);
            }
        };

        info!(
            username = self.draft.field(RegistrationField::Username),
            "Submitting registration"
        );

        match self.registration.register(&payload).await {
            Ok(response) => {
                info!(response = %response, "Registration accepted");
                self.navigator.navigate(&self.login_route);
                Ok(response)
            }
            Err(e) => {
                error!(error = %e, "There was a problem with the registration request");
                Err(e)
            }
        }
    }
}
