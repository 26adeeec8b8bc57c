use async_trait::async_trait;
use serde_json::Value;

pub mod catalog;
pub mod draft;
pub mod error;
pub mod step;
pub mod validation;

pub use draft::{RegistrationDraft, RegistrationField, RegistrationFields};
pub use error::{DraftError, SubmissionError, SubmissionResult};
pub use step::{Step, TOTAL_STEPS};

/// Outbound call to the registration service
#[async_trait]
pub trait RegistrationPort: Send + Sync {
    /// POST the payload; returns the parsed JSON body of a 2xx response
    async fn register(&self, payload: &Value) -> SubmissionResult<Value>;
}

/// Route changes requested by the flow
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}
