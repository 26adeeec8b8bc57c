pub mod shell;
pub mod signup;

pub use shell::{ProgressIndicator, ScreenOutcome, SignupScreen, StepRenderer, StepView, WizardAction};
pub use signup::SignupFlow;
