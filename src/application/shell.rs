//! Presentation shell for the signup wizard.
//!
//! The shell owns a [`SignupFlow`] and drives it from the actions a
//! [`StepRenderer`] produces. How a step is drawn, and how progress is shown,
//! is left to the renderer and the [`ProgressIndicator`].

use serde_json::Value;
use tracing::{debug, info};

use super::signup::SignupFlow;
use crate::domain::validation::{self, DraftIssue};
use crate::domain::{RegistrationDraft, RegistrationField, Step, TOTAL_STEPS};

/// What the user asked for on the current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    Advance,
    Retreat,
    SetField(RegistrationField, String),
    Submit,
    Quit,
}

/// Everything a renderer needs to draw one step
pub struct StepView<'a> {
    pub step: Step,
    pub draft: &'a RegistrationDraft,
    /// Advisory issues, only filled in on the last step
    pub issues: &'a [DraftIssue],
}

pub trait StepRenderer {
    /// Render the step and return the next user action
    fn next_action(&mut self, view: &StepView<'_>) -> anyhow::Result<WizardAction>;
}

pub trait ProgressIndicator {
    fn show(&mut self, current: Step, total: u8) -> anyhow::Result<()>;
}

/// How a wizard session ended
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenOutcome {
    /// The service accepted the registration; carries its response body
    Registered(Value),
    /// The user left the wizard
    Quit,
}

pub struct SignupScreen<R, P> {
    flow: SignupFlow,
    renderer: R,
    progress: P,
}

impl<R: StepRenderer, P: ProgressIndicator> SignupScreen<R, P> {
    pub fn new(flow: SignupFlow, renderer: R, progress: P) -> Self {
        Self {
            flow,
            renderer,
            progress,
        }
    }

    pub fn flow(&self) -> &SignupFlow {
        &self.flow
    }

    /// Run until the registration goes through or the user quits.
    ///
    /// A failed submission keeps the user on the current step; the failure
    /// only shows up in the log.
    pub async fn run(&mut self) -> anyhow::Result<ScreenOutcome> {
        loop {
            let step = self.flow.step();
            self.progress.show(step, TOTAL_STEPS)?;

            let issues = if step.is_last() {
                validation::validate(self.flow.draft())
            } else {
                Vec::new()
            };
            let view = StepView {
                step,
                draft: self.flow.draft(),
                issues: &issues,
            };

            let action = self.renderer.next_action(&view)?;
            debug!(step = step.get(), ?action, "Wizard action");

            match action {
                WizardAction::Advance => self.flow.advance(),
                WizardAction::Retreat => self.flow.retreat(),
                WizardAction::SetField(field, value) => self.flow.set_field(field, value),
                WizardAction::Submit => {
                    if let Ok(response) = self.flow.submit().await {
                        return Ok(ScreenOutcome::Registered(response));
                    }
                }
                WizardAction::Quit => {
                    info!(step = step.get(), "Signup abandoned");
                    return Ok(ScreenOutcome::Quit);
                }
            }
        }
    }
}
