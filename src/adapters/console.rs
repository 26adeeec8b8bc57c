//! Line-oriented terminal renderer for the signup wizard

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::application::{ProgressIndicator, StepRenderer, StepView, WizardAction};
use crate::domain::{catalog, RegistrationField, Step};

fn step_title(step: Step) -> &'static str {
    match step.get() {
        1 => "Account",
        2 => "Personal details",
        3 => "Company",
        4 => "Profile & security",
        _ => "Resume & subscription",
    }
}

/// Prompts for every field of a step, then for a navigation command
pub struct ConsoleRenderer<R, W> {
    input: R,
    output: W,
    pending: VecDeque<WizardAction>,
    fields_shown: Option<Step>,
}

impl<R: BufRead, W: Write> ConsoleRenderer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
            fields_shown: None,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// `None` on end of input
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Queues a `SetField` for every changed value; false on end of input
    fn prompt_fields(&mut self, view: &StepView<'_>) -> anyhow::Result<bool> {
        writeln!(self.output, "== {} ==", step_title(view.step))?;

        for field in RegistrationField::for_step(view.step) {
            let current = view.draft.field(field);
            let choices = catalog::choices(field);

            if let Some(choices) = choices {
                for (i, choice) in choices.iter().enumerate() {
                    writeln!(self.output, "  {}) {}", i + 1, choice)?;
                }
            }

            let shown = if field.is_secret() && !current.is_empty() {
                "*".repeat(current.chars().count())
            } else {
                current.to_string()
            };
            write!(self.output, "{} [{}]: ", field.label(), shown)?;
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(false);
            };
            if answer.is_empty() {
                continue;
            }

            let value = match (choices, answer.parse::<usize>()) {
                (Some(choices), Ok(n)) if (1..=choices.len()).contains(&n) => choices[n - 1].to_string(),
                _ => answer,
            };
            if value != current {
                self.pending.push_back(WizardAction::SetField(field, value));
            }
        }

        Ok(true)
    }

    fn prompt_command(&mut self, view: &StepView<'_>) -> anyhow::Result<WizardAction> {
        if !view.issues.is_empty() {
            writeln!(self.output, "Before you submit, check:")?;
            for issue in view.issues {
                writeln!(self.output, "  - {}", issue)?;
            }
        }

        let last = view.step.is_last();
        loop {
            if last {
                write!(self.output, "[s]ubmit, [b]ack, [q]uit: ")?;
            } else {
                write!(self.output, "[n]ext, [b]ack, [q]uit: ")?;
            }
            self.output.flush()?;

            let Some(answer) = self.read_line()? else {
                return Ok(WizardAction::Quit);
            };
            match (answer.trim().to_ascii_lowercase().as_str(), last) {
                ("" | "n" | "next", false) => return Ok(WizardAction::Advance),
                ("" | "s" | "submit", true) => return Ok(WizardAction::Submit),
                ("b" | "back", _) => return Ok(WizardAction::Retreat),
                ("q" | "quit", _) => return Ok(WizardAction::Quit),
                _ => writeln!(self.output, "Unrecognised choice")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> StepRenderer for ConsoleRenderer<R, W> {
    fn next_action(&mut self, view: &StepView<'_>) -> anyhow::Result<WizardAction> {
        if let Some(action) = self.pending.pop_front() {
            return Ok(action);
        }

        if self.fields_shown != Some(view.step) {
            self.fields_shown = Some(view.step);
            if !self.prompt_fields(view)? {
                return Ok(WizardAction::Quit);
            }
            if let Some(action) = self.pending.pop_front() {
                return Ok(action);
            }
        }

        self.fields_shown = None;
        self.prompt_command(view)
    }
}

/// Writes "Step n of N" with a small bar
pub struct ConsoleProgress<W> {
    output: W,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> ProgressIndicator for ConsoleProgress<W> {
    fn show(&mut self, current: Step, total: u8) -> anyhow::Result<()> {
        let done = current.get() as usize;
        let bar = format!(
            "{}{}",
            "#".repeat(done),
            "-".repeat((total as usize).saturating_sub(done))
        );
        writeln!(self.output, "\nStep {} of {} [{}]", current.get(), total, bar)?;
        Ok(())
    }
}
