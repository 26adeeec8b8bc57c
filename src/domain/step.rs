//! Wizard step counter

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::DraftError;

/// Number of steps in the registration wizard
pub const TOTAL_STEPS: u8 = 5;

/// A wizard step, always within `1..=TOTAL_STEPS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Step(u8);

impl Step {
    pub const FIRST: Step = Step(1);
    pub const LAST: Step = Step(TOTAL_STEPS);

    pub fn new(value: u8) -> Result<Self, DraftError> {
        if (1..=TOTAL_STEPS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DraftError::StepOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Next step, saturating at the last one
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1).min(TOTAL_STEPS))
    }

    /// Previous step, saturating at the first one
    pub fn prev(self) -> Self {
        Self(self.0.saturating_sub(1).max(1))
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u8> for Step {
    type Error = DraftError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Step::new(value)
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, TOTAL_STEPS)
    }
}
