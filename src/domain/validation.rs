//! Advisory checks on a draft.
//!
//! Nothing here blocks submission; the registration service has the final
//! say. The terminal shell uses these to warn before the last step.

use thiserror::Error;

use super::catalog;
use super::draft::{RegistrationDraft, RegistrationField};

/// Fields the registration service refuses to store empty
pub const REQUIRED_FIELDS: &[RegistrationField] = &[
    RegistrationField::Username,
    RegistrationField::Password,
    RegistrationField::Email,
    RegistrationField::FirstName,
    RegistrationField::LastName,
    RegistrationField::Province,
    RegistrationField::SecurityQuestion,
    RegistrationField::SecurityAnswer,
    RegistrationField::Subscription,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftIssue {
    #[error("{} is required", .0.label())]
    Missing(RegistrationField),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("{} is not a valid email address", .0)]
    InvalidEmail(String),

    #[error("{value:?} is not an accepted {}", .field.label())]
    NotAChoice {
        field: RegistrationField,
        value: String,
    },
}

pub fn validate(draft: &RegistrationDraft) -> Vec<DraftIssue> {
    let mut issues = Vec::new();

    for field in REQUIRED_FIELDS {
        if draft.field(*field).trim().is_empty() {
            issues.push(DraftIssue::Missing(*field));
        }
    }

    if draft.field(RegistrationField::Password) != draft.field(RegistrationField::ConfirmPassword) {
        issues.push(DraftIssue::PasswordMismatch);
    }

    let email = draft.field(RegistrationField::Email).trim();
    if !email.is_empty() && !looks_like_email(email) {
        issues.push(DraftIssue::InvalidEmail(email.to_string()));
    }

    for field in RegistrationField::ALL {
        let value = draft.field(field);
        if value.is_empty() {
            continue;
        }
        if let Some(allowed) = catalog::choices(field) {
            if !allowed.contains(&value) {
                issues.push(DraftIssue::NotAChoice {
                    field,
                    value: value.to_string(),
                });
            }
        }
    }

    issues
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}
