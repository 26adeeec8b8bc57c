//! Registration draft: the in-memory record collected by the wizard

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::catalog::DEFAULT_SUBSCRIPTION;
use super::error::DraftError;
use super::step::Step;

/// Every field the registration form collects.
///
/// The set is closed: string keys coming from outside are parsed with
/// [`RegistrationField::from_str`] and unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    Username,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
    PhoneNumber,
    Email,
    Company,
    NumberOfEmployees,
    Province,
    ProfilePictureUrl,
    SecurityQuestion,
    SecurityAnswer,
    MyResumeContent,
    Subscription,
}

impl RegistrationField {
    /// All fields in form order
    pub const ALL: [RegistrationField; 15] = [
        RegistrationField::Username,
        RegistrationField::Password,
        RegistrationField::ConfirmPassword,
        RegistrationField::FirstName,
        RegistrationField::LastName,
        RegistrationField::PhoneNumber,
        RegistrationField::Email,
        RegistrationField::Company,
        RegistrationField::NumberOfEmployees,
        RegistrationField::Province,
        RegistrationField::ProfilePictureUrl,
        RegistrationField::SecurityQuestion,
        RegistrationField::SecurityAnswer,
        RegistrationField::MyResumeContent,
        RegistrationField::Subscription,
    ];

    /// JSON key used in the registration payload
    pub fn key(self) -> &'static str {
        match self {
            RegistrationField::Username => "username",
            RegistrationField::Password => "password",
            RegistrationField::ConfirmPassword => "confirmPassword",
            RegistrationField::FirstName => "first_name",
            RegistrationField::LastName => "last_name",
            RegistrationField::PhoneNumber => "phone_number",
            RegistrationField::Email => "email",
            RegistrationField::Company => "company",
            RegistrationField::NumberOfEmployees => "number_of_employees",
            RegistrationField::Province => "province",
            RegistrationField::ProfilePictureUrl => "profile_picture_url",
            RegistrationField::SecurityQuestion => "security_question",
            RegistrationField::SecurityAnswer => "security_answer",
            RegistrationField::MyResumeContent => "my_resume_content",
            RegistrationField::Subscription => "subscription",
        }
    }

    /// Human-readable label for prompts
    pub fn label(self) -> &'static str {
        match self {
            RegistrationField::Username => "Username",
            RegistrationField::Password => "Password",
            RegistrationField::ConfirmPassword => "Confirm password",
            RegistrationField::FirstName => "First name",
            RegistrationField::LastName => "Last name",
            RegistrationField::PhoneNumber => "Phone number",
            RegistrationField::Email => "Email",
            RegistrationField::Company => "Company",
            RegistrationField::NumberOfEmployees => "Number of employees",
            RegistrationField::Province => "Province",
            RegistrationField::ProfilePictureUrl => "Profile picture URL",
            RegistrationField::SecurityQuestion => "Security question",
            RegistrationField::SecurityAnswer => "Security answer",
            RegistrationField::MyResumeContent => "Resume",
            RegistrationField::Subscription => "Subscription",
        }
    }

    /// Wizard step that collects this field
    pub fn step(self) -> Step {
        let n = match self {
            RegistrationField::Username
            | RegistrationField::Password
            | RegistrationField::ConfirmPassword => 1,
            RegistrationField::FirstName
            | RegistrationField::LastName
            | RegistrationField::PhoneNumber
            | RegistrationField::Email => 2,
            RegistrationField::Company
            | RegistrationField::NumberOfEmployees
            | RegistrationField::Province => 3,
            RegistrationField::ProfilePictureUrl
            | RegistrationField::SecurityQuestion
            | RegistrationField::SecurityAnswer => 4,
            RegistrationField::MyResumeContent | RegistrationField::Subscription => 5,
        };
        Step::new(n).unwrap_or_default()
    }

    /// Fields collected on `step`, in form order
    pub fn for_step(step: Step) -> impl Iterator<Item = RegistrationField> {
        Self::ALL.into_iter().filter(move |f| f.step() == step)
    }

    /// Whether the value should be masked when echoed back
    pub fn is_secret(self) -> bool {
        matches!(
            self,
            RegistrationField::Password | RegistrationField::ConfirmPassword
        )
    }
}

impl FromStr for RegistrationField {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| DraftError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for RegistrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Field values as sent to the registration service.
///
/// Serializes to a flat JSON object whose keys are exactly
/// [`RegistrationField::key`] for every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrationFields {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(rename = "confirmPassword", default)]
    pub confirm_password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub number_of_employees: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub profile_picture_url: String,
    #[serde(default)]
    pub security_question: String,
    #[serde(default)]
    pub security_answer: String,
    #[serde(default)]
    pub my_resume_content: String,
    #[serde(default = "default_subscription")]
    pub subscription: String,
}

fn default_subscription() -> String {
    DEFAULT_SUBSCRIPTION.to_string()
}

impl Default for RegistrationFields {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            email: String::new(),
            company: String::new(),
            number_of_employees: String::new(),
            province: String::new(),
            profile_picture_url: String::new(),
            security_question: String::new(),
            security_answer: String::new(),
            my_resume_content: String::new(),
            subscription: default_subscription(),
        }
    }
}

impl RegistrationFields {
    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Username => &self.username,
            RegistrationField::Password => &self.password,
            RegistrationField::ConfirmPassword => &self.confirm_password,
            RegistrationField::FirstName => &self.first_name,
            RegistrationField::LastName => &self.last_name,
            RegistrationField::PhoneNumber => &self.phone_number,
            RegistrationField::Email => &self.email,
            RegistrationField::Company => &self.company,
            RegistrationField::NumberOfEmployees => &self.number_of_employees,
            RegistrationField::Province => &self.province,
            RegistrationField::ProfilePictureUrl => &self.profile_picture_url,
            RegistrationField::SecurityQuestion => &self.security_question,
            RegistrationField::SecurityAnswer => &self.security_answer,
            RegistrationField::MyResumeContent => &self.my_resume_content,
            RegistrationField::Subscription => &self.subscription,
        }
    }

    fn slot(&mut self, field: RegistrationField) -> &mut String {
        match field {
            RegistrationField::Username => &mut self.username,
            RegistrationField::Password => &mut self.password,
            RegistrationField::ConfirmPassword => &mut self.confirm_password,
            RegistrationField::FirstName => &mut self.first_name,
            RegistrationField::LastName => &mut self.last_name,
            RegistrationField::PhoneNumber => &mut self.phone_number,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Company => &mut self.company,
            RegistrationField::NumberOfEmployees => &mut self.number_of_employees,
            RegistrationField::Province => &mut self.province,
            RegistrationField::ProfilePictureUrl => &mut self.profile_picture_url,
            RegistrationField::SecurityQuestion => &mut self.security_question,
            RegistrationField::SecurityAnswer => &mut self.security_answer,
            RegistrationField::MyResumeContent => &mut self.my_resume_content,
            RegistrationField::Subscription => &mut self.subscription,
        }
    }

    pub fn set(&mut self, field: RegistrationField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }
}

/// The wizard's working state: current step plus every field value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    step: Step,
    fields: RegistrationFields,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from previously collected values, at step 1
    pub fn from_fields(fields: RegistrationFields) -> Self {
        Self {
            step: Step::FIRST,
            fields,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Move to the next step; no-op on the last step
    pub fn advance(&mut self) {
        self.step = self.step.next();
    }

    /// Move to the previous step; no-op on the first step
    pub fn retreat(&mut self) {
        self.step = self.step.prev();
    }

    pub fn field(&self, field: RegistrationField) -> &str {
        self.fields.get(field)
    }

    /// Replace one field's value, leaving all others unchanged
    pub fn set_field(&mut self, field: RegistrationField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Same as [`set_field`](Self::set_field) for a raw JSON key
    pub fn set_field_by_key(&mut self, key: &str, value: impl Into<String>) -> Result<(), DraftError> {
        let field = key.parse::<RegistrationField>()?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn fields(&self) -> &RegistrationFields {
        &self.fields
    }

    /// All `(field, value)` pairs in form order
    pub fn entries(&self) -> impl Iterator<Item = (RegistrationField, &str)> {
        RegistrationField::ALL
            .into_iter()
            .map(move |f| (f, self.fields.get(f)))
    }

    /// JSON body for the registration request
    pub fn to_payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(&self.fields)
    }
}
