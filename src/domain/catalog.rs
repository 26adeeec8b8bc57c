//! Choice lists accepted by the registration service

use super::draft::RegistrationField;

pub const DEFAULT_SUBSCRIPTION: &str = "Free Tier";

pub const SUBSCRIPTION_TIERS: &[&str] = &["Free Tier", "Business Tier", "Enterprise Tier"];

pub const EMPLOYEE_RANGES: &[&str] = &[
    "1-10",
    "11-50",
    "51-200",
    "201-500",
    "501-1000",
    "1001-5000",
    "5001-10000",
    "10001+",
];

pub const PROVINCES: &[&str] = &[
    "Alberta",
    "British Columbia",
    "Manitoba",
    "New Brunswick",
    "Newfoundland and Labrador",
    "Nova Scotia",
    "Ontario",
    "Prince Edward Island",
    "Quebec",
    "Saskatchewan",
];

pub const SECURITY_QUESTIONS: &[&str] = &[
    "What is your mother\u{2019}s maiden name?",
    "What was the name of your first pet?",
    "What was the make of your first car?",
    "What is your favorite color?",
    "What city were you born in?",
];

/// Allowed values for `field`, or `None` for free-text fields
pub fn choices(field: RegistrationField) -> Option<&'static [&'static str]> {
    match field {
        RegistrationField::Subscription => Some(SUBSCRIPTION_TIERS),
        RegistrationField::NumberOfEmployees => Some(EMPLOYEE_RANGES),
        RegistrationField::Province => Some(PROVINCES),
        RegistrationField::SecurityQuestion => Some(SECURITY_QUESTIONS),
        _ => None,
    }
}
