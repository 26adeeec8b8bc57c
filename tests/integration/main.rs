mod common;
mod registry_test;
mod submission_test;
mod wizard_test;
