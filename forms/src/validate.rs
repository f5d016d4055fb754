//! Pure validation pass over a snapshot of form fields.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use chrono::NaiveDate;

use crate::field::FormField;
use crate::predicate::{Verdict, check};

/// Outcome of checking a single field on one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub field: String,
    pub valid: bool,
    /// Set only when `valid` is false.
    pub message: Option<String>,
}

/// Aggregate result of one submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub valid: bool,
    /// Failing fields, in the order they were checked.
    pub failures: Vec<ValidationResult>,
}

impl SubmissionOutcome {
    /// Ids of the failing fields.
    pub fn failed_ids(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|r| r.field.as_str())
    }
}

/// Check one field.
#[must_use]
pub fn check_field(field: &FormField, today: NaiveDate) -> ValidationResult {
    let message = match check(field.kind(), &field.value, field.required(), today) {
        Verdict::Valid => None,
        Verdict::Missing => Some(field.spec.missing_message.clone()),
        Verdict::Invalid => Some(field.spec.invalid_message.clone()),
    };
    ValidationResult { field: field.id().to_owned(), valid: message.is_none(), message }
}

/// Check every field. A failure never stops later fields from being checked.
#[must_use]
pub fn validate(fields: &[FormField], today: NaiveDate) -> SubmissionOutcome {
    let failures: Vec<_> = fields
        .iter()
        .map(|field| check_field(field, today))
        .filter(|result| !result.valid)
        .collect();
    SubmissionOutcome { valid: failures.is_empty(), failures }
}
