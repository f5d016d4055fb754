use super::*;
use crate::field::{FieldKind, FieldSpec, appointment_form};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("date")
}

fn snapshot(values: [&str; 5]) -> Vec<FormField> {
    appointment_form()
        .iter()
        .zip(values)
        .map(|(spec, value)| spec.with_value(value))
        .collect()
}

fn valid_values() -> [&'static str; 5] {
    ["Ada Lovelace", "ada@example.com", "(555) 123-4567", "2026-10-19", "consultation"]
}

// =============================================================
// check_field
// =============================================================

#[test]
fn valid_field_has_no_message() {
    let field = FieldSpec::required("name", FieldKind::FreeText).with_value("Ada");
    let result = check_field(&field, today());
    assert!(result.valid);
    assert_eq!(result.message, None);
    assert_eq!(result.field, "name");
}

#[test]
fn missing_field_uses_missing_message() {
    let field = FieldSpec::required("date", FieldKind::Date).with_value("");
    let result = check_field(&field, today());
    assert!(!result.valid);
    assert_eq!(result.message.as_deref(), Some("Please select an appointment date."));
}

#[test]
fn invalid_field_uses_invalid_message() {
    let field = FieldSpec::required("date", FieldKind::Date).with_value("2026-10-18");
    let result = check_field(&field, today());
    assert_eq!(result.message.as_deref(), Some("Please select a future date."));
}

// =============================================================
// validate
// =============================================================

#[test]
fn all_valid_is_accepted() {
    let outcome = validate(&snapshot(valid_values()), today());
    assert!(outcome.valid);
    assert!(outcome.failures.is_empty());
}

#[test]
fn single_failure_is_rejected_and_isolated() {
    let mut values = valid_values();
    values[2] = "12345";
    let outcome = validate(&snapshot(values), today());
    assert!(!outcome.valid);
    assert_eq!(outcome.failed_ids().collect::<Vec<_>>(), ["phone"]);
    assert_eq!(outcome.failures[0].message.as_deref(), Some("Please enter a valid phone number."));
}

#[test]
fn every_failure_is_reported_in_order() {
    let outcome = validate(&snapshot(["", "a@b", "", "2020-01-01", ""]), today());
    assert!(!outcome.valid);
    assert_eq!(outcome.failed_ids().collect::<Vec<_>>(), ["name", "email", "phone", "date", "service"]);
}

#[test]
fn failure_messages_follow_field() {
    let outcome = validate(&snapshot(["  ", "a@b.c", "123-456-7890", "", ""]), today());
    let messages: Vec<_> = outcome.failures.iter().filter_map(|r| r.message.as_deref()).collect();
    assert_eq!(
        messages,
        ["Full name is required.", "Please select an appointment date.", "Please select a service."]
    );
}

#[test]
fn empty_field_list_is_valid() {
    assert!(validate(&[], today()).valid);
}

#[test]
fn optional_empty_email_does_not_block() {
    let fields = vec![
        FieldSpec::required("message", FieldKind::FreeText).with_value("Hello"),
        FieldSpec::optional("email", FieldKind::Email).with_value(""),
    ];
    assert!(validate(&fields, today()).valid);
}
