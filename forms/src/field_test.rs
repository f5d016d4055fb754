use super::*;

// =============================================================
// FieldKind::from_control
// =============================================================

#[test]
fn select_tag_is_single_select() {
    assert_eq!(FieldKind::from_control("SELECT", None), FieldKind::SingleSelect);
}

#[test]
fn input_types_map_to_kinds() {
    assert_eq!(FieldKind::from_control("INPUT", Some("email")), FieldKind::Email);
    assert_eq!(FieldKind::from_control("INPUT", Some("tel")), FieldKind::Phone);
    assert_eq!(FieldKind::from_control("INPUT", Some("date")), FieldKind::Date);
    assert_eq!(FieldKind::from_control("input", Some("TEXT")), FieldKind::FreeText);
}

#[test]
fn untyped_input_is_free_text() {
    assert_eq!(FieldKind::from_control("input", None), FieldKind::FreeText);
}

#[test]
fn textarea_is_free_text() {
    assert_eq!(FieldKind::from_control("TEXTAREA", Some("email")), FieldKind::FreeText);
}

// =============================================================
// FieldSpec
// =============================================================

#[test]
fn required_spec_uses_kind_defaults() {
    let spec = FieldSpec::required("when", FieldKind::Date);
    assert!(spec.required);
    assert_eq!(spec.missing_message, "Please select an appointment date.");
    assert_eq!(spec.invalid_message, "Please select a future date.");
}

#[test]
fn optional_spec_is_not_required() {
    let spec = FieldSpec::optional("contact", FieldKind::Email);
    assert!(!spec.required);
    assert_eq!(spec.id, "contact");
}

#[test]
fn missing_overrides_only_the_missing_message() {
    let spec = FieldSpec::required("who", FieldKind::FreeText).missing("Who?");
    assert_eq!(spec.missing_message, "Who?");
    assert_eq!(spec.invalid_message, "This field is required.");
}

#[test]
fn with_value_keeps_raw_value() {
    let field = FieldSpec::required("name", FieldKind::FreeText).with_value("  Ada ");
    assert_eq!(field.value, "  Ada ");
    assert_eq!(field.id(), "name");
    assert!(field.required());
    assert_eq!(field.kind(), FieldKind::FreeText);
}

// =============================================================
// appointment_form
// =============================================================

#[test]
fn appointment_form_field_order() {
    let ids: Vec<_> = appointment_form().into_iter().map(|s| s.id).collect();
    assert_eq!(ids, ["name", "email", "phone", "date", "service"]);
}

#[test]
fn appointment_form_is_all_required() {
    assert!(appointment_form().iter().all(|s| s.required));
}

#[test]
fn appointment_form_messages() {
    let form = appointment_form();
    assert_eq!(form[0].missing_message, "Full name is required.");
    assert_eq!(form[1].invalid_message, "Please enter a valid email address.");
    assert_eq!(form[2].invalid_message, "Please enter a valid phone number.");
    assert_eq!(form[4].missing_message, "Please select a service.");
}
