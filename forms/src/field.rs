//! Field kinds, field specs and the appointment form schema.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

/// Which predicate a field's value is checked against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    FreeText,
    Email,
    Phone,
    Date,
    SingleSelect,
}

impl FieldKind {
    /// Infer the kind of a form control from its tag name and `type` attribute.
    ///
    /// Tag names are compared case-insensitively because the DOM reports them
    /// upper-cased for HTML documents.
    #[must_use]
    pub fn from_control(tag: &str, input_type: Option<&str>) -> Self {
        if tag.eq_ignore_ascii_case("select") {
            return Self::SingleSelect;
        }
        if !tag.eq_ignore_ascii_case("input") {
            return Self::FreeText;
        }
        match input_type.map(str::to_ascii_lowercase).as_deref() {
            Some("email") => Self::Email,
            Some("tel") => Self::Phone,
            Some("date") => Self::Date,
            _ => Self::FreeText,
        }
    }

    /// Messages used when a spec does not name its own.
    #[must_use]
    pub fn default_messages(self) -> (&'static str, &'static str) {
        match self {
            Self::FreeText => ("This field is required.", "This field is required."),
            Self::Email => ("Please enter a valid email address.", "Please enter a valid email address."),
            Self::Phone => ("Please enter a valid phone number.", "Please enter a valid phone number."),
            Self::Date => ("Please select an appointment date.", "Please select a future date."),
            Self::SingleSelect => ("Please select an option.", "Please select an option."),
        }
    }
}

/// Static description of one field: everything except its current value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Shown when a required field is empty.
    pub missing_message: String,
    /// Shown when a non-empty value fails the kind's predicate.
    pub invalid_message: String,
}

impl FieldSpec {
    /// A required field with the kind's default messages.
    #[must_use]
    pub fn required(id: impl Into<String>, kind: FieldKind) -> Self {
        let (missing, invalid) = kind.default_messages();
        Self {
            id: id.into(),
            kind,
            required: true,
            missing_message: missing.to_owned(),
            invalid_message: invalid.to_owned(),
        }
    }

    /// An optional field; it is only checked once it has content.
    #[must_use]
    pub fn optional(id: impl Into<String>, kind: FieldKind) -> Self {
        Self { required: false, ..Self::required(id, kind) }
    }

    /// Use `message` for the missing case.
    #[must_use]
    pub fn missing(mut self, message: impl Into<String>) -> Self {
        self.missing_message = message.into();
        self
    }

    /// Bind a freshly read value to this spec.
    #[must_use]
    pub fn with_value(&self, value: impl Into<String>) -> FormField {
        FormField { spec: self.clone(), value: value.into() }
    }
}

/// A field snapshot taken on one submit attempt. Never cached across attempts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub spec: FieldSpec,
    /// Raw value as read from the control, untrimmed.
    pub value: String,
}

impl FormField {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.spec.id
    }

    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.spec.kind
    }

    #[must_use]
    pub fn required(&self) -> bool {
        self.spec.required
    }
}

/// Schema of `#appointment-form`: name, email, phone, date and service, all required.
#[must_use]
pub fn appointment_form() -> Vec<FieldSpec> {
    vec![
        FieldSpec::required("name", FieldKind::FreeText).missing("Full name is required."),
        FieldSpec::required("email", FieldKind::Email),
        FieldSpec::required("phone", FieldKind::Phone),
        FieldSpec::required("date", FieldKind::Date),
        FieldSpec::required("service", FieldKind::SingleSelect).missing("Please select a service."),
    ]
}
