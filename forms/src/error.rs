//! Structural form errors.
//!
//! A field failing validation is never an error; it is a flag on a
//! [`crate::validate::ValidationResult`]. These variants cover a host page
//! that does not meet the form's markup contract.

/// Error returned when a form cannot be read or configured.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A field named by the form's schema is absent from the document.
    #[error("form field not found: #{0}")]
    MissingField(String),
    /// The `data-form-options` attribute is not valid JSON for `FormOptions`.
    #[error("invalid form options: {0}")]
    Options(#[from] serde_json::Error),
}
