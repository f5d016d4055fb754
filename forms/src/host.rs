//! The capability a form's hosting document provides to the controller.
//!
//! The DOM shim implements this over a real `<form>`; tests implement it over
//! a map of values and a log of effects.

use crate::error::FormError;
use crate::field::FieldSpec;

pub trait FormHost {
    /// Fields this form validates, in reporting order.
    ///
    /// # Errors
    ///
    /// Returns an error when the form's markup cannot be inspected.
    fn fields(&self) -> Result<Vec<FieldSpec>, FormError>;

    /// Current raw value of field `id`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MissingField`] when no such control exists.
    fn value(&self, id: &str) -> Result<String, FormError>;

    /// Hide every error message and clear every error state in the form.
    fn clear_errors(&mut self);

    /// Mark field `id` as failing and show `message` in its group.
    fn set_error(&mut self, id: &str, message: &str);

    /// Current label of the submit control, if the form has one.
    fn submit_label(&self) -> Option<String>;

    /// Replace the submit control's label with `label` and disable it.
    fn show_pending(&mut self, label: &str);

    /// Put `label` back on the submit control and re-enable it.
    fn restore_submit(&mut self, label: Option<&str>);

    /// Clear every control back to its initial value.
    fn reset(&mut self);

    /// Close the overlay hosting this form, if any, and release the scroll lock.
    fn close_overlay(&mut self);
}
