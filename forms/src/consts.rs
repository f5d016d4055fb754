//! Shared constants for form behavior.

// ── Timing ──────────────────────────────────────────────────────

/// Pause between the success acknowledgment and restoring the form.
pub const REVERT_DELAY_MS: u32 = 2000;

// ── Labels ──────────────────────────────────────────────────────

/// Submit control label shown while a simulated submission is acknowledged.
pub const SUCCESS_LABEL: &str = "Request Received";

// ── Selectors ───────────────────────────────────────────────────

/// Id of the dedicated appointment form.
pub const APPOINTMENT_FORM_ID: &str = "appointment-form";

/// Every form the site validates.
pub const TRACKED_FORMS: &str = "#appointment-form, .form-sanctuary";

/// Error-message placeholder inside a field group.
pub const ERROR_PLACEHOLDER: &str = ".form-error";

/// Submit control inside a form.
pub const SUBMIT_CONTROL: &str = "button[type=\"submit\"]";

/// Dismissible overlay a form may be hosted in.
pub const MODAL: &str = ".modal-sanctuary";

/// Backdrop paired with [`MODAL`].
pub const MODAL_OVERLAY: &str = ".modal-overlay";

/// Attribute carrying per-form JSON overrides for [`crate::controller::FormOptions`].
pub const OPTIONS_ATTRIBUTE: &str = "data-form-options";

// ── Classes ─────────────────────────────────────────────────────

/// Class applied to a control that failed validation.
pub const ERROR_CLASS: &str = "error";

/// Class marking an open overlay, menu or transition.
pub const ACTIVE_CLASS: &str = "active";
