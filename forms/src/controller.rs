//! Submit and revert orchestration.
//!
//! ARCHITECTURE
//! ============
//! [`FormController::submit`] is the whole submit handler minus the browser:
//! clear stale errors, snapshot the fields, run [`validate`], then either mark
//! the failures or show the success acknowledgment. Scheduling the revert is
//! left to the caller, which owns the timer; [`FormController::revert`] is
//! what that timer runs.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::consts::{REVERT_DELAY_MS, SUCCESS_LABEL};
use crate::error::FormError;
use crate::field::FormField;
use crate::host::FormHost;
use crate::validate::{SubmissionOutcome, validate};

/// Per-form behavior knobs. Every field falls back to its default when omitted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormOptions {
    pub revert_delay_ms: u32,
    pub success_label: String,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self { revert_delay_ms: REVERT_DELAY_MS, success_label: SUCCESS_LABEL.to_owned() }
    }
}

impl FormOptions {
    /// Parse options from a JSON object such as `{"revertDelayMs": 1500}`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Options`] for malformed JSON or mistyped fields.
    pub fn from_json(raw: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Options from an optional attribute value; bad JSON logs and yields defaults.
    #[must_use]
    pub fn from_attribute(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        Self::from_json(raw).unwrap_or_else(|err| {
            log::warn!("ignoring form options {raw:?}: {err}");
            Self::default()
        })
    }
}

/// What a submit attempt did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub outcome: SubmissionOutcome,
    /// Submit label captured before the acknowledgment replaced it.
    /// Always `None` for a rejected submission.
    pub original_label: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct FormController {
    options: FormOptions,
}

impl FormController {
    #[must_use]
    pub fn new(options: FormOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// Run one submit attempt against `host`.
    ///
    /// The caller always suppresses the browser's own submission; on an
    /// accepted outcome it must schedule [`Self::revert`] after
    /// [`FormOptions::revert_delay_ms`].
    ///
    /// # Errors
    ///
    /// Returns an error when a schema field is missing from the host. Stale
    /// errors have already been cleared at that point; nothing else changed.
    pub fn submit<H: FormHost + ?Sized>(&self, host: &mut H, today: NaiveDate) -> Result<Submission, FormError> {
        host.clear_errors();

        let mut fields: Vec<FormField> = Vec::new();
        for spec in host.fields()? {
            let value = host.value(&spec.id)?;
            fields.push(spec.with_value(value));
        }
        let outcome = validate(&fields, today);

        if !outcome.valid {
            for failure in &outcome.failures {
                if let Some(message) = &failure.message {
                    host.set_error(&failure.field, message);
                }
            }
            log::debug!(
                "form rejected: {}",
                outcome.failed_ids().collect::<Vec<_>>().join(", ")
            );
            return Ok(Submission { outcome, original_label: None });
        }

        let original_label = host.submit_label();
        host.show_pending(&self.options.success_label);
        log::debug!("form accepted ({} fields)", fields.len());
        Ok(Submission { outcome, original_label })
    }

    /// Restore the form after an accepted submission.
    pub fn revert<H: FormHost + ?Sized>(&self, host: &mut H, original_label: Option<&str>) {
        host.restore_submit(original_label);
        host.reset();
        host.close_overlay();
        log::debug!("form restored after {} ms", self.options.revert_delay_ms);
    }
}
