//! Appointment and consultation form validation for the clinic site.
//!
//! This crate is the browser-free half of the form behavior. It owns the field
//! model, the per-field predicates, the pure [`validate::validate`] pass, and
//! the [`controller::FormController`] that applies an outcome through the
//! [`host::FormHost`] capability. The `clinic-site` crate implements that
//! capability over the real DOM and schedules the revert timer; everything in
//! here is testable with a mock host and an injected "today".
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`field`] | Field kinds, field specs and the appointment form schema |
//! | [`predicate`] | Per-kind value predicates (email, phone, date, ...) |
//! | [`validate`] | Pure validation pass producing a [`validate::SubmissionOutcome`] |
//! | [`host`] | The [`host::FormHost`] capability the DOM shim implements |
//! | [`controller`] | Submit and revert orchestration plus [`controller::FormOptions`] |
//! | [`revert`] | Pending revert handles keyed per form instance |
//! | [`error`] | Structural errors ([`error::FormError`]) |
//! | [`consts`] | Labels, delays, selectors and class names |

pub mod consts;
pub mod controller;
pub mod error;
pub mod field;
pub mod host;
pub mod predicate;
pub mod revert;
pub mod validate;
