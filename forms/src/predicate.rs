//! Per-kind value predicates.
//!
//! Every predicate takes the raw control value and trims it itself. The email
//! and phone shapes are deliberately loose; they catch typos, not RFC 5322.

#[cfg(test)]
#[path = "predicate_test.rs"]
mod predicate_test;

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::field::FieldKind;

/// `local@domain.tld`, where each part is one or more non-space, non-`@` characters.
static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// At least ten characters drawn from digits, whitespace, `-`, `(`, `)` and `+`.
static PHONE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[0-9\s\-()+]{10,}$").ok());

fn matches(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    Option::as_ref(pattern).is_some_and(|re| re.is_match(value.trim()))
}

/// Format produced by `<input type="date">`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result of checking one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    /// Empty (after trimming) where a value is required.
    Missing,
    /// Present but fails the kind's shape or constraint.
    Invalid,
}

/// True when the value has non-whitespace content.
#[must_use]
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[must_use]
pub fn is_email(value: &str) -> bool {
    matches(&EMAIL, value)
}

#[must_use]
pub fn is_phone(value: &str) -> bool {
    matches(&PHONE, value)
}

/// Parse a `YYYY-MM-DD` date value.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// True when `value` names `today` or a later calendar day.
///
/// Unparseable values are rejected rather than treated as "not in the past".
#[must_use]
pub fn is_not_before(value: &str, today: NaiveDate) -> bool {
    parse_date(value).is_some_and(|date| date >= today)
}

/// Check a raw value against `kind`.
///
/// Empty values are [`Verdict::Missing`] when `required` and [`Verdict::Valid`]
/// otherwise; only non-empty values reach the kind's predicate.
#[must_use]
pub fn check(kind: FieldKind, value: &str, required: bool, today: NaiveDate) -> Verdict {
    if !is_filled(value) {
        return if required { Verdict::Missing } else { Verdict::Valid };
    }
    let ok = match kind {
        // An empty placeholder option is already covered by the filled check.
        FieldKind::FreeText | FieldKind::SingleSelect => true,
        FieldKind::Email => is_email(value),
        FieldKind::Phone => is_phone(value),
        FieldKind::Date => is_not_before(value, today),
    };
    if ok { Verdict::Valid } else { Verdict::Invalid }
}
