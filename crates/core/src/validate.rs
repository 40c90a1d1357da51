//! Pure field validators.
//!
//! Each function either returns the normalized value or fails with
//! [`CoreError::Validation`] naming the offending field and the expected
//! shape. Optional variants pass `None` through unchanged. Nothing here
//! has side effects; validation always happens before any state is read
//! or written.

use chrono::{DateTime, NaiveDate};
use uuid::{Uuid, Variant};

use crate::error::CoreError;

/// Required non-blank string.
pub fn require_str(value: Option<&str>, field: &str) -> Result<String, CoreError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Required finite number.
pub fn require_number(value: Option<f64>, field: &str) -> Result<f64, CoreError> {
    match value {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(CoreError::Validation(format!("{field} must be a number"))),
    }
}

/// Optional finite number.
pub fn optional_number(value: Option<f64>, field: &str) -> Result<Option<f64>, CoreError> {
    match value {
        None => Ok(None),
        Some(n) if n.is_finite() => Ok(Some(n)),
        Some(_) => Err(CoreError::Validation(format!("{field} must be a number"))),
    }
}

/// Required membership in a named value set.
///
/// `allowed` feeds the error message; `parse` does the actual mapping so
/// the two cannot drift apart only in the message.
pub fn require_enum<T, F>(
    value: Option<&str>,
    field: &str,
    allowed: &[&str],
    parse: F,
) -> Result<T, CoreError>
where
    F: FnOnce(&str) -> Option<T>,
{
    value
        .and_then(parse)
        .ok_or_else(|| CoreError::Validation(format!("{field} must be one of {}", allowed.join(", "))))
}

/// Optional membership in a named value set.
pub fn optional_enum<T, F>(
    value: Option<&str>,
    field: &str,
    allowed: &[&str],
    parse: F,
) -> Result<Option<T>, CoreError>
where
    F: FnOnce(&str) -> Option<T>,
{
    match value {
        None => Ok(None),
        Some(s) => require_enum(Some(s), field, allowed, parse).map(Some),
    }
}

/// Required calendar date: `YYYY-MM-DD`, or an RFC 3339 timestamp whose
/// date part is taken.
pub fn require_date(value: Option<&str>, field: &str) -> Result<NaiveDate, CoreError> {
    let s = value
        .ok_or_else(|| CoreError::Validation(format!("{field} must be a valid date string")))?;
    parse_date(s)
        .ok_or_else(|| CoreError::Validation(format!("{field} must be a valid date string")))
}

/// Optional calendar date.
pub fn optional_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>, CoreError> {
    match value {
        None => Ok(None),
        Some(s) => require_date(Some(s), field).map(Some),
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Required entity identifier: a hyphenated UUID of version 1–5 with an
/// RFC 4122 variant. Any other string fails, including the 32-character
/// unhyphenated form.
pub fn require_uuid(value: &str, field: &str) -> Result<Uuid, CoreError> {
    let invalid = || CoreError::Validation(format!("{field} must be a valid UUID"));

    let group_lengths: Vec<usize> = value.split('-').map(str::len).collect();
    if group_lengths != [8, 4, 4, 4, 12] {
        return Err(invalid());
    }
    let uuid = Uuid::parse_str(value).map_err(|_| invalid())?;
    match uuid.get_version_num() {
        1..=5 => {}
        _ => return Err(invalid()),
    }
    if uuid.get_variant() != Variant::RFC4122 {
        return Err(invalid());
    }
    Ok(uuid)
}
