//! Per-value transforms applied to matched text nodes.
//!
//! Each transform takes one raw text node and either produces a typed value
//! or rejects it with a [`ValueError`]; the field extractor attributes the
//! rejection to the enclosing element.

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

use crate::config::{DATETIME_FORMAT, DATE_FORMAT};
use crate::error::ValueError;

/// Matches everything that is not a word character, for phone/fax stripping.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w]").expect("valid regex"));

/// Default transform: trimmed text.
pub fn text(raw: &str) -> Result<String, ValueError> {
    Ok(raw.trim().to_string())
}

/// Parse a trimmed integer.
pub fn integer(raw: &str) -> Result<i64, ValueError> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| ValueError::Integer(trimmed.to_string()))
}

/// Parse a trimmed float.
pub fn float(raw: &str) -> Result<f64, ValueError> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| ValueError::Float(trimmed.to_string()))
}

/// Parse a `YYYY-MM-DDTHH:MM:SS` timestamp.
pub fn datetime(raw: &str) -> Result<NaiveDateTime, ValueError> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, DATETIME_FORMAT).map_err(|_| ValueError::DateTime {
        value: trimmed.to_string(),
        format: DATETIME_FORMAT,
    })
}

/// Parse a `YYYY-MM-DD` date.
pub fn date(raw: &str) -> Result<NaiveDate, ValueError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| ValueError::Date {
        value: trimmed.to_string(),
        format: DATE_FORMAT,
    })
}

/// Strip all non-word characters, for phone and fax numbers.
///
/// # Examples
/// ```
/// use zakupki_extractor::xml::transform::digits;
///
/// assert_eq!(digits("+7 (495) 123-45-67").unwrap(), "74951234567");
/// ```
pub fn digits(raw: &str) -> Result<String, ValueError> {
    Ok(NON_WORD.replace_all(raw, "").into_owned())
}
