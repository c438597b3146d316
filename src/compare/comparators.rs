//! Concrete comparison strategies
//!
//! Each strategy accepts resolved column values (possibly absent) and
//! returns an ordering. Strategies are anti-symmetric: swapping the sides
//! flips the sign except when both normalize to the same value.

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::cardinality::ArrayCardinalityResolver;

/// A concrete two-sided comparison strategy.
///
/// The set is closed; dispatch is an exhaustive match rather than anything
/// open-ended, so the caller can select a strategy discovered at runtime
/// without dynamic dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparator {
    /// Case-insensitive text ordering
    Text,
    /// Numeric ordering, coalescing missing values to zero
    Number,
    /// Epoch-millisecond ordering with invalid values sorting last
    Date,
    /// True-first boolean ordering
    Boolean,
    /// Raw array length
    ArrayLength,
    /// Unique-count of values projected through a dotted sub-path
    ArrayUniqueBy(String),
}

impl Comparator {
    /// Compares two resolved column values.
    ///
    /// Accepts absent values on either side and degrades per the
    /// null-coalescing rules of each strategy; never panics.
    pub fn compare(&self, a: Option<&Value>, b: Option<&Value>) -> Ordering {
        match self {
            Comparator::Text => compare_text(a, b),
            Comparator::Number => compare_number(a, b),
            Comparator::Date => compare_date(a, b),
            Comparator::Boolean => compare_boolean(a, b),
            Comparator::ArrayLength => compare_array_length(a, b),
            Comparator::ArrayUniqueBy(sub_path) => compare_array_unique(a, b, sub_path),
        }
    }
}

fn coerce_text(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

/// Folds a string to its base characters: NFD decomposition with combining
/// marks stripped, then Unicode lowercase. `café`, `CAFE`, and `cafe` all
/// fold to the same sequence.
fn fold_base_chars(value: &str) -> impl Iterator<Item = char> + '_ {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn compare_text(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = coerce_text(a);
    let b = coerce_text(b);
    // Iterator comparison keeps the hot sort path free of per-call
    // lowercase allocations
    fold_base_chars(&a).cmp(fold_base_chars(&b))
}

fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .unwrap_or(0.0),
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

fn compare_number(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    coerce_number(a)
        .partial_cmp(&coerce_number(b))
        .unwrap_or(Ordering::Equal)
}

/// Parses a value to epoch milliseconds; `None` means unparseable.
///
/// Missing values are epoch 0, numbers are taken as epoch milliseconds,
/// and strings are tried as RFC 3339, then naive datetime, then bare date.
fn parse_epoch_millis(value: Option<&Value>) -> Option<i64> {
    match value {
        None | Some(Value::Null) => Some(0),
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => parse_date_string(s),
        _ => None,
    }
}

fn parse_date_string(value: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc().timestamp_millis());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }
    None
}

fn compare_date(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (parse_epoch_millis(a), parse_epoch_millis(b)) {
        (Some(a_ms), Some(b_ms)) => a_ms.cmp(&b_ms),
        // Invalid values sort after valid ones
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn coerce_boolean(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(true)))
}

fn compare_boolean(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    // True sorts before false
    coerce_boolean(b).cmp(&coerce_boolean(a))
}

fn compare_array_length(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let length = |value: Option<&Value>| value.and_then(Value::as_array).map_or(0, Vec::len);
    length(a).cmp(&length(b))
}

fn compare_array_unique(a: Option<&Value>, b: Option<&Value>, sub_path: &str) -> Ordering {
    match (a.filter(|v| v.is_array()), b.filter(|v| v.is_array())) {
        (Some(a_arr), Some(b_arr)) => {
            ArrayCardinalityResolver::unique_count(a_arr, sub_path)
                .cmp(&ArrayCardinalityResolver::unique_count(b_arr, sub_path))
        }
        // A non-array always sorts after an array
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
