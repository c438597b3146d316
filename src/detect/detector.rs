//! Type classification for sampled values
//!
//! Detection rules, in priority order:
//!
//! 1. Missing or null values are text
//! 2. Native booleans are boolean
//! 3. Native numbers are number
//! 4. Strings with an ISO date prefix (`YYYY-MM-DD`) are dates
//! 5. Strings that are non-blank after trimming and parse to a finite
//!    number are numbers
//! 6. Everything else is text

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

/// Classification of a sampled column value.
///
/// Exactly one type is attributed to a column for the duration of one sort
/// operation. Array columns are handled by the caller before detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Text,
    Number,
    Date,
    Boolean,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Text => "text",
            ValueType::Number => "number",
            ValueType::Date => "date",
            ValueType::Boolean => "boolean",
        }
    }
}

fn iso_date_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("valid ISO date pattern"))
}

/// Classifies sampled values into sortable types
pub struct TypeDetector;

impl TypeDetector {
    /// Classifies a sampled value.
    ///
    /// Pure function of the value's runtime shape; the same input always
    /// yields the same classification.
    pub fn detect(sample: Option<&Value>) -> ValueType {
        let value = match sample {
            Some(v) if !v.is_null() => v,
            _ => return ValueType::Text,
        };

        match value {
            Value::Bool(_) => ValueType::Boolean,
            Value::Number(_) => ValueType::Number,
            Value::String(s) => Self::detect_string(s),
            _ => ValueType::Text,
        }
    }

    /// Classifies a string value by pattern.
    ///
    /// Ambiguous strings stay text: a blank or partially-numeric string
    /// must not silently switch a column to numeric order.
    fn detect_string(value: &str) -> ValueType {
        if iso_date_prefix().is_match(value) {
            return ValueType::Date;
        }

        let trimmed = value.trim();
        if !trimmed.is_empty() && trimmed.parse::<f64>().map_or(false, f64::is_finite) {
            return ValueType::Number;
        }

        ValueType::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_null_default_to_text() {
        assert_eq!(TypeDetector::detect(None), ValueType::Text);
        assert_eq!(TypeDetector::detect(Some(&Value::Null)), ValueType::Text);
    }

    #[test]
    fn test_native_types() {
        assert_eq!(TypeDetector::detect(Some(&json!(true))), ValueType::Boolean);
        assert_eq!(TypeDetector::detect(Some(&json!(false))), ValueType::Boolean);
        assert_eq!(TypeDetector::detect(Some(&json!(42))), ValueType::Number);
        assert_eq!(TypeDetector::detect(Some(&json!(3.25))), ValueType::Number);
    }

    #[test]
    fn test_iso_date_strings() {
        assert_eq!(
            TypeDetector::detect(Some(&json!("2024-05-01"))),
            ValueType::Date
        );
        assert_eq!(
            TypeDetector::detect(Some(&json!("2024-05-01T12:30:00Z"))),
            ValueType::Date
        );
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(TypeDetector::detect(Some(&json!("42"))), ValueType::Number);
        assert_eq!(
            TypeDetector::detect(Some(&json!(" 42.5 "))),
            ValueType::Number
        );
        assert_eq!(TypeDetector::detect(Some(&json!("-7"))), ValueType::Number);
    }

    #[test]
    fn test_ambiguous_strings_stay_text() {
        assert_eq!(TypeDetector::detect(Some(&json!("42abc"))), ValueType::Text);
        assert_eq!(TypeDetector::detect(Some(&json!(""))), ValueType::Text);
        assert_eq!(TypeDetector::detect(Some(&json!("   "))), ValueType::Text);
        assert_eq!(TypeDetector::detect(Some(&json!("NaN"))), ValueType::Text);
        assert_eq!(
            TypeDetector::detect(Some(&json!("Infinity"))),
            ValueType::Text
        );
    }

    #[test]
    fn test_containers_default_to_text() {
        // Arrays are recognized by the caller, never by the detector
        assert_eq!(TypeDetector::detect(Some(&json!([1, 2]))), ValueType::Text);
        assert_eq!(
            TypeDetector::detect(Some(&json!({"a": 1}))),
            ValueType::Text
        );
    }

    #[test]
    fn test_detection_is_deterministic() {
        let value = json!("2024-01-15");
        for _ in 0..3 {
            assert_eq!(TypeDetector::detect(Some(&value)), ValueType::Date);
        }
    }
}
