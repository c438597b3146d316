//! Sort specification types and descriptor parsing

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for sort descriptor parsing
pub type SpecResult<T> = Result<T, SortSpecError>;

/// Errors raised while parsing sort descriptors.
///
/// Descriptor parsing is the only fallible surface; comparison itself
/// degrades silently instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortSpecError {
    /// Empty descriptor or descriptor list
    #[error("Sort descriptor cannot be empty")]
    EmptyDescriptor,

    /// Path with an empty segment, e.g. `a..b` or `.desc`
    #[error("Invalid sort path: {0}")]
    InvalidPath(String),
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Declared sort type for a column.
///
/// Scalar variants map onto the detector's value types; `Array` routes the
/// column through the array strategies instead of scalar comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    Text,
    Number,
    Date,
    Boolean,
    Array,
}

/// Strategy for array-valued columns.
///
/// Serializes as the literal string `"length"` or as the dotted sub-path
/// used for unique counting, matching the `sortArrayBy` column metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArraySortStrategy {
    /// Compare raw array lengths
    Length,
    /// Compare unique-value counts projected through a dotted sub-path
    UniqueBy(String),
}

impl From<String> for ArraySortStrategy {
    fn from(value: String) -> Self {
        if value == "length" {
            ArraySortStrategy::Length
        } else {
            ArraySortStrategy::UniqueBy(value)
        }
    }
}

impl From<ArraySortStrategy> for String {
    fn from(strategy: ArraySortStrategy) -> Self {
        match strategy {
            ArraySortStrategy::Length => "length".to_string(),
            ArraySortStrategy::UniqueBy(path) => path,
        }
    }
}

/// Sort metadata for a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSort {
    /// Dot-delimited path to the sort key
    pub path: String,
    /// Declared type; when absent the engine auto-detects from row samples
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_type: Option<SortType>,
    /// Array strategy for array-valued columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_array_by: Option<ArraySortStrategy>,
    /// Sort direction
    #[serde(default)]
    pub direction: SortDirection,
}

impl ColumnSort {
    /// Creates an ascending sort on a path
    pub fn asc(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sort_type: None,
            sort_array_by: None,
            direction: SortDirection::Asc,
        }
    }

    /// Creates a descending sort on a path
    pub fn desc(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sort_type: None,
            sort_array_by: None,
            direction: SortDirection::Desc,
        }
    }

    /// Declares the column type, skipping auto-detection
    pub fn with_type(mut self, sort_type: SortType) -> Self {
        self.sort_type = Some(sort_type);
        self
    }

    /// Sets the array strategy
    pub fn with_array_by(mut self, strategy: ArraySortStrategy) -> Self {
        self.sort_array_by = Some(strategy);
        self
    }

    /// Parses a `path`, `path.asc`, or `path.desc` descriptor.
    ///
    /// Only a trailing `.asc`/`.desc` is treated as a direction; every other
    /// dot stays part of the path, so `status.phase.desc` sorts
    /// `status.phase` descending while `status.phase` sorts it ascending.
    pub fn parse(descriptor: &str) -> SpecResult<Self> {
        let descriptor = descriptor.trim();
        if descriptor.is_empty() {
            return Err(SortSpecError::EmptyDescriptor);
        }

        let (path, direction) = match descriptor.rfind('.') {
            Some(pos) => match descriptor[pos + 1..].to_lowercase().as_str() {
                "asc" => (&descriptor[..pos], SortDirection::Asc),
                "desc" => (&descriptor[..pos], SortDirection::Desc),
                _ => (descriptor, SortDirection::Asc),
            },
            None => (descriptor, SortDirection::Asc),
        };

        if path.is_empty() || path.split('.').any(str::is_empty) {
            return Err(SortSpecError::InvalidPath(descriptor.to_string()));
        }

        Ok(Self {
            path: path.to_string(),
            sort_type: None,
            sort_array_by: None,
            direction,
        })
    }

    /// Parses a comma-separated descriptor list.
    ///
    /// Blank entries are skipped; an entirely blank list is an error.
    pub fn parse_list(value: &str) -> SpecResult<Vec<Self>> {
        let mut columns = Vec::new();
        for part in value.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            columns.push(Self::parse(part)?);
        }
        if columns.is_empty() {
            return Err(SortSpecError::EmptyDescriptor);
        }
        Ok(columns)
    }
}
