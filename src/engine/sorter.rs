//! Row sorting with type auto-detection

use std::cmp::Ordering;

use serde_json::Value;
use tracing::{debug, trace};

use crate::column::{ArraySortStrategy, ColumnSort, SortDirection, SortType};
use crate::compare::{Comparator, ComparatorRegistry};
use crate::detect::{TypeDetector, ValueType};
use crate::path::{PathAccessor, PathResolver};

/// Sorts table rows by column metadata
pub struct TableSorter;

impl TableSorter {
    /// Sorts rows in place by a single column.
    ///
    /// The sort is stable; ties keep their input order.
    pub fn sort(rows: &mut [Value], column: &ColumnSort) {
        let compare = Self::row_comparator(rows, column);
        rows.sort_by(|a, b| compare(a, b));
    }

    /// Sorts rows in place by several columns; earlier columns dominate.
    pub fn sort_multi(rows: &mut [Value], columns: &[ColumnSort]) {
        let keys: Vec<(PathAccessor, Comparator, SortDirection)> = columns
            .iter()
            .map(|column| {
                let accessor = PathAccessor::new(&column.path);
                let comparator = Self::comparator_for(rows, column, &accessor);
                debug!(
                    path = %column.path,
                    direction = column.direction.as_str(),
                    "built row comparator"
                );
                (accessor, comparator, column.direction)
            })
            .collect();

        rows.sort_by(|a, b| {
            for (accessor, comparator, direction) in &keys {
                let ordering = comparator.compare(accessor.get(a), accessor.get(b));
                let ordering = match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            Ordering::Equal
        });
    }

    /// Builds a ready-to-use, direction-aware row comparison function for a
    /// column, sampling `rows` for type detection when needed.
    pub fn row_comparator(
        rows: &[Value],
        column: &ColumnSort,
    ) -> impl Fn(&Value, &Value) -> Ordering {
        let accessor = PathAccessor::new(&column.path);
        let comparator = Self::comparator_for(rows, column, &accessor);
        let direction = column.direction;
        debug!(
            path = %column.path,
            direction = direction.as_str(),
            "built row comparator"
        );

        move |a, b| {
            let ordering = comparator.compare(accessor.get(a), accessor.get(b));
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
    }

    /// Selects a comparator for an undeclared column by sampling rows.
    ///
    /// The sample is the first non-null resolved value in row order; if the
    /// sample is an array the column uses the array strategy (length by
    /// default), otherwise the detected scalar type. Columns with no data at
    /// all fall back to text.
    pub fn auto_comparator(rows: &[Value], path: &str) -> Comparator {
        let accessor = PathAccessor::new(path);
        Self::detect_comparator(rows, &accessor, None)
    }

    /// Builds the comparator for a column, honoring a declared type and
    /// auto-detecting otherwise.
    fn comparator_for(rows: &[Value], column: &ColumnSort, accessor: &PathAccessor) -> Comparator {
        match column.sort_type {
            Some(declared) => Self::declared_comparator(declared, column.sort_array_by.as_ref()),
            None => Self::detect_comparator(rows, accessor, column.sort_array_by.as_ref()),
        }
    }

    fn declared_comparator(
        declared: SortType,
        array_by: Option<&ArraySortStrategy>,
    ) -> Comparator {
        match declared {
            SortType::Text => ComparatorRegistry::get(ValueType::Text),
            SortType::Number => ComparatorRegistry::get(ValueType::Number),
            SortType::Date => ComparatorRegistry::get(ValueType::Date),
            SortType::Boolean => ComparatorRegistry::get(ValueType::Boolean),
            SortType::Array => {
                ComparatorRegistry::get_array(array_by.unwrap_or(&ArraySortStrategy::Length))
            }
        }
    }

    fn detect_comparator(
        rows: &[Value],
        accessor: &PathAccessor,
        array_by: Option<&ArraySortStrategy>,
    ) -> Comparator {
        let sample = rows
            .iter()
            .map(|row| accessor.get(row))
            .find(|value| !PathResolver::is_missing(*value))
            .flatten();

        match sample {
            Some(value) if value.is_array() => {
                trace!("sample is array-valued");
                ComparatorRegistry::get_array(array_by.unwrap_or(&ArraySortStrategy::Length))
            }
            other => {
                let detected = TypeDetector::detect(other);
                trace!(detected = detected.as_str(), "auto-detected column type");
                ComparatorRegistry::get(detected)
            }
        }
    }
}
