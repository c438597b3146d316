//! Column sort metadata
//!
//! Describes how a single column participates in sorting: the dot-delimited
//! path to its sort key, an optionally declared type (auto-detected from row
//! samples when absent), an array strategy for array-valued columns, and a
//! direction.
//!
//! Metadata deserializes from the same camelCase shape the table views
//! declare (`sortType`, `sortArrayBy`), and a compact string descriptor form
//! (`path`, `path.asc`, `path.desc`) is accepted for order query parameters.

mod spec;

pub use spec::{ArraySortStrategy, ColumnSort, SortDirection, SortSpecError, SortType, SpecResult};
