//! gridsort - a type-detecting, path-aware sorting engine for JSON data tables
//!
//! Produces comparators for table columns over opaque JSON rows: dot-path
//! key extraction, sample-based type detection, and a closed set of
//! comparison strategies with defined null handling. Sorting never fails;
//! every edge case degrades to a stable default ordering.

pub mod cardinality;
pub mod column;
pub mod compare;
pub mod detect;
pub mod engine;
pub mod path;
