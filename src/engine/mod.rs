//! Sort engine for table rows
//!
//! Ties the other subsystems together for a table view:
//!
//! 1. Build a path accessor for the column's sort key
//! 2. Honor a declared column type, or sample rows for the first
//!    non-null value and detect one
//! 3. Look up the comparator (array strategies included)
//! 4. Run a stable, direction-aware sort over the rows
//!
//! # Invariants
//!
//! - Sorting never fails and never panics; bad data degrades to a stable
//!   default ordering
//! - The sort is stable: ties keep their input order
//! - Detection happens once per sort invocation, from the first non-null
//!   sampled value; nothing is cached across invocations

mod sorter;

pub use sorter::TableSorter;
