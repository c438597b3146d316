//! Comparator construction and dispatch
//!
//! A closed set of comparison strategies keyed by value type, each with
//! defined null and invalid-value handling. Comparators never panic and
//! never error: every edge case degrades to a default value so that a sort
//! can never take down the page rendering it.
//!
//! # Null and invalid handling
//!
//! - text: missing coalesces to `""`, case-insensitive compare
//! - number: missing or unparseable coalesces to `0`
//! - date: missing is epoch 0; an invalid parse sorts after a valid one
//! - boolean: true sorts before false; missing coalesces to false
//! - array by length: non-arrays have length 0
//! - array by unique count: a non-array sorts after an array

mod comparators;
mod registry;

pub use comparators::Comparator;
pub use registry::ComparatorRegistry;
