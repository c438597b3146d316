//! Unique-count sort keys for array-valued columns
//!
//! Reduces an array column to a single numeric sort key: the count of
//! distinct values reached by projecting every element through a dotted
//! sub-path, flattening nested arrays at each step. This supports keys like
//! "number of distinct registrant names across all IPs across all
//! nameservers" from one declarative path string.

mod resolver;

pub use resolver::ArrayCardinalityResolver;
