//! Dot-path resolution over nested JSON rows
//!
//! Paths are plain property names joined by `.`; array indices and wildcards
//! are not supported. Resolution is a total function: a missing segment or a
//! null intermediate yields "no data", never an error.

mod resolver;

pub use resolver::{PathAccessor, PathResolver};
