//! Value type detection for sampled column values
//!
//! Classifies a sampled value into text, number, date, or boolean using
//! native type checks first, then string-pattern heuristics. Detection is
//! deliberately conservative: ambiguous strings stay text rather than risk
//! a corrupted compare.
//!
//! Array-valued columns are recognized by the caller on the sampled value
//! itself; the detector only classifies scalars.

mod detector;

pub use detector::{TypeDetector, ValueType};
