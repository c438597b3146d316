//! Sub-path projection and unique counting over nested arrays

use std::collections::HashSet;

use serde_json::Value;

/// Reduces array-valued sort keys to unique-count metrics
pub struct ArrayCardinalityResolver;

impl ArrayCardinalityResolver {
    /// Counts distinct string-coerced values reached by projecting every
    /// element of `value` through `sub_path`.
    ///
    /// Returns 0 when `value` is not an array. At each path segment the
    /// current level is flattened to arbitrary depth before projection, so
    /// intermediate arrays of arrays collapse transparently.
    ///
    /// Deduplication is by string coercion, not structural equality: the
    /// number `5` and the string `"5"` count as one value.
    pub fn unique_count(value: &Value, sub_path: &str) -> usize {
        let array = match value.as_array() {
            Some(items) => items,
            None => return 0,
        };

        let mut level: Vec<&Value> = array.iter().collect();
        for segment in sub_path.split('.') {
            let mut next = Vec::new();
            for item in Self::flatten(&level) {
                let projected = match item.as_object().and_then(|obj| obj.get(segment)) {
                    Some(v) if !v.is_null() => v,
                    _ => continue,
                };
                next.push(projected);
            }
            level = next;
        }

        let mut seen = HashSet::new();
        for item in Self::flatten(&level) {
            if !item.is_null() {
                seen.insert(Self::coerce_key(item));
            }
        }
        seen.len()
    }

    /// Flattens arbitrarily nested arrays into a flat list of leaf items.
    fn flatten<'a>(items: &[&'a Value]) -> Vec<&'a Value> {
        let mut flat = Vec::new();
        for item in items.iter().copied() {
            Self::flatten_into(item, &mut flat);
        }
        flat
    }

    fn flatten_into<'a>(value: &'a Value, out: &mut Vec<&'a Value>) {
        match value {
            Value::Array(items) => {
                for item in items {
                    Self::flatten_into(item, out);
                }
            }
            other => out.push(other),
        }
    }

    /// String coercion used for deduplication.
    fn coerce_key(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
