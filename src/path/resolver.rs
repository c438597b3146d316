//! Path resolution against arbitrary nested JSON
//!
//! Rows are opaque JSON values with no fixed shape. Resolution walks the
//! path one segment at a time and stops as soon as any intermediate is
//! missing or null.

use serde_json::Value;

/// Resolves dot-delimited paths against nested JSON values
pub struct PathResolver;

impl PathResolver {
    /// Resolves `path` against `root`.
    ///
    /// Returns `None` the moment any segment is absent or an intermediate
    /// value is null or not an object. A null leaf is returned as
    /// `Some(Null)`; callers treat both as "no data" via [`Self::is_missing`].
    pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
        let mut current = root;
        for segment in path.split('.') {
            if current.is_null() {
                return None;
            }
            current = current.get(segment)?;
        }
        Some(current)
    }

    /// Returns true if a resolved value carries no data (absent or null).
    pub fn is_missing(value: Option<&Value>) -> bool {
        matches!(value, None | Some(Value::Null))
    }
}

/// A reusable key-extraction function for a single path.
///
/// Splits the path once so that repeated extraction during a sort pass does
/// not re-parse the path on every comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathAccessor {
    segments: Vec<String>,
}

impl PathAccessor {
    /// Creates an accessor for a dot-delimited path.
    pub fn new(path: &str) -> Self {
        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// Extracts the value at this accessor's path from a row.
    ///
    /// Same semantics as [`PathResolver::resolve`].
    pub fn get<'a>(&self, row: &'a Value) -> Option<&'a Value> {
        let mut current = row;
        for segment in &self.segments {
            if current.is_null() {
                return None;
            }
            current = current.get(segment)?;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_top_level_field() {
        let row = json!({"name": "edge-gateway"});
        assert_eq!(
            PathResolver::resolve(&row, "name"),
            Some(&json!("edge-gateway"))
        );
    }

    #[test]
    fn test_resolve_nested_path() {
        let row = json!({
            "status": {
                "registration": {
                    "registrar": {"name": "example-registrar"}
                }
            }
        });
        assert_eq!(
            PathResolver::resolve(&row, "status.registration.registrar.name"),
            Some(&json!("example-registrar"))
        );
    }

    #[test]
    fn test_resolve_missing_intermediate_returns_none() {
        let row = json!({"status": {}});
        assert_eq!(
            PathResolver::resolve(&row, "status.registration.registrar.name"),
            None
        );
    }

    #[test]
    fn test_resolve_null_intermediate_returns_none() {
        let row = json!({"status": {"registration": null}});
        assert_eq!(
            PathResolver::resolve(&row, "status.registration.registrar"),
            None
        );
    }

    #[test]
    fn test_resolve_null_leaf_is_preserved() {
        let row = json!({"expires": null});
        assert_eq!(PathResolver::resolve(&row, "expires"), Some(&Value::Null));
        assert!(PathResolver::is_missing(PathResolver::resolve(
            &row, "expires"
        )));
    }

    #[test]
    fn test_resolve_scalar_intermediate_returns_none() {
        // Traversing into a string or number is no data, not a failure
        let row = json!({"name": "alpha"});
        assert_eq!(PathResolver::resolve(&row, "name.length"), None);

        let row = json!({"count": 3});
        assert_eq!(PathResolver::resolve(&row, "count.value"), None);
    }

    #[test]
    fn test_resolve_on_non_object_root() {
        assert_eq!(PathResolver::resolve(&json!(42), "anything"), None);
        assert_eq!(PathResolver::resolve(&Value::Null, "anything"), None);
    }

    #[test]
    fn test_accessor_matches_resolver() {
        let row = json!({"spec": {"replicas": 3}});
        let accessor = PathAccessor::new("spec.replicas");
        assert_eq!(
            accessor.get(&row),
            PathResolver::resolve(&row, "spec.replicas")
        );
    }

    #[test]
    fn test_accessor_is_reusable_across_rows() {
        let accessor = PathAccessor::new("meta.zone");
        let rows = [
            json!({"meta": {"zone": "us-east-1"}}),
            json!({"meta": {}}),
            json!({}),
        ];
        assert_eq!(accessor.get(&rows[0]), Some(&json!("us-east-1")));
        assert_eq!(accessor.get(&rows[1]), None);
        assert_eq!(accessor.get(&rows[2]), None);
    }
}
