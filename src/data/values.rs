// ABOUTME: Value tree handling for the data model
// ABOUTME: Loads the YAML value file and applies the dotted sub-key nesting transform

use std::fs;
use std::path::Path;

use serde_json::Value as JsonValue;
use tracing::debug;

use super::error::{DataError, Result};

/// The value tree supplied to documents: a string-keyed mapping of
/// arbitrarily nested JSON/YAML-shaped values.
pub type Values = serde_json::Map<String, JsonValue>;

/// Read a YAML file and decode it into a [`Values`] mapping.
///
/// The file must decode to a mapping with string keys; anything else is
/// reported as a decode failure. Both read and decode failures are fatal to
/// the caller.
pub fn load_values_file(path: &Path) -> Result<Values> {
    let text = fs::read_to_string(path).map_err(|source| DataError::ReadValueFile {
        path: path.to_path_buf(),
        source,
    })?;

    let values: Values =
        serde_yaml::from_str(&text).map_err(|source| DataError::DecodeValueFile {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "Loaded {} top-level value keys from {}",
        values.len(),
        path.display()
    );
    Ok(values)
}

/// Nest a value tree under a dotted sub-key path.
///
/// `nest_under("a.b.c", v)` produces `{a: {b: {c: v}}}`. The empty path is
/// the identity. Segments are split on `.` with no escaping of literal dots.
pub fn nest_under(path: &str, values: Values) -> Values {
    if path.is_empty() {
        return values;
    }

    path.split('.').rev().fold(values, |inner, segment| {
        let mut outer = Values::new();
        outer.insert(segment.to_string(), JsonValue::Object(inner));
        outer
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_values() -> Values {
        let mut values = Values::new();
        values.insert("name".to_string(), json!("demo"));
        values.insert("replicas".to_string(), json!(3));
        values
    }

    #[test]
    fn test_nest_under_empty_path_is_identity() {
        let values = sample_values();
        let nested = nest_under("", values.clone());
        assert_eq!(nested, values);
    }

    #[test]
    fn test_nest_under_single_segment() {
        let nested = nest_under("app", sample_values());
        assert_eq!(nested.len(), 1);
        assert_eq!(nested["app"]["name"], json!("demo"));
    }

    #[test]
    fn test_nest_under_lookup_round_trip() {
        let values = sample_values();
        let nested = nest_under("x.y.z", values.clone());

        let inner = nested["x"]["y"]["z"]
            .as_object()
            .expect("nested path should hold the original mapping");
        assert_eq!(inner, &values);
    }

    #[test]
    fn test_nest_under_outer_key_is_first_segment() {
        let nested = nest_under("first.second", sample_values());
        let mut keys = nested.keys();
        assert_eq!(keys.next().map(String::as_str), Some("first"));
        assert_eq!(keys.next(), None);
    }

    #[test]
    fn test_load_values_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a:\n  b: 1\nname: demo").unwrap();

        let values = load_values_file(file.path()).unwrap();
        assert_eq!(values["a"]["b"], json!(1));
        assert_eq!(values["name"], json!("demo"));
    }

    #[test]
    fn test_load_values_file_missing() {
        let err = load_values_file(Path::new("/nonexistent/values.yaml")).unwrap_err();
        assert!(matches!(err, DataError::ReadValueFile { .. }));
    }

    #[test]
    fn test_load_values_file_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a: [unterminated").unwrap();

        let err = load_values_file(file.path()).unwrap_err();
        assert!(matches!(err, DataError::DecodeValueFile { .. }));
    }

    #[test]
    fn test_load_values_file_non_mapping() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "- just\n- a\n- list").unwrap();

        let err = load_values_file(file.path()).unwrap_err();
        assert!(matches!(err, DataError::DecodeValueFile { .. }));
    }
}
