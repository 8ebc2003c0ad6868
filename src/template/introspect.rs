//! Discovering which parameters a template needs
//!
//! These operations recognise references exactly the way substitution does,
//! but collect them instead of resolving them.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::PathError;
use crate::path;
use crate::value::{Map, Value};

use super::syntax::ReferenceSyntax;
use super::walker;

/// Parameter name → sub-paths requested beneath it, in discovery order
///
/// An empty sub-path means the parameter itself was referenced.
pub type RequiredParameters = IndexMap<String, Vec<String>>;

/// Types accepted by a schema leaf
const DEFAULT_TYPES: [&str; 5] = ["string", "object", "number", "integer", "boolean"];

/// Where a whole-value reference reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterPath {
    /// Slash path into the parameter tree
    pub from: String,
    /// Slash path into the template tree; empty when the template is the reference
    pub to: String,
    /// The reference as written, marker included
    pub param_id: String,
}

/// Which reference forms a discovery pass counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Discovery {
    WholeValue,
    WholeValueOrEmbedded,
}

fn reference_paths<'t>(tree: &'t Value, syntax: &'t ReferenceSyntax, discovery: Discovery) -> Vec<&'t str> {
    let mut paths = Vec::new();
    walker::visit_leaves(tree, &mut |leaf| {
        let Some(text) = leaf.as_str() else {
            return;
        };
        if let Some(path) = syntax.whole_value(text) {
            paths.push(path);
        } else if discovery == Discovery::WholeValueOrEmbedded {
            paths.extend(syntax.embedded_paths(text));
        }
    });
    paths
}

/// Collect every parameter `tree` refers to, grouped by top-level name
///
/// Both whole-value and embedded references count. A bare string is treated
/// as a one-leaf tree.
///
/// ```rust
/// use param_template::{get_object_parameters, Value};
/// use serde_json::json;
///
/// let tree: Value = json!({"b": "@val1", "c": "see {@val2.val3}"}).into();
/// let required = get_object_parameters(&tree, '@');
/// assert_eq!(required["val1"], vec![""]);
/// assert_eq!(required["val2"], vec!["val3"]);
/// ```
pub fn get_object_parameters(tree: &Value, marker: char) -> RequiredParameters {
    let syntax = ReferenceSyntax::new(marker);
    let mut required = RequiredParameters::new();

    for reference in reference_paths(tree, &syntax, Discovery::WholeValueOrEmbedded) {
        let (name, sub_path) = reference.split_once('.').unwrap_or((reference, ""));
        let sub_paths = required.entry(name.to_string()).or_default();
        if !sub_paths.iter().any(|existing| existing == sub_path) {
            sub_paths.push(sub_path.to_string());
        }
    }

    required
}

/// Derive a JSON-Schema-like description of the parameters `tree` needs
///
/// Only whole-value references contribute. Every dotted path becomes a chain
/// of `{type: "object", properties: {...}}` levels ending in a leaf that
/// accepts any scalar or object type.
pub fn get_parameter_schema(tree: &Value, marker: char) -> Value {
    let syntax = ReferenceSyntax::new(marker);
    let mut schema = empty_schema();

    for reference in reference_paths(tree, &syntax, Discovery::WholeValue) {
        let mut location: Vec<&str> = Vec::new();
        let mut written: Result<(), PathError> = Ok(());
        for segment in reference.split('.') {
            let mut type_location = location.clone();
            type_location.push("type");
            written = written.and_then(|()| path::set(&mut schema, &type_location, "object".into()));
            location.push("properties");
            location.push(segment);
        }
        let written = written.and_then(|()| path::set(&mut schema, &location, default_type_schema()));

        if let Err(err) = written {
            tracing::debug!(reference, %err, "reference skipped while building parameter schema");
        }
    }

    schema
}

/// List the source and destination of every whole-value reference
///
/// Records appear in the order a pre-order walk meets them.
pub fn get_parameter_paths(tree: &Value, marker: char) -> Vec<ParameterPath> {
    let syntax = ReferenceSyntax::new(marker);
    let mut records = Vec::new();

    walker::visit_leaves_with_path(tree, &mut |leaf, location| {
        let Some(reference) = leaf.as_str().and_then(|text| syntax.whole_value(text)) else {
            return;
        };
        records.push(ParameterPath {
            from: format!("/{}", reference.replace('.', "/")),
            to: location.to_string(),
            param_id: format!("{}{}", syntax.marker(), reference),
        });
    });

    records
}

fn empty_schema() -> Value {
    let mut schema = Map::new();
    schema.insert("type".to_string(), "object".into());
    schema.insert("properties".to_string(), Value::Object(Map::new()));
    Value::Object(schema)
}

fn default_type_schema() -> Value {
    let mut leaf = Map::new();
    leaf.insert(
        "type".to_string(),
        Value::Array(DEFAULT_TYPES.iter().map(|&name| Value::from(name)).collect()),
    );
    Value::Object(leaf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn required(entries: &[(&str, &[&str])]) -> RequiredParameters {
        entries
            .iter()
            .map(|(name, paths)| {
                (
                    name.to_string(),
                    paths.iter().map(|p| p.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_object_parameters_group_sub_paths() {
        let tree: Value = json!({"a": 1, "b": "@val1", "c": {"d": "@val2.val3"}, "e": "@val1.val4"}).into();
        assert_eq!(
            get_object_parameters(&tree, '@'),
            required(&[("val1", &["", "val4"][..]), ("val2", &["val3"][..])])
        );
    }

    #[test]
    fn test_object_parameters_deduplicate() {
        let tree: Value = json!(["@a.b", "{@a.b} {@a}", "@a"]).into();
        assert_eq!(get_object_parameters(&tree, '@'), required(&[("a", &["b", ""][..])]));
    }

    #[test]
    fn test_object_parameters_split_at_first_dot() {
        let tree = Value::from("@a.b.c");
        assert_eq!(get_object_parameters(&tree, '@'), required(&[("a", &["b.c"][..])]));
    }

    #[test]
    fn test_object_parameters_non_string_scalar() {
        assert!(get_object_parameters(&Value::from(1), '@').is_empty());
        assert!(get_object_parameters(&Value::Null, '@').is_empty());
    }

    #[test]
    fn test_schema_ignores_embedded_references() {
        let tree: Value = json!({"a": "x {@val1}", "b": "@val2"}).into();
        let schema = get_parameter_schema(&tree, '@');
        let properties = schema.as_object().unwrap()["properties"].as_object().unwrap();
        assert_eq!(properties.keys().collect::<Vec<_>>(), vec!["val2"]);
    }

    #[test]
    fn test_schema_parent_then_child_becomes_object() {
        let tree: Value = json!({"a": "@val1", "b": "@val1.val4"}).into();
        assert_eq!(
            get_parameter_schema(&tree, '@'),
            Value::from(json!({
                "type": "object",
                "properties": {
                    "val1": {
                        "type": "object",
                        "properties": {
                            "val4": {"type": ["string", "object", "number", "integer", "boolean"]}
                        }
                    }
                }
            }))
        );
    }

    #[test]
    fn test_schema_is_idempotent() {
        let tree: Value = json!({"a": "@x.y", "b": ["@z", "@x.w"]}).into();
        assert_eq!(get_parameter_schema(&tree, '@'), get_parameter_schema(&tree, '@'));
    }

    #[test]
    fn test_schema_empty_for_null() {
        assert_eq!(
            get_parameter_schema(&Value::Null, '@'),
            Value::from(json!({"type": "object", "properties": {}}))
        );
    }

    #[test]
    fn test_paths_with_custom_marker() {
        let tree: Value = json!({"a": "#x.y", "b": "@ignored"}).into();
        assert_eq!(
            get_parameter_paths(&tree, '#'),
            vec![ParameterPath {
                from: "/x/y".to_string(),
                to: "/a".to_string(),
                param_id: "#x.y".to_string(),
            }]
        );
    }

    #[test]
    fn test_parameter_path_serializes_camel_case() {
        let record = ParameterPath {
            from: "/val1".to_string(),
            to: "/b".to_string(),
            param_id: "@val1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({"from": "/val1", "to": "/b", "paramId": "@val1"})
        );
    }
}
