//! Redaction: blank every leaf while keeping the tree's shape

use crate::value::Value;

use super::walker;

/// Replace every leaf of `tree` with `Null`
pub fn strip_values(tree: Value) -> Value {
    strip_values_with(tree, Value::Null)
}

/// Replace every leaf of `tree` with `replacement`
///
/// Containers keep their keys, order and nesting. A leaf root (including an
/// opaque value) is replaced outright. A falsy root (`null`, `false`, `0`,
/// `""`) is returned as-is, and a falsy `replacement` writes `Null`.
///
/// ```rust
/// use param_template::{strip_values_with, Value};
/// use serde_json::json;
///
/// let tree: Value = json!({"a": 1, "b": [1, 2]}).into();
/// assert_eq!(
///     strip_values_with(tree, "xxx".into()),
///     Value::from(json!({"a": "xxx", "b": ["xxx", "xxx"]}))
/// );
/// ```
pub fn strip_values_with(tree: Value, replacement: Value) -> Value {
    if is_falsy(&tree) {
        return tree;
    }
    let replacement = if is_falsy(&replacement) {
        Value::Null
    } else {
        replacement
    };
    if !tree.is_container() {
        return replacement;
    }

    let mut tree = tree;
    walker::transform(&mut tree, &mut |_| Some(replacement.clone()));
    tree
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}
