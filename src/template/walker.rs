//! Recursive descent over value trees
//!
//! Arrays are visited by index and objects in key order; every other node is
//! a leaf handed to the visitor. Opaque values are leaves.

use crate::value::{Kind, Value};

/// Visit every leaf, overwriting it when `visit` returns a replacement
///
/// A leaf root is visited like any other leaf, so its replacement becomes the
/// new root.
pub fn transform<F>(node: &mut Value, visit: &mut F)
where
    F: FnMut(&Value) -> Option<Value>,
{
    match node.kind() {
        Kind::Sequence | Kind::Mapping => {
            for child in node.children_mut() {
                transform(child, visit);
            }
        }
        Kind::Text | Kind::Atom => {
            if let Some(replacement) = visit(node) {
                *node = replacement;
            }
        }
    }
}

/// Visit every leaf in pre-order without modifying the tree
pub fn visit_leaves<'v, F>(node: &'v Value, visit: &mut F)
where
    F: FnMut(&'v Value),
{
    match node.kind() {
        Kind::Sequence | Kind::Mapping => {
            for (_, child) in node.entries() {
                visit_leaves(child, visit);
            }
        }
        Kind::Text | Kind::Atom => visit(node),
    }
}

/// Visit every leaf along with its structural path (`/a/0/b`)
///
/// The root's path is the empty string.
pub fn visit_leaves_with_path<'v, F>(node: &'v Value, visit: &mut F)
where
    F: FnMut(&'v Value, &str),
{
    let mut path = String::new();
    descend(node, &mut path, visit);
}

fn descend<'v, F>(node: &'v Value, path: &mut String, visit: &mut F)
where
    F: FnMut(&'v Value, &str),
{
    match node.kind() {
        Kind::Sequence | Kind::Mapping => {
            let base = path.len();
            for (segment, child) in node.entries() {
                path.push('/');
                path.push_str(&segment.to_string());
                descend(child, path, visit);
                path.truncate(base);
            }
        }
        Kind::Text | Kind::Atom => visit(node, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Opaque;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_transform_replaces_leaves_in_place() {
        let mut tree: Value = json!({"a": 1, "b": [2, "x"], "c": {"d": true}}).into();
        transform(&mut tree, &mut |leaf| match leaf {
            Value::Number(_) => Some(Value::from("n")),
            _ => None,
        });
        assert_eq!(tree, Value::from(json!({"a": "n", "b": ["n", "x"], "c": {"d": true}})));
    }

    #[test]
    fn test_transform_leaf_root() {
        let mut root = Value::from("x");
        transform(&mut root, &mut |_| Some(Value::from(7)));
        assert_eq!(root, Value::from(7));
    }

    #[test]
    fn test_transform_does_not_enter_opaque() {
        let mut root = Value::Array(vec![Opaque::new("date", "2017-04-11").into()]);
        let mut seen = Vec::new();
        transform(&mut root, &mut |leaf| {
            seen.push(leaf.clone());
            None
        });
        assert_eq!(seen, vec![Value::from(Opaque::new("date", "2017-04-11"))]);
    }

    #[test]
    fn test_visit_leaves_pre_order() {
        let tree: Value = json!({"z": "first", "a": ["second", {"k": "third"}]}).into();
        let mut seen = Vec::new();
        visit_leaves(&tree, &mut |leaf| seen.push(leaf.to_text()));
        assert_eq!(seen, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_containers_have_no_leaves() {
        let tree: Value = json!({"steps": {}, "list": []}).into();
        let mut count = 0;
        visit_leaves(&tree, &mut |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_visit_leaves_with_path() {
        let tree: Value = json!([{"a": 1}, {"a": {"b": [2, 3]}}]).into();
        let mut seen = Vec::new();
        visit_leaves_with_path(&tree, &mut |_, path| seen.push(path.to_string()));
        assert_eq!(seen, vec!["/0/a", "/1/a/b/0", "/1/a/b/1"]);
    }

    #[test]
    fn test_root_leaf_has_empty_path() {
        let root = Value::from("@val1");
        let mut seen = Vec::new();
        visit_leaves_with_path(&root, &mut |_, path| seen.push(path.to_string()));
        assert_eq!(seen, vec![""]);
    }
}
