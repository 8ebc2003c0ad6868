//! Dotted-path access into a [`Value`] tree
//!
//! `"c.d"` addresses `tree.c.d`; numeric segments index into arrays.

use crate::error::PathError;
use crate::value::{Map, Value};

/// Resolve a dotted path against `root`
///
/// An empty path addresses the root itself. Empty segments (`"a..b"`) are
/// looked up as the empty key.
pub fn get<'v>(root: &'v Value, path: &str) -> Result<&'v Value, PathError> {
    if path.is_empty() {
        return Ok(root);
    }

    let mut current = root;
    for segment in path.split('.') {
        current = child(current, segment)?;
    }
    Ok(current)
}

fn child<'v>(node: &'v Value, segment: &str) -> Result<&'v Value, PathError> {
    match node {
        Value::Object(map) => map.get(segment).ok_or_else(|| PathError::missing_key(segment)),
        Value::Array(items) => {
            let index = parse_index(segment)?;
            items.get(index).ok_or(PathError::IndexOutOfRange {
                index,
                len: items.len(),
            })
        }
        _ => Err(PathError::not_a_container(segment)),
    }
}

/// Write `value` at the location named by `segments`
///
/// Missing object levels are created along the way. An empty segment list
/// replaces the root.
pub fn set(root: &mut Value, segments: &[&str], value: Value) -> Result<(), PathError> {
    let Some((last, parents)) = segments.split_last() else {
        *root = value;
        return Ok(());
    };

    let mut current = root;
    for segment in parents {
        current = child_mut_or_insert(current, segment)?;
    }

    match current {
        Value::Object(map) => {
            map.insert((*last).to_string(), value);
            Ok(())
        }
        Value::Array(items) => {
            let index = parse_index(last)?;
            let len = items.len();
            let slot = items
                .get_mut(index)
                .ok_or(PathError::IndexOutOfRange { index, len })?;
            *slot = value;
            Ok(())
        }
        _ => Err(PathError::not_a_container(*last)),
    }
}

fn child_mut_or_insert<'v>(node: &'v mut Value, segment: &str) -> Result<&'v mut Value, PathError> {
    match node {
        Value::Object(map) => Ok(map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()))),
        Value::Array(items) => {
            let index = parse_index(segment)?;
            let len = items.len();
            items
                .get_mut(index)
                .ok_or(PathError::IndexOutOfRange { index, len })
        }
        _ => Err(PathError::not_a_container(segment)),
    }
}

fn parse_index(segment: &str) -> Result<usize, PathError> {
    segment
        .parse()
        .map_err(|_| PathError::invalid_index(segment))
}
