//! Parameter substitution
//!
//! Resolution never fails: a reference whose path does not resolve (or
//! resolves to null) is left exactly as written so a later pass with more
//! parameters can still fill it in.

use std::borrow::Cow;

use crate::encode;
use crate::options::ParseOptions;
use crate::path;
use crate::value::Value;

use super::syntax::ReferenceSyntax;
use super::walker;

/// Substitute parameters into `tree` and return the result
///
/// String leaves that are whole-value references (`"@a.b"`) are replaced by
/// the resolved value of any type; other strings have their embedded
/// `{@a.b}` references interpolated. A string root resolves to whatever its
/// reference names, so the result may be a scalar.
///
/// Only `id_character` is read from `options`. Resolved values are written
/// verbatim; percent-encoding belongs to [`parse_object`] and [`parse_string`].
///
/// # Example
///
/// ```rust
/// use param_template::{parse, ParseOptions, Value};
/// use serde_json::json;
///
/// let params: Value = json!({"a": 1, "b": 2}).into();
/// let tree: Value = json!({"x": "@a", "y": "b is {@b}"}).into();
///
/// let resolved = parse(tree, &params, &ParseOptions::default());
/// assert_eq!(resolved, Value::from(json!({"x": 1, "y": "b is 2"})));
/// ```
pub fn parse(tree: Value, parameters: &Value, options: &ParseOptions) -> Value {
    let mut tree = tree;
    parse_in_place(&mut tree, parameters, options);
    tree
}

/// In-place form of [`parse`]
///
/// A `Null` tree or `Null` parameters leave the tree untouched.
pub fn parse_in_place(tree: &mut Value, parameters: &Value, options: &ParseOptions) {
    if tree.is_null() || parameters.is_null() {
        return;
    }

    let syntax = ReferenceSyntax::new(options.id_character);
    walker::transform(tree, &mut |leaf| {
        let text = leaf.as_str()?;
        match syntax.whole_value(text) {
            Some(path) => lookup(parameters, path).cloned(),
            None => match syntax.interpolate(text, |path| interpolated_text(parameters, path, false)) {
                Cow::Borrowed(_) => None,
                Cow::Owned(replaced) => Some(Value::String(replaced)),
            },
        }
    });
}

/// Substitute whole-value references only
///
/// Strings that merely contain a reference (`"x@a"`, `"x{@a}"`) are left
/// alone. Returns the tree for chaining.
pub fn parse_object<'t>(
    tree: &'t mut Value,
    parameters: &Value,
    options: &ParseOptions,
) -> &'t mut Value {
    if tree.is_null() || parameters.is_null() {
        return tree;
    }

    let syntax = ReferenceSyntax::new(options.id_character);
    walker::transform(tree, &mut |leaf| {
        let path = syntax.whole_value(leaf.as_str()?)?;
        lookup(parameters, path).map(|value| written_value(value, options))
    });
    tree
}

/// Interpolate embedded `{@path}` references in `text`
///
/// `options` is either a marker character or full [`ParseOptions`]. A
/// whole-value reference is not special here; only `{...}` tokens are
/// replaced. With `uri_encode`, every interpolated value is percent-encoded.
///
/// ```rust
/// use param_template::{parse_string, Value};
/// use serde_json::json;
///
/// let params: Value = json!({"a": 1}).into();
/// assert_eq!(parse_string("#{#a} {{a}} {#b}", &params, '#'), "#1 {{a}} {#b}");
/// ```
pub fn parse_string(text: &str, parameters: &Value, options: impl Into<ParseOptions>) -> String {
    let options = options.into();
    if text.is_empty() || parameters.is_null() {
        return text.to_string();
    }

    let syntax = ReferenceSyntax::new(options.id_character);
    syntax
        .interpolate(text, |path| interpolated_text(parameters, path, options.uri_encode))
        .into_owned()
}

/// Resolve `path`, treating failures and null values as misses
fn lookup<'p>(parameters: &'p Value, path: &str) -> Option<&'p Value> {
    match path::get(parameters, path) {
        Ok(Value::Null) => {
            tracing::debug!(path, "parameter is null; reference left unresolved");
            None
        }
        Ok(value) => {
            tracing::trace!(path, "parameter resolved");
            Some(value)
        }
        Err(err) => {
            tracing::debug!(path, %err, "parameter not found; reference left unresolved");
            None
        }
    }
}

fn written_value(value: &Value, options: &ParseOptions) -> Value {
    match value {
        Value::String(text) if options.uri_encode => Value::String(encode::uri_component(text)),
        other => other.clone(),
    }
}

fn interpolated_text(parameters: &Value, path: &str, uri_encode: bool) -> Option<String> {
    let text = lookup(parameters, path)?.to_text();
    Some(if uri_encode {
        encode::uri_component(&text)
    } else {
        text
    })
}
