//! Reference syntax shared by every operation
//!
//! Two forms open with the marker character (`@` by default):
//!
//! - whole-value: the entire string is `@path.to.value`
//! - embedded: `{@path.to.value}` anywhere inside a string
//!
//! `{{` and `}}` are consumed by the embedded scan and emitted unchanged, so
//! a marker directly inside doubled braces is never a reference.

use std::borrow::Cow;

use regex::{Captures, Regex};

/// Matching rules for one marker character
///
/// Built per call; nothing is cached between operations.
#[derive(Debug, Clone)]
pub struct ReferenceSyntax {
    marker: char,
    embedded: Option<Regex>,
}

/// One match of the embedded scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `{{` or `}}`
    Escape(&'a str),
    /// `{@name}`: the full token text and the dotted path inside it
    Reference { text: &'a str, path: &'a str },
}

impl ReferenceSyntax {
    pub fn new(marker: char) -> Self {
        let pattern = format!(
            r"\{{\{{|\}}\}}|\{{{}([^}}]+)\}}",
            regex::escape(&marker.to_string())
        );
        let embedded = match Regex::new(&pattern) {
            Ok(regex) => Some(regex),
            Err(err) => {
                tracing::warn!(%marker, %err, "embedded reference pattern rejected; only whole-value references apply");
                None
            }
        };
        Self { marker, embedded }
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// Dotted path of a whole-value reference, if `text` is one
    pub fn whole_value<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.strip_prefix(self.marker)
    }

    /// Scan `text` left to right for escapes and embedded references
    pub fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Token<'a>> + 'a {
        self.embedded
            .iter()
            .flat_map(move |regex| regex.captures_iter(text))
            .map(|caps| token(&caps))
    }

    /// Dotted paths of every embedded reference in `text`, in order
    pub fn embedded_paths<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.tokens(text).filter_map(|token| match token {
            Token::Reference { path, .. } => Some(path),
            Token::Escape(_) => None,
        })
    }

    /// Replace each embedded reference with `resolve(path)`
    ///
    /// References for which `resolve` returns `None` keep their original
    /// text, braces included. Escapes are copied through as-is.
    pub fn interpolate<'t, F>(&self, text: &'t str, mut resolve: F) -> Cow<'t, str>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let Some(regex) = &self.embedded else {
            return Cow::Borrowed(text);
        };
        regex.replace_all(text, |caps: &Captures<'_>| match token(caps) {
            Token::Escape(escape) => escape.to_string(),
            Token::Reference { text: original, path } => {
                resolve(path).unwrap_or_else(|| original.to_string())
            }
        })
    }
}

fn token<'a>(caps: &Captures<'a>) -> Token<'a> {
    // Group 0 always participates in a match
    let whole = caps.get(0).map_or("", |m| m.as_str());
    match caps.get(1) {
        Some(path) => Token::Reference {
            text: whole,
            path: path.as_str(),
        },
        None => Token::Escape(whole),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_whole_value() {
        let syntax = ReferenceSyntax::new('@');
        assert_eq!(syntax.whole_value("@a.b"), Some("a.b"));
        assert_eq!(syntax.whole_value("@"), Some(""));
        assert_eq!(syntax.whole_value("x@a"), None);
        assert_eq!(syntax.whole_value("{@a}"), None);
    }

    #[test]
    fn test_whole_value_multibyte_marker() {
        let syntax = ReferenceSyntax::new('§');
        assert_eq!(syntax.whole_value("§name"), Some("name"));
    }

    #[test]
    fn test_tokens_in_order() {
        let syntax = ReferenceSyntax::new('@');
        let tokens: Vec<_> = syntax.tokens("{{x}} {@a.b} }} {@c}").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Escape("{{"),
                Token::Escape("}}"),
                Token::Reference {
                    text: "{@a.b}",
                    path: "a.b"
                },
                Token::Escape("}}"),
                Token::Reference {
                    text: "{@c}",
                    path: "c"
                },
            ]
        );
    }

    #[test]
    fn test_reference_inside_double_braces_is_not_a_reference() {
        let syntax = ReferenceSyntax::new('@');
        assert_eq!(syntax.embedded_paths("{{@a}}").count(), 0);
    }

    #[test]
    fn test_empty_name_is_not_a_reference() {
        let syntax = ReferenceSyntax::new('@');
        assert_eq!(syntax.embedded_paths("{@}").count(), 0);
    }

    #[test]
    fn test_regex_metacharacter_marker() {
        let syntax = ReferenceSyntax::new('$');
        let paths: Vec<_> = syntax.embedded_paths("a {$x} {@y} {$z.w}").collect();
        assert_eq!(paths, vec!["x", "z.w"]);
    }

    #[test]
    fn test_interpolate_keeps_misses_and_escapes() {
        let syntax = ReferenceSyntax::new('@');
        let out = syntax.interpolate("{{a}} {@a} {@missing}", |path| {
            (path == "a").then(|| "1".to_string())
        });
        assert_eq!(out, "{{a}} 1 {@missing}");
    }

    #[test]
    fn test_interpolate_without_tokens_borrows() {
        let syntax = ReferenceSyntax::new('@');
        let out = syntax.interpolate("plain text", |_| None);
        assert!(matches!(out, Cow::Borrowed("plain text")));
    }
}
