//! URI component encoding for interpolated values

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is inside a URI component
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `text` for use as a single URI component
pub fn uri_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_characters_are_encoded() {
        assert_eq!(
            uri_component("2017-04-11T23:59&&:59+02:00"),
            "2017-04-11T23%3A59%26%26%3A59%2B02%3A00"
        );
        assert_eq!(uri_component("a b/c?d=e#f"), "a%20b%2Fc%3Fd%3De%23f");
    }

    #[test]
    fn test_unreserved_characters_pass_through() {
        assert_eq!(uri_component("Az09-_.!~*'()"), "Az09-_.!~*'()");
    }

    #[test]
    fn test_non_ascii_is_utf8_encoded() {
        assert_eq!(uri_component("é"), "%C3%A9");
    }
}
