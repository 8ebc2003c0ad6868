//! Options controlling substitution
//!
//! Options can be built in code or loaded from TOML:
//!
//! ```toml
//! idCharacter = "#"
//! copy = false
//! uriEncode = true
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Marker used when none is configured
pub const DEFAULT_MARKER: char = '@';

/// Errors that can occur when loading options
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Failed to read options file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse options TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("'{0}' cannot be used as a reference marker")]
    InvalidMarker(char),
}

/// Configuration for the substitution operations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Character that opens a reference (`@a`, `{@a}`)
    pub id_character: char,

    /// Copy resolved values before writing them into the template.
    ///
    /// Parameters are borrowed, so written values are always owned clones;
    /// the flag is kept so option files written for other hosts still load.
    pub copy: bool,

    /// Percent-encode resolved string values as URI components
    pub uri_encode: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            id_character: DEFAULT_MARKER,
            copy: false,
            uri_encode: false,
        }
    }
}

impl From<char> for ParseOptions {
    fn from(id_character: char) -> Self {
        Self::default().with_id_character(id_character)
    }
}

impl From<&ParseOptions> for ParseOptions {
    fn from(options: &ParseOptions) -> Self {
        options.clone()
    }
}

impl ParseOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reference marker
    pub fn with_id_character(mut self, id_character: char) -> Self {
        self.id_character = id_character;
        self
    }

    /// Set whether resolved values are copied
    pub fn with_copy(mut self, copy: bool) -> Self {
        self.copy = copy;
        self
    }

    /// Set whether resolved strings are URI-encoded
    pub fn with_uri_encode(mut self, uri_encode: bool) -> Self {
        self.uri_encode = uri_encode;
        self
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load options from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, OptionsError> {
        let options: ParseOptions = toml::from_str(content)?;
        if matches!(options.id_character, '{' | '}') {
            return Err(OptionsError::InvalidMarker(options.id_character));
        }
        Ok(options)
    }
}
