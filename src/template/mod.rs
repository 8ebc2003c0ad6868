//! Parameter references in data trees
//!
//! A template is an ordinary [`Value`](crate::Value) tree whose string
//! leaves may refer to parameters:
//!
//! ```text
//! {
//!     "host": "@server.host",            // whole value: replaced by any type
//!     "url": "http://{@server.host}/x",  // embedded: interpolated as text
//!     "raw": "{{not a reference}}"       // doubled braces pass through
//! }
//! ```
//!
//! Substitution lives in `resolver`; `introspect` answers which parameters a
//! template needs; `redact` blanks a tree's values.

mod introspect;
mod redact;
mod resolver;
mod syntax;
mod walker;

pub use introspect::{
    get_object_parameters, get_parameter_paths, get_parameter_schema, ParameterPath,
    RequiredParameters,
};
pub use redact::{strip_values, strip_values_with};
pub use resolver::{parse, parse_in_place, parse_object, parse_string};
pub use syntax::{ReferenceSyntax, Token};
