//! Param Template - parameter substitution for data trees
//!
//! This library resolves parameter references inside JSON-like trees, and can
//! report which parameters a tree needs before any are supplied.
//!
//! # Example
//!
//! ```rust
//! use param_template::{get_object_parameters, parse, ParseOptions, Value};
//! use serde_json::json;
//!
//! let template: Value = json!({
//!     "port": "@server.port",
//!     "url": "http://{@server.host}:{@server.port}/",
//!     "user": "@user",
//! })
//! .into();
//!
//! let required = get_object_parameters(&template, '@');
//! assert_eq!(required["server"], vec!["port", "host"]);
//!
//! let params: Value = json!({"server": {"host": "example.org", "port": 8080}}).into();
//! let resolved = parse(template, &params, &ParseOptions::default());
//! assert_eq!(
//!     resolved,
//!     Value::from(json!({
//!         "port": 8080,
//!         "url": "http://example.org:8080/",
//!         "user": "@user",
//!     }))
//! );
//! ```

pub mod encode;
pub mod error;
pub mod options;
pub mod path;
pub mod template;
pub mod value;

pub use error::PathError;
pub use options::{OptionsError, ParseOptions, DEFAULT_MARKER};
pub use template::{
    get_object_parameters, get_parameter_paths, get_parameter_schema, parse, parse_in_place,
    parse_object, parse_string, strip_values, strip_values_with, ParameterPath,
    RequiredParameters,
};
pub use value::{Kind, Map, Opaque, Segment, Value};
