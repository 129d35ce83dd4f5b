//! # jsondom
//!
//! A small JSON document model with a recursive descent parser and a
//! configurable pretty-printer.
//!
//! Documents parse into a [`JsonValue`] tree that preserves member order,
//! duplicate member names, and the literal text of numbers. The parser is
//! lenient by default, additionally accepting unquoted object member names;
//! [`Tolerance::Strict`] restricts it to standard JSON.
//!
//! ```rust
//! use jsondom::JsonValue;
//!
//! let value = jsondom::parse_str(r#"{"answer": 42, "tags": ["a", "b"]}"#)?;
//! assert_eq!(value.object().get("answer").int_value(0), 42);
//! assert_eq!(value.object().get("tags").array().len(), 2);
//! assert_eq!(
//!     value.to_compact_string(),
//!     r#"{"answer":42,"tags":["a","b"]}"#
//! );
//! # Ok::<(), jsondom::ParseError>(())
//! ```

use std::io::Read;

mod array;
mod error;
#[cfg(feature = "serde_json")]
mod impls;
mod number;
mod object;
mod parser;
mod print;
mod value;

pub use array::JsonArray;
pub use error::{ParseError, SyntaxError};
pub use number::JsonNumber;
pub use object::{JsonMember, JsonObject};
pub use parser::{JsonParser, Tolerance};
pub use value::JsonValue;

/// Parses a complete JSON document from `input` in lenient mode.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] if the input is not a well-formed JSON
/// object or array, and [`ParseError::Io`] if the reader fails.
pub fn parse<R: Read>(input: R) -> Result<JsonValue, ParseError> {
    JsonParser::new(input).parse()
}

/// Parses a complete JSON document from a string in lenient mode.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] if the input is not a well-formed JSON
/// object or array.
pub fn parse_str(input: &str) -> Result<JsonValue, ParseError> {
    parse(input.as_bytes())
}
