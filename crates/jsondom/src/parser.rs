use std::io::Read;

use lookahead::LookaheadReader;

use crate::error::{ParseError, SyntaxError};
use crate::{JsonArray, JsonMember, JsonNumber, JsonObject, JsonValue};

const BEGIN_OBJECT: u8 = b'{';
const END_OBJECT: u8 = b'}';
const BEGIN_ARRAY: u8 = b'[';
const END_ARRAY: u8 = b']';
const NAME_SEPARATOR: u8 = b':';
const VALUE_SEPARATOR: u8 = b',';
const QUOTE_MARK: u8 = b'"';
const ESCAPE: u8 = b'\\';

// Enough to look past a `\u` escape introducer when pairing surrogates.
const LOOKAHEAD: usize = 8;

/// How forgiving the parser is about deviations from standard JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tolerance {
    /// Standard JSON only.
    Strict,
    /// Also accepts unquoted object member names.
    #[default]
    Lenient,
}

/// A recursive descent parser for JSON documents.
///
/// The top-level value must be an object or an array, and only whitespace
/// may follow it.
pub struct JsonParser<R> {
    input: LookaheadReader<R>,
    tolerance: Tolerance,
}

impl<R: Read> JsonParser<R> {
    /// Creates a lenient parser reading from `input`.
    pub fn new(input: R) -> Self {
        Self::with_tolerance(input, Tolerance::Lenient)
    }

    pub fn with_tolerance(input: R, tolerance: Tolerance) -> Self {
        Self {
            input: LookaheadReader::new(input, LOOKAHEAD),
            tolerance,
        }
    }

    /// Parses a complete JSON document from the input.
    pub fn parse(&mut self) -> Result<JsonValue, ParseError> {
        self.skip_whitespace()?;
        let value = match self.input.peek()? {
            Some(BEGIN_OBJECT) => JsonValue::Object(self.parse_object()?),
            Some(BEGIN_ARRAY) => JsonValue::Array(self.parse_array()?),
            _ => return Err(self.error("expected JSON object or array")),
        };
        self.skip_whitespace()?;
        if let Some(garbage) = self.input.peek()? {
            return Err(self.error(format!(
                "garbage at end of input (unexpected '{}')",
                char::from(garbage)
            )));
        }
        Ok(value)
    }

    fn parse_array(&mut self) -> Result<JsonArray, ParseError> {
        self.accept(BEGIN_ARRAY)?;
        let mut array = JsonArray::new();
        loop {
            self.skip_whitespace()?;
            match self.parse_value()? {
                Some(value) => array.add(value),
                None => {
                    if !array.is_empty() || self.input.peek()? == Some(VALUE_SEPARATOR) {
                        return Err(self.error("missing element in array"));
                    }
                    break;
                }
            }
            self.skip_whitespace()?;
            if !self.skip_byte(VALUE_SEPARATOR)? {
                break;
            }
        }
        self.accept(END_ARRAY)?;
        Ok(array)
    }

    fn parse_object(&mut self) -> Result<JsonObject, ParseError> {
        self.accept(BEGIN_OBJECT)?;
        let mut object = JsonObject::new();
        loop {
            self.skip_whitespace()?;
            match self.parse_member()? {
                Some(member) => object.add_member(member),
                None => {
                    if !object.is_empty() || self.input.peek()? == Some(VALUE_SEPARATOR) {
                        return Err(self.error("missing member in object."));
                    }
                    break;
                }
            }
            self.skip_whitespace()?;
            if !self.skip_byte(VALUE_SEPARATOR)? {
                break;
            }
        }
        self.accept(END_OBJECT)?;
        Ok(object)
    }

    fn parse_member(&mut self) -> Result<Option<JsonMember>, ParseError> {
        let name = match self.input.peek()? {
            Some(QUOTE_MARK) => self.parse_string()?,
            Some(first)
                if self.tolerance == Tolerance::Lenient && is_bare_key_start(first) =>
            {
                self.parse_bare_key()?
            }
            _ => return Ok(None),
        };
        self.skip_whitespace()?;
        self.accept(NAME_SEPARATOR)?;
        self.skip_whitespace()?;
        match self.parse_value()? {
            Some(value) => Ok(Some(JsonMember::new(name, value))),
            None => Err(self.error("missing value for object member")),
        }
    }

    /// Reads an unquoted member name, ending before whitespace, a quote
    /// mark, or the name separator.
    fn parse_bare_key(&mut self) -> Result<String, ParseError> {
        let mut key = Vec::new();
        while let Some(next) = self.input.peek()? {
            if is_whitespace(next) || next == QUOTE_MARK || next == NAME_SEPARATOR {
                break;
            }
            key.push(next);
            self.input.skip(1)?;
        }
        Ok(String::from_utf8(key)
            .unwrap_or_else(|error| String::from_utf8_lossy(error.as_bytes()).into_owned()))
    }

    fn parse_value(&mut self) -> Result<Option<JsonValue>, ParseError> {
        match self.input.peek()? {
            Some(BEGIN_OBJECT) => Ok(Some(JsonValue::Object(self.parse_object()?))),
            Some(BEGIN_ARRAY) => Ok(Some(JsonValue::Array(self.parse_array()?))),
            Some(QUOTE_MARK) => Ok(Some(JsonValue::String(self.parse_string()?))),
            Some(b'0'..=b'9' | b'-' | b'+') => Ok(Some(self.parse_number()?)),
            Some(b't') => {
                self.accept_literal(b"true")?;
                Ok(Some(JsonValue::Bool(true)))
            }
            Some(b'f') => {
                self.accept_literal(b"false")?;
                Ok(Some(JsonValue::Bool(false)))
            }
            Some(b'n') => {
                self.accept_literal(b"null")?;
                Ok(Some(JsonValue::Null))
            }
            _ => Ok(None),
        }
    }

    fn accept_literal(&mut self, literal: &[u8]) -> Result<(), ParseError> {
        for &expected in literal {
            if self.input.pop()? != Some(expected) {
                return Err(self.error("encountered invalid JSON literal"));
            }
        }
        Ok(())
    }

    /// Collects the number literal verbatim. The literal is not validated;
    /// malformed sequences surface later as accessor parse failures.
    fn parse_number(&mut self) -> Result<JsonValue, ParseError> {
        let mut literal = Vec::new();
        loop {
            match self.input.peek()? {
                None => return Err(self.error("end of input while parsing JSON number.")),
                Some(next @ (b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E')) => {
                    literal.push(next);
                    self.input.skip(1)?;
                }
                Some(_) => break,
            }
        }
        // The literal is ASCII by construction.
        let text = String::from_utf8(literal).expect("number literals are ASCII");
        Ok(JsonValue::Number(JsonNumber::new(text)))
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.accept(QUOTE_MARK)?;
        let mut bytes = Vec::new();
        loop {
            match self.input.pop()? {
                None => {
                    return Err(
                        self.error("end of input while parsing JSON string (expected '\"')")
                    )
                }
                Some(ESCAPE) => self.unescape_char(&mut bytes)?,
                Some(QUOTE_MARK) => break,
                Some(other) => bytes.push(other),
            }
        }
        Ok(String::from_utf8(bytes)
            .unwrap_or_else(|error| String::from_utf8_lossy(error.as_bytes()).into_owned()))
    }

    fn unescape_char(&mut self, out: &mut Vec<u8>) -> Result<(), ParseError> {
        match self.input.pop()? {
            None => Err(self.error("end of input in JSON string escape sequence.")),
            Some(escaped @ (b'"' | b'\\' | b'/')) => {
                out.push(escaped);
                Ok(())
            }
            Some(b'b') => {
                out.push(0x08);
                Ok(())
            }
            Some(b'f') => {
                out.push(0x0C);
                Ok(())
            }
            Some(b'n') => {
                out.push(b'\n');
                Ok(())
            }
            Some(b'r') => {
                out.push(b'\r');
                Ok(())
            }
            Some(b't') => {
                out.push(b'\t');
                Ok(())
            }
            Some(b'u') => self.unescape_unicode(out),
            Some(other) => Err(self.error(format!(
                "illegal escape sequence in JSON string: \\{}. \
                 Expected one of \\n, \\r, \\t, etc.",
                char::from(other)
            ))),
        }
    }

    /// Decodes a `\uXXXX` escape. A high surrogate followed by a `\uXXXX`
    /// low surrogate combines into one code point; unpairable surrogates
    /// decode to U+FFFD.
    fn unescape_unicode(&mut self, out: &mut Vec<u8>) -> Result<(), ParseError> {
        let unit = self.hex_escape()?;
        if let Some(decoded) = char::from_u32(u32::from(unit)) {
            push_char(out, decoded);
            return Ok(());
        }
        if (0xD800..0xDC00).contains(&unit)
            && self.input.peek_ahead(0)? == Some(ESCAPE)
            && self.input.peek_ahead(1)? == Some(b'u')
        {
            self.input.skip(2)?;
            let low = self.hex_escape()?;
            if (0xDC00..0xE000).contains(&low) {
                let combined =
                    0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                let decoded =
                    char::from_u32(combined).expect("surrogate pairs decode to valid code points");
                push_char(out, decoded);
            } else {
                // High surrogate without a matching low surrogate.
                push_char(out, char::REPLACEMENT_CHARACTER);
                match char::from_u32(u32::from(low)) {
                    Some(decoded) => push_char(out, decoded),
                    None => push_char(out, char::REPLACEMENT_CHARACTER),
                }
            }
        } else {
            push_char(out, char::REPLACEMENT_CHARACTER);
        }
        Ok(())
    }

    fn hex_escape(&mut self) -> Result<u16, ParseError> {
        let mut unit = 0u16;
        for _ in 0..4 {
            unit = (unit << 4) | u16::from(self.hex_digit()?);
        }
        Ok(unit)
    }

    fn hex_digit(&mut self) -> Result<u8, ParseError> {
        match self.input.pop()? {
            Some(digit @ b'0'..=b'9') => Ok(digit - b'0'),
            Some(digit @ b'a'..=b'f') => Ok(digit - b'a' + 10),
            Some(digit @ b'A'..=b'F') => Ok(digit - b'A' + 10),
            Some(other) => Err(self.error(format!(
                "in JSON string: non-hexadecimal digit '{}' in Unicode escape sequence.",
                char::from(other)
            ))),
            None => Err(self.error("end of input in JSON string escape sequence.")),
        }
    }

    fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        while let Some(next) = self.input.peek()? {
            if !is_whitespace(next) {
                break;
            }
            self.input.skip(1)?;
        }
        Ok(())
    }

    /// Consumes the next byte if it equals `expected`.
    fn skip_byte(&mut self, expected: u8) -> Result<bool, ParseError> {
        if self.input.peek()? == Some(expected) {
            self.input.skip(1)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn accept(&mut self, expected: u8) -> Result<(), ParseError> {
        match self.input.pop()? {
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(self.error(format!(
                "unexpected character (was '{}', expected '{}')",
                char::from(actual),
                char::from(expected)
            ))),
            None => Err(self.error(format!(
                "unexpected end of input (expected '{}')",
                char::from(expected)
            ))),
        }
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::Syntax(SyntaxError::new(message))
    }
}

fn push_char(out: &mut Vec<u8>, decoded: char) {
    let mut buffer = [0u8; 4];
    out.extend_from_slice(decoded.encode_utf8(&mut buffer).as_bytes());
}

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

fn is_bare_key_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'$' || byte == b'_'
}
