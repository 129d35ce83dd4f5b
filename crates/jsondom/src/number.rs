use core::fmt;

/// A JSON number, stored as its literal text.
///
/// The literal is kept verbatim rather than decoded to a binary form, so the
/// original textual representation (including exponent notation and the
/// rendering of out-of-range floating values) survives a parse/print round
/// trip. Conversions to machine numbers happen in the accessors on
/// [`JsonValue`](crate::JsonValue), which re-parse the literal on every call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonNumber {
    text: String,
}

impl JsonNumber {
    /// Wraps number literal text without validating it.
    ///
    /// Malformed literals are accepted; they surface later as failed
    /// conversions that fall back to the caller-supplied default.
    pub fn new(text: impl Into<String>) -> Self {
        JsonNumber { text: text.into() }
    }

    /// The literal text of this number.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<i64> for JsonNumber {
    fn from(value: i64) -> Self {
        JsonNumber { text: value.to_string() }
    }
}

impl From<f64> for JsonNumber {
    // Debug formatting keeps a trailing `.0` on integral values, so integer
    // and floating literals of the same magnitude stay distinguishable.
    // Infinities format as `inf`/`-inf` and NaN as `NaN`; all three parse
    // back to the same special value, preserving IEEE-754 specials.
    fn from(value: f64) -> Self {
        JsonNumber { text: format!("{value:?}") }
    }
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
