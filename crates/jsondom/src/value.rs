use std::hash::{Hash, Hasher};
use std::mem;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::{JsonArray, JsonNumber, JsonObject, ParseError};

/// The shared Unknown sentinel returned by failed lookups.
pub(crate) static UNKNOWN: JsonValue = JsonValue::Unknown;

static EMPTY_OBJECT: JsonObject = JsonObject::new();
static EMPTY_ARRAY: JsonArray = JsonArray::new();

/// Fixed-seed hasher so element hashes are stable for the XOR combination
/// in the container `Hash` impls.
static ELEMENT_HASHER: LazyLock<ahash::RandomState> =
    LazyLock::new(|| ahash::RandomState::with_seeds(0x6a73, 0x6f6e, 0x646f, 0x6d21));

pub(crate) fn element_hash(element: &impl Hash) -> u64 {
    ELEMENT_HASHER.hash_one(element)
}

/// A node in a JSON document tree.
///
/// `Unknown` is a sentinel distinct from `Null`: lookups and conversions
/// that have no valid result produce `Unknown`, never `Null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonValue {
    Object(JsonObject),
    Array(JsonArray),
    String(String),
    Number(JsonNumber),
    Bool(bool),
    Null,
    Unknown,
}

impl JsonValue {
    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, JsonValue::Unknown)
    }

    /// Borrows this value as an object; any other variant borrows as an
    /// empty object.
    pub fn object(&self) -> &JsonObject {
        match self {
            JsonValue::Object(object) => object,
            _ => &EMPTY_OBJECT,
        }
    }

    /// Alias for [`object`](Self::object).
    pub fn as_object(&self) -> &JsonObject {
        self.object()
    }

    /// Converts this value into an object; any other variant becomes a
    /// fresh empty object.
    pub fn into_object(self) -> JsonObject {
        match self {
            JsonValue::Object(object) => object,
            _ => JsonObject::new(),
        }
    }

    /// Borrows this value as an array; any other variant borrows as an
    /// empty array.
    pub fn array(&self) -> &JsonArray {
        match self {
            JsonValue::Array(array) => array,
            _ => &EMPTY_ARRAY,
        }
    }

    /// Alias for [`array`](Self::array).
    pub fn as_array(&self) -> &JsonArray {
        self.array()
    }

    /// Converts this value into an array; any other variant becomes a
    /// fresh empty array.
    pub fn into_array(self) -> JsonArray {
        match self {
            JsonValue::Array(array) => array,
            _ => JsonArray::new(),
        }
    }

    /// The text of this JSON string, or `undefined` for any other variant.
    pub fn string_value<'a>(&'a self, undefined: &'a str) -> &'a str {
        match self {
            JsonValue::String(string) => string,
            _ => undefined,
        }
    }

    /// Alias for [`string_value`](Self::string_value).
    pub fn as_string<'a>(&'a self, undefined: &'a str) -> &'a str {
        self.string_value(undefined)
    }

    /// This JSON number converted to `i32`, or `undefined` for any other
    /// variant or if the number literal does not parse as an `i32`.
    pub fn int_value(&self, undefined: i32) -> i32 {
        self.number_value(undefined)
    }

    /// Alias for [`int_value`](Self::int_value).
    pub fn as_int(&self, undefined: i32) -> i32 {
        self.number_value(undefined)
    }

    /// This JSON number converted to `i64`, or `undefined`.
    pub fn long_value(&self, undefined: i64) -> i64 {
        self.number_value(undefined)
    }

    /// Alias for [`long_value`](Self::long_value).
    pub fn as_long(&self, undefined: i64) -> i64 {
        self.number_value(undefined)
    }

    /// This JSON number converted to `f32`, or `undefined`.
    pub fn float_value(&self, undefined: f32) -> f32 {
        self.number_value(undefined)
    }

    /// Alias for [`float_value`](Self::float_value).
    pub fn as_float(&self, undefined: f32) -> f32 {
        self.number_value(undefined)
    }

    /// This JSON number converted to `f64`, or `undefined`.
    pub fn double_value(&self, undefined: f64) -> f64 {
        self.number_value(undefined)
    }

    /// Alias for [`double_value`](Self::double_value).
    pub fn as_double(&self, undefined: f64) -> f64 {
        self.number_value(undefined)
    }

    /// The value of this JSON boolean, or `undefined` for any other variant.
    pub fn bool_value(&self, undefined: bool) -> bool {
        match self {
            JsonValue::Bool(value) => *value,
            _ => undefined,
        }
    }

    /// Alias for [`bool_value`](Self::bool_value).
    pub fn as_boolean(&self, undefined: bool) -> bool {
        self.bool_value(undefined)
    }

    /// Re-parses the number literal at the requested width. IEEE-754
    /// specials (`inf`, `-inf`, `NaN`) survive the float conversions.
    fn number_value<T: FromStr>(&self, undefined: T) -> T {
        match self {
            JsonValue::Number(number) => number.as_str().parse().unwrap_or(undefined),
            _ => undefined,
        }
    }
}

/// Hashes scalars by variant and payload; containers hash as the XOR of
/// their element hashes (see [`JsonObject`] and [`JsonArray`]). Equal
/// values hash equal, but the container hashes are order-insensitive while
/// equality is order-sensitive, so colliding unequal values are expected.
impl Hash for JsonValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            JsonValue::Object(object) => object.hash(state),
            JsonValue::Array(array) => array.hash(state),
            JsonValue::String(string) => string.hash(state),
            JsonValue::Number(number) => number.hash(state),
            JsonValue::Bool(value) => value.hash(state),
            JsonValue::Null | JsonValue::Unknown => {}
        }
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.into())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Number(value.into())
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(value.into())
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<JsonNumber> for JsonValue {
    fn from(value: JsonNumber) -> Self {
        JsonValue::Number(value)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(value: JsonObject) -> Self {
        JsonValue::Object(value)
    }
}

impl From<JsonArray> for JsonValue {
    fn from(value: JsonArray) -> Self {
        JsonValue::Array(value)
    }
}

impl FromStr for JsonValue {
    type Err = ParseError;

    /// Parses a complete JSON document in lenient mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_str(s)
    }
}
