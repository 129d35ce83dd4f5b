use serde_json::Value;

use crate::{JsonArray, JsonNumber, JsonObject, JsonValue};

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(number) => JsonValue::Number(JsonNumber::new(number.to_string())),
            Value::String(s) => JsonValue::String(s),
            Value::Array(elements) => {
                let mut array = JsonArray::with_capacity(elements.len());
                for element in elements {
                    array.add(JsonValue::from(element));
                }
                JsonValue::Array(array)
            }
            Value::Object(map) => {
                let mut object = JsonObject::new();
                for (name, member) in map {
                    object.add(name, JsonValue::from(member));
                }
                JsonValue::Object(object)
            }
        }
    }
}

impl From<JsonValue> for Value {
    /// Lossy conversion: `Unknown` and non-finite numbers map to
    /// `Value::Null`, and duplicate member names keep the last occurrence.
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null | JsonValue::Unknown => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(number) => {
                let literal = number.as_str();
                if let Ok(integer) = literal.parse::<i64>() {
                    Value::from(integer)
                } else if let Ok(unsigned) = literal.parse::<u64>() {
                    Value::from(unsigned)
                } else {
                    match literal.parse::<f64>() {
                        Ok(float) => serde_json::Number::from_f64(float)
                            .map_or(Value::Null, Value::Number),
                        Err(_) => Value::Null,
                    }
                }
            }
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(array) => {
                Value::Array(array.into_iter().map(Value::from).collect())
            }
            JsonValue::Object(object) => Value::Object(
                object
                    .into_iter()
                    .map(|member| {
                        let (name, value) = member.into_parts();
                        (name, Value::from(value))
                    })
                    .collect(),
            ),
        }
    }
}

impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        eq(self, other)
    }
}

/// Members are compared pairwise in iteration order, so an object with
/// duplicate names never equals a `serde_json` map. Numbers compare by
/// numeric value, not literal text. `Unknown` equals nothing.
fn eq(lhs: &Value, rhs: &JsonValue) -> bool {
    match (lhs, rhs) {
        (Value::Null, JsonValue::Null) => true,
        (Value::Bool(l), JsonValue::Bool(r)) => l == r,
        (Value::Number(l), JsonValue::Number(r)) => compare_number(l, r),
        (Value::String(l), JsonValue::String(r)) => l == r,
        (Value::Array(l), JsonValue::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
        }
        (Value::Object(l), JsonValue::Object(r)) => {
            l.len() == r.len()
                && l.iter()
                    .zip(r.iter())
                    .all(|((lk, lv), rm)| lk == rm.name() && eq(lv, rm.value()))
        }
        _ => false,
    }
}

fn compare_number(lhs: &serde_json::Number, rhs: &JsonNumber) -> bool {
    if let Ok(integer) = rhs.as_str().parse::<i64>() {
        return lhs.as_i64() == Some(integer);
    }
    if let Ok(unsigned) = rhs.as_str().parse::<u64>() {
        return lhs.as_u64() == Some(unsigned);
    }
    match rhs.as_str().parse::<f64>() {
        Ok(float) => lhs.as_f64() == Some(float),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::{JsonNumber, JsonValue};

    #[test]
    fn from_serde_value() {
        let value = JsonValue::from(json!({"a": [1, true, null], "b": "x"}));
        let object = value.object();
        assert_eq!(object.get("a").array().len(), 3);
        assert_eq!(object.get("a").array().get(0).int_value(0), 1);
        assert_eq!(object.get("b").string_value(""), "x");
    }

    #[test]
    fn into_serde_value() {
        let parsed = crate::parse_str(r#"{"a": [1, 2.5], "b": null}"#).unwrap();
        assert_eq!(Value::from(parsed), json!({"a": [1, 2.5], "b": null}));
    }

    #[test]
    fn unknown_and_non_finite_become_null() {
        assert_eq!(Value::from(JsonValue::Unknown), Value::Null);
        assert_eq!(
            Value::from(JsonValue::Number(JsonNumber::new("inf"))),
            Value::Null
        );
        assert_eq!(
            Value::from(JsonValue::Number(JsonNumber::new("not-a-number"))),
            Value::Null
        );
    }

    #[test]
    fn cross_type_equality() {
        let parsed = crate::parse_str(r#"{"a": [1, 2.5, "x", true], "b": null}"#).unwrap();
        assert_eq!(parsed, json!({"a": [1, 2.5, "x", true], "b": null}));
        assert_eq!(json!({"a": [1, 2.5, "x", true], "b": null}), parsed);
        assert_ne!(parsed, json!({"a": [1, 2.5, "x", true], "b": 0}));
        assert_ne!(JsonValue::Unknown, Value::Null);
    }

    #[test]
    fn numbers_compare_numerically_across_types() {
        assert_eq!(JsonValue::Number(JsonNumber::new("2.50")), json!(2.5));
        assert_ne!(JsonValue::Number(JsonNumber::new("2.5")), json!(2));
        assert_ne!(JsonValue::Number(JsonNumber::new("1.2.3")), json!(1.2));
    }

    #[test]
    fn number_literals_survive_round_trip() {
        let value = JsonValue::from(json!(18_446_744_073_709_551_615_u64));
        match &value {
            JsonValue::Number(number) => assert_eq!(number.as_str(), "18446744073709551615"),
            other => panic!("expected a number, got {other:?}"),
        }
        assert_eq!(Value::from(value), json!(18_446_744_073_709_551_615_u64));
    }
}
