use std::borrow::Cow;
use std::fmt;

use pretty::{PrettyPrintable, PrettyPrinter};

use crate::{JsonArray, JsonMember, JsonObject, JsonValue};

/// Escapes a string for inclusion in JSON output. Returns the input
/// unchanged when no character needs escaping.
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    let needs_escape = text
        .chars()
        .any(|c| matches!(c, '"' | '\\' | '\n' | '\r' | '\t' | '\u{8}' | '\u{C}'));
    if !needs_escape {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{8}' => escaped.push_str("\\b"),
            '\u{C}' => escaped.push_str("\\f"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

impl PrettyPrintable for JsonValue {
    fn pretty_print(&self, out: &mut PrettyPrinter<'_>) -> fmt::Result {
        match self {
            JsonValue::Object(object) => object.pretty_print(out),
            JsonValue::Array(array) => array.pretty_print(out),
            JsonValue::String(string) => {
                out.print("\"")?;
                out.print(&escape(string))?;
                out.print("\"")
            }
            JsonValue::Number(number) => out.print(number.as_str()),
            JsonValue::Bool(true) => out.print("true"),
            JsonValue::Bool(false) => out.print("false"),
            JsonValue::Null => out.print("null"),
            JsonValue::Unknown => out.print("\"<unknown>\""),
        }
    }
}

impl PrettyPrintable for JsonObject {
    fn pretty_print(&self, out: &mut PrettyPrinter<'_>) -> fmt::Result {
        if self.is_empty() {
            return out.print("{}");
        }
        out.print("{")?;
        out.println()?;
        out.indent(1)?;
        for (index, member) in self.iter().enumerate() {
            if index > 0 {
                out.print(",")?;
                out.println()?;
            }
            out.print_node(member)?;
        }
        out.println()?;
        out.print("}")
    }
}

impl PrettyPrintable for JsonArray {
    fn pretty_print(&self, out: &mut PrettyPrinter<'_>) -> fmt::Result {
        if self.is_empty() {
            return out.print("[]");
        }
        out.print("[")?;
        out.println()?;
        out.indent(1)?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                out.print(",")?;
                out.println()?;
            }
            out.print_node(element)?;
        }
        out.println()?;
        out.print("]")
    }
}

impl PrettyPrintable for JsonMember {
    fn pretty_print(&self, out: &mut PrettyPrinter<'_>) -> fmt::Result {
        out.print("\"")?;
        out.print(&escape(self.name()))?;
        out.print("\" : ")?;
        out.print_node(self.value())
    }
}

fn write_compact_object(out: &mut dyn fmt::Write, object: &JsonObject) -> fmt::Result {
    out.write_char('{')?;
    for (index, member) in object.iter().enumerate() {
        if index > 0 {
            out.write_char(',')?;
        }
        write!(out, "\"{}\":", escape(member.name()))?;
        write_compact(out, member.value())?;
    }
    out.write_char('}')
}

fn write_compact_array(out: &mut dyn fmt::Write, array: &JsonArray) -> fmt::Result {
    out.write_char('[')?;
    for (index, element) in array.iter().enumerate() {
        if index > 0 {
            out.write_char(',')?;
        }
        write_compact(out, element)?;
    }
    out.write_char(']')
}

fn write_compact(out: &mut dyn fmt::Write, value: &JsonValue) -> fmt::Result {
    match value {
        JsonValue::Object(object) => write_compact_object(out, object),
        JsonValue::Array(array) => write_compact_array(out, array),
        JsonValue::String(string) => write!(out, "\"{}\"", escape(string)),
        JsonValue::Number(number) => out.write_str(number.as_str()),
        JsonValue::Bool(true) => out.write_str("true"),
        JsonValue::Bool(false) => out.write_str("false"),
        JsonValue::Null => out.write_str("null"),
        JsonValue::Unknown => out.write_str("\"<unknown>\""),
    }
}

impl JsonValue {
    /// Renders this value indented with `indentation` per nesting level.
    pub fn to_pretty_string(&self, indentation: &str) -> String {
        let mut out = String::new();
        self.write_pretty(&mut out, indentation)
            .expect("writing to a String cannot fail");
        out
    }

    /// Renders this value indented with `indentation` into `out`.
    pub fn write_pretty(&self, out: &mut dyn fmt::Write, indentation: &str) -> fmt::Result {
        let mut printer = PrettyPrinter::new(indentation, out);
        printer.print_node(self)
    }

    /// Renders this value on one line with no whitespace between tokens.
    pub fn to_compact_string(&self) -> String {
        let mut out = String::new();
        write_compact(&mut out, self).expect("writing to a String cannot fail");
        out
    }
}

impl fmt::Display for JsonValue {
    /// Formats as compact JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_compact(f, self)
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_compact_object(f, self)
    }
}

impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_compact_array(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::escape;
    use crate::{JsonArray, JsonNumber, JsonObject, JsonValue};

    fn sample_object() -> JsonObject {
        let mut inner = JsonArray::new();
        inner.add("!");
        inner.add(711);
        let mut object = JsonObject::new();
        object.add(" ab cd", 123);
        object.add("@", "''''");
        object.add("\"\"", "\n\r");
        object.add(".", inner);
        object
    }

    #[test]
    fn escape_passthrough_borrows() {
        assert!(matches!(escape("hello"), std::borrow::Cow::Borrowed(_)));
    }

    #[test]
    fn escape_special_characters() {
        assert_eq!(escape("hello\n"), "hello\\n");
        assert_eq!(escape("a\"b"), "a\\\"b");
        assert_eq!(escape("back\\slash"), "back\\\\slash");
        assert_eq!(escape("\u{8}\u{c}\t\r"), "\\b\\f\\t\\r");
    }

    #[test]
    fn compact_object() {
        let value = JsonValue::Object(sample_object());
        assert_eq!(
            value.to_compact_string(),
            "{\" ab cd\":123,\"@\":\"''''\",\"\\\"\\\"\":\"\\n\\r\",\".\":[\"!\",711]}"
        );
    }

    #[test]
    fn display_is_compact() {
        let value = JsonValue::Object(sample_object());
        assert_eq!(value.to_string(), value.to_compact_string());
        assert_eq!(sample_object().to_string(), value.to_compact_string());
    }

    #[test]
    fn compact_scalars() {
        let mut array = JsonArray::new();
        array.add(true);
        array.add(false);
        array.add(JsonValue::Null);
        array.add(JsonValue::Unknown);
        array.add(JsonNumber::new("3.14"));
        assert_eq!(
            array.to_string(),
            "[true,false,null,\"<unknown>\",3.14]"
        );
    }

    #[test]
    fn empty_containers_stay_on_one_line() {
        assert_eq!(
            JsonValue::Object(JsonObject::new()).to_pretty_string("  "),
            "{}"
        );
        assert_eq!(
            JsonValue::Array(JsonArray::new()).to_pretty_string("  "),
            "[]"
        );
    }

    #[test]
    fn indented_array() {
        let mut array = JsonArray::new();
        array.add(1);
        array.add(2);
        assert_eq!(
            JsonValue::Array(array).to_pretty_string("  "),
            "[\n  1,\n  2\n]"
        );
    }

    #[test]
    fn indented_object() {
        let mut object = JsonObject::new();
        object.add("a", 1);
        let mut outer = JsonObject::new();
        outer.add("x", object);
        outer.add("y", true);
        assert_eq!(
            JsonValue::Object(outer).to_pretty_string("  "),
            "{\n  \"x\" : {\n    \"a\" : 1\n  },\n  \"y\" : true\n}"
        );
    }

    #[test]
    fn indented_nested_array() {
        let mut inner = JsonArray::new();
        inner.add(1);
        let mut outer = JsonArray::new();
        outer.add(inner);
        assert_eq!(
            JsonValue::Array(outer).to_pretty_string("\t"),
            "[\n\t[\n\t\t1\n\t]\n]"
        );
    }
}
