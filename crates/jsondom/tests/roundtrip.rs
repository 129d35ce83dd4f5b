use jsondom::{JsonObject, JsonParser, JsonValue, Tolerance};

const DOCUMENT: &str = r#"{
  "name" : "aurora",
  "version" : 3,
  "scale" : 1.5,
  "enabled" : true,
  "extra" : null,
  "tags" : [
    "render",
    "raytrace"
  ],
  "camera" : {
    "fov" : 70.0,
    "position" : [
      0.5,
      64,
      -12.25
    ]
  }
}"#;

#[test]
fn indented_output_round_trips() {
    let value = jsondom::parse_str(DOCUMENT).unwrap();
    assert_eq!(value.to_pretty_string("  "), DOCUMENT);
}

#[test]
fn compact_output_is_idempotent() {
    let value = jsondom::parse_str(DOCUMENT).unwrap();
    let compact = value.to_compact_string();
    let reparsed = jsondom::parse_str(&compact).unwrap();
    assert_eq!(reparsed, value);
    assert_eq!(reparsed.to_compact_string(), compact);
}

#[test]
fn pretty_and_compact_agree_on_content() {
    let value = jsondom::parse_str(DOCUMENT).unwrap();
    let from_pretty = jsondom::parse_str(&value.to_pretty_string("\t")).unwrap();
    assert_eq!(from_pretty, value);
}

#[test]
fn cloned_documents_are_independent() {
    let original = jsondom::parse_str(DOCUMENT).unwrap();
    let mut copy = original.clone().into_object();
    copy.add("added", 1);
    assert_eq!(original.object().len(), 7);
    assert_eq!(copy.len(), 8);
    copy.remove(0);
    assert_eq!(original.object().get("name").string_value(""), "aurora");
}

#[test]
fn document_api_walk() {
    let value = jsondom::parse_str(DOCUMENT).unwrap();
    let object = value.object();
    assert_eq!(object.get("version").int_value(0), 3);
    assert!((object.get("scale").double_value(0.0) - 1.5).abs() < 1e-9);
    assert!(object.get("enabled").bool_value(false));
    assert_eq!(*object.get("extra"), JsonValue::Null);
    assert!(object.get("missing").is_unknown());

    let camera = object.get("camera").object();
    let position = camera.get("position").array();
    assert_eq!(position.len(), 3);
    assert!((position.get(2).double_value(0.0) - -12.25).abs() < 1e-9);
}

#[test]
fn parses_from_reader() {
    let value = jsondom::parse(DOCUMENT.as_bytes()).unwrap();
    assert_eq!(value.object().get("name").string_value(""), "aurora");
}

#[test]
fn from_str_is_lenient() {
    let value: JsonValue = "{answer: 42}".parse().unwrap();
    assert_eq!(value.object().get("answer").int_value(0), 42);
}

#[test]
fn strict_parser_round_trips_compact_output() {
    let mut object = JsonObject::new();
    object.add("a\nb", "tab\there");
    object.add("nested", JsonObject::new());
    let compact = JsonValue::Object(object).to_compact_string();
    let reparsed = JsonParser::with_tolerance(compact.as_bytes(), Tolerance::Strict)
        .parse()
        .unwrap();
    assert_eq!(reparsed.to_compact_string(), compact);
}
