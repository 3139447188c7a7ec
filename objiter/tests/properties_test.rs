use std::fmt::Write as _;

use objiter::{Document, Value, ValueKind};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Json {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    Arr(Vec<Json>),
    Obj(Vec<(String, Json)>),
}

impl Json {
    fn object(values: Vec<Json>) -> Json {
        Json::Obj(
            values
                .into_iter()
                .enumerate()
                .map(|(i, value)| (format!("k{i}"), value))
                .collect(),
        )
    }

    fn write(&self, out: &mut String) {
        match self {
            Json::Null => out.push_str("null"),
            Json::Bool(b) => write!(out, "{b}").unwrap(),
            Json::Int(i) => write!(out, "{i}").unwrap(),
            Json::Str(s) => write_str(s, out),
            Json::Arr(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.write(out);
                }
                out.push(']');
            }
            Json::Obj(fields) => {
                out.push('{');
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_str(key, out);
                    out.push_str(": ");
                    value.write(out);
                }
                out.push('}');
            }
        }
    }

    fn to_text(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }
}

fn write_str(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

// Strings carry structural characters to make sure the scanner does not count them
fn json() -> impl Strategy<Value = Json> {
    let leaf = prop_oneof![
        Just(Json::Null),
        any::<bool>().prop_map(Json::Bool),
        any::<i64>().prop_map(Json::Int),
        "[a-z{}\\[\\],:\"\\\\ ]{0,6}".prop_map(Json::Str),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Json::Arr),
            prop::collection::vec(inner, 0..4).prop_map(Json::object),
        ]
    })
}

fn check(value: Value, expected: &Json) -> Result<(), TestCaseError> {
    match expected {
        Json::Null => prop_assert!(value.is_null().unwrap()),
        Json::Bool(b) => prop_assert_eq!(value.get_bool().unwrap(), *b),
        Json::Int(i) => prop_assert_eq!(value.get_i64().unwrap(), *i),
        Json::Str(s) => prop_assert_eq!(value.get_str().unwrap(), s.as_str()),
        Json::Arr(items) => {
            let mut elements = value.get_array().unwrap();
            for item in items {
                check(elements.next().unwrap().unwrap(), item)?;
            }
            prop_assert!(elements.next().is_none());
        }
        Json::Obj(fields) => {
            let mut iter = value.get_object().unwrap().into_iter();
            for (key, item) in fields {
                let field = iter.next().unwrap().unwrap();
                prop_assert_eq!(field.key(), key.as_str());
                check(field.value(), item)?;
            }
            prop_assert!(iter.next().is_none());
        }
    }
    Ok(())
}

// Enter a container and read one key or element, then leave it half-read
fn touch(value: Value) {
    match value.kind().unwrap() {
        ValueKind::Object => {
            let _ = value.get_object().unwrap().into_iter().next();
        }
        ValueKind::Array => {
            let _ = value.get_array().unwrap().next();
        }
        _ => {}
    }
}

proptest! {
    #[test]
    fn keys_come_in_source_order(values in prop::collection::vec(json(), 0..6)) {
        let object = Json::object(values);
        let text = object.to_text();
        let doc = Document::new(text.as_bytes());

        let keys: Vec<String> = doc
            .get_object()
            .unwrap()
            .into_iter()
            .map(|field| field.unwrap().key().unescape().unwrap().into_owned())
            .collect();
        let Json::Obj(fields) = &object else { unreachable!() };
        let expected: Vec<String> = fields.iter().map(|(key, _)| key.clone()).collect();
        prop_assert_eq!(keys, expected);
        prop_assert!(doc.finish().is_ok());
    }

    #[test]
    fn every_value_reads_back(value in json()) {
        let text = value.to_text();
        let doc = Document::new(text.as_bytes());
        check(doc.root(), &value)?;
        prop_assert!(doc.finish().is_ok());
    }

    #[test]
    fn raw_json_is_the_source_text(value in json()) {
        let text = format!(r#"{{"v": {}, "after": 1}}"#, value.to_text());
        let doc = Document::new(text.as_bytes());
        let mut object = doc.get_object().unwrap();

        let raw = object.find_field("v").unwrap().raw_json().unwrap();
        let expected = value.to_text();
        prop_assert_eq!(raw, expected.as_bytes());
        prop_assert_eq!(object.find_field("after").unwrap().get_i64().unwrap(), 1);
    }

    #[test]
    fn early_stop_then_resume(
        values in prop::collection::vec(json(), 0..6),
        stop in 0usize..6,
    ) {
        let inner = Json::object(values);
        let text = format!(r#"{{"obj": {}, "after": true}}"#, inner.to_text());
        let doc = Document::new(text.as_bytes());
        let mut outer = doc.get_object().unwrap();

        let obj = outer.find_field("obj").unwrap();
        for field in obj.get_object().unwrap().into_iter().take(stop) {
            touch(field.unwrap().value());
        }

        prop_assert!(outer.find_field("after").unwrap().get_bool().unwrap());
        prop_assert!(outer.into_iter().next().is_none());
        prop_assert!(doc.finish().is_ok());
        prop_assert_eq!(doc.error(), None);
    }
}
