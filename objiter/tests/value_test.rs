use std::borrow::Cow;

use objiter::{read_into, Document, ErrorKind, LoadError, Options, ValueKind};

#[test]
fn root_scalars() {
    let doc = Document::new(b" 12 ");
    assert_eq!(doc.root().get_i64().unwrap(), 12);
    doc.finish().unwrap();

    let doc = Document::new(b"1e3");
    assert_eq!(doc.root().get_f64().unwrap(), 1000.0);

    let doc = Document::new(b"7");
    assert_eq!(doc.root().get_f64().unwrap(), 7.0);

    let doc = Document::new(b"true");
    assert!(doc.root().get_bool().unwrap());

    let doc = Document::new(b"null");
    assert!(doc.root().is_null().unwrap());
    doc.finish().unwrap();
}

#[test]
fn strings_borrow_unless_escaped() {
    let doc = Document::new(br#"["plain", "a\nb", "caf\u00e9"]"#);
    let mut elements = doc.get_array().unwrap();

    let plain = elements.next().unwrap().unwrap().get_str().unwrap();
    assert!(matches!(plain, Cow::Borrowed("plain")));

    let escaped = elements.next().unwrap().unwrap().get_str().unwrap();
    assert!(matches!(escaped, Cow::Owned(_)));
    assert_eq!(escaped, "a\nb");

    let unicode = elements.next().unwrap().unwrap().get_str().unwrap();
    assert_eq!(unicode, "café");

    assert!(elements.next().is_none());
    doc.finish().unwrap();
}

#[test]
fn raw_string_keeps_escapes() {
    let doc = Document::new(br#""tab\there""#);
    let raw = doc.root().get_raw_str().unwrap();
    assert_eq!(raw.as_bytes(), br"tab\there");
    assert_eq!(raw.index(), 0);
    assert_eq!(raw.unescape().unwrap(), "tab\there");
}

#[test]
fn kind_does_not_move_the_cursor() {
    let doc = Document::new(br#"{"a": [1], "b": "x", "c": -1, "d": false, "e": null, "f": {}}"#);
    let mut kinds = Vec::new();
    for field in doc.get_object().unwrap() {
        kinds.push(field.unwrap().value().kind().unwrap());
    }
    assert_eq!(
        kinds,
        [
            ValueKind::Array,
            ValueKind::String,
            ValueKind::Number,
            ValueKind::Bool,
            ValueKind::Null,
            ValueKind::Object,
        ]
    );
    doc.finish().unwrap();
}

#[test]
fn is_null_leaves_other_values_unread() {
    let doc = Document::new(b"[5, null]");
    let mut elements = doc.get_array().unwrap();
    let value = elements.next().unwrap().unwrap();
    assert!(!value.is_null().unwrap());
    assert_eq!(value.get_i64().unwrap(), 5);
    assert!(elements.next().unwrap().unwrap().is_null().unwrap());
    assert!(elements.next().is_none());
}

#[test]
fn wrong_scalar_type() {
    let doc = Document::new(b"17");
    let err = doc.root().get_str().unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::IncorrectType {
            expected: ValueKind::String,
            actual: ValueKind::Number,
        }
    );
    assert_eq!(doc.error(), None);
    assert_eq!(doc.root().get_i64().unwrap(), 17);
}

#[test]
fn fraction_is_not_an_integer() {
    let doc = Document::new(b"1.5");
    assert!(doc.root().get_i64().is_err());
}

#[test]
fn huge_integer_is_rejected() {
    let doc = Document::new(b"123456789012345678901234567890");
    assert!(doc.root().get_i64().is_err());
}

#[test]
fn malformed_scalars() {
    let doc = Document::new(b"[tru, 12ab]");
    let mut elements = doc.get_array().unwrap();

    let err = elements.next().unwrap().unwrap().get_bool().unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidScalar);
    assert!((1..=4).contains(&err.index));

    let err = elements.next().unwrap().unwrap().get_i64().unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidScalar);
    assert!((6..=10).contains(&err.index));

    assert!(elements.next().is_none());
}

#[test]
fn raw_json_of_nested_value() {
    let doc = Document::new(br#"{"a": [1, {"b": 2}], "c": 3}"#);
    let mut object = doc.get_object().unwrap();
    let raw = object.find_field("a").unwrap().raw_json().unwrap();
    assert_eq!(raw, br#"[1, {"b": 2}]"#);
    assert_eq!(object.find_field("c").unwrap().get_i64().unwrap(), 3);
    doc.finish().unwrap();
}

#[test]
fn raw_json_of_root_scalar() {
    let doc = Document::new(br#"  "x"  "#);
    assert_eq!(doc.root().raw_json().unwrap(), br#""x""#);
    doc.finish().unwrap();
}

#[test]
fn raw_json_of_truncated_value() {
    let doc = Document::new(b"[1, [2");
    let err = doc.root().raw_json().unwrap_err();
    assert_eq!(err.kind, ErrorKind::ChildSkipFailure);
    assert_eq!(doc.error(), Some(err));
}

#[test]
fn finish_reports_trailing_content() {
    let doc = Document::new(b"{} x");
    assert!(!doc.get_object().unwrap().into_iter().any(|_| true));
    let err = doc.finish().unwrap_err();
    assert_eq!(err.kind, ErrorKind::TrailingContent);
    assert_eq!(err.index, 3);
}

#[test]
fn finish_reports_unread_root() {
    let doc = Document::new(b"[1]");
    let err = doc.finish().unwrap_err();
    assert_eq!(err.kind, ErrorKind::OutOfOrderIteration);
}

#[test]
fn finish_reports_pending_error() {
    let doc = Document::new(b"[1 2]");
    let results: Vec<_> = doc.get_array().unwrap().collect();
    assert_eq!(results.len(), 2);
    assert_eq!(
        results[1].as_ref().unwrap_err().kind,
        ErrorKind::StructuralMismatch
    );
    let err = doc.finish().unwrap_err();
    assert_eq!(err.kind, ErrorKind::StructuralMismatch);
    assert!(err.is_chained());
}

#[test]
fn depth_limit() {
    let doc = Document::with_options(
        br#"{"a": {"b": {"c": 1}}}"#,
        Options::new().with_max_depth(3),
    );
    let a = doc.get_object().unwrap().find_field("a").unwrap();
    let b = a.get_object().unwrap().find_field("b").unwrap();
    let mut b_object = b.get_object().unwrap();
    let err = b_object.find_field("c").unwrap_err();
    assert_eq!(err.kind, ErrorKind::DepthLimitExceeded);
    assert_eq!(doc.error(), Some(err));
    assert_eq!(doc.json_iter().depth(), 0);
}

#[test]
fn load_then_iterate() {
    let input = br#"{"id": 3, "name": "buffered"}"#;
    let mut buffer = [0u8; 64];
    let mut reader = &input[..];
    let loaded = read_into(&mut reader, &mut buffer).unwrap();

    let doc = Document::new(loaded);
    let mut object = doc.get_object().unwrap();
    assert_eq!(object.find_field("name").unwrap().get_str().unwrap(), "buffered");
}

#[test]
fn load_into_small_buffer() {
    let input = br#"{"id": 3}"#;
    let mut buffer = [0u8; 4];
    let mut reader = &input[..];
    let err = read_into(&mut reader, &mut buffer).unwrap_err();
    assert!(matches!(err, LoadError::BufferTooSmall { capacity: 4 }));
}
