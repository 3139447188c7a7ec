use jcursor::{Error, ErrorKind, JsonIter, ValueKind};

#[test]
fn display_of_error() {
    let err = Error::new(ErrorKind::KeyTypeMismatch, 7);
    assert_eq!(format!("{err}"), "object key is not a string at index 7");
}

#[test]
fn display_of_type_error() {
    let err = Error::new(
        ErrorKind::IncorrectType {
            expected: ValueKind::String,
            actual: ValueKind::Null,
        },
        31,
    );
    assert_eq!(format!("{err}"), "expected string but found null at index 31");
}

#[test]
fn description_of_error() {
    let input = b"{\n  \"a\": 1\n  \"b\": 2\n}";
    let json = JsonIter::new(input);
    let root = json.root();
    root.start_object().unwrap();
    root.field_key().unwrap();
    root.field_value().unwrap();
    root.skip_child().unwrap();

    let err = root.has_next_field().unwrap_err();
    assert_eq!(err.index, 13);
    assert_eq!(
        err.description(input),
        "structural mismatch at line 3 column 3"
    );
}

#[test]
fn chained_keeps_kind_and_index() {
    let err = Error::new(ErrorKind::StructuralMismatch, 4);
    assert!(!err.is_chained());
    let chained = err.chained();
    assert!(chained.is_chained());
    assert_eq!(chained.kind, err.kind);
    assert_eq!(chained.index, err.index);
    assert_ne!(chained, err);
}
