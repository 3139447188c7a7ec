//! Lazy single-pass iteration over the fields of a JSON object.
//!
//! The `std` feature only forwards to `jcursor/std`; the crate itself always
//! links `std`.

pub mod array_iterator;
pub mod document;
pub mod field;
pub mod fields_result;
pub mod object;
pub mod object_iterator;
pub mod value;

pub use array_iterator::ArrayIterator;
pub use document::Document;
pub use field::Field;
pub use fields_result::FieldsResult;
pub use object::Object;
pub use object_iterator::{IterState, ObjectIterator};
pub use value::Value;

pub use jcursor::{
    read_into, Error, ErrorKind, LoadError, Options, RawKey, RawStr, Result, ValueKind,
};
