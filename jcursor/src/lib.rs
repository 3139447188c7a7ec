//! Depth-tracked forward-only cursor over an in-memory JSON document.
//!
//! The `std` feature only forwards to the `std` features of `thiserror` and
//! `embedded-io`; the crate itself always links `std`.

pub mod error;
pub mod json_iter;
pub mod options;
pub mod raw_str;
pub mod source;
pub mod token;
pub mod value_iter;

pub use error::{Error, ErrorKind, LoadError, Result};
pub use json_iter::JsonIter;
pub use options::Options;
pub use raw_str::{RawKey, RawStr};
pub use source::read_into;
pub use token::ValueKind;
pub use value_iter::ValueIter;

pub use jiter;
