use jiter::{JiterError, JiterErrorType, JsonType, LinePosition};
use thiserror::Error as ThisError;

use crate::token::ValueKind;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum ErrorKind {
    /// Missing comma, colon or closing bracket, or the input ended early
    #[error("structural mismatch")]
    StructuralMismatch,
    /// An object key is not a JSON string
    #[error("object key is not a string")]
    KeyTypeMismatch,
    /// The input ended while skipping a nested value
    #[error("not enough closing brackets while skipping a value")]
    ChildSkipFailure,
    /// A field lookup went through the rest of the object without a match
    #[error("no such field")]
    NoSuchField,
    #[error("expected {expected} but found {actual}")]
    IncorrectType {
        expected: ValueKind,
        actual: ValueKind,
    },
    #[error("invalid scalar value")]
    InvalidScalar,
    #[error("number out of range")]
    NumberOutOfRange,
    /// A value handle was used after the cursor moved past it
    #[error("value accessed out of order")]
    OutOfOrderIteration,
    #[error("maximum nesting depth exceeded")]
    DepthLimitExceeded,
    #[error("trailing content after the document")]
    TrailingContent,
}

#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at index {index}")]
pub struct Error {
    pub kind: ErrorKind,
    pub index: usize,
    /// Set when the error was pending on the cursor and is surfaced by a later operation
    pub chained: bool,
}

impl Error {
    #[must_use]
    pub fn new(kind: ErrorKind, index: usize) -> Error {
        Error {
            kind,
            index,
            chained: false,
        }
    }

    #[must_use]
    pub fn chained(self) -> Error {
        Error {
            chained: true,
            ..self
        }
    }

    #[must_use]
    pub fn is_chained(&self) -> bool {
        self.chained
    }

    #[must_use]
    pub fn from_jiter_error(index: usize, jiter_error: &JiterError) -> Error {
        let kind = match &jiter_error.error_type {
            JiterErrorType::JsonError(_) => ErrorKind::InvalidScalar,
            JiterErrorType::WrongType { expected, actual } => ErrorKind::IncorrectType {
                expected: kind_of_json_type(expected),
                actual: kind_of_json_type(actual),
            },
        };
        Error::new(kind, index + jiter_error.index)
    }

    #[must_use]
    pub fn get_position(&self, input: &[u8]) -> LinePosition {
        LinePosition::find(input, self.index)
    }

    #[must_use]
    pub fn description(&self, input: &[u8]) -> String {
        let position = self.get_position(input);
        format!("{} at {}", self.kind, position)
    }
}

fn kind_of_json_type(json_type: &JsonType) -> ValueKind {
    match json_type {
        JsonType::Null => ValueKind::Null,
        JsonType::Bool => ValueKind::Bool,
        JsonType::Int | JsonType::Float => ValueKind::Number,
        JsonType::String => ValueKind::String,
        JsonType::Array => ValueKind::Array,
        JsonType::Object => ValueKind::Object,
    }
}

/// Failure to load a document from a reader into a caller buffer
#[derive(ThisError, Debug)]
pub enum LoadError<E> {
    #[error("input does not fit into the buffer of {capacity} bytes")]
    BufferTooSmall { capacity: usize },
    #[error("read error: {0:?}")]
    Io(E),
}
