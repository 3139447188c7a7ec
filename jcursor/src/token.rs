//! Token boundaries in the raw input.
//!
//! The scanner only finds where a token starts and ends. It does not validate
//! escapes, UTF-8 or number syntax: values are checked by `jiter` when they are
//! materialized, and skipped values are never checked.

use core::fmt;

/// The JSON type of a value, as seen from its first byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl ValueKind {
    #[must_use]
    pub fn from_first_byte(byte: u8) -> Option<ValueKind> {
        match byte {
            b'{' => Some(ValueKind::Object),
            b'[' => Some(ValueKind::Array),
            b'"' => Some(ValueKind::String),
            b'-' | b'0'..=b'9' => Some(ValueKind::Number),
            b't' | b'f' => Some(ValueKind::Bool),
            b'n' => Some(ValueKind::Null),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Bool => "bool",
            ValueKind::Null => "null",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub start: usize,
    pub end: usize,
    pub byte: u8,
    /// False for a string which runs to the end of input without a closing quote
    pub terminated: bool,
}

#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

#[inline]
fn is_delimiter(byte: u8) -> bool {
    is_whitespace(byte) || matches!(byte, b',' | b':' | b'{' | b'}' | b'[' | b']' | b'"')
}

pub(crate) fn skip_whitespace(input: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < input.len() && is_whitespace(input[i]) {
        i += 1;
    }
    i
}

/// Scan the token starting at `start`, which must be a non-whitespace byte.
pub(crate) fn scan_token(input: &[u8], start: usize) -> Token {
    let byte = input[start];
    match byte {
        b'{' | b'}' | b'[' | b']' | b':' | b',' => Token {
            start,
            end: start + 1,
            byte,
            terminated: true,
        },
        b'"' => match string_end(input, start) {
            Some(end) => Token {
                start,
                end,
                byte,
                terminated: true,
            },
            None => Token {
                start,
                end: input.len(),
                byte,
                terminated: false,
            },
        },
        _ => {
            let mut end = start + 1;
            while end < input.len() && !is_delimiter(input[end]) {
                end += 1;
            }
            Token {
                start,
                end,
                byte,
                terminated: true,
            }
        }
    }
}

// Position after the closing quote, or None if the string is not closed
fn string_end(input: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1; // skip the opening quote
    while i < input.len() {
        match input[i] {
            b'\\' => i += 2,
            b'"' => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}
