use crate::error::{Error, ErrorKind, Result};
use crate::json_iter::JsonIter;
use crate::raw_str::{RawKey, RawStr};
use crate::token::{Token, ValueKind};

/// A value's view of the shared cursor: the cursor plus the depth of the value.
///
/// When the value is a container, the same handle iterates its children.
/// Copying a `ValueIter` does not copy the position; all copies move the one
/// shared `JsonIter`.
#[derive(Clone, Copy)]
pub struct ValueIter<'a> {
    json: &'a JsonIter<'a>,
    depth: u32,
    start: usize,
}

impl std::fmt::Debug for ValueIter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ValueIter {{ depth: {:?}, start: {:?}, json: {:?} }}",
            self.depth, self.start, self.json
        )
    }
}

impl<'a> ValueIter<'a> {
    pub(crate) fn new(json: &'a JsonIter<'a>, depth: u32, start: usize) -> Self {
        ValueIter { json, depth, start }
    }

    #[must_use]
    pub fn json_iter(&self) -> &'a JsonIter<'a> {
        self.json
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Where the value begins in the input
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn error(&self) -> Option<Error> {
        self.json.error()
    }

    /// False once the cursor left this value: it was closed or abandoned
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.json.depth() >= self.depth
    }

    pub fn abandon(&self) {
        self.json.abandon();
    }

    /// Handle for the child value the cursor is positioned at
    #[must_use]
    pub fn child(&self) -> ValueIter<'a> {
        ValueIter::new(self.json, self.depth + 1, self.json.peek_index())
    }

    //
    // Object fields
    //

    /// Skip whatever is left of the current child, restoring the depth of this value.
    ///
    /// # Errors
    ///
    /// `ChildSkipFailure`, recorded on the cursor.
    pub fn finish_child(&self) -> Result<()> {
        self.json.skip_child(self.depth)
    }

    /// Consume `,` or `}` after a field. `true` if another field follows.
    ///
    /// # Errors
    ///
    /// `StructuralMismatch` if neither is there, recorded on the cursor.
    pub fn has_next_field(&self) -> Result<bool> {
        match self.json.advance() {
            Some(token) if token.byte == b',' => Ok(true),
            Some(token) if token.byte == b'}' => {
                tracing::trace!(depth = self.depth, "end object");
                self.json.ascend_to(self.depth - 1);
                Ok(false)
            }
            Some(token) => Err(self
                .json
                .report_error(ErrorKind::StructuralMismatch, token.start)),
            None => Err(self
                .json
                .report_error(ErrorKind::StructuralMismatch, self.json.input().len())),
        }
    }

    /// Read the key of the next field.
    ///
    /// # Errors
    ///
    /// `KeyTypeMismatch` if the key is not a string, `StructuralMismatch` if the
    /// input ends. Both are recorded on the cursor.
    pub fn field_key(&self) -> Result<RawKey<'a>> {
        let Some(token) = self.json.advance() else {
            return Err(self
                .json
                .report_error(ErrorKind::StructuralMismatch, self.json.input().len()));
        };
        if token.byte != b'"' {
            return Err(self
                .json
                .report_error(ErrorKind::KeyTypeMismatch, token.start));
        }
        if !token.terminated {
            return Err(self
                .json
                .report_error(ErrorKind::StructuralMismatch, token.start));
        }
        Ok(RawStr::new(
            &self.json.input()[token.start..token.end],
            token.start,
        ))
    }

    /// Consume the colon after a key; the field value is then pending one level deeper.
    ///
    /// # Errors
    ///
    /// `StructuralMismatch` if the colon is missing, `DepthLimitExceeded`.
    /// Both are recorded on the cursor.
    pub fn field_value(&self) -> Result<()> {
        match self.json.advance() {
            Some(token) if token.byte == b':' => self.json.descend_to(self.depth + 1),
            Some(token) => Err(self
                .json
                .report_error(ErrorKind::StructuralMismatch, token.start)),
            None => Err(self
                .json
                .report_error(ErrorKind::StructuralMismatch, self.json.input().len())),
        }
    }

    /// Skip an unread child value entirely.
    ///
    /// # Errors
    ///
    /// `ChildSkipFailure`, recorded on the cursor.
    pub fn skip_child(&self) -> Result<()> {
        self.json.skip_child(self.depth)
    }

    //
    // Containers
    //

    /// Consume `{`. Returns `false` for an empty object, which is then consumed whole.
    ///
    /// # Errors
    ///
    /// A pending cursor error (chained), `OutOfOrderIteration`, or
    /// `IncorrectType`. None of them is recorded on the cursor.
    pub fn start_object(&self) -> Result<bool> {
        self.assert_at_start(ValueKind::Object)?;
        let _ = self.json.advance();
        if self.json.peek() == Some(b'}') {
            let _ = self.json.advance();
            self.json.ascend_to(self.depth - 1);
            tracing::trace!(depth = self.depth, "empty object");
            return Ok(false);
        }
        tracing::trace!(depth = self.depth, "start object");
        Ok(true)
    }

    /// Consume `[`. Returns `false` for an empty array, which is then consumed
    /// whole; otherwise the first element is pending one level deeper.
    ///
    /// # Errors
    ///
    /// As `start_object`, plus `DepthLimitExceeded` (recorded on the cursor).
    pub fn start_array(&self) -> Result<bool> {
        self.assert_at_start(ValueKind::Array)?;
        let _ = self.json.advance();
        if self.json.peek() == Some(b']') {
            let _ = self.json.advance();
            self.json.ascend_to(self.depth - 1);
            tracing::trace!(depth = self.depth, "empty array");
            return Ok(false);
        }
        tracing::trace!(depth = self.depth, "start array");
        self.json.descend_to(self.depth + 1)?;
        Ok(true)
    }

    /// Consume `,` or `]` after an element. `true` if another element follows.
    ///
    /// # Errors
    ///
    /// `StructuralMismatch` if neither is there, `DepthLimitExceeded`.
    /// Both are recorded on the cursor.
    pub fn has_next_element(&self) -> Result<bool> {
        match self.json.advance() {
            Some(token) if token.byte == b',' => {
                self.json.descend_to(self.depth + 1)?;
                Ok(true)
            }
            Some(token) if token.byte == b']' => {
                tracing::trace!(depth = self.depth, "end array");
                self.json.ascend_to(self.depth - 1);
                Ok(false)
            }
            Some(token) => Err(self
                .json
                .report_error(ErrorKind::StructuralMismatch, token.start)),
            None => Err(self
                .json
                .report_error(ErrorKind::StructuralMismatch, self.json.input().len())),
        }
    }

    //
    // Scalars and raw values
    //

    /// The type of the value, judged by its first byte. Does not move the cursor.
    ///
    /// # Errors
    ///
    /// A pending cursor error (chained), `OutOfOrderIteration` if the cursor
    /// is no longer at this value, `StructuralMismatch` at the end of input or
    /// at a separator, `InvalidScalar` for any other unexpected byte. None of
    /// them is recorded.
    pub fn peek_kind(&self) -> Result<ValueKind> {
        self.assert_at_value()?;
        self.kind_at_cursor()
    }

    fn kind_at_cursor(&self) -> Result<ValueKind> {
        let index = self.json.peek_index();
        match self.json.input().get(index) {
            None => Err(Error::new(ErrorKind::StructuralMismatch, index)),
            Some(&byte) => ValueKind::from_first_byte(byte).ok_or_else(|| {
                let kind = if matches!(byte, b',' | b':' | b'}' | b']') {
                    ErrorKind::StructuralMismatch
                } else {
                    ErrorKind::InvalidScalar
                };
                Error::new(kind, index)
            }),
        }
    }

    /// Consume a scalar of the expected kind and return its raw token.
    /// Strings are returned with their quotes.
    ///
    /// # Errors
    ///
    /// As `start_object`.
    pub fn advance_scalar(&self, expected: ValueKind) -> Result<&'a [u8]> {
        let token = self.advance_token(expected)?;
        Ok(&self.json.input()[token.start..token.end])
    }

    /// Consume a string value without decoding it.
    ///
    /// # Errors
    ///
    /// As `start_object`, plus `InvalidScalar` for an unterminated string.
    pub fn advance_string(&self) -> Result<RawStr<'a>> {
        let token = self.advance_token(ValueKind::String)?;
        if !token.terminated {
            return Err(Error::new(ErrorKind::InvalidScalar, token.start));
        }
        Ok(RawStr::new(
            &self.json.input()[token.start..token.end],
            token.start,
        ))
    }

    fn advance_token(&self, expected: ValueKind) -> Result<Token> {
        self.assert_at_start(expected)?;
        let Some(token) = self.json.advance() else {
            return Err(Error::new(ErrorKind::StructuralMismatch, self.start));
        };
        self.json.ascend_to(self.depth - 1);
        Ok(token)
    }

    /// Consume the whole value without inspecting it and return its raw bytes.
    ///
    /// # Errors
    ///
    /// A pending cursor error (chained), `OutOfOrderIteration`, or
    /// `ChildSkipFailure` (recorded).
    pub fn skip_value(&self) -> Result<&'a [u8]> {
        self.assert_at_value()?;
        self.json.skip_child(self.depth - 1)?;
        Ok(&self.json.input()[self.start..self.json.position()])
    }

    fn assert_at_value(&self) -> Result<()> {
        if let Some(error) = self.json.error() {
            return Err(error.chained());
        }
        if self.json.depth() != self.depth || self.json.peek_index() != self.start {
            return Err(Error::new(ErrorKind::OutOfOrderIteration, self.start));
        }
        Ok(())
    }

    fn assert_at_start(&self, expected: ValueKind) -> Result<()> {
        self.assert_at_value()?;
        let actual = self.kind_at_cursor()?;
        if actual != expected {
            return Err(Error::new(
                ErrorKind::IncorrectType { expected, actual },
                self.start,
            ));
        }
        Ok(())
    }
}
