use core::cell::Cell;

use crate::error::{Error, ErrorKind, Result};
use crate::options::Options;
use crate::token::{scan_token, skip_whitespace, Token};
use crate::value_iter::ValueIter;

/// Shared position over one JSON document.
///
/// All handles derived from a document (`ValueIter` and everything built on
/// it) borrow the same `JsonIter`. The state lives in `Cell`s, so the handles
/// can be copied freely while the type stays `!Sync`.
///
/// Depth convention: a pending value at depth `d` leaves the cursor at `d`.
/// Reading a scalar ascends to `d - 1`. A started object stays at `d` between
/// fields and its values are pending at `d + 1`. A started array is at `d + 1`
/// while an element is pending. Closing a container ascends to `d - 1`.
/// The document root is at depth 1, so depth 0 means the document is done.
pub struct JsonIter<'j> {
    input: &'j [u8],
    pos: Cell<usize>,
    depth: Cell<u32>,
    error: Cell<Option<Error>>,
    options: Options,
}

impl std::fmt::Debug for JsonIter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "JsonIter {{ pos: {:?}, depth: {:?}, error: {:?}, len: {:?} }}",
            self.pos.get(),
            self.depth.get(),
            self.error.get(),
            self.input.len()
        )
    }
}

impl<'j> JsonIter<'j> {
    #[must_use]
    pub fn new(input: &'j [u8]) -> Self {
        Self::with_options(input, Options::default())
    }

    #[must_use]
    pub fn with_options(input: &'j [u8], options: Options) -> Self {
        JsonIter {
            input,
            pos: Cell::new(0),
            depth: Cell::new(1),
            error: Cell::new(None),
            options,
        }
    }

    /// Handle for the document root value
    #[must_use]
    pub fn root(&self) -> ValueIter<'_> {
        ValueIter::new(self, 1, self.peek_index())
    }

    #[must_use]
    pub fn input(&self) -> &'j [u8] {
        self.input
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Byte offset of the next unread byte (whitespace included)
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos.get()
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth.get()
    }

    /// The first error recorded on the cursor, if any
    #[must_use]
    pub fn error(&self) -> Option<Error> {
        self.error.get()
    }

    /// Release the cursor: depth drops to 0 and the position jumps to the end.
    /// Every handle is closed afterwards. Idempotent.
    pub fn abandon(&self) {
        if self.depth.get() != 0 {
            tracing::trace!(depth = self.depth.get(), pos = self.pos.get(), "abandon");
        }
        self.depth.set(0);
        self.pos.set(self.input.len());
    }

    /// Index of the next token, skipping whitespace
    #[must_use]
    pub fn peek_index(&self) -> usize {
        skip_whitespace(self.input, self.pos.get())
    }

    /// First byte of the next token
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.peek_index()).copied()
    }

    /// True if only whitespace is left
    #[must_use]
    pub fn at_eof(&self) -> bool {
        self.peek_index() >= self.input.len()
    }

    pub(crate) fn advance(&self) -> Option<Token> {
        let start = self.peek_index();
        if start >= self.input.len() {
            self.pos.set(self.input.len());
            return None;
        }
        let token = scan_token(self.input, start);
        self.pos.set(token.end);
        Some(token)
    }

    pub(crate) fn ascend_to(&self, depth: u32) {
        self.depth.set(depth);
    }

    pub(crate) fn descend_to(&self, depth: u32) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(self.report_error(ErrorKind::DepthLimitExceeded, self.pos.get()));
        }
        self.depth.set(depth);
        Ok(())
    }

    /// Record a structural error on the cursor. The first recorded error is
    /// kept; the returned error is always the new one.
    pub(crate) fn report_error(&self, kind: ErrorKind, index: usize) -> Error {
        let error = Error::new(kind, index);
        tracing::debug!(?kind, index, depth = self.depth.get(), "cursor error");
        if self.error.get().is_none() {
            self.error.set(Some(error));
        }
        error
    }

    /// Skip tokens until the depth is back at `parent_depth`.
    ///
    /// Works both for a child that was never read (depth is `parent_depth + 1`
    /// and the cursor is at the value) and for a child container that was
    /// partially iterated (the cursor is somewhere inside it). Nested content is
    /// not validated.
    pub(crate) fn skip_child(&self, parent_depth: u32) -> Result<()> {
        if self.depth.get() <= parent_depth {
            return Ok(());
        }

        let Some(token) = self.advance() else {
            return Err(self.report_error(ErrorKind::ChildSkipFailure, self.input.len()));
        };
        match token.byte {
            // Start of an unread container, or a separator inside a started one:
            // the current depth already accounts for them
            b'[' | b'{' | b':' | b',' => {}
            b']' | b'}' => {
                self.depth.set(self.depth.get() - 1);
                if self.depth.get() <= parent_depth {
                    return Ok(());
                }
            }
            // A key of a started object: also consume its colon. A pending
            // string value is followed by `,` or a closing bracket, never `:`
            b'"' if self.peek() == Some(b':') => {
                let _ = self.advance();
            }
            // An unread scalar
            _ => {
                self.depth.set(self.depth.get() - 1);
                if self.depth.get() <= parent_depth {
                    return Ok(());
                }
            }
        }

        while let Some(token) = self.advance() {
            match token.byte {
                b'[' | b'{' => self.depth.set(self.depth.get() + 1),
                b']' | b'}' => {
                    self.depth.set(self.depth.get() - 1);
                    if self.depth.get() <= parent_depth {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }

        Err(self.report_error(ErrorKind::ChildSkipFailure, self.input.len()))
    }
}
