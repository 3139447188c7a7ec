//! Forward-only iteration over the fields of an object.
//!
//! # Live states
//!
//! While iterating or looking up fields, the cursor depth is at least the
//! iterator depth and there is no pending error:
//!
//! - Start: just past the `{`, nothing handed out yet. `at_start` is set.
//! - Next: after a scalar value was read, or a nested container was fully
//!   iterated. The cursor is at the `,` or `}` and its depth equals the
//!   iterator depth.
//! - Unfinished business: a nested container was handed out and not fully
//!   iterated. The cursor depth is above the iterator depth; advancing skips
//!   forward until the depths are equal again.
//!
//! # Error state
//!
//! The cursor carries an error while its depth still equals the iterator depth.
//! This is either an error chained from an earlier operation on the same
//! cursor, or a missing comma found by `advance`. The error is yielded exactly
//! once, then the cursor is abandoned.
//!
//! Errors found while reading a field for the caller (key is not a string,
//! missing colon) are yielded at once and the cursor is abandoned without
//! passing through the error state.
//!
//! # Terminal state
//!
//! Finished: the cursor depth is below the iterator depth, either because the
//! `}` was consumed or because the cursor was abandoned.

use core::iter::FusedIterator;

use jcursor::{Error, ErrorKind, Result, ValueIter};

use crate::field::Field;

/// Iteration state, computed from the cursor and the iterator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterState {
    Start,
    Next,
    UnfinishedBusiness,
    Error(Error),
    Finished,
}

/// Lazy iterator over the fields of one object.
///
/// Each `next()` first finishes the previous field's value if the caller left
/// it unread or half-read, then reads the next key. A field's value must be
/// consumed (or dropped) before calling `next()` again; once skipped, a value
/// is gone.
///
/// The iterator is not `Clone`: hand it off by moving it.
///
/// ```
/// use objiter::Document;
///
/// let doc = Document::new(br#"{"id": 7, "tags": ["a", "b"], "name": "x"}"#);
/// let mut keys = Vec::new();
/// for field in doc.get_object().unwrap() {
///     let field = field.unwrap();
///     keys.push(field.key().unescape().unwrap().into_owned());
/// }
/// assert_eq!(keys, ["id", "tags", "name"]);
/// ```
#[derive(Debug)]
pub struct ObjectIterator<'a> {
    iter: ValueIter<'a>,
    at_start: bool,
}

impl<'a> ObjectIterator<'a> {
    /// `iter` must be positioned just past the `{` of a started object
    #[must_use]
    pub fn new(iter: ValueIter<'a>) -> Self {
        ObjectIterator {
            iter,
            at_start: true,
        }
    }

    #[must_use]
    pub fn value_iter(&self) -> ValueIter<'a> {
        self.iter
    }

    #[must_use]
    pub fn state(&self) -> IterState {
        let depth = self.iter.json_iter().depth();
        if depth < self.iter.depth() {
            IterState::Finished
        } else if let Some(error) = self.iter.error() {
            IterState::Error(error)
        } else if self.at_start {
            IterState::Start
        } else if depth > self.iter.depth() {
            IterState::UnfinishedBusiness
        } else {
            IterState::Next
        }
    }

    /// True once the object is closed or the cursor was abandoned. A pending
    /// error keeps the iterator away from the end until it is yielded.
    #[must_use]
    pub fn at_end(&self) -> bool {
        !self.iter.is_open()
    }

    /// The field at the current position.
    ///
    /// Call once per position: the key is consumed from the input.
    ///
    /// # Errors
    ///
    /// A pending cursor error (chained), `KeyTypeMismatch`, `StructuralMismatch`
    /// or `DepthLimitExceeded`. The cursor is abandoned on any error.
    pub fn current(&self) -> Result<Field<'a>> {
        self.take_pending()?;
        self.guarded(Field::start)
    }

    /// Move past the current field: finish its value if the caller did not,
    /// then consume the separator. A no-op once the iterator is at the end.
    ///
    /// Errors stay on the cursor and are yielded by the next `current()`.
    pub fn advance(&mut self) {
        if !self.iter.is_open() {
            return;
        }
        self.at_start = false;
        if self.iter.finish_child().is_err() {
            return;
        }
        let _ = self.iter.has_next_field();
    }

    /// Scan forward for a field with the raw key `key`.
    ///
    /// On success the cursor is at the unread value of the matching field. The
    /// scan never goes back: a second lookup continues after the first match,
    /// and fields already passed are not found again.
    ///
    /// # Errors
    ///
    /// - `NoSuchField` if the object ends without a match (or the iterator
    ///   is already at the end); the object is then fully consumed.
    /// - Structural errors, after which the cursor is abandoned.
    /// - `ChildSkipFailure` while skipping a non-matching value; this one
    ///   stays pending on the cursor and is chained into the next operation.
    pub fn find_field_raw(&mut self, key: &[u8]) -> Result<()> {
        if !self.iter.is_open() {
            return Err(Error::new(
                ErrorKind::NoSuchField,
                self.iter.json_iter().position(),
            ));
        }
        self.take_pending()?;

        // Unless this is the first field, move past the previous value and the `,`
        let mut has_value = if self.at_start {
            self.at_start = false;
            true
        } else {
            self.guarded(ValueIter::finish_child)?;
            self.guarded(ValueIter::has_next_field)?
        };

        while has_value {
            let actual_key = self.guarded(ValueIter::field_key)?;
            self.guarded(ValueIter::field_value)?;

            if actual_key == *key {
                tracing::trace!(key = %String::from_utf8_lossy(key), "match");
                return Ok(());
            }
            tracing::trace!(
                key = %String::from_utf8_lossy(key),
                actual = %String::from_utf8_lossy(actual_key.as_bytes()),
                "no match"
            );
            self.iter.skip_child()?;
            has_value = self.guarded(ValueIter::has_next_field)?;
        }

        Err(Error::new(
            ErrorKind::NoSuchField,
            self.iter.json_iter().position(),
        ))
    }

    // Surface an error left on the cursor by an earlier operation
    fn take_pending(&self) -> Result<()> {
        match self.iter.error() {
            Some(error) => {
                self.iter.abandon();
                Err(error.chained())
            }
            None => Ok(()),
        }
    }

    // Run a cursor operation; the cursor is released if it fails, so that a
    // caller who keeps looping after an error cannot read past the bad spot
    fn guarded<T>(&self, op: impl FnOnce(&ValueIter<'a>) -> Result<T>) -> Result<T> {
        let result = op(&self.iter);
        if result.is_err() {
            self.iter.abandon();
        }
        result
    }
}

impl<'a> Iterator for ObjectIterator<'a> {
    type Item = Result<Field<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.at_start {
            self.at_start = false;
        } else {
            self.advance();
        }
        if self.at_end() {
            return None;
        }
        Some(self.current())
    }
}

impl FusedIterator for ObjectIterator<'_> {}
