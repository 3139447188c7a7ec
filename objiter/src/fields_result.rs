use core::iter::FusedIterator;

use jcursor::{Error, Result};

use crate::field::Field;
use crate::object_iterator::{IterState, ObjectIterator};

/// Field iteration over a value that may have failed to start as an object.
///
/// A failed start is yielded once as an error item, then the iteration ends.
/// Otherwise this behaves as the wrapped `ObjectIterator`.
#[derive(Debug)]
pub struct FieldsResult<'a> {
    inner: core::result::Result<ObjectIterator<'a>, Error>,
    error_yielded: bool,
}

impl<'a> FieldsResult<'a> {
    #[must_use]
    pub fn new(inner: Result<ObjectIterator<'a>>) -> Self {
        FieldsResult {
            inner,
            error_yielded: false,
        }
    }

    /// The error the object failed to start with, if any
    #[must_use]
    pub fn error(&self) -> Option<Error> {
        self.inner.as_ref().err().copied()
    }

    /// An error that was not yet yielded keeps the iteration away from the end.
    /// For a started object, the end is the finished state of the iterator.
    #[must_use]
    pub fn at_end(&self) -> bool {
        match &self.inner {
            Err(_) => self.error_yielded,
            Ok(iter) => iter.state() == IterState::Finished,
        }
    }

    /// # Errors
    ///
    /// The start error, or see `ObjectIterator::current`.
    pub fn current(&mut self) -> Result<Field<'a>> {
        match &self.inner {
            Err(error) => {
                self.error_yielded = true;
                Err(*error)
            }
            Ok(iter) => iter.current(),
        }
    }

    pub fn advance(&mut self) {
        if let Ok(iter) = &mut self.inner {
            iter.advance();
        }
    }
}

impl<'a> Iterator for FieldsResult<'a> {
    type Item = Result<Field<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Err(error) => {
                if self.error_yielded {
                    return None;
                }
                self.error_yielded = true;
                Some(Err(*error))
            }
            Ok(iter) => iter.next(),
        }
    }
}

impl FusedIterator for FieldsResult<'_> {}
