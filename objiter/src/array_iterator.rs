use core::iter::FusedIterator;

use jcursor::{Result, ValueIter};

use crate::value::Value;

/// Lazy iterator over the elements of an array.
///
/// Like `ObjectIterator`, an element left unread or half-read is skipped when
/// the iterator moves on.
#[derive(Debug)]
pub struct ArrayIterator<'a> {
    iter: ValueIter<'a>,
    at_start: bool,
}

impl<'a> ArrayIterator<'a> {
    /// Consume the `[` of the value at `iter`
    pub(crate) fn start(iter: ValueIter<'a>) -> Result<ArrayIterator<'a>> {
        iter.start_array()?;
        Ok(ArrayIterator {
            iter,
            at_start: true,
        })
    }

    #[must_use]
    pub fn at_end(&self) -> bool {
        !self.iter.is_open()
    }

    /// The element at the current position.
    ///
    /// # Errors
    ///
    /// A pending cursor error (chained); the cursor is abandoned.
    pub fn current(&self) -> Result<Value<'a>> {
        if let Some(error) = self.iter.error() {
            self.iter.abandon();
            return Err(error.chained());
        }
        Ok(Value::new(self.iter.child()))
    }

    /// Move past the current element. A no-op at the end.
    pub fn advance(&mut self) {
        if !self.iter.is_open() {
            return;
        }
        self.at_start = false;
        if self.iter.finish_child().is_err() {
            return;
        }
        let _ = self.iter.has_next_element();
    }
}

impl<'a> Iterator for ArrayIterator<'a> {
    type Item = Result<Value<'a>>;

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

impl FusedIterator for ArrayIterator<'_> {}
