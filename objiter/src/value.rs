use std::borrow::Cow;

use jcursor::jiter::{Jiter, NumberInt};
use jcursor::{Error, ErrorKind, RawStr, Result, ValueIter, ValueKind};

use crate::array_iterator::ArrayIterator;
use crate::fields_result::FieldsResult;
use crate::object::Object;

/// A lazily read value. Reading it moves the shared cursor past it; a value
/// can be read only once, and only while the cursor is still at it.
#[derive(Debug, Clone, Copy)]
pub struct Value<'a> {
    iter: ValueIter<'a>,
}

impl<'a> Value<'a> {
    pub(crate) fn new(iter: ValueIter<'a>) -> Self {
        Value { iter }
    }

    #[must_use]
    pub fn value_iter(&self) -> ValueIter<'a> {
        self.iter
    }

    /// # Errors
    ///
    /// `OutOfOrderIteration` once the cursor moved past the value, a chained
    /// cursor error, or a structural error if there is no value at the cursor.
    pub fn kind(&self) -> Result<ValueKind> {
        self.iter.peek_kind()
    }

    /// # Errors
    ///
    /// `IncorrectType`, `OutOfOrderIteration` or a chained cursor error.
    pub fn get_object(self) -> Result<Object<'a>> {
        Object::start(self.iter)
    }

    /// # Errors
    ///
    /// `IncorrectType`, `OutOfOrderIteration` or a chained cursor error.
    pub fn get_array(self) -> Result<ArrayIterator<'a>> {
        ArrayIterator::start(self.iter)
    }

    /// Iterate the fields; an error from starting the object is yielded as the
    /// only item.
    #[must_use]
    pub fn fields(self) -> FieldsResult<'a> {
        FieldsResult::new(self.get_object().map(Object::into_iter))
    }

    /// Start the object and look up one field.
    ///
    /// # Errors
    ///
    /// As `get_object` and `Object::find_field`.
    pub fn find_field(self, key: &str) -> Result<Value<'a>> {
        self.get_object()?.find_field(key)
    }

    /// # Errors
    ///
    /// As `get_object`, plus `InvalidScalar` for a bad string.
    pub fn get_str(self) -> Result<Cow<'a, str>> {
        self.get_raw_str()?.unescape()
    }

    /// The string without decoding escapes.
    ///
    /// # Errors
    ///
    /// As `get_object`, plus `InvalidScalar` for an unterminated string.
    pub fn get_raw_str(self) -> Result<RawStr<'a>> {
        self.iter.advance_string()
    }

    /// # Errors
    ///
    /// As `get_object`, plus `InvalidScalar` and `NumberOutOfRange`.
    pub fn get_i64(self) -> Result<i64> {
        let start = self.iter.start_index();
        let token = self.iter.advance_scalar(ValueKind::Number)?;
        let mut jiter = Jiter::new(token);
        let number = jiter
            .next_int()
            .map_err(|e| Error::from_jiter_error(start, &e))?;
        finish_scalar(&mut jiter, start)?;
        match number {
            NumberInt::Int(i) => Ok(i),
            #[allow(unreachable_patterns)]
            _ => Err(Error::new(ErrorKind::NumberOutOfRange, start)),
        }
    }

    /// # Errors
    ///
    /// As `get_object`, plus `InvalidScalar`.
    pub fn get_f64(self) -> Result<f64> {
        let start = self.iter.start_index();
        let token = self.iter.advance_scalar(ValueKind::Number)?;
        let mut jiter = Jiter::new(token);
        let number = jiter
            .next_float()
            .map_err(|e| Error::from_jiter_error(start, &e))?;
        finish_scalar(&mut jiter, start)?;
        Ok(number)
    }

    /// # Errors
    ///
    /// As `get_object`, plus `InvalidScalar`.
    pub fn get_bool(self) -> Result<bool> {
        let start = self.iter.start_index();
        let token = self.iter.advance_scalar(ValueKind::Bool)?;
        let mut jiter = Jiter::new(token);
        let value = jiter
            .next_bool()
            .map_err(|e| Error::from_jiter_error(start, &e))?;
        finish_scalar(&mut jiter, start)?;
        Ok(value)
    }

    /// Consume the value if it is `null`. Any other value is left unread.
    ///
    /// # Errors
    ///
    /// `OutOfOrderIteration`, a chained cursor error, `InvalidScalar`.
    pub fn is_null(self) -> Result<bool> {
        if self.iter.peek_kind()? != ValueKind::Null {
            return Ok(false);
        }
        let start = self.iter.start_index();
        let token = self.iter.advance_scalar(ValueKind::Null)?;
        let mut jiter = Jiter::new(token);
        jiter
            .next_null()
            .map_err(|e| Error::from_jiter_error(start, &e))?;
        finish_scalar(&mut jiter, start)?;
        Ok(true)
    }

    /// Skip the value and return its raw text, without validating it.
    ///
    /// # Errors
    ///
    /// `OutOfOrderIteration`, a chained cursor error, `ChildSkipFailure`.
    pub fn raw_json(self) -> Result<&'a [u8]> {
        self.iter.skip_value()
    }
}

// The scanner cuts scalars at delimiters only, so `12ab` reaches jiter whole
fn finish_scalar(jiter: &mut Jiter, start: usize) -> Result<()> {
    jiter
        .finish()
        .map_err(|e| Error::from_jiter_error(start, &e))
}
