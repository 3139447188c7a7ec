use jcursor::{RawKey, Result, ValueIter};

use crate::value::Value;

/// One key/value pair of an object. The value is not read yet.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    key: RawKey<'a>,
    value: Value<'a>,
}

impl<'a> Field<'a> {
    /// Read the key and the colon at the cursor position of the object `iter`
    pub(crate) fn start(iter: &ValueIter<'a>) -> Result<Field<'a>> {
        let key = iter.field_key()?;
        iter.field_value()?;
        Ok(Field {
            key,
            value: Value::new(iter.child()),
        })
    }

    #[must_use]
    pub fn key(&self) -> RawKey<'a> {
        self.key
    }

    #[must_use]
    pub fn value(&self) -> Value<'a> {
        self.value
    }

    #[must_use]
    pub fn into_value(self) -> Value<'a> {
        self.value
    }

    #[must_use]
    pub fn into_parts(self) -> (RawKey<'a>, Value<'a>) {
        (self.key, self.value)
    }
}
