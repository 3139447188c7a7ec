use jcursor::{Result, ValueIter};

use crate::object_iterator::{IterState, ObjectIterator};
use crate::value::Value;

/// A started object.
///
/// Lookups and iteration share one forward scan: `find_field` continues from
/// where the previous lookup (or iteration step) stopped.
///
/// The scan position is shared, but the start flag is not, so an object can
/// only be moved, never copied:
///
/// ```compile_fail
/// use objiter::Document;
///
/// let doc = Document::new(br#"{"a": 1, "b": 2}"#);
/// let object = doc.get_object().unwrap();
/// let mut first = object;
/// first.find_field("a").unwrap();
/// let _ = object.into_iter().next();
/// ```
#[derive(Debug)]
pub struct Object<'a> {
    fields: ObjectIterator<'a>,
}

impl<'a> Object<'a> {
    /// Consume the `{` of the value at `iter`
    pub(crate) fn start(iter: ValueIter<'a>) -> Result<Object<'a>> {
        iter.start_object()?;
        Ok(Object {
            fields: ObjectIterator::new(iter),
        })
    }

    /// Find the next field named `key` and return its unread value.
    ///
    /// Compares raw keys: escapes in the input are not decoded.
    ///
    /// # Errors
    ///
    /// See `ObjectIterator::find_field_raw`.
    pub fn find_field(&mut self, key: &str) -> Result<Value<'a>> {
        self.fields.find_field_raw(key.as_bytes())?;
        Ok(Value::new(self.fields.value_iter().child()))
    }

    #[must_use]
    pub fn state(&self) -> IterState {
        self.fields.state()
    }
}

impl<'a> IntoIterator for Object<'a> {
    type Item = Result<crate::field::Field<'a>>;
    type IntoIter = ObjectIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields
    }
}
