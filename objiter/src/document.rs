use jcursor::{Error, ErrorKind, JsonIter, Options, Result};

use crate::array_iterator::ArrayIterator;
use crate::fields_result::FieldsResult;
use crate::object::Object;
use crate::value::Value;

/// One JSON document over a byte slice. Owns the shared cursor; every value,
/// object and iterator obtained from it borrows the document.
#[derive(Debug)]
pub struct Document<'j> {
    json: JsonIter<'j>,
}

impl<'j> Document<'j> {
    #[must_use]
    pub fn new(input: &'j [u8]) -> Self {
        Document {
            json: JsonIter::new(input),
        }
    }

    #[must_use]
    pub fn with_options(input: &'j [u8], options: Options) -> Self {
        Document {
            json: JsonIter::with_options(input, options),
        }
    }

    #[must_use]
    pub fn json_iter(&self) -> &JsonIter<'j> {
        &self.json
    }

    /// The root value. It can be read once.
    #[must_use]
    pub fn root(&self) -> Value<'_> {
        Value::new(self.json.root())
    }

    /// # Errors
    ///
    /// See `Value::get_object`.
    pub fn get_object(&self) -> Result<Object<'_>> {
        self.root().get_object()
    }

    /// # Errors
    ///
    /// See `Value::get_array`.
    pub fn get_array(&self) -> Result<ArrayIterator<'_>> {
        self.root().get_array()
    }

    #[must_use]
    pub fn fields(&self) -> FieldsResult<'_> {
        self.root().fields()
    }

    #[must_use]
    pub fn error(&self) -> Option<Error> {
        self.json.error()
    }

    /// Check that the root value was read completely and nothing follows it.
    ///
    /// # Errors
    ///
    /// A pending cursor error, `OutOfOrderIteration` if the root value is not
    /// finished, `TrailingContent` if non-whitespace follows it.
    pub fn finish(&self) -> Result<()> {
        if let Some(error) = self.json.error() {
            return Err(error.chained());
        }
        if self.json.depth() != 0 {
            return Err(Error::new(
                ErrorKind::OutOfOrderIteration,
                self.json.position(),
            ));
        }
        if !self.json.at_eof() {
            return Err(Error::new(
                ErrorKind::TrailingContent,
                self.json.peek_index(),
            ));
        }
        Ok(())
    }
}
