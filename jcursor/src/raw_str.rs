use std::borrow::Cow;

use jiter::Jiter;

use crate::error::{Error, ErrorKind, Result};

/// A JSON string as it appears in the input, escapes untouched.
///
/// Comparison against a key is byte-for-byte on the raw content, so a key
/// written with escapes only matches the same escaped spelling.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RawStr<'a> {
    quoted: &'a [u8],
    index: usize,
}

/// Raw object key, as returned by `ValueIter::field_key`
pub type RawKey<'a> = RawStr<'a>;

impl<'a> RawStr<'a> {
    /// `quoted` includes both quotes and starts at `index` of the input
    pub(crate) fn new(quoted: &'a [u8], index: usize) -> Self {
        RawStr { quoted, index }
    }

    /// The bytes between the quotes
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.quoted[1..self.quoted.len() - 1]
    }

    /// Position of the opening quote in the input
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Decode escapes. Borrows from the input when there is nothing to decode.
    ///
    /// # Errors
    ///
    /// `InvalidScalar` for invalid UTF-8 or a bad escape sequence.
    pub fn unescape(&self) -> Result<Cow<'a, str>> {
        let content = self.as_bytes();
        if !content.contains(&b'\\') {
            return std::str::from_utf8(content)
                .map(Cow::Borrowed)
                .map_err(|_| Error::new(ErrorKind::InvalidScalar, self.index));
        }
        let mut jiter = Jiter::new(self.quoted);
        jiter
            .next_str()
            .map(|s| Cow::Owned(s.to_owned()))
            .map_err(|e| Error::from_jiter_error(self.index, &e))
    }
}

impl PartialEq<[u8]> for RawStr<'_> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<str> for RawStr<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for RawStr<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl std::fmt::Debug for RawStr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RawStr({:?} at {})",
            String::from_utf8_lossy(self.as_bytes()),
            self.index
        )
    }
}
