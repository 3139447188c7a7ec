use embedded_io::Read;

use crate::error::LoadError;

/// Read the whole input into the client-provided buffer.
///
/// Returns the filled part of the buffer, ready for `JsonIter::new`.
/// No allocation is done: the document must fit into `buf`.
///
/// # Errors
///
/// `BufferTooSmall` if the reader still has data when the buffer is full,
/// `Io` from the underlying reader.
pub fn read_into<'buf, R: Read>(
    reader: &mut R,
    buf: &'buf mut [u8],
) -> Result<&'buf [u8], LoadError<R::Error>> {
    let mut n_bytes = 0;
    loop {
        if n_bytes == buf.len() {
            let mut probe = [0u8; 1];
            if reader.read(&mut probe).map_err(LoadError::Io)? > 0 {
                return Err(LoadError::BufferTooSmall {
                    capacity: buf.len(),
                });
            }
            break;
        }
        let n_new_bytes = reader.read(&mut buf[n_bytes..]).map_err(LoadError::Io)?;
        if n_new_bytes == 0 {
            break;
        }
        n_bytes += n_new_bytes;
    }
    tracing::trace!(n_bytes, "input loaded");
    Ok(&buf[..n_bytes])
}
