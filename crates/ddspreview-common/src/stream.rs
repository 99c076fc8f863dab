//! Forward-only byte stream over a borrowed slice.
//!
//! [`ByteStream`] is the cursor the header decoder and surface walker share:
//! each read advances the position, so after a full parse
//! [`ByteStream::position`] is exactly the number of bytes consumed.

use zerocopy::FromBytes;

use crate::{Error, Result};

/// A forward-only reader over a byte slice.
///
/// The stream never owns its input; callers keep the buffer alive for the
/// lifetime of the stream and of any slices it hands out.
///
/// # Example
///
/// ```
/// use ddspreview_common::ByteStream;
///
/// let data = [b'D', b'D', b'S', b' ', 0x7C, 0x00, 0x00, 0x00];
/// let mut stream = ByteStream::new(&data);
///
/// stream.expect_magic(b"DDS ").unwrap();
/// assert_eq!(stream.read_array::<4>().unwrap(), [0x7C, 0, 0, 0]);
/// assert!(stream.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ByteStream<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteStream<'a> {
    /// Create a new stream positioned at the start of `data`.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Total length of the underlying buffer.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Number of bytes left to read.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Check if there are no more bytes to read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Read `count` bytes and advance.
    ///
    /// On failure the position is left untouched.
    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8]> {
        if self.remaining() < count {
            return Err(Error::UnexpectedEof {
                offset: self.position,
                needed: count,
                available: self.remaining(),
            });
        }
        let bytes = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(bytes)
    }

    /// Read a fixed-size byte array.
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read a struct using zerocopy.
    ///
    /// Byte order is the responsibility of `T`; on-disk records should be
    /// declared with `zerocopy::little_endian` field types.
    #[inline]
    pub fn read_struct<T: FromBytes>(&mut self) -> Result<T> {
        let size = std::mem::size_of::<T>();
        let offset = self.position;
        let bytes = self.read_bytes(size)?;
        T::read_from_bytes(bytes).map_err(|_| Error::UnexpectedEof {
            offset,
            needed: size,
            available: bytes.len(),
        })
    }

    /// Expect specific magic bytes.
    pub fn expect_magic(&mut self, expected: &[u8]) -> Result<()> {
        let actual = self.read_bytes(expected.len())?;
        if actual != expected {
            return Err(Error::InvalidMagic {
                expected: expected.to_vec(),
                actual: actual.to_vec(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zerocopy::little_endian::U32;
    use zerocopy::{FromBytes, Immutable, KnownLayout, Unaligned};

    #[derive(Debug, FromBytes, Immutable, KnownLayout, Unaligned)]
    #[repr(C)]
    struct Pair {
        a: U32,
        b: U32,
    }

    #[test]
    fn test_read_little_endian_struct() {
        let data = [
            0x01u8, 0x02, 0x03, 0x04, // a: 0x04030201
            0xFF, 0xFF, 0xFF, 0xFF, // b: 0xFFFFFFFF
        ];
        let mut stream = ByteStream::new(&data);

        let pair: Pair = stream.read_struct().unwrap();
        assert_eq!(pair.a.get(), 0x04030201);
        assert_eq!(pair.b.get(), 0xFFFFFFFF);
        assert!(stream.is_empty());
        assert_eq!(stream.position(), 8);
    }

    #[test]
    fn test_read_struct_advances() {
        let data = [1u8, 0, 0, 0, 2, 0, 0, 0, 9];
        let mut stream = ByteStream::new(&data);

        let pair: Pair = stream.read_struct().unwrap();
        assert_eq!(pair.a.get(), 1);
        assert_eq!(pair.b.get(), 2);
        assert_eq!(stream.remaining(), 1);
    }

    #[test]
    fn test_eof_reports_offset_and_keeps_position() {
        let data = [0u8; 6];
        let mut stream = ByteStream::new(&data);
        stream.read_array::<4>().unwrap();

        let err = stream.read_array::<4>().unwrap_err();
        assert_eq!(
            err,
            Error::UnexpectedEof {
                offset: 4,
                needed: 4,
                available: 2
            }
        );
        assert!(err.is_eof());
        assert_eq!(stream.position(), 4);
    }

    #[test]
    fn test_magic_mismatch() {
        let mut stream = ByteStream::new(b"DDX \x00");
        let err = stream.expect_magic(b"DDS ").unwrap_err();
        assert!(matches!(err, Error::InvalidMagic { .. }));
    }

    #[test]
    fn test_read_array() {
        let mut stream = ByteStream::new(b"DXT1rest");
        assert_eq!(&stream.read_array::<4>().unwrap(), b"DXT1");
        assert_eq!(stream.position(), 4);
    }
}
