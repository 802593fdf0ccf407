#![doc = r#"
A bounded cursor over the bytes of a MIDI file.

A [`Reader`] never reads past its end. The top-level reader ends at the end
of the buffer; [`Reader::split_chunk`] hands out a reader that ends at the
end of a chunk body, so that an event running over the chunk boundary is
reported as [`ReaderErrorKind::Truncated`] instead of silently eating the
next chunk's tag.

Positions are always absolute offsets into the original buffer.
"#]

mod error;
pub use error::*;

use crate::{ParseError, VarLen};

/// A cursor over a byte slice, limited to `[position, end)`.
#[derive(Clone, Debug)]
pub struct Reader<'slc> {
    data: &'slc [u8],
    position: usize,
    end: usize,
}

impl<'slc> Reader<'slc> {
    /// Create a reader over the whole slice
    pub const fn from_byte_slice(data: &'slc [u8]) -> Self {
        Self {
            data,
            position: 0,
            end: data.len(),
        }
    }

    /// The absolute offset of the next byte to be read
    pub const fn buffer_position(&self) -> usize {
        self.position
    }

    /// The number of bytes left before the end of this reader
    pub const fn remaining(&self) -> usize {
        self.end - self.position
    }

    /// True once every byte up to the end has been consumed
    pub const fn is_exhausted(&self) -> bool {
        self.position >= self.end
    }

    /// Look at the next byte without consuming it
    pub fn peek(&self) -> ReadResult<u8> {
        if self.is_exhausted() {
            return Err(ReaderError::truncated(self.position));
        }
        Ok(self.data[self.position])
    }

    /// Consume one byte
    pub fn read_next(&mut self) -> ReadResult<u8> {
        let byte = self.peek()?;
        self.position += 1;
        Ok(byte)
    }

    /// Consume `len` bytes and return them
    pub fn read_slice(&mut self, len: usize) -> ReadResult<&'slc [u8]> {
        let start = self.position;
        let Some(stop) = start.checked_add(len).filter(|stop| *stop <= self.end) else {
            return Err(ReaderError::truncated(start));
        };
        self.position = stop;
        Ok(&self.data[start..stop])
    }

    /// Consume exactly `N` bytes
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let mut bytes = [0; N];
        bytes.copy_from_slice(self.read_slice(N)?);
        Ok(bytes)
    }

    /// Consume and discard `len` bytes
    pub fn skip(&mut self, len: usize) -> ReadResult<()> {
        self.read_slice(len).map(|_| ())
    }

    /// Read a big-endian `u16`
    pub fn read_u16(&mut self) -> ReadResult<u16> {
        self.read_exact_size().map(u16::from_be_bytes)
    }

    /// Read a big-endian `u32`
    pub fn read_u32(&mut self) -> ReadResult<u32> {
        self.read_exact_size().map(u32::from_be_bytes)
    }

    /// Read a variable-length quantity (see [`VarLen`]).
    ///
    /// # Errors
    /// - [`ReaderErrorKind::Truncated`] if the reader ends while the
    ///   continuation bit is still set
    /// - [`ParseError::VarLenOverflow`] if the fourth byte still has its
    ///   continuation bit set
    pub fn read_varlen(&mut self) -> ReadResult<u32> {
        let start = self.position;
        let mut value: u32 = 0;
        for _ in 0..VarLen::MAX_BYTES {
            let byte = self.read_next()?;
            value = (value << 7) | u32::from(byte & 0x7F);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(ReaderError::parse_error(start, ParseError::VarLenOverflow))
    }

    /// Consume the next `len` bytes, returning a reader limited to them.
    ///
    /// # Errors
    /// if fewer than `len` bytes remain
    pub fn split_chunk(&mut self, len: usize) -> ReadResult<Reader<'slc>> {
        let start = self.position;
        self.skip(len)?;
        Ok(Reader {
            data: self.data,
            position: start,
            end: self.position,
        })
    }
}

#[test]
fn test_read_varlen() {
    use pretty_assertions::assert_eq;
    fn read(bytes: &[u8]) -> u32 {
        Reader::from_byte_slice(bytes).read_varlen().unwrap()
    }
    assert_eq!(read(&[0]), 0);
    assert_eq!(read(&[0x7f]), 0x7f);
    assert_eq!(read(&[0x81, 0x00]), 0x80);
    assert_eq!(read(&[0xff, 0x7f]), 0x3fff);
    assert_eq!(read(&[0x87, 0x68]), 0x3e8);
    assert_eq!(read(&[0xbd, 0x84, 0x40]), 0xf4240);
    assert_eq!(read(&[0xff, 0xff, 0xff, 0x7f]), 0x0fff_ffff);
}

#[test]
fn varlen_stops_at_four_bytes() {
    use pretty_assertions::assert_eq;
    let mut reader = Reader::from_byte_slice(&[0x00, 0x81, 0x80, 0x80, 0x80, 0x00]);
    reader.skip(1).unwrap();
    let err = reader.read_varlen().unwrap_err();
    assert_eq!(
        err,
        ReaderError::parse_error(1, ParseError::VarLenOverflow)
    );
}

#[test]
fn varlen_reports_truncation() {
    let mut reader = Reader::from_byte_slice(&[0x81, 0x80]);
    assert!(reader.read_varlen().unwrap_err().is_truncated());
}

#[test]
fn chunk_reader_is_bounded() {
    use pretty_assertions::assert_eq;
    let bytes = [1, 2, 3, 4, 5];
    let mut reader = Reader::from_byte_slice(&bytes);
    reader.skip(1).unwrap();

    let mut chunk = reader.split_chunk(2).unwrap();
    assert_eq!(reader.buffer_position(), 3);
    assert_eq!(chunk.remaining(), 2);
    assert_eq!(chunk.read_u16().unwrap(), 0x0203);
    assert!(chunk.is_exhausted());

    let err = chunk.read_next().unwrap_err();
    assert!(err.is_truncated());
    assert_eq!(err.position(), 3);

    assert!(reader.split_chunk(3).unwrap_err().is_truncated());
}
