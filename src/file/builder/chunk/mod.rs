#![doc = r#"
Readers for the two chunk types of a Standard MIDI File

MIDI files are organized into chunks, each identified by a 4-character ASCII
type identifier followed by a 32-bit big-endian length field and then the
chunk data.

## [`HeaderChunk`]

The header chunk (identified by "MThd") must be the first chunk in a MIDI
file. It holds the format, the number of tracks and the timing division. Its
length is 6; any bytes past those six are skipped.

## [`TrackChunk`]

Track chunks (identified by "MTrk") contain the delta-timed events. Every
chunk after the header must be a track chunk.

```text
[Header Chunk: "MThd" | length | format | ntrks | division]
[Track Chunk 1: "MTrk" | length | events...]
...
[Track Chunk N: "MTrk" | length | events...]
```
"#]

use crate::{
    ChunkError,
    file::{FormatType, Header, Timing, Track, cursor::TrackCursor},
    reader::{ReadResult, Reader, ReaderError},
};

/// The `MThd` chunk at the start of a file.
pub struct HeaderChunk;

impl HeaderChunk {
    /// The chunk tag
    pub const MAGIC: [u8; 4] = *b"MThd";
    /// The length every header declares, at least
    pub const LEN: u32 = 6;

    /// Read the header chunk.
    ///
    /// # Errors
    /// - truncation if fewer than 14 bytes are available
    /// - [`ChunkError::BadMagic`] if the tag is not `MThd`
    /// - [`ChunkError::HeaderLength`] if the declared length is below 6
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<Header> {
        let position = reader.buffer_position();
        let magic = reader.read_exact_size::<4>()?;
        if magic != Self::MAGIC {
            return Err(ReaderError::parse_error(
                position,
                ChunkError::BadMagic(magic),
            ));
        }

        let position = reader.buffer_position();
        let len = reader.read_u32()?;
        if len < Self::LEN {
            return Err(ReaderError::parse_error(
                position,
                ChunkError::HeaderLength(len),
            ));
        }

        let mut body = reader.split_chunk(len as usize)?;
        let format = FormatType::from(body.read_u16()?);
        let declared_tracks = body.read_u16()?;
        let timing = Timing::from_division(body.read_exact_size()?);

        Ok(Header::new(format, declared_tracks, timing))
    }
}

/// An `MTrk` chunk: the bounded body of one track.
pub struct TrackChunk<'slc> {
    body: Reader<'slc>,
}

impl<'slc> TrackChunk<'slc> {
    /// The chunk tag
    pub const MAGIC: [u8; 4] = *b"MTrk";

    /// Read a chunk tag and length, and split off the body.
    ///
    /// # Errors
    /// - [`ChunkError::BadTrackMagic`] if the tag is not `MTrk`
    /// - truncation if the tag, length or body run past the end of the data
    pub fn read(reader: &mut Reader<'slc>) -> ReadResult<Self> {
        let position = reader.buffer_position();
        let magic = reader.read_exact_size::<4>()?;
        if magic != Self::MAGIC {
            return Err(ReaderError::parse_error(
                position,
                ChunkError::BadTrackMagic(magic),
            ));
        }
        let len = reader.read_u32()?;
        let body = reader.split_chunk(len as usize)?;
        Ok(Self { body })
    }

    /// The length of the track body in bytes
    pub const fn len(&self) -> usize {
        self.body.remaining()
    }

    /// True if the chunk has no events at all
    pub const fn is_empty(&self) -> bool {
        self.body.is_exhausted()
    }

    /// Decode the note onsets of the chunk.
    pub fn events(self) -> ReadResult<Track> {
        TrackCursor::new(self.body).read_track()
    }
}

#[test]
fn header_with_extra_bytes() {
    use pretty_assertions::assert_eq;
    let bytes = [
        b'M', b'T', b'h', b'd', 0, 0, 0, 8, 0, 1, 0, 2, 0x01, 0xE0, 0xAA, 0xBB, b'M',
    ];
    let mut reader = Reader::from_byte_slice(&bytes);
    let header = HeaderChunk::read(&mut reader).unwrap();
    assert_eq!(header.format(), FormatType::Simultaneous);
    assert_eq!(header.declared_tracks(), 2);
    assert_eq!(header.timing(), &Timing::TicksPerQuarterNote(480));
    assert_eq!(reader.buffer_position(), 16);
}

#[test]
fn header_too_short() {
    use crate::ParseError;
    use crate::reader::ReaderErrorKind;
    use pretty_assertions::assert_eq;

    let bytes = [b'M', b'T', b'h', b'd', 0, 0, 0, 4, 0, 0, 0, 1];
    let err = HeaderChunk::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::ParseError(ParseError::Chunk(ChunkError::HeaderLength(4)))
    );
    assert_eq!(err.position(), 4);

    let bytes = [b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 1];
    let err = HeaderChunk::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
    assert!(err.is_truncated());
}

#[test]
fn track_chunk_length() {
    use pretty_assertions::assert_eq;
    let bytes = [b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00];
    let mut reader = Reader::from_byte_slice(&bytes);
    let chunk = TrackChunk::read(&mut reader).unwrap();
    assert_eq!(chunk.len(), 4);
    assert!(reader.is_exhausted());
    assert!(chunk.events().unwrap().is_empty());
}
