#![doc = r#"
Rusty representation of the note onsets in a Standard MIDI File
"#]

/// Contains the [`DocumentBuilder`](builder::DocumentBuilder) and the
/// chunk readers it is fed from.
pub mod builder;

mod cursor;

mod format;
pub use format::*;

mod header;
pub use header::*;

mod timing;
pub use timing::*;

mod track;
pub use track::*;

use crate::{
    file::builder::{
        DocumentBuilder,
        chunk::{HeaderChunk, TrackChunk},
    },
    reader::{ReadResult, Reader},
};
use alloc::vec::Vec;

#[doc = r#"
Every track of a Standard MIDI File, reduced to its sounding note onsets.

A [`Document`] is built in one go by [`Document::parse`] and is read-only
afterwards.

# Example
```rust
# use noteplot::prelude::*;
let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 2, 0, 96,
    b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0x90, 0x3C, 0x64,
    b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x60, 0x91, 0x40, 0x7F,
];
let document = Document::parse(&bytes).unwrap();

assert_eq!(document.header().format(), FormatType::Simultaneous);
assert_eq!(document.tracks().len(), 2);
assert_eq!(document.tracks()[1].events()[0].tick(), 96);
```
"#]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document {
    header: Header,
    tracks: Vec<Track>,
}

impl Document {
    /// Parse a complete Standard MIDI File.
    ///
    /// The buffer must start with an `MThd` chunk, followed by nothing but
    /// `MTrk` chunks up to its very end.
    ///
    /// # Errors
    /// The first problem found, with the offset it was found at. No partial
    /// document is returned.
    pub fn parse(bytes: &[u8]) -> ReadResult<Self> {
        let mut reader = Reader::from_byte_slice(bytes);

        let header = HeaderChunk::read(&mut reader)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "read header: format {:?}, {} tracks declared, timing {:?}",
            header.format(),
            header.declared_tracks(),
            header.timing()
        );

        let mut builder = DocumentBuilder::new(header);
        while !reader.is_exhausted() {
            let chunk = TrackChunk::read(&mut reader)?;
            #[cfg(feature = "tracing")]
            tracing::debug!("reading track chunk of {} bytes", chunk.len());
            builder.push_track(chunk.events()?);
        }

        Ok(builder.build())
    }

    /// Returns header info
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns the tracks in chunk order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Every note onset, track by track.
    pub fn events(&self) -> impl Iterator<Item = &RawEvent> {
        self.tracks.iter().flat_map(Track::events)
    }

    /// The total number of note onsets
    pub fn note_count(&self) -> usize {
        self.tracks.iter().map(Track::len).sum()
    }
}
