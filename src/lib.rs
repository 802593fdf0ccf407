#![doc = r#"
Decode the note onsets of a Standard MIDI File and lay them out as a piano roll.

# Overview

The crate works in three strictly sequential stages:

1. [`Document::parse`] walks the `MThd`/`MTrk` chunks of a file and collects
   every sounding note-on of every track, stamped with its absolute tick.
2. [`project`] flattens those tracks, orders them by time and maps each
   note onto a canvas as a [`DrawRect`].
3. [`SvgDocument`](render::SvgDocument) turns the rectangles into an SVG
   image, optionally as a standalone XML document.

Ticks are never converted to wall-clock time; tempo and time signature meta
events are skipped like every other meta event.

# Example
```rust
use noteplot::prelude::*;

let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 1, 0, 96,
    b'M', b'T', b'r', b'k', 0, 0, 0, 8,
    0x00, 0x90, 0x3C, 0x64, // note on, middle C
    0x0A, 0x80, 0x3C, 0x40, // note off ten ticks later
];

let document = Document::parse(&bytes).unwrap();
let event = document.tracks()[0].events()[0];
assert_eq!(event.tick(), 0);
assert_eq!(event.note().byte(), 60);
assert_eq!(event.velocity().byte(), 100);

let rects = project(&document, Canvas::default());
let svg = SvgDocument::new(Canvas::default(), &SvgStyle::default()).with_notes(&rects);
assert!(svg.to_standalone().starts_with("<?xml"));
```
"#]
#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod byte;
pub use byte::*;

mod error;
pub use error::*;

mod note;
pub use note::*;

mod varlen;
pub use varlen::*;

mod velocity;
pub use velocity::*;

pub mod file;
pub mod message;
pub mod projector;
pub mod reader;
pub mod render;

pub use file::{Document, RawEvent, Track};
pub use projector::{Canvas, DrawRect, ProjectionConfig, Projector, project};

/// Parse a complete Standard MIDI File.
///
/// Shorthand for [`Document::parse`].
pub fn parse(bytes: &[u8]) -> reader::ReadResult<Document> {
    Document::parse(bytes)
}

/// Commonly used types
pub mod prelude {
    pub use crate::{
        ChunkError, DataByte, Key, Note, Octave, ParseError, TrackError, VarLen, Velocity,
        file::{Document, FormatType, Header, RawEvent, SmpteFps, Timing, Track},
        message::{StatusByte, VoiceKind, VoiceStatus},
        projector::{Canvas, DrawRect, ProjectionConfig, Projector, project},
        reader::{ReadResult, Reader, ReaderError, ReaderErrorKind},
        render::{SvgDocument, SvgStyle},
    };
}
