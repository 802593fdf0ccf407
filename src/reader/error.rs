use crate::{ChunkError, ParseError, TrackError};
use thiserror::Error;

#[doc = r#"
A set of errors that can occur while decoding a Standard MIDI File.

Every error is fatal to the parse: [`Document::parse`](crate::Document::parse)
never hands back a partially built document.
"#]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Reading at Position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReaderErrorKind {
    /// Parsing errors
    #[error("Parsing {0}")]
    ParseError(#[from] ParseError),
    /// Ran off the end of the buffer, or of the current track chunk, mid-read
    #[error("Truncated: ran past the end of the data")]
    Truncated,
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }

    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }

    /// Returns the position where the read error occurred.
    pub fn position(&self) -> usize {
        self.position
    }

    /// True if the data ended before a complete chunk or event was read
    pub const fn is_truncated(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::Truncated)
    }

    /// True if the file does not start with an `MThd` chunk
    pub const fn is_bad_magic(&self) -> bool {
        matches!(
            self.kind,
            ReaderErrorKind::ParseError(ParseError::Chunk(ChunkError::BadMagic(_)))
        )
    }

    /// True if a chunk after the header is not an `MTrk` chunk
    pub const fn is_bad_track_magic(&self) -> bool {
        matches!(
            self.kind,
            ReaderErrorKind::ParseError(ParseError::Chunk(ChunkError::BadTrackMagic(_)))
        )
    }

    /// True if a track relied on running status before setting one
    pub const fn is_missing_running_status(&self) -> bool {
        matches!(
            self.kind,
            ReaderErrorKind::ParseError(ParseError::Track(TrackError::MissingRunningStatus))
        )
    }

    /// Create a new invalid data error
    pub fn parse_error(position: usize, error: impl Into<ParseError>) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::ParseError(error.into()),
        }
    }

    /// Create a new truncation error
    pub const fn truncated(position: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::Truncated,
        }
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;

#[test]
fn describes_position_and_cause() {
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    let err = ReaderError::parse_error(22, TrackError::MissingRunningStatus);
    assert!(err.is_missing_running_status());
    assert!(!err.is_truncated());
    assert_eq!(
        err.to_string(),
        "Reading at Position 22, Parsing Track: Running status used before any channel status byte"
    );

    let err = ReaderError::truncated(8);
    assert!(err.is_truncated());
    assert_eq!(err.position(), 8);
}
