use thiserror::Error;

#[doc = r#"
The structural problems a Standard MIDI File can have.

Running off the end of the buffer or of a track chunk is reported separately
as [`ReaderErrorKind::Truncated`](crate::reader::ReaderErrorKind::Truncated).
"#]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A chunk header is malformed
    #[error("Chunk: {0}")]
    Chunk(#[from] ChunkError),
    /// An event inside a track chunk is malformed
    #[error("Track: {0}")]
    Track(#[from] TrackError),
    /// A data byte had its leading bit set
    #[error("Invalid data byte {0:#04X}: the leading bit must be 0")]
    InvalidDataByte(u8),
    /// A variable-length quantity does not fit in four bytes
    #[error("Variable-length quantity is longer than four bytes")]
    VarLenOverflow,
}

/// An error with the `MThd` or `MTrk` chunk framing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChunkError {
    /// The file does not start with `MThd`
    #[error("Expected an `MThd` header chunk, found `{}`", .0.escape_ascii())]
    BadMagic([u8; 4]),
    /// A chunk after the header is not `MTrk`
    #[error("Expected an `MTrk` track chunk, found `{}`", .0.escape_ascii())]
    BadTrackMagic([u8; 4]),
    /// The header declares fewer than the six bytes it must hold
    #[error("Header chunk length must be at least 6, found {0}")]
    HeaderLength(u32),
}

/// An error with an event in a track chunk.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrackError {
    /// A data byte appeared where a status byte was expected, and no
    /// channel status has been seen yet in this track
    #[error("Running status used before any channel status byte")]
    MissingRunningStatus,
    /// A system common or real-time status byte appeared in a track
    #[error("Status byte {0:#04X} cannot appear in a track chunk")]
    UnexpectedStatus(u8),
}

#[test]
fn chunk_errors_show_the_tag_found() {
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    let err = ChunkError::BadMagic(*b"RIFF");
    assert_eq!(
        err.to_string(),
        "Expected an `MThd` header chunk, found `RIFF`"
    );

    let err = ParseError::from(ChunkError::BadTrackMagic([b'M', b'T', 0, 0xFF]));
    assert_eq!(
        err.to_string(),
        "Chunk: Expected an `MTrk` track chunk, found `MT\\x00\\xff`"
    );
}
