mod common;

use common::{SmfBytes, TrackBytes, two_track_song};
use noteplot::prelude::*;
use pretty_assertions::assert_eq;

fn kind(bytes: &[u8]) -> ReaderErrorKind {
    *Document::parse(bytes).unwrap_err().error_kind()
}

#[test]
fn bad_magic() {
    let mut bytes = two_track_song();
    bytes[..4].copy_from_slice(b"RIFF");
    let err = Document::parse(&bytes).unwrap_err();

    assert!(err.is_bad_magic());
    assert_eq!(err.position(), 0);
    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::ParseError(ParseError::Chunk(ChunkError::BadMagic(*b"RIFF")))
    );
}

#[test]
fn input_shorter_than_a_tag() {
    assert_eq!(kind(&[]), ReaderErrorKind::Truncated);
    assert_eq!(kind(b"MTh"), ReaderErrorKind::Truncated);
    assert_eq!(kind(b"MThd\0\0\0\x06\0\0"), ReaderErrorKind::Truncated);
}

#[test]
fn bad_track_magic() {
    let mut bytes = SmfBytes::new(0)
        .track(TrackBytes::new().note_on(0, 0, 60, 100))
        .build();
    bytes[14..18].copy_from_slice(b"XFIH");
    let err = Document::parse(&bytes).unwrap_err();

    assert!(err.is_bad_track_magic());
    assert_eq!(err.position(), 14);
}

#[test]
fn trailing_garbage_is_not_a_track() {
    let mut bytes = two_track_song();
    bytes.extend_from_slice(b"JUNKJUNK");
    assert!(Document::parse(&bytes).unwrap_err().is_bad_track_magic());

    let mut bytes = two_track_song();
    bytes.extend_from_slice(b"MT");
    assert!(Document::parse(&bytes).unwrap_err().is_truncated());
}

#[test]
fn truncating_the_last_track_by_one_byte() {
    let fixtures = [
        two_track_song(),
        SmfBytes::new(0)
            .track(TrackBytes::new().note_on(0, 0, 60, 100).note_off(10, 0, 60))
            .build(),
        SmfBytes::new(0)
            .track(TrackBytes::new().note_on(0, 0, 60, 100).end_of_track(0))
            .build(),
        SmfBytes::new(0)
            .track(TrackBytes::new().meta(0, 0x01, b"lyrics"))
            .build(),
    ];

    for bytes in fixtures {
        Document::parse(&bytes).unwrap();

        let err = Document::parse(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(err.is_truncated(), "{err}");
    }
}

#[test]
fn event_running_past_the_chunk_length() {
    // the chunk declares 3 bytes, but its note on needs 4
    let bytes = [
        b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 2, 0, 96, //
        b'M', b'T', b'r', b'k', 0, 0, 0, 3, 0x00, 0x90, 0x3C, //
        b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0x90, 0x3C, 0x64,
    ];
    let err = Document::parse(&bytes).unwrap_err();
    assert!(err.is_truncated());
    assert_eq!(err.position(), 25);
}

#[test]
fn meta_length_past_the_chunk_end() {
    let bytes = SmfBytes::new(0)
        .track(TrackBytes::new().event(0, &[0xFF, 0x01, 0x10, b'a', b'b']))
        .build();
    assert_eq!(kind(&bytes), ReaderErrorKind::Truncated);
}

#[test]
fn missing_running_status() {
    let bytes = SmfBytes::new(0)
        .track(TrackBytes::new().event(0, &[0x3C, 0x64]))
        .build();
    let err = Document::parse(&bytes).unwrap_err();

    assert!(err.is_missing_running_status());
    assert_eq!(err.position(), 23);
}

#[test]
fn running_status_does_not_carry_across_tracks() {
    let bytes = SmfBytes::new(1)
        .track(TrackBytes::new().note_on(0, 0, 60, 100))
        .track(TrackBytes::new().event(0, &[62, 100]))
        .build();
    assert!(Document::parse(&bytes).unwrap_err().is_missing_running_status());
}

#[test]
fn pitch_and_velocity_out_of_range() {
    let bytes = SmfBytes::new(0)
        .track(TrackBytes::new().event(0, &[0x90, 0x80, 0x40]))
        .build();
    assert_eq!(
        kind(&bytes),
        ReaderErrorKind::ParseError(ParseError::InvalidDataByte(0x80))
    );

    let bytes = SmfBytes::new(0)
        .track(TrackBytes::new().event(0, &[0x90, 0x40, 0xFF]))
        .build();
    assert_eq!(
        kind(&bytes),
        ReaderErrorKind::ParseError(ParseError::InvalidDataByte(0xFF))
    );
}

#[test]
fn overlong_delta_time() {
    let bytes = SmfBytes::new(0)
        .track(TrackBytes(vec![0x81, 0x80, 0x80, 0x80, 0x00, 0x90, 0x3C, 0x64]))
        .build();
    assert_eq!(
        kind(&bytes),
        ReaderErrorKind::ParseError(ParseError::VarLenOverflow)
    );
}

#[test]
fn system_real_time_byte_in_track() {
    let bytes = SmfBytes::new(0)
        .track(TrackBytes::new().event(0, &[0xFA]))
        .build();
    assert_eq!(
        kind(&bytes),
        ReaderErrorKind::ParseError(ParseError::Track(TrackError::UnexpectedStatus(0xFA)))
    );
}

#[test]
fn short_header_length() {
    let mut bytes = two_track_song();
    bytes[7] = 5;
    assert_eq!(
        kind(&bytes),
        ReaderErrorKind::ParseError(ParseError::Chunk(ChunkError::HeaderLength(5)))
    );
}

#[test]
fn errors_describe_their_position() {
    let err = Document::parse(b"MThx\0\0\0\x06").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Reading at Position 0, Parsing Chunk: Expected an `MThd` header chunk, found `MThx`"
    );
}
