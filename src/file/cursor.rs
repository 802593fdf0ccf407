use alloc::vec::Vec;

use super::{RawEvent, Track};
use crate::{
    DataByte, Note, TrackError, Velocity,
    message::{StatusByte, VoiceKind, VoiceStatus},
    reader::{ReadResult, Reader, ReaderError},
};

/// Walks the events of one track chunk.
///
/// `reader` ends at the end of the chunk body. `ticks` only ever grows by
/// a decoded delta-time (at most [`VarLen::MAX`](crate::VarLen::MAX)), and a
/// chunk holds at most `u32::MAX` bytes, so it cannot overflow.
pub(crate) struct TrackCursor<'slc> {
    reader: Reader<'slc>,
    running_status: Option<VoiceStatus>,
    ticks: u64,
}

impl<'slc> TrackCursor<'slc> {
    pub(crate) const fn new(reader: Reader<'slc>) -> Self {
        Self {
            reader,
            running_status: None,
            ticks: 0,
        }
    }

    /// Read every event up to the end of the chunk.
    pub(crate) fn read_track(mut self) -> ReadResult<Track> {
        let mut events = Vec::new();
        while !self.reader.is_exhausted() {
            if let Some(event) = self.read_event()? {
                events.push(event);
            }
        }
        Ok(Track::new(events))
    }

    /// Read one delta-time and the event after it.
    ///
    /// Returns `Some` only for a note on with a non-zero velocity.
    fn read_event(&mut self) -> ReadResult<Option<RawEvent>> {
        let delta = self.reader.read_varlen()?;
        self.ticks += u64::from(delta);

        let position = self.reader.buffer_position();
        let byte = self.reader.peek()?;

        let status = if byte < 0x80 {
            // running status: `byte` is the first data byte, leave it unread
            self.running_status.ok_or_else(|| {
                ReaderError::parse_error(position, TrackError::MissingRunningStatus)
            })?
        } else {
            self.reader.read_next()?;
            match StatusByte::from_byte(byte)
                .map_err(|e| ReaderError::parse_error(position, e))?
            {
                StatusByte::Meta => {
                    self.skip_meta()?;
                    return Ok(None);
                }
                StatusByte::SysEx => {
                    self.skip_sysex()?;
                    return Ok(None);
                }
                StatusByte::Voice(status) => {
                    self.running_status = Some(status);
                    status
                }
            }
        };

        match status.kind() {
            kind @ (VoiceKind::NoteOn | VoiceKind::NoteOff) => {
                let note = Note::from_data_byte(self.read_data_byte()?);
                let velocity = Velocity::from_data_byte(self.read_data_byte()?);
                if kind == VoiceKind::NoteOn && !velocity.is_silent() {
                    return Ok(Some(RawEvent::new(self.ticks, note, velocity)));
                }
            }
            kind => {
                for _ in 0..kind.data_len() {
                    self.read_data_byte()?;
                }
            }
        }
        Ok(None)
    }

    fn read_data_byte(&mut self) -> ReadResult<DataByte> {
        let position = self.reader.buffer_position();
        let byte = self.reader.read_next()?;
        DataByte::new(byte).map_err(|e| ReaderError::parse_error(position, e))
    }

    fn skip_meta(&mut self) -> ReadResult<()> {
        let _meta_type = self.reader.read_next()?;
        let len = self.reader.read_varlen()?;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            "skipping meta event {:#04X} ({len} bytes) at tick {}",
            _meta_type,
            self.ticks
        );
        self.reader.skip(len as usize)
    }

    fn skip_sysex(&mut self) -> ReadResult<()> {
        let len = self.reader.read_varlen()?;
        #[cfg(feature = "tracing")]
        tracing::trace!("skipping sysex event ({len} bytes) at tick {}", self.ticks);
        self.reader.skip(len as usize)
    }
}

#[cfg(test)]
fn read(body: &[u8]) -> ReadResult<Track> {
    TrackCursor::new(Reader::from_byte_slice(body)).read_track()
}

#[cfg(test)]
fn onsets(track: &Track) -> Vec<(u64, u8, u8)> {
    track
        .events()
        .iter()
        .map(|e| (e.tick(), e.note().byte(), e.velocity().byte()))
        .collect()
}

#[test]
fn note_off_emits_nothing() {
    use pretty_assertions::assert_eq;
    let track = read(&[0x00, 0x90, 0x3C, 0x64, 0x0A, 0x80, 0x3C, 0x40]).unwrap();
    assert_eq!(onsets(&track), alloc::vec![(0, 60, 100)]);
}

#[test]
fn running_status_reads_the_data_byte_it_peeked() {
    use pretty_assertions::assert_eq;
    let track = read(&[
        0x00, 0x90, 0x3C, 0x64, // note on
        0x0A, 0x3C, 0x00, // running note on, velocity 0
        0x05, 0x40, 0x50, // running note on
    ])
    .unwrap();
    assert_eq!(onsets(&track), alloc::vec![(0, 60, 100), (15, 64, 80)]);
}

#[test]
fn running_status_survives_meta_and_sysex() {
    use pretty_assertions::assert_eq;
    let track = read(&[
        0x00, 0x91, 0x30, 0x20, // note on
        0x00, 0xFF, 0x01, 0x02, b'h', b'i', // text meta
        0x00, 0xF0, 0x03, 0x7E, 0x7F, 0xF7, // sysex
        0x81, 0x00, 0x31, 0x21, // running note on, 128 ticks later
    ])
    .unwrap();
    assert_eq!(onsets(&track), alloc::vec![(0, 48, 32), (128, 49, 33)]);
}

#[test]
fn other_voice_messages_are_skipped() {
    use pretty_assertions::assert_eq;
    let track = read(&[
        0x00, 0xC0, 0x05, // program change
        0x00, 0xD0, 0x10, // channel pressure
        0x00, 0xB0, 0x07, 0x64, // control change
        0x00, 0xA0, 0x3C, 0x10, // key pressure
        0x00, 0xE0, 0x00, 0x40, // pitch bend
        0x01, 0x20, 0x00, // running pitch bend
        0x01, 0x99, 0x24, 0x7F, // drum note on
    ])
    .unwrap();
    assert_eq!(onsets(&track), alloc::vec![(2, 36, 127)]);
}

#[test]
fn running_status_needs_a_previous_status() {
    use pretty_assertions::assert_eq;
    let err = read(&[0x00, 0xFF, 0x2F, 0x00, 0x00, 0x3C, 0x64]).unwrap_err();
    assert!(err.is_missing_running_status());
    assert_eq!(err.position(), 5);
}

#[test]
fn rejects_status_bytes_as_data() {
    use crate::ParseError;
    use pretty_assertions::assert_eq;
    let err = read(&[0x00, 0x90, 0x3C, 0x90]).unwrap_err();
    assert_eq!(
        err,
        ReaderError::parse_error(3, ParseError::InvalidDataByte(0x90))
    );
}

#[test]
fn rejects_system_common_bytes() {
    use pretty_assertions::assert_eq;
    let err = read(&[0x00, 0xF8]).unwrap_err();
    assert_eq!(
        err,
        ReaderError::parse_error(1, TrackError::UnexpectedStatus(0xF8))
    );
}

#[test]
fn events_may_not_cross_the_chunk_end() {
    for body in [
        &[0x00, 0x90, 0x3C][..],
        &[0x00, 0x90][..],
        &[0x00][..],
        &[0x80][..],
        &[0x00, 0xFF, 0x03, 0x05, b'a'][..],
        &[0x00, 0xF0, 0x02, 0x01][..],
        &[0x00, 0xC0][..],
    ] {
        assert!(read(body).unwrap_err().is_truncated(), "{body:02X?}");
    }
}

#[test]
fn ticks_accumulate_across_skipped_events() {
    use pretty_assertions::assert_eq;
    let track = read(&[
        0x10, 0xB0, 0x40, 0x7F, // sustain at 16
        0x10, 0x90, 0x3C, 0x40, // note at 32
        0x10, 0x3E, 0x40, // note at 48
        0x10, 0x3C, 0x00, // off at 64
        0x10, 0xFF, 0x2F, 0x00, // end of track at 80
    ])
    .unwrap();
    assert_eq!(onsets(&track), alloc::vec![(32, 60, 64), (48, 62, 64)]);
}
