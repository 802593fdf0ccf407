#![doc = r#"
Classification of the status bytes found in a track chunk

# Hierarchy
```text
                  |-------------|
                  | Status Byte |
                  |-------------|
                 /       |       \
|---------------|  |-------|  |-------------------------|
| Meta (0xFF)   |  | SysEx |  | Channel Voice (0x8-0xE) |
|---------------|  |-------|  |-------------------------|
```

Data bytes (leading bit clear) are not status bytes at all: inside a track
they signal running status, handled by the track cursor.
"#]
mod channel;
pub use channel::*;

use crate::TrackError;

/// A byte with its leading bit set, at the start of a track event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusByte {
    /// `0xFF`: a meta event. Its type byte and length follow.
    Meta,
    /// `0xF0` or `0xF7`: a system exclusive event. Its length follows.
    SysEx,
    /// `0x80..=0xEF`: a channel voice message
    Voice(VoiceStatus),
}

impl StatusByte {
    /// Classify a status byte.
    ///
    /// # Errors
    /// [`TrackError::UnexpectedStatus`] for system common and real-time
    /// bytes (`0xF1..=0xFE`), and for data bytes, which never start an event
    /// on their own.
    pub fn from_byte(byte: u8) -> Result<Self, TrackError> {
        match byte {
            0xFF => Ok(Self::Meta),
            0xF0 | 0xF7 => Ok(Self::SysEx),
            _ => VoiceStatus::from_byte(byte)
                .map(Self::Voice)
                .ok_or(TrackError::UnexpectedStatus(byte)),
        }
    }
}

#[test]
fn classify_status_bytes() {
    use pretty_assertions::assert_eq;

    assert_eq!(StatusByte::from_byte(0xFF), Ok(StatusByte::Meta));
    assert_eq!(StatusByte::from_byte(0xF0), Ok(StatusByte::SysEx));
    assert_eq!(StatusByte::from_byte(0xF7), Ok(StatusByte::SysEx));

    let Ok(StatusByte::Voice(voice)) = StatusByte::from_byte(0x93) else {
        panic!("0x93 is a channel voice status");
    };
    assert_eq!(voice.kind(), VoiceKind::NoteOn);
    assert_eq!(voice.channel(), 3);

    for byte in 0xF1..=0xFE {
        if byte == 0xF7 {
            continue;
        }
        assert_eq!(
            StatusByte::from_byte(byte),
            Err(TrackError::UnexpectedStatus(byte))
        );
    }
    assert_eq!(
        StatusByte::from_byte(0x3C),
        Err(TrackError::UnexpectedStatus(0x3C))
    );
}
