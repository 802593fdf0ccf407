use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
The kind of a channel voice message, identified by the upper nibble of its
status byte.

# Example
```rust
# use noteplot::prelude::*;
let kind = VoiceKind::try_from(0x9_u8).unwrap();
assert_eq!(kind, VoiceKind::NoteOn);
assert_eq!(kind.data_len(), 2);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum VoiceKind {
    /// `0x8n key velocity`
    NoteOff = 0x8,
    /// `0x9n key velocity`. A velocity of zero means note off.
    NoteOn = 0x9,
    /// `0xAn key pressure`
    PolyphonicKeyPressure = 0xA,
    /// `0xBn controller value`
    ControlChange = 0xB,
    /// `0xCn program`
    ProgramChange = 0xC,
    /// `0xDn pressure`
    ChannelPressure = 0xD,
    /// `0xEn lsb msb`
    PitchBend = 0xE,
}

impl VoiceKind {
    /// The number of data bytes following the status byte
    pub const fn data_len(&self) -> usize {
        match self {
            Self::ProgramChange | Self::ChannelPressure => 1,
            _ => 2,
        }
    }
}

/// A channel voice status byte: a [`VoiceKind`] and a channel.
///
/// This is what a track remembers for running status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoiceStatus {
    kind: VoiceKind,
    channel: u8,
}

impl VoiceStatus {
    /// Returns `None` unless `byte` is within `0x80..=0xEF`
    pub fn from_byte(byte: u8) -> Option<Self> {
        let kind = VoiceKind::try_from(byte >> 4).ok()?;
        Some(Self {
            kind,
            channel: byte & 0x0F,
        })
    }

    /// The message kind
    pub const fn kind(&self) -> VoiceKind {
        self.kind
    }

    /// The channel, `0..=15`
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// The raw status byte
    pub fn byte(&self) -> u8 {
        (u8::from(self.kind) << 4) | self.channel
    }
}

#[test]
fn voice_kinds_from_nibbles() {
    use pretty_assertions::assert_eq;

    for nibble in 0x0_u8..=0x7 {
        assert!(VoiceKind::try_from(nibble).is_err());
    }
    assert_eq!(VoiceKind::try_from(0xC_u8).unwrap().data_len(), 1);
    assert_eq!(VoiceKind::try_from(0xD_u8).unwrap().data_len(), 1);
    assert_eq!(VoiceKind::try_from(0xE_u8).unwrap().data_len(), 2);
    assert!(VoiceKind::try_from(0xF_u8).is_err());
    assert_eq!(u8::from(VoiceKind::PitchBend), 0xE);
}

#[test]
fn voice_status_keeps_its_byte() {
    use pretty_assertions::assert_eq;

    for byte in 0x80_u8..=0xEF {
        let status = VoiceStatus::from_byte(byte).unwrap();
        assert_eq!(status.byte(), byte);
        assert_eq!(status.channel(), byte & 0x0F);
    }
    assert_eq!(VoiceStatus::from_byte(0x7F), None);
    assert_eq!(VoiceStatus::from_byte(0xF0), None);
}
