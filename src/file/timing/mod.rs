mod smpte;
pub use smpte::*;

/// The header timing type.
///
/// This is either the number of ticks per quarter note or
/// the alternative SMPTE format. It is reported for reference only:
/// decoded events keep their raw tick counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Timing {
    /// The midi file's delta times are defined using a tick rate per quarter note
    TicksPerQuarterNote(u16),

    /// The midi file's delta times are defined using an SMPTE and MIDI Time Code
    Smpte {
        /// Frames per second
        fps: SmpteFps,
        /// Ticks per frame
        ticks_per_frame: u8,
    },
}

impl Timing {
    /// Interpret the division word of the header chunk.
    ///
    /// The leading bit selects the timing type.
    pub fn from_division(bytes: [u8; 2]) -> Self {
        if bytes[0] & 0x80 == 0 {
            Self::TicksPerQuarterNote(u16::from_be_bytes(bytes) & 0x7FFF)
        } else {
            Self::Smpte {
                fps: SmpteFps::from(bytes[0] as i8),
                ticks_per_frame: bytes[1],
            }
        }
    }

    /// Returns Some if the midi timing is defined
    /// as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(*t),
            _ => None,
        }
    }
}

#[test]
fn read_division() {
    use pretty_assertions::assert_eq;

    assert_eq!(
        Timing::from_division([0x01, 0xE0]),
        Timing::TicksPerQuarterNote(480)
    );
    assert_eq!(
        Timing::from_division([0x01, 0xE0]).ticks_per_quarter_note(),
        Some(480)
    );
    // -25 fps, 40 ticks per frame
    assert_eq!(
        Timing::from_division([0xE7, 0x28]),
        Timing::Smpte {
            fps: SmpteFps::TwentyFive,
            ticks_per_frame: 40
        }
    );
    assert_eq!(
        Timing::from_division([0xE3, 0x50]),
        Timing::Smpte {
            fps: SmpteFps::TwentyNine,
            ticks_per_frame: 80
        }
    );
    assert_eq!(
        Timing::from_division([0xF0, 0x01]),
        Timing::Smpte {
            fps: SmpteFps::Other(-16),
            ticks_per_frame: 1
        }
    );
}
