use crate::prelude::*;

#[doc = r#"
The fields of the `MThd` chunk.

None of them change how tracks are decoded: every `MTrk` chunk is read the
same way whatever the format, the declared track count is only compared
against the chunks actually found, and ticks are never scaled by the timing.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Header {
    format: FormatType,
    declared_tracks: u16,
    timing: Timing,
}

impl Header {
    /// Create a new header
    pub const fn new(format: FormatType, declared_tracks: u16, timing: Timing) -> Self {
        Self {
            format,
            declared_tracks,
            timing,
        }
    }

    /// The format word
    pub const fn format(&self) -> FormatType {
        self.format
    }

    /// The number of tracks the header announces
    pub const fn declared_tracks(&self) -> u16 {
        self.declared_tracks
    }

    /// Get the timing props
    pub const fn timing(&self) -> &Timing {
        &self.timing
    }
}
