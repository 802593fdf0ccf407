use num_enum::FromPrimitive;

/// The frame rates an SMPTE division can declare.
///
/// The rate is stored in the header as a negative number. The MIDI
/// specification defines four of them; anything else is kept in
/// [`SmpteFps::Other`] rather than rejected, since the decoder does not
/// convert ticks to time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(i8)]
pub enum SmpteFps {
    /// An undefined rate byte
    #[num_enum(catch_all)]
    Other(i8),
    /// 24 frames per second - Standard film rate
    TwentyFour = -24,
    /// 25 frames per second - PAL/SECAM television standard
    TwentyFive = -25,
    /// 29.97 frames per second (30000/1001) - NTSC color television drop-frame rate
    TwentyNine = -29,
    /// 30 frames per second - NTSC black & white, some digital formats
    Thirty = -30,
}
