use num_enum::FromPrimitive;

#[doc = r#"
The format word of the `MThd` chunk.

The decoder reads the tracks of every format the same way, so the format is
reported as-is and never rejected; values the SMF specification does not
define are kept in [`FormatType::Unknown`].

# Example
```rust
# use noteplot::prelude::*;
assert_eq!(FormatType::from(1_u16), FormatType::Simultaneous);
assert_eq!(FormatType::from(7_u16), FormatType::Unknown(7));
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u16)]
pub enum FormatType {
    /// Format 0: a single track holding every channel
    SingleMultiChannel = 0,
    /// Format 1: tracks played together
    Simultaneous = 1,
    /// Format 2: independent single-track patterns
    SequentiallyIndependent = 2,
    /// Any other format number
    #[num_enum(catch_all)]
    Unknown(u16),
}
