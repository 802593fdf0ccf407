use core::fmt;

use crate::ParseError;

#[doc = r#"
A variable-length quantity, encoded the way delta-times and event lengths
are stored in a track chunk.

Each byte carries 7 bits of the value, most significant group first. Every
byte but the last has its leading bit set. A Standard MIDI File never uses
more than four bytes, which caps the value at [`VarLen::MAX`].

Decoding happens in [`Reader::read_varlen`](crate::reader::Reader::read_varlen).

# Example
```rust
# use noteplot::prelude::*;
let vlq = VarLen::new(0x3FFF).unwrap();
assert_eq!(vlq.as_bytes(), &[0xFF, 0x7F]);

let mut reader = Reader::from_byte_slice(vlq.as_bytes());
assert_eq!(reader.read_varlen().unwrap(), 0x3FFF);
```
"#]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarLen {
    bytes: [u8; 4],
    len: u8,
    value: u32,
}

impl VarLen {
    /// The largest value four bytes can hold
    pub const MAX: u32 = 0x0FFF_FFFF;
    /// The most bytes a quantity may span
    pub const MAX_BYTES: usize = 4;

    /// Encode a value.
    ///
    /// # Errors
    /// if `value` is greater than [`VarLen::MAX`]
    pub const fn new(value: u32) -> Result<Self, ParseError> {
        if value > Self::MAX {
            return Err(ParseError::VarLenOverflow);
        }

        let mut groups = 1;
        while groups < Self::MAX_BYTES && value >> (7 * groups) != 0 {
            groups += 1;
        }

        let mut bytes = [0; 4];
        let mut i = 0;
        while i < groups {
            let shift = 7 * (groups - 1 - i);
            let mut byte = ((value >> shift) & 0x7F) as u8;
            if i + 1 < groups {
                byte |= 0x80;
            }
            bytes[i] = byte;
            i += 1;
        }

        Ok(Self {
            bytes,
            len: groups as u8,
            value,
        })
    }

    /// The encoded bytes, between one and four of them
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// The encoded value
    pub const fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Debug for VarLen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VarLen")
            .field("value", &self.value)
            .field("bytes", &self.as_bytes())
            .finish()
    }
}

#[test]
fn encodes_known_quantities() {
    use pretty_assertions::assert_eq;

    assert_eq!(VarLen::new(0).unwrap().as_bytes(), &[0x00]);
    assert_eq!(VarLen::new(0x40).unwrap().as_bytes(), &[0x40]);
    assert_eq!(VarLen::new(0x7F).unwrap().as_bytes(), &[0x7F]);
    assert_eq!(VarLen::new(0x80).unwrap().as_bytes(), &[0x81, 0x00]);
    assert_eq!(VarLen::new(0x2000).unwrap().as_bytes(), &[0xC0, 0x00]);
    assert_eq!(VarLen::new(0x3FFF).unwrap().as_bytes(), &[0xFF, 0x7F]);
    assert_eq!(VarLen::new(0x4000).unwrap().as_bytes(), &[0x81, 0x80, 0x00]);
    assert_eq!(VarLen::new(0x1F_FFFF).unwrap().as_bytes(), &[0xFF, 0xFF, 0x7F]);
    assert_eq!(
        VarLen::new(0x20_0000).unwrap().as_bytes(),
        &[0x81, 0x80, 0x80, 0x00]
    );
    assert_eq!(
        VarLen::new(0x0FFF_FFFF).unwrap().as_bytes(),
        &[0xFF, 0xFF, 0xFF, 0x7F]
    );
}

#[test]
fn rejects_values_past_four_bytes() {
    use pretty_assertions::assert_eq;
    assert_eq!(VarLen::new(0x1000_0000), Err(ParseError::VarLenOverflow));
    assert_eq!(VarLen::new(u32::MAX), Err(ParseError::VarLenOverflow));
}
