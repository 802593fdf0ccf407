use crate::ParseError;

#[doc = r#"
A byte with a leading `0` bit.

Every data byte of a channel voice message (pitch, velocity, controller
values, ...) is 7 bits wide. A byte with its leading bit set is a status
byte, so finding one where data is expected means the stream is malformed.

# Example
```rust
# use noteplot::prelude::*;
let pitch = DataByte::new(60).unwrap();
assert_eq!(pitch.value(), 60);

assert!(DataByte::new(0x90).is_err());
```
"#]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DataByte(pub(crate) u8);

impl DataByte {
    /// Check a byte for correctness (leading 0 bit)
    pub const fn new(byte: u8) -> Result<Self, ParseError> {
        if byte > 0x7F {
            return Err(ParseError::InvalidDataByte(byte));
        }
        Ok(Self(byte))
    }

    /// Creates a data byte without checking the leading bit
    pub(crate) const fn new_unchecked(byte: u8) -> Self {
        Self(byte)
    }

    /// The underlying 7-bit value
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DataByte {
    type Error = ParseError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DataByte> for u8 {
    fn from(value: DataByte) -> Self {
        value.0
    }
}

#[test]
fn data_byte_rejects_status_bit() {
    use pretty_assertions::assert_eq;
    for byte in 0..=0x7F {
        assert_eq!(DataByte::new(byte).unwrap().value(), byte);
    }
    for byte in 0x80..=0xFF {
        assert_eq!(DataByte::new(byte), Err(ParseError::InvalidDataByte(byte)));
    }
}
