use crate::{DataByte, ParseError};

#[doc = r#"
How hard a note was struck, `0..=127`.

A note-on with a velocity of `0` is a note-off by convention, so a decoded
[`RawEvent`](crate::RawEvent) never carries a silent velocity.

# Example
```rust
# use noteplot::prelude::*;
let velocity = Velocity::new(127).unwrap();
assert_eq!(velocity.opacity(), 1.0);

assert!(Velocity::new(0).unwrap().is_silent());
assert!(Velocity::new(200).is_err());
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Velocity(DataByte);

impl Velocity {
    /// The loudest velocity
    pub const MAX: Self = Self(DataByte::new_unchecked(127));

    /// Create a velocity, checking the leading bit.
    pub const fn new(byte: u8) -> Result<Self, ParseError> {
        match DataByte::new(byte) {
            Ok(byte) => Ok(Self(byte)),
            Err(e) => Err(e),
        }
    }

    pub(crate) const fn from_data_byte(byte: DataByte) -> Self {
        Self(byte)
    }

    /// Returns the underlying byte
    pub const fn byte(&self) -> u8 {
        self.0.value()
    }

    /// True for a velocity of zero
    pub const fn is_silent(&self) -> bool {
        self.0.value() == 0
    }

    /// The velocity as a linear fraction of [`Velocity::MAX`]
    pub fn opacity(&self) -> f64 {
        f64::from(self.byte()) / f64::from(Self::MAX.byte())
    }
}

#[test]
fn opacity_is_linear() {
    use pretty_assertions::assert_eq;
    assert_eq!(Velocity::new(0).unwrap().opacity(), 0.);
    assert_eq!(Velocity::new(127).unwrap().opacity(), 1.);
    assert_eq!(Velocity::new(100).unwrap().opacity(), 100. / 127.);
}
