use core::fmt;

use crate::{DataByte, ParseError};

#[doc = r#"
The pitch of a note-on event.

Notes are interpeted as a 7-bit number.

Each value corresponds to some [`Key`] and [`Octave`].

[`Note`] `0` is `C-1`, [`Note`] `60` is middle C (`C4`), and [`Note`] `127` is `G9`.

# Example
```rust
# use noteplot::prelude::*;

let note = Note::from_databyte(63).unwrap(); // 63 is between 0-127

assert_eq!(note.key(), Key::DSharp);
assert_eq!(note.octave().value(), 4);
assert_eq!(note.to_string(), "D#4");
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Note(DataByte);

impl Note {
    /// Create a new note.
    ///
    /// Checks for correctness (leading 0 bit).
    pub fn from_databyte<B>(rep: B) -> Result<Self, ParseError>
    where
        B: TryInto<DataByte, Error = ParseError>,
    {
        rep.try_into().map(Self)
    }

    pub(crate) const fn from_data_byte(byte: DataByte) -> Self {
        Self(byte)
    }

    /// Identifies the key of the note pressed
    #[inline]
    pub const fn key(&self) -> Key {
        Key::from_data_byte(&self.0)
    }

    /// Identifies the octave of the note pressed
    #[inline]
    pub const fn octave(&self) -> Octave {
        Octave::from_data_byte(&self.0)
    }

    /// Returns the underlying byte of the note
    pub const fn byte(&self) -> u8 {
        self.0.value()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key(), self.octave())
    }
}

#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[doc = r#"
The pitch class of a [`Note`]

# Example
```rust
# use noteplot::prelude::*;

let note = Note::from_databyte(66).unwrap();

assert_eq!(note.key(), Key::FSharp);
assert_eq!(note.key().to_string(), "F#");
```
"#]
pub enum Key {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Key {
    /// Identify the key from a pitch byte.
    #[inline]
    pub const fn from_data_byte(key: &DataByte) -> Self {
        use Key::*;
        match key.value() % 12 {
            0 => C,
            1 => CSharp,
            2 => D,
            3 => DSharp,
            4 => E,
            5 => F,
            6 => FSharp,
            7 => G,
            8 => GSharp,
            9 => A,
            10 => ASharp,
            _ => B,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Key::*;
        let name = match self {
            C => "C",
            CSharp => "C#",
            D => "D",
            DSharp => "D#",
            E => "E",
            F => "F",
            FSharp => "F#",
            G => "G",
            GSharp => "G#",
            A => "A",
            ASharp => "A#",
            B => "B",
        };
        f.write_str(name)
    }
}

#[doc = r#"
Identifies the octave of a [`Note`]. Values range from -1 to 9.

# Example

```rust
# use noteplot::prelude::*;

let lowest = Note::from_databyte(0).unwrap();
let highest = Note::from_databyte(127).unwrap();

assert_eq!(lowest.octave().value(), -1);
assert_eq!(highest.octave().value(), 9);
```
"#]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Octave(i8);

impl Octave {
    /// Identify an octave from a pitch byte.
    pub const fn from_data_byte(key: &DataByte) -> Self {
        let octave = key.value() / 12;

        Self(octave as i8 - 1)
    }

    /// The octave, from `[-1,9]`
    pub const fn value(&self) -> i8 {
        self.0
    }
}

impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[test]
fn test_note() {
    let c = Note::from_databyte(12).unwrap();
    assert_eq!(Key::C, c.key());

    let a_sharp = Note::from_databyte(94).unwrap();
    assert_eq!(Key::ASharp, a_sharp.key());

    assert!(Note::from_databyte(128).is_err());
}

#[test]
fn test_octave() {
    let c = Note::from_databyte(12).unwrap();
    assert_eq!(0, c.octave().value());

    let a_sharp = Note::from_databyte(94).unwrap();
    assert_eq!(6, a_sharp.octave().value());
}

#[test]
fn note_names() {
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    assert_eq!(Note::from_databyte(0).unwrap().to_string(), "C-1");
    assert_eq!(Note::from_databyte(60).unwrap().to_string(), "C4");
    assert_eq!(Note::from_databyte(61).unwrap().to_string(), "C#4");
    assert_eq!(Note::from_databyte(127).unwrap().to_string(), "G9");
}

#[test]
fn key_and_octave_rebuild_the_pitch() {
    use pretty_assertions::assert_eq;

    for key_byte in 0..128_u8 {
        let note = Note::from_databyte(key_byte).unwrap();
        let rebuilt = (note.octave().value() + 1) as u8 * 12 + note.key() as u8;
        assert_eq!(rebuilt, key_byte);
    }
}
