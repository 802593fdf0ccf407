use alloc::vec::Vec;

use crate::{Note, Velocity};

#[doc = r#"
One sounding note-on: a pitch struck at some velocity, stamped with the
absolute tick at which it starts.

Note offs, and note ons with a velocity of zero, are never decoded into a
[`RawEvent`]. Durations are not tracked.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RawEvent {
    tick: u64,
    note: Note,
    velocity: Velocity,
}

impl RawEvent {
    pub(crate) const fn new(tick: u64, note: Note, velocity: Velocity) -> Self {
        Self {
            tick,
            note,
            velocity,
        }
    }

    /// Ticks since the start of the track
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// The pitch struck
    pub const fn note(&self) -> Note {
        self.note
    }

    /// How hard the note was struck. Never zero.
    pub const fn velocity(&self) -> Velocity {
        self.velocity
    }
}

/// The note onsets of one `MTrk` chunk, in file order.
///
/// Ticks never decrease from one event to the next.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Track {
    events: Vec<RawEvent>,
}

impl Track {
    pub(crate) const fn new(events: Vec<RawEvent>) -> Self {
        Self { events }
    }

    /// The note onsets of the track
    pub fn events(&self) -> &[RawEvent] {
        &self.events
    }

    /// Number of note onsets
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if the track holds no sounding notes
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The tick of the last onset, if any
    pub fn last_tick(&self) -> Option<u64> {
        self.events.last().map(RawEvent::tick)
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a RawEvent;
    type IntoIter = core::slice::Iter<'a, RawEvent>;
    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
