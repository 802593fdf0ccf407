use crate::{Note, RawEvent, Velocity};

/// A note onset placed on the canvas.
///
/// `x`/`y` is the top-left corner. The originating tick, pitch and velocity
/// travel along so a renderer can label or annotate the mark.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DrawRect {
    /// Horizontal position, growing with time
    pub x: f64,
    /// Vertical position, shrinking as pitch rises
    pub y: f64,
    /// Width and height of the mark
    pub size: f64,
    /// `velocity / 127`
    pub opacity: f64,
    /// Tick of the onset
    pub tick: u64,
    /// Pitch of the onset
    pub note: Note,
    /// Velocity of the onset
    pub velocity: Velocity,
}

impl DrawRect {
    pub(crate) fn new(event: &RawEvent, x: f64, y: f64, size: f64) -> Self {
        Self {
            x,
            y,
            size,
            opacity: event.velocity().opacity(),
            tick: event.tick(),
            note: event.note(),
            velocity: event.velocity(),
        }
    }
}
