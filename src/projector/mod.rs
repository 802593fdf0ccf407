#![doc = r#"
Lay the note onsets of a [`Document`] out on a 2-D canvas.

Time runs left to right, pitch bottom to top. Both axes are plain linear
maps fitted to the data: the last onset lands on the right margin, and the
128 possible pitches span the height between the margins (stretched by
[`ProjectionConfig::pitch_stretch`]).

The output is a list of [`DrawRect`] values with no tie to any drawing API;
see [`render`](crate::render) for turning it into SVG.
"#]

mod rect;
pub use rect::*;

use crate::{Document, RawEvent};
use alloc::vec::Vec;

/// The highest MIDI pitch; pitches span `0..=PITCH_RANGE`.
const PITCH_RANGE: f64 = 127.;

/// The size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Canvas {
    /// Width in user units
    pub width: f64,
    /// Height in user units
    pub height: f64,
}

impl Canvas {
    /// Create a canvas
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(1200., 800.)
    }
}

/// Spacing of a projection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProjectionConfig {
    /// Gap kept on every side of the canvas
    pub margin: f64,
    /// Width and height of each note mark
    pub note_size: f64,
    /// Factor applied to the vertical spacing of pitches
    pub pitch_stretch: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            margin: 75.,
            note_size: 7.,
            pitch_stretch: 1.2,
        }
    }
}

#[doc = r#"
Maps note onsets to [`DrawRect`]s.

# Example
```rust
# use noteplot::prelude::*;
let projector = Projector::new(ProjectionConfig {
    margin: 10.,
    note_size: 4.,
    pitch_stretch: 1.,
});
let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 1, 0, 96,
    b'M', b'T', b'r', b'k', 0, 0, 0, 8,
    0x00, 0x90, 0x7F, 0x7F, 0x64, 0x90, 0x00, 0x40,
];
let document = Document::parse(&bytes).unwrap();
let rects = projector.project(&document, Canvas::new(220., 147.));

assert_eq!((rects[0].x, rects[0].y), (10., 10.));
assert_eq!((rects[1].x, rects[1].y), (210., 137.));
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Projector {
    config: ProjectionConfig,
}

impl Projector {
    /// Create a projector with the given spacing
    pub const fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// The spacing in use
    pub const fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Flatten, time-sort and place every onset of `document`.
    ///
    /// Onsets sharing a tick keep their track and file order. An empty
    /// document yields no rectangles.
    pub fn project(&self, document: &Document, canvas: Canvas) -> Vec<DrawRect> {
        let mut events: Vec<&RawEvent> = document.events().collect();
        events.sort_by_key(|event| event.tick());

        let Some(max_tick) = events.last().map(|event| event.tick()) else {
            return Vec::new();
        };

        let margin = self.config.margin;
        let usable_width = (canvas.width - 2. * margin).max(0.);
        let usable_height = (canvas.height - 2. * margin).max(0.);

        let time_scale = if max_tick > 0 {
            usable_width / max_tick as f64
        } else {
            1.
        };
        let pitch_scale = usable_height / PITCH_RANGE * self.config.pitch_stretch;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "projecting {} onsets up to tick {max_tick}: {time_scale} per tick, {pitch_scale} per semitone",
            events.len()
        );

        events
            .into_iter()
            .map(|event| {
                let x = event.tick() as f64 * time_scale + margin;
                let y = (PITCH_RANGE - f64::from(event.note().byte())) * pitch_scale + margin;
                DrawRect::new(event, x, y, self.config.note_size)
            })
            .collect()
    }
}

/// Place every onset of `document` with the default [`ProjectionConfig`].
pub fn project(document: &Document, canvas: Canvas) -> Vec<DrawRect> {
    Projector::default().project(document, canvas)
}
