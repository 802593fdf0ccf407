use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use core::fmt::{self, Write as _};

use crate::projector::{Canvas, DrawRect};

/// The prolog of a standalone SVG file.
pub const XML_PROLOG: &str = "<?xml version=\"1.0\" standalone=\"no\"?>\r\n";

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Grid lines drawn along one axis, at most. Denser grids are left out.
const MAX_GRID_LINES: f64 = 4096.;

const HOVER_STYLE: &str = ".note-rect { transition: all 0.2s ease; cursor: pointer; } \
.note-rect:hover { width: 10px !important; height: 10px !important; \
transform: translate(-2.5px, -2.5px); filter: brightness(1.2); }";

/// Colors and grid spacing of an [`SvgDocument`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SvgStyle {
    /// Fill of the full-canvas background
    pub background: String,
    /// Stroke of the grid lines
    pub grid_stroke: String,
    /// Stroke width of the grid lines
    pub grid_stroke_width: f64,
    /// Distance between vertical grid lines
    pub grid_step_x: f64,
    /// Distance between horizontal grid lines
    pub grid_step_y: f64,
    /// Gap between the canvas edge and the grid
    pub grid_inset: f64,
    /// Fill of the note marks
    pub note_fill: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            background: "#1e1e2e".to_string(),
            grid_stroke: "#2b2b3b".to_string(),
            grid_stroke_width: 0.5,
            grid_step_x: 75.,
            grid_step_y: 30.,
            grid_inset: 75.,
            note_fill: "#00ffff".to_string(),
        }
    }
}

#[doc = r#"
An SVG piano roll.

`Display` writes the `<svg>` element; [`SvgDocument::to_standalone`] adds the
XML prolog needed to save it as a file of its own.

Each note becomes a `<rect class="note-rect">` with `data-note`, `data-time`
and `data-velocity` attributes and a `<title>` describing it, so viewers
show a tooltip on hover.

# Example
```rust
# use noteplot::prelude::*;
let svg = SvgDocument::new(Canvas::new(300., 200.), &SvgStyle::default());
let markup = svg.to_string();

assert!(markup.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
assert!(!markup.contains("notes-group"));
```
"#]
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    canvas: Canvas,
    style: SvgStyle,
    elements: Vec<String>,
}

impl SvgDocument {
    /// Start a drawing holding only the background
    pub fn new(canvas: Canvas, style: &SvgStyle) -> Self {
        let elements = alloc::vec![
            format!("<style>{HOVER_STYLE}</style>"),
            format!(
                r#"<rect width="100%" height="100%" fill="{}"/>"#,
                Escaped(&style.background)
            ),
        ];
        Self {
            canvas,
            style: style.clone(),
            elements,
        }
    }

    /// Add the grid and one mark per rectangle, in order.
    ///
    /// Does nothing for an empty slice, leaving a bare background.
    pub fn with_notes(mut self, rects: &[DrawRect]) -> Self {
        if rects.is_empty() {
            return self;
        }
        self.push_grid();
        self.push_notes(rects);
        self
    }

    /// The canvas size
    pub const fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// The document with its XML prolog, ready to be written to a `.svg` file
    pub fn to_standalone(&self) -> String {
        format!("{XML_PROLOG}{self}")
    }

    fn push_grid(&mut self) {
        let style = &self.style;
        let Canvas { width, height } = self.canvas;
        let inset = style.grid_inset;
        let mut group = format!(
            r#"<g stroke="{}" stroke-width="{}">"#,
            Escaped(&style.grid_stroke),
            style.grid_stroke_width
        );

        for i in 0..grid_lines(width - 2. * inset, style.grid_step_x) {
            let x = inset + i as f64 * style.grid_step_x;
            group.push_str(&format!(
                r#"<line x1="{x}" y1="{inset}" x2="{x}" y2="{}"/>"#,
                height - inset
            ));
        }
        for i in 0..grid_lines(height - 2. * inset, style.grid_step_y) {
            let y = inset + i as f64 * style.grid_step_y;
            group.push_str(&format!(
                r#"<line x1="{inset}" y1="{y}" x2="{}" y2="{y}"/>"#,
                width - inset
            ));
        }

        group.push_str("</g>");
        self.elements.push(group);
    }

    fn push_notes(&mut self, rects: &[DrawRect]) {
        let mut group = String::from(r#"<g class="notes-group">"#);
        for rect in rects {
            group.push_str(&format!(
                r#"<rect class="note-rect" x="{}" y="{}" width="{size}" height="{size}" fill="{}" opacity="{}" data-note="{}" data-time="{}" data-velocity="{}"><title>Note: {} ({})&#10;Time: {}&#10;Velocity: {}</title></rect>"#,
                rect.x,
                rect.y,
                Escaped(&self.style.note_fill),
                rect.opacity,
                rect.note.byte(),
                rect.tick,
                rect.velocity.byte(),
                rect.note,
                rect.note.byte(),
                rect.tick,
                rect.velocity.byte(),
                size = rect.size,
            ));
        }
        group.push_str("</g>");
        self.elements.push(group);
    }
}

/// Lines at `0, step, 2 * step, ..` strictly before `span`.
///
/// Zero when the step is not positive, or when the count is not finite or
/// past [`MAX_GRID_LINES`].
fn grid_lines(span: f64, step: f64) -> usize {
    if step <= 0. || span <= 0. {
        return 0;
    }
    let count = (span / step).ceil();
    if count.is_finite() && count <= MAX_GRID_LINES {
        count as usize
    } else {
        0
    }
}

/// Writes a string as XML attribute text.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Canvas { width, height } = self.canvas;
        writeln!(
            f,
            r#"<svg xmlns="{SVG_NS}" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        for element in &self.elements {
            writeln!(f, "  {element}")?;
        }
        write!(f, "</svg>")
    }
}

#[test]
fn grid_lines_stay_inside_the_inset() {
    let style = SvgStyle::default();
    let mut svg = SvgDocument::new(Canvas::new(300., 200.), &style);
    svg.push_grid();
    let grid = svg.elements.last().unwrap();

    // x = 75, 150 (225 is the right inset), y = 75, 105 (135 > 125)
    assert_eq!(grid.matches("<line").count(), 4);
    assert!(grid.contains(r#"<line x1="150" y1="75" x2="150" y2="125"/>"#));
    assert!(grid.contains(r#"<line x1="75" y1="105" x2="225" y2="105"/>"#));
}

#[test]
fn dense_grids_are_left_out() {
    let style = SvgStyle {
        grid_step_x: 1e-20,
        ..SvgStyle::default()
    };
    let mut svg = SvgDocument::new(Canvas::new(300., 200.), &style);
    svg.push_grid();
    let grid = svg.elements.last().unwrap();

    // only the two horizontal lines remain
    assert_eq!(grid.matches("<line").count(), 2);

    let mut svg = SvgDocument::new(Canvas::new(f64::INFINITY, 200.), &SvgStyle::default());
    svg.push_grid();
    assert_eq!(svg.elements.last().unwrap().matches("<line").count(), 2);

    assert_eq!(grid_lines(150., f64::NAN), 0);
    assert_eq!(grid_lines(f64::NAN, 75.), 0);
    assert_eq!(grid_lines(-10., 75.), 0);
}

#[test]
fn style_strings_are_escaped() {
    use pretty_assertions::assert_eq;

    assert_eq!(
        Escaped(r#"a&b<c>"d'"#).to_string(),
        "a&amp;b&lt;c&gt;&quot;d&apos;"
    );

    let style = SvgStyle {
        background: "black\" onclick=\"x()".to_string(),
        grid_stroke: "<gray>".to_string(),
        note_fill: "red\" onload=\"alert(1)".to_string(),
        ..SvgStyle::default()
    };
    let rect = DrawRect {
        x: 75.,
        y: 75.,
        size: 7.,
        opacity: 1.,
        tick: 0,
        note: crate::Note::from_databyte(60).unwrap(),
        velocity: crate::Velocity::MAX,
    };
    let markup = SvgDocument::new(Canvas::default(), &style)
        .with_notes(&[rect])
        .to_string();

    assert!(!markup.contains(r#"onload="alert(1)""#));
    assert!(!markup.contains(r#"onclick="x()""#));
    assert!(markup.contains(r#"fill="red&quot; onload=&quot;alert(1)""#));
    assert!(markup.contains(r#"stroke="&lt;gray&gt;""#));
}
