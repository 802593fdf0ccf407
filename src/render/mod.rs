#![doc = r#"
Turn projected [`DrawRect`](crate::DrawRect)s into vector images.

This is the second, thin half of the drawing pipeline: geometry is already
final when it gets here, so the adapters only serialize.
"#]

mod svg;
pub use svg::*;
