mod common;

use common::{SmfBytes, TrackBytes, two_track_song};
use noteplot::prelude::*;
use pretty_assertions::assert_eq;

fn render(bytes: &[u8]) -> SvgDocument {
    let document = Document::parse(bytes).unwrap();
    let canvas = Canvas::default();
    SvgDocument::new(canvas, &SvgStyle::default()).with_notes(&project(&document, canvas))
}

#[test]
fn standalone_document_has_xml_prolog() {
    let svg = render(&two_track_song());
    let standalone = svg.to_standalone();

    assert!(standalone.starts_with("<?xml version=\"1.0\" standalone=\"no\"?>\r\n<svg "));
    assert_eq!(standalone, format!("{}{svg}", noteplot::render::XML_PROLOG));
    assert!(standalone.ends_with("</svg>"));
}

#[test]
fn one_mark_per_onset_with_metadata() {
    let markup = render(&two_track_song()).to_string();

    assert!(markup.contains(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="800" viewBox="0 0 1200 800">"#
    ));
    assert!(markup.contains(r##"<rect width="100%" height="100%" fill="#1e1e2e"/>"##));
    assert!(markup.contains(r##"<g stroke="#2b2b3b" stroke-width="0.5">"##));
    assert_eq!(markup.matches(r#"class="note-rect""#).count(), 5);
    assert!(markup.contains(r#"data-note="60" data-time="0" data-velocity="100""#));
    assert!(markup.contains(r#"data-note="43" data-time="192" data-velocity="70""#));
    assert!(markup.contains("<title>Note: C4 (60)&#10;Time: 0&#10;Velocity: 100</title>"));
}

#[test]
fn marks_follow_draw_order() {
    let markup = render(&two_track_song()).to_string();
    let position = |note: &str| markup.find(&format!(r#"data-note="{note}""#)).unwrap();

    assert!(position("60") < position("36"));
    assert!(position("36") < position("64"));
    assert!(position("67") < position("43"));
}

#[test]
fn custom_style() {
    let document = Document::parse(
        &SmfBytes::new(0)
            .track(TrackBytes::new().note_on(0, 0, 69, 127))
            .build(),
    )
    .unwrap();
    let canvas = Canvas::new(400., 300.);
    let style = SvgStyle {
        note_fill: "tomato".to_string(),
        background: "white".to_string(),
        ..Default::default()
    };
    let markup = SvgDocument::new(canvas, &style)
        .with_notes(&project(&document, canvas))
        .to_string();

    assert!(markup.contains(r#"fill="white""#));
    assert!(markup.contains(r#"fill="tomato" opacity="1""#));
    assert!(markup.contains("Note: A4 (69)"));
}

#[test]
fn empty_drawing_is_background_only() {
    let markup = render(&SmfBytes::new(0).build()).to_string();

    assert!(markup.contains("<style>"));
    assert!(markup.contains(r#"<rect width="100%""#));
    assert!(!markup.contains("<line"));
    assert!(!markup.contains("note-rect\""));
}
