mod common;

use common::{SmfBytes, TrackBytes, two_track_song};
use noteplot::prelude::*;
use pretty_assertions::assert_eq;

fn document(bytes: &[u8]) -> Document {
    Document::parse(bytes).unwrap()
}

#[test]
fn empty_document_draws_nothing() {
    let empty = document(&SmfBytes::new(0).build());
    assert!(project(&empty, Canvas::default()).is_empty());

    let silent = document(
        &SmfBytes::new(0)
            .track(TrackBytes::new().note_on(0, 0, 60, 0).end_of_track(10))
            .build(),
    );
    assert!(project(&silent, Canvas::default()).is_empty());
}

#[test]
fn flattens_and_sorts_by_tick() {
    let rects = project(&document(&two_track_song()), Canvas::default());

    let order: Vec<(u64, u8)> = rects.iter().map(|r| (r.tick, r.note.byte())).collect();
    // ties keep track order: the melody's onsets come first
    assert_eq!(
        order,
        vec![(0, 60), (0, 36), (96, 64), (192, 67), (192, 43)]
    );
    assert!(rects.windows(2).all(|pair| pair[0].x <= pair[1].x));
}

#[test]
fn default_geometry() {
    let rects = project(&document(&two_track_song()), Canvas::default());

    // 1200 wide with 75 margins leaves 1050 for ticks 0..=192
    let time_scale = 1050. / 192.;
    let pitch_scale = 650. / 127. * 1.2;

    let first = rects[0];
    assert_eq!(first.x, 75.);
    assert_eq!(first.y, (127. - 60.) * pitch_scale + 75.);
    assert_eq!(first.size, 7.);
    assert_eq!(first.opacity, 100. / 127.);
    assert_eq!(first.velocity.byte(), 100);

    let last = rects[4];
    assert_eq!(last.x, 192. * time_scale + 75.);
    assert_eq!(last.y, (127. - 43.) * pitch_scale + 75.);
    assert_eq!(last.opacity, 70. / 127.);
}

#[test]
fn higher_pitches_draw_higher() {
    let rects = project(&document(&two_track_song()), Canvas::default());
    let c4 = rects.iter().find(|r| r.note.byte() == 60).unwrap();
    let c2 = rects.iter().find(|r| r.note.byte() == 36).unwrap();
    assert!(c4.y < c2.y);
}

#[test]
fn single_tick_uses_unit_time_scale() {
    let bytes = SmfBytes::new(0)
        .track(TrackBytes::new().note_on(0, 0, 127, 127).note_on(0, 0, 0, 127))
        .build();
    let projector = Projector::new(ProjectionConfig {
        margin: 20.,
        note_size: 3.,
        pitch_stretch: 1.,
    });
    let rects = projector.project(&document(&bytes), Canvas::new(100., 167.));

    assert_eq!(rects.len(), 2);
    assert_eq!((rects[0].x, rects[0].y), (20., 20.));
    assert_eq!((rects[1].x, rects[1].y), (20., 147.));
    assert_eq!(rects[1].opacity, 1.);
    assert_eq!(rects[1].size, 3.);
}

#[test]
fn canvas_smaller_than_its_margins_collapses() {
    let rects = Projector::new(ProjectionConfig {
        margin: 100.,
        ..Default::default()
    })
    .project(&document(&two_track_song()), Canvas::new(50., 50.));

    assert!(rects.iter().all(|r| r.x == 100. && r.y == 100.));
}
