#![allow(dead_code)]

use noteplot::VarLen;

/// Assembles a Standard MIDI File in memory.
pub struct SmfBytes {
    format: u16,
    division: [u8; 2],
    tracks: Vec<Vec<u8>>,
}

impl SmfBytes {
    pub fn new(format: u16) -> Self {
        Self {
            format,
            division: [0x00, 0x60],
            tracks: Vec::new(),
        }
    }

    pub fn track(mut self, body: TrackBytes) -> Self {
        self.tracks.push(body.0);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"MThd");
        bytes.extend_from_slice(&6u32.to_be_bytes());
        bytes.extend_from_slice(&self.format.to_be_bytes());
        bytes.extend_from_slice(&(self.tracks.len() as u16).to_be_bytes());
        bytes.extend_from_slice(&self.division);
        for track in &self.tracks {
            bytes.extend_from_slice(b"MTrk");
            bytes.extend_from_slice(&(track.len() as u32).to_be_bytes());
            bytes.extend_from_slice(track);
        }
        bytes
    }
}

/// The event bytes of one track chunk.
#[derive(Default, Clone)]
pub struct TrackBytes(pub Vec<u8>);

impl TrackBytes {
    pub fn new() -> Self {
        Self::default()
    }

    /// A delta-time followed by raw event bytes
    pub fn event(mut self, delta: u32, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(VarLen::new(delta).unwrap().as_bytes());
        self.0.extend_from_slice(bytes);
        self
    }

    pub fn note_on(self, delta: u32, channel: u8, pitch: u8, velocity: u8) -> Self {
        self.event(delta, &[0x90 | channel, pitch, velocity])
    }

    pub fn note_off(self, delta: u32, channel: u8, pitch: u8) -> Self {
        self.event(delta, &[0x80 | channel, pitch, 0x40])
    }

    pub fn meta(self, delta: u32, meta_type: u8, data: &[u8]) -> Self {
        let mut bytes = vec![0xFF, meta_type];
        bytes.extend_from_slice(VarLen::new(data.len() as u32).unwrap().as_bytes());
        bytes.extend_from_slice(data);
        self.event(delta, &bytes)
    }

    pub fn end_of_track(self, delta: u32) -> Self {
        self.meta(delta, 0x2F, &[])
    }
}

/// A small two-track song: a melody with a tempo map and running status,
/// and a bass line with controller noise.
pub fn two_track_song() -> Vec<u8> {
    let melody = TrackBytes::new()
        .meta(0, 0x03, b"Melody")
        .meta(0, 0x51, &[0x07, 0xA1, 0x20])
        .note_on(0, 0, 60, 100)
        .event(96, &[64, 90])
        .event(96, &[60, 0])
        .event(0, &[67, 110])
        .note_off(96, 0, 64)
        .note_off(0, 0, 67)
        .end_of_track(0);
    let bass = TrackBytes::new()
        .event(0, &[0xC1, 33])
        .event(0, &[0xB1, 7, 100])
        .note_on(0, 1, 36, 80)
        .note_on(192, 1, 43, 70)
        .event(0, &[0xE1, 0x00, 0x40])
        .note_off(96, 1, 36)
        .end_of_track(0);
    SmfBytes::new(1).track(melody).track(bass).build()
}
