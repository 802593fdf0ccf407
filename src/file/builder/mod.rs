pub mod chunk;

use super::Document;
use crate::prelude::*;
use alloc::vec::Vec;

/// A builder used to create a new [`Document`].
///
/// Tracks are kept in the order they are pushed, which is chunk order.
pub struct DocumentBuilder {
    header: Header,
    tracks: Vec<Track>,
}

impl DocumentBuilder {
    /// Start a document from its header
    pub fn new(header: Header) -> Self {
        Self {
            header,
            tracks: Vec::new(),
        }
    }

    /// Append the next track.
    pub fn push_track(&mut self, track: Track) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "track {} decoded with {} note onsets",
            self.tracks.len(),
            track.len()
        );
        self.tracks.push(track);
    }

    /// Finish the document.
    pub fn build(self) -> Document {
        #[cfg(feature = "tracing")]
        if self.tracks.len() != usize::from(self.header.declared_tracks()) {
            tracing::warn!(
                "header declares {} tracks but the file holds {}",
                self.header.declared_tracks(),
                self.tracks.len()
            );
        }

        Document {
            header: self.header,
            tracks: self.tracks,
        }
    }
}
