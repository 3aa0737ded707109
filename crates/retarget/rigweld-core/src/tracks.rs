//! Named animation tracks on the target rig.
//!
//! A Track holds exactly one Strip: the placement of one clip's channel
//! data on the rig's timeline. The TrackSet preserves insertion order and
//! answers name lookups linearly; track counts are small and ordered
//! iteration keeps runs reproducible.

use serde::{Deserialize, Serialize};

use crate::motion::MotionSource;

/// Placement of one clip's channel data on the rig timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strip {
    pub name: String,
    /// Timeline anchor; strip anchors snap to whole frames.
    pub frame_start: f32,
    pub action_frame_start: f32,
    pub action_frame_end: f32,
    pub source: MotionSource,
}

/// Named container for exactly one strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub strip: Strip,
}

impl Track {
    /// Build a track for a remapped source, anchored at the source's own
    /// start frame so local clip timing and placement coincide.
    /// `None` when the source carries no keyed channels.
    pub fn from_source(name: &str, source: MotionSource) -> Option<Self> {
        let (start, end) = source.frame_range()?;
        Some(Self {
            name: name.to_string(),
            strip: Strip {
                name: name.to_string(),
                frame_start: start.trunc(),
                action_frame_start: start,
                action_frame_end: end,
                source,
            },
        })
    }
}

/// The target rig's track collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackSet {
    tracks: Vec<Track>,
}

impl TrackSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.name == name)
    }

    /// Append a track. Callers wanting replace semantics remove first;
    /// see `TrackConsolidator::upsert`.
    pub fn insert(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn remove(&mut self, name: &str) -> Option<Track> {
        let idx = self.tracks.iter().position(|t| t.name == name)?;
        Some(self.tracks.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Track names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tracks.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
