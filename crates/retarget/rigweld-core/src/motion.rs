//! Motion data model: channels, sources, and frame ranges.
//!
//! A MotionSource is the full set of channels extracted from one imported
//! motion file, still referencing that file's foreign skeleton. The curve
//! payload is opaque to the core — retargeting only rewrites channel
//! paths — so a flat frame/value keyframe list is all that is carried.

use serde::{Deserialize, Serialize};

use crate::bone_path::ChannelPath;

/// One time-stamped sample on a channel's curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub frame: f32,
    pub value: f32,
}

/// A time-sampled curve bound to one property path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionChannel {
    pub path: ChannelPath,
    /// Component index for multi-component properties (e.g. quaternion w/x/y/z).
    #[serde(default)]
    pub array_index: u32,
    pub keys: Vec<Keyframe>,
}

impl MotionChannel {
    pub fn new(path: ChannelPath, array_index: u32, keys: Vec<Keyframe>) -> Self {
        Self {
            path,
            array_index,
            keys,
        }
    }

    /// Inclusive `[start, end]` frame range, `None` when the channel has
    /// no keys.
    pub fn frame_range(&self) -> Option<(f32, f32)> {
        let mut range: Option<(f32, f32)> = None;
        for key in &self.keys {
            range = Some(match range {
                Some((start, end)) => (start.min(key.frame), end.max(key.frame)),
                None => (key.frame, key.frame),
            });
        }
        range
    }
}

/// Ordered channel set produced by one motion file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionSource {
    /// Action name as reported by the importer (often importer junk like
    /// `"mixamo.com"`; clip identity comes from the filename instead).
    pub name: String,
    pub channels: Vec<MotionChannel>,
}

impl MotionSource {
    pub fn new(name: impl Into<String>, channels: Vec<MotionChannel>) -> Self {
        Self {
            name: name.into(),
            channels,
        }
    }

    /// Inclusive frame range across all channels; `None` when no channel
    /// carries any keys.
    pub fn frame_range(&self) -> Option<(f32, f32)> {
        let mut range: Option<(f32, f32)> = None;
        for channel in &self.channels {
            if let Some((s, e)) = channel.frame_range() {
                range = Some(match range {
                    Some((start, end)) => (start.min(s), end.max(e)),
                    None => (s, e),
                });
            }
        }
        range
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
