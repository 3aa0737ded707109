//! Track consolidation: replace-on-upsert, prune-on-finalize.
//!
//! The consolidator owns the rig's TrackSet for the duration of a run. It
//! records which clip names the current import pass produced; `finalize`
//! then garbage-collects every track whose name was not produced — stale
//! tracks from prior runs and importer artifacts (e.g. a `"mixamo.com"`
//! default track) alike.

use hashbrown::HashSet;

use crate::motion::MotionSource;
use crate::tracks::{Track, TrackSet};

pub struct TrackConsolidator<'a> {
    tracks: &'a mut TrackSet,
    desired: HashSet<String>,
}

impl<'a> TrackConsolidator<'a> {
    pub fn new(tracks: &'a mut TrackSet) -> Self {
        Self {
            tracks,
            desired: HashSet::new(),
        }
    }

    /// Replace any same-named track with a new one holding `source`.
    ///
    /// Returns whether a track was created. A source without keyed
    /// channels creates nothing and does not mark the name as desired, so
    /// an empty import never shields a stale track from `finalize`.
    pub fn upsert(&mut self, clip_name: &str, source: MotionSource) -> bool {
        let Some(track) = Track::from_source(clip_name, source) else {
            log::warn!("clip '{clip_name}' has no animation channels; no track created");
            return false;
        };
        if self.tracks.remove(clip_name).is_some() {
            log::debug!("replacing existing track '{clip_name}'");
        }
        self.tracks.insert(track);
        self.desired.insert(clip_name.to_string());
        true
    }

    /// Remove every track whose name this pass did not produce. Consumes
    /// the consolidator; called exactly once per run. Returns the pruned
    /// names in their original track order.
    pub fn finalize(self) -> Vec<String> {
        let stale: Vec<String> = self
            .tracks
            .names()
            .filter(|name| !self.desired.contains(*name))
            .map(str::to_string)
            .collect();
        for name in &stale {
            log::debug!("pruning stale track '{name}'");
            self.tracks.remove(name);
        }
        stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bone_path::ChannelPath;
    use crate::motion::{Keyframe, MotionChannel};

    fn source(start: f32, end: f32) -> MotionSource {
        MotionSource::new(
            "take",
            vec![MotionChannel::new(
                ChannelPath::parse("pose.bones[\"Hips\"].location"),
                0,
                vec![
                    Keyframe {
                        frame: start,
                        value: 0.0,
                    },
                    Keyframe {
                        frame: end,
                        value: 1.0,
                    },
                ],
            )],
        )
    }

    #[test]
    fn upsert_replaces_same_name() {
        let mut tracks = TrackSet::new();
        let mut consolidator = TrackConsolidator::new(&mut tracks);
        assert!(consolidator.upsert("Waving", source(1.0, 40.0)));
        assert!(consolidator.upsert("Waving", source(1.0, 80.0)));
        consolidator.finalize();

        assert_eq!(tracks.len(), 1);
        let strip = &tracks.get("Waving").unwrap().strip;
        assert_eq!(strip.action_frame_end, 80.0);
    }

    #[test]
    fn finalize_prunes_undesired_tracks() {
        let mut tracks = TrackSet::new();
        {
            let mut seed = TrackConsolidator::new(&mut tracks);
            seed.upsert("mixamo.com", source(0.0, 10.0));
            seed.upsert("Angry", source(0.0, 10.0));
        }
        let mut consolidator = TrackConsolidator::new(&mut tracks);
        consolidator.upsert("Angry", source(0.0, 12.0));
        let pruned = consolidator.finalize();

        assert_eq!(pruned, vec!["mixamo.com".to_string()]);
        let names: Vec<&str> = tracks.names().collect();
        assert_eq!(names, vec!["Angry"]);
    }

    #[test]
    fn empty_source_does_not_shield_stale_track() {
        let mut tracks = TrackSet::new();
        {
            let mut seed = TrackConsolidator::new(&mut tracks);
            seed.upsert("Talking", source(0.0, 10.0));
        }
        let mut consolidator = TrackConsolidator::new(&mut tracks);
        assert!(!consolidator.upsert("Talking", MotionSource::new("take", Vec::new())));
        let pruned = consolidator.finalize();

        assert_eq!(pruned, vec!["Talking".to_string()]);
        assert!(tracks.is_empty());
    }

    #[test]
    fn strip_anchor_snaps_to_whole_frames() {
        let mut tracks = TrackSet::new();
        let mut consolidator = TrackConsolidator::new(&mut tracks);
        consolidator.upsert("Angry", source(1.5, 33.25));
        consolidator.finalize();

        let strip = &tracks.get("Angry").unwrap().strip;
        assert_eq!(strip.frame_start, 1.0);
        assert_eq!(strip.action_frame_start, 1.5);
        assert_eq!(strip.action_frame_end, 33.25);
    }
}
