//! Channel remapping: rewrite bone-bound channel paths to target names.

use crate::bone_path::ChannelPath;
use crate::correspondence::CorrespondenceMap;
use crate::motion::{MotionChannel, MotionSource};

/// Rewrite every bone-bound channel of `source` whose bone resolves to a
/// different target name. Channels without a correspondence keep their
/// foreign name — they will not animate anything on the target rig, but
/// they are never dropped. Idempotent: remapping an already-remapped
/// source is a no-op, since a target name resolves to itself.
pub fn remap_source(source: &MotionSource, map: &CorrespondenceMap) -> MotionSource {
    let channels = source
        .channels
        .iter()
        .map(|channel| remap_channel(channel, map))
        .collect();
    MotionSource {
        name: source.name.clone(),
        channels,
    }
}

fn remap_channel(channel: &MotionChannel, map: &CorrespondenceMap) -> MotionChannel {
    let mut out = channel.clone();
    if let ChannelPath::Bone { bone, .. } = &channel.path {
        match map.resolve(bone) {
            Some(target) if target != bone => {
                out.path = channel.path.with_bone(target);
            }
            Some(_) => {}
            None => {
                log::debug!("no correspondence for bone '{bone}'; channel left unmapped");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Keyframe;
    use crate::naming::MIXAMO_NAMESPACE;

    fn channel(path: &str) -> MotionChannel {
        MotionChannel::new(
            ChannelPath::parse(path),
            0,
            vec![Keyframe {
                frame: 1.0,
                value: 0.5,
            }],
        )
    }

    #[test]
    fn rewrites_resolved_bones_and_keeps_the_rest() {
        let map = CorrespondenceMap::from_bone_names(
            ["mixamorig:Hips_001"],
            MIXAMO_NAMESPACE,
        );
        let source = MotionSource::new(
            "take",
            vec![
                channel("pose.bones[\"mixamorig:Hips\"].location"),
                channel("pose.bones[\"Spine99_unknown\"].location"),
                channel("location"),
            ],
        );
        let remapped = remap_source(&source, &map);
        assert_eq!(
            remapped.channels[0].path.bone(),
            Some("mixamorig:Hips_001")
        );
        // Unresolvable and bone-less channels pass through untouched.
        assert_eq!(remapped.channels[1], source.channels[1]);
        assert_eq!(remapped.channels[2], source.channels[2]);
        assert_eq!(remapped.channels.len(), source.channels.len());
    }
}
