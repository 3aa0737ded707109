//! ChannelPath parsing and formatting.
//!
//! Grammar (authoring-toolkit data paths):
//!   pose.bones["<bone>"].<property>
//! - A path of that shape is bone-bound: it animates one property of one
//!   named bone (the property selector may itself contain '.' segments).
//! - Every other path is kept verbatim as `Raw` — object-level channels,
//!   shape keys, and anything else the core has no business rewriting.
//!
//! ChannelPath is intentionally string-based; parsing is total, so a path
//! that round-trips through parse/Display is always preserved exactly.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const BONE_PREFIX: &str = "pose.bones[\"";
const BONE_SUFFIX: &str = "\"]";

/// An animation channel's property path, with the bone-name component
/// (if any) split out so it can be rewritten during retargeting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChannelPath {
    /// `pose.bones["<bone>"].<property>`
    Bone { bone: String, property: String },
    /// Any other data path, preserved untouched.
    Raw(String),
}

impl ChannelPath {
    /// Parse a data path. Total: anything that is not a well-formed bone
    /// path becomes `Raw`.
    pub fn parse(s: &str) -> Self {
        if let Some(rest) = s.strip_prefix(BONE_PREFIX) {
            if let Some(end) = rest.find(BONE_SUFFIX) {
                let bone = &rest[..end];
                let tail = &rest[end + BONE_SUFFIX.len()..];
                if let Some(property) = tail.strip_prefix('.') {
                    if !bone.is_empty() && !property.is_empty() {
                        return ChannelPath::Bone {
                            bone: bone.to_string(),
                            property: property.to_string(),
                        };
                    }
                }
            }
        }
        ChannelPath::Raw(s.to_string())
    }

    /// The bone-name component, if this path is bone-bound.
    pub fn bone(&self) -> Option<&str> {
        match self {
            ChannelPath::Bone { bone, .. } => Some(bone),
            ChannelPath::Raw(_) => None,
        }
    }

    /// The property selector, if this path is bone-bound.
    pub fn property(&self) -> Option<&str> {
        match self {
            ChannelPath::Bone { property, .. } => Some(property),
            ChannelPath::Raw(_) => None,
        }
    }

    /// Copy of this path with the bone-name component replaced.
    /// The property selector is untouched; a `Raw` path is returned as-is.
    pub fn with_bone(&self, new_bone: &str) -> Self {
        match self {
            ChannelPath::Bone { property, .. } => ChannelPath::Bone {
                bone: new_bone.to_string(),
                property: property.clone(),
            },
            ChannelPath::Raw(s) => ChannelPath::Raw(s.clone()),
        }
    }
}

impl fmt::Display for ChannelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelPath::Bone { bone, property } => {
                write!(f, "{BONE_PREFIX}{bone}{BONE_SUFFIX}.{property}")
            }
            ChannelPath::Raw(s) => f.write_str(s),
        }
    }
}

// Serde support: serialize as string, deserialize from string
impl Serialize for ChannelPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ChannelPath {
    fn deserialize<D>(deserializer: D) -> Result<ChannelPath, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ChannelPath::parse(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bone_path() {
        let p = ChannelPath::parse("pose.bones[\"mixamorig:Hips\"].rotation_quaternion");
        assert_eq!(p.bone(), Some("mixamorig:Hips"));
        assert_eq!(p.property(), Some("rotation_quaternion"));
        assert_eq!(
            p.to_string(),
            "pose.bones[\"mixamorig:Hips\"].rotation_quaternion"
        );
    }

    #[test]
    fn parse_object_path_is_raw() {
        let p = ChannelPath::parse("location");
        assert_eq!(p, ChannelPath::Raw("location".to_string()));
        assert_eq!(p.bone(), None);
        assert_eq!(p.to_string(), "location");
    }

    #[test]
    fn malformed_bone_paths_are_raw() {
        // No property selector after the bone segment.
        assert!(matches!(
            ChannelPath::parse("pose.bones[\"Hips\"]"),
            ChannelPath::Raw(_)
        ));
        // Empty bone name.
        assert!(matches!(
            ChannelPath::parse("pose.bones[\"\"].location"),
            ChannelPath::Raw(_)
        ));
    }

    #[test]
    fn with_bone_rewrites_only_the_bone() {
        let p = ChannelPath::parse("pose.bones[\"Hips\"].location");
        let q = p.with_bone("mixamorig:Hips_062");
        assert_eq!(q.bone(), Some("mixamorig:Hips_062"));
        assert_eq!(q.property(), Some("location"));
    }

    #[test]
    fn dotted_property_selector_survives() {
        let p = ChannelPath::parse("pose.bones[\"Arm\"].constraints.ik.influence");
        assert_eq!(p.property(), Some("constraints.ik.influence"));
        assert_eq!(
            p.with_bone("Arm2").to_string(),
            "pose.bones[\"Arm2\"].constraints.ik.influence"
        );
    }
}
