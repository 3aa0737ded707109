//! Correspondence table from foreign bone names to target bone names.
//!
//! Built once per run from the target skeleton's bone set, in the
//! skeleton's enumeration order. Insertion is first-write-wins: when two
//! target bones reduce to the same lookup key, the earlier bone owns the
//! key and later bones never overwrite it. This resolves ambiguity
//! deterministically instead of silently clobbering entries.

use hashbrown::HashMap;

use crate::naming::{lookup_keys, strip_namespace};
use crate::skeleton::Skeleton;

/// Lookup key → full target bone name.
#[derive(Debug, Clone)]
pub struct CorrespondenceMap {
    entries: HashMap<String, String>,
    namespace: String,
}

impl CorrespondenceMap {
    /// Build the table from a target skeleton, using `namespace` as the
    /// marker for bare-base key derivation.
    pub fn from_skeleton(skeleton: &Skeleton, namespace: &str) -> Self {
        Self::from_bone_names(skeleton.bone_names(), namespace)
    }

    /// Build the table from target bone names in iteration order.
    pub fn from_bone_names<'a, I>(names: I, namespace: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries: HashMap<String, String> = HashMap::new();
        for full in names {
            for key in lookup_keys(full, namespace) {
                // First writer wins; later bones with the same key are skipped.
                entries.entry(key).or_insert_with(|| full.to_string());
            }
        }
        Self {
            entries,
            namespace: namespace.to_string(),
        }
    }

    /// Best-matching target bone name for a foreign bone name.
    ///
    /// Tries the foreign name as an exact key, then its namespace-stripped
    /// bare form. `None` means "no correspondence" — the caller leaves the
    /// channel unmapped; this is not an error.
    pub fn resolve(&self, foreign: &str) -> Option<&str> {
        if let Some(target) = self.entries.get(foreign) {
            return Some(target.as_str());
        }
        let bare = strip_namespace(foreign, &self.namespace)?;
        self.entries.get(bare).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::MIXAMO_NAMESPACE;

    fn map(names: &[&str]) -> CorrespondenceMap {
        CorrespondenceMap::from_bone_names(names.iter().copied(), MIXAMO_NAMESPACE)
    }

    #[test]
    fn resolves_exact_and_bare_keys() {
        let m = map(&["mixamorig:RightFoot_062"]);
        assert_eq!(m.resolve("mixamorig:RightFoot"), Some("mixamorig:RightFoot_062"));
        assert_eq!(m.resolve("RightFoot"), Some("mixamorig:RightFoot_062"));
        assert_eq!(m.resolve("mixamorig:LeftFoot"), None);
    }

    #[test]
    fn bare_lookup_strips_foreign_namespace() {
        // Target bone has no numeric suffix; foreign name carries the
        // namespace and resolves through the bare-base branch.
        let m = map(&["RightFoot"]);
        assert_eq!(m.resolve("mixamorig:RightFoot"), Some("RightFoot"));
    }

    #[test]
    fn first_write_wins() {
        let m = map(&["mixamorig:Arm_01", "mixamorig:Arm_02"]);
        assert_eq!(m.resolve("mixamorig:Arm"), Some("mixamorig:Arm_01"));
        assert_eq!(m.resolve("Arm"), Some("mixamorig:Arm_01"));
    }

    #[test]
    fn resolve_of_target_name_is_identity() {
        // A bone whose name is already a key resolves to itself, which makes
        // channel remapping idempotent.
        let m = map(&["mixamorig:Hips"]);
        assert_eq!(m.resolve("mixamorig:Hips"), Some("mixamorig:Hips"));
    }
}
