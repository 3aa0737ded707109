//! Target-rig skeleton model.
//!
//! The skeleton is produced by the external base-asset importer and is
//! read-only to this crate; only the bone-name enumeration matters here.
//! Enumeration order is significant: it is the insertion order for the
//! correspondence table's first-write-wins keys.

use serde::{Deserialize, Serialize};

use crate::error::RetargetError;

/// Named joint in the target rig.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bone {
    pub name: String,
}

impl Bone {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Ordered bone set of the target rig. Bone names are unique and the set
/// is non-empty; both are enforced at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skeleton {
    bones: Vec<Bone>,
}

impl Skeleton {
    pub fn new(bones: Vec<Bone>) -> Result<Self, RetargetError> {
        let skeleton = Self { bones };
        skeleton.validate()?;
        Ok(skeleton)
    }

    /// Convenience constructor from bone names.
    pub fn from_names<I, S>(names: I) -> Result<Self, RetargetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Bone::new).collect())
    }

    /// Check non-emptiness and name uniqueness. Deserialized skeletons
    /// should be validated before use.
    pub fn validate(&self) -> Result<(), RetargetError> {
        if self.bones.is_empty() {
            return Err(RetargetError::EmptySkeleton);
        }
        let mut seen = hashbrown::HashSet::with_capacity(self.bones.len());
        for bone in &self.bones {
            if !seen.insert(bone.name.as_str()) {
                return Err(RetargetError::DuplicateBone(bone.name.clone()));
            }
        }
        Ok(())
    }

    pub fn bones(&self) -> &[Bone] {
        &self.bones
    }

    /// Bone names in enumeration order.
    pub fn bone_names(&self) -> impl Iterator<Item = &str> {
        self.bones.iter().map(|b| b.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_duplicate() {
        assert!(matches!(
            Skeleton::new(Vec::new()),
            Err(RetargetError::EmptySkeleton)
        ));
        assert!(matches!(
            Skeleton::from_names(["Hips", "Spine", "Hips"]),
            Err(RetargetError::DuplicateBone(name)) if name == "Hips"
        ));
    }

    #[test]
    fn preserves_enumeration_order() {
        let s = Skeleton::from_names(["Hips", "Spine", "Head"]).unwrap();
        let names: Vec<&str> = s.bone_names().collect();
        assert_eq!(names, vec!["Hips", "Spine", "Head"]);
    }
}
