//! Run configuration for the retarget pipeline.

use serde::{Deserialize, Serialize};

use crate::clip_name::{default_clip_rules, ClipRule};
use crate::naming::MIXAMO_NAMESPACE;

/// Configuration for one retarget run. `Default` reproduces the stock
/// Mixamo-style character build.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetargetConfig {
    /// Namespace marker used for bare-base key derivation.
    pub namespace: String,
    /// Extension of recognized motion files (matched case-insensitively).
    pub motion_extension: String,
    /// Ordered clip-naming rules; first match wins.
    pub clip_rules: Vec<ClipRule>,
}

impl Default for RetargetConfig {
    fn default() -> Self {
        Self {
            namespace: MIXAMO_NAMESPACE.to_string(),
            motion_extension: "fbx".to_string(),
            clip_rules: default_clip_rules(),
        }
    }
}
