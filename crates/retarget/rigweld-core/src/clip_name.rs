//! Canonical clip naming from motion-file names.
//!
//! Clip identity is computed purely from the source filename, never from
//! channel content. An ordered rule table is scanned and the first rule
//! whose keyword occurs in the lower-cased file stem wins; overlapping
//! keywords are therefore prioritized by table order. When nothing
//! matches, the stem itself (original casing) is the clip name.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// One `keyword → canonical clip name` rule. Keywords are expected in
/// lower case; matching is byte-substring over the lower-cased stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipRule {
    pub keyword: String,
    pub clip_name: String,
}

impl ClipRule {
    pub fn new(keyword: impl Into<String>, clip_name: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            clip_name: clip_name.into(),
        }
    }
}

/// Stock rule table for Mixamo-style motion packs.
pub fn default_clip_rules() -> Vec<ClipRule> {
    vec![
        ClipRule::new("angry", "Angry"),
        ClipRule::new("talk", "Talking"),
        ClipRule::new("wave", "Waving"),
        ClipRule::new("gesture", "Waving"),
        ClipRule::new("defeat", "Defeated"),
        ClipRule::new("sad", "Defeated"),
    ]
}

/// Deterministic filename → clip-name function over a fixed rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipNamer {
    rules: Vec<ClipRule>,
}

impl Default for ClipNamer {
    fn default() -> Self {
        Self::new(default_clip_rules())
    }
}

impl ClipNamer {
    pub fn new(rules: Vec<ClipRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ClipRule] {
        &self.rules
    }

    /// Canonical clip name for a motion file path.
    pub fn identify(&self, file: &Path) -> String {
        let stem = file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let lowered = stem.to_ascii_lowercase();
        for rule in &self.rules {
            if lowered.contains(rule.keyword.as_str()) {
                return rule.clip_name.clone();
            }
        }
        stem.to_string()
    }
}
