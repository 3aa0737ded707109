use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::bone_path::ChannelPath;
use crate::error::ExtractError;
use crate::host::MotionImporter;
use crate::motion::{Keyframe, MotionChannel, MotionSource};

/// Public API: parse StoredMotion-style JSON into the canonical
/// MotionSource model (motion.rs).
///
/// Notes:
/// - A file carries one or more actions; action order is preserved.
/// - Channel `dataPath` strings are parsed into ChannelPath (parsing is
///   total, so unknown path shapes survive as raw paths).
/// - Frames are floats; key frames must be finite.
pub fn parse_stored_motion_json(s: &str) -> Result<Vec<MotionSource>, String> {
    let sm: StoredMotion = serde_json::from_str(s).map_err(|e| format!("parse error: {e}"))?;

    let mut sources: Vec<MotionSource> = Vec::with_capacity(sm.actions.len());
    for action in sm.actions {
        let mut channels: Vec<MotionChannel> = Vec::with_capacity(action.channels.len());
        for ch in action.channels {
            let mut keys: Vec<Keyframe> = Vec::with_capacity(ch.keys.len());
            for k in ch.keys {
                if !k.frame.is_finite() {
                    return Err(format!(
                        "non-finite key frame on channel '{}' of action '{}'",
                        ch.data_path, action.name
                    ));
                }
                keys.push(Keyframe {
                    frame: k.frame as f32,
                    value: k.value as f32,
                });
            }
            channels.push(MotionChannel {
                path: ChannelPath::parse(&ch.data_path),
                array_index: ch.array_index,
                keys,
            });
        }
        sources.push(MotionSource {
            name: action.name,
            channels,
        });
    }
    Ok(sources)
}

/// MotionImporter over StoredMotion JSON files. The concrete importer used
/// in tests and by hosts that pre-export motion data out of their toolkit.
#[derive(Debug, Default)]
pub struct JsonMotionImporter;

impl JsonMotionImporter {
    pub fn new() -> Self {
        Self
    }
}

impl MotionImporter for JsonMotionImporter {
    fn extract(&mut self, path: &Path) -> Result<Vec<MotionSource>, ExtractError> {
        let text = fs::read_to_string(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sources = parse_stored_motion_json(&text).map_err(|detail| ExtractError::Parse {
            path: path.to_path_buf(),
            detail,
        })?;
        if sources.is_empty() {
            return Err(ExtractError::NoAnimation {
                path: path.to_path_buf(),
            });
        }
        Ok(sources)
    }
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct StoredMotion {
    pub actions: Vec<SmAction>,
}

#[derive(Debug, Deserialize)]
struct SmAction {
    pub name: String,
    pub channels: Vec<SmChannel>,
}

#[derive(Debug, Deserialize)]
struct SmChannel {
    #[serde(rename = "dataPath")]
    pub data_path: String,
    #[serde(default)]
    #[serde(rename = "arrayIndex")]
    pub array_index: u32,
    pub keys: Vec<SmKey>,
}

#[derive(Debug, Deserialize)]
struct SmKey {
    pub frame: f64,
    pub value: f64,
}
