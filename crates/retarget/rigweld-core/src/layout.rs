//! Source-directory layout: base asset selection and motion-file listing.
//!
//! The base asset is picked by candidate priority (`model.glb` over
//! `scene.gltf`), not by listing order; motion files are filtered by
//! extension and sorted lexicographically so runs are reproducible
//! regardless of filesystem enumeration order.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RetargetError;

/// Base-asset filenames in priority order.
pub const BASE_ASSET_CANDIDATES: [&str; 2] = ["model.glb", "scene.gltf"];

/// Resolved inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLayout {
    pub base_asset: PathBuf,
    /// Lexicographically sorted motion file paths.
    pub motion_files: Vec<PathBuf>,
}

/// Plan a layout from an explicit directory listing. Pure over `entries`;
/// `dir` is only used for error reporting.
pub fn plan_layout(
    dir: &Path,
    entries: &[PathBuf],
    motion_extension: &str,
) -> Result<SourceLayout, RetargetError> {
    let base_asset = BASE_ASSET_CANDIDATES
        .iter()
        .find_map(|candidate| {
            entries
                .iter()
                .find(|entry| entry.file_name() == Some(OsStr::new(candidate)))
        })
        .cloned()
        .ok_or_else(|| RetargetError::MissingBaseAsset {
            dir: dir.to_path_buf(),
            candidates: BASE_ASSET_CANDIDATES.join(" or "),
        })?;

    let mut motion_files: Vec<PathBuf> = entries
        .iter()
        .filter(|entry| {
            entry
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(motion_extension))
        })
        .cloned()
        .collect();
    motion_files.sort();

    Ok(SourceLayout {
        base_asset,
        motion_files,
    })
}

/// Read `dir` from the filesystem and plan its layout.
pub fn scan_dir(dir: &Path, motion_extension: &str) -> Result<SourceLayout, RetargetError> {
    let mut entries = Vec::new();
    let read = fs::read_dir(dir).map_err(|source| RetargetError::Scan {
        dir: dir.to_path_buf(),
        source,
    })?;
    for entry in read {
        let entry = entry.map_err(|source| RetargetError::Scan {
            dir: dir.to_path_buf(),
            source,
        })?;
        entries.push(entry.path());
    }
    plan_layout(dir, &entries, motion_extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|n| PathBuf::from(format!("/src/{n}"))).collect()
    }

    #[test]
    fn glb_preferred_over_gltf() {
        let entries = paths(&["scene.gltf", "model.glb", "wave.fbx"]);
        let layout = plan_layout(Path::new("/src"), &entries, "fbx").unwrap();
        assert_eq!(layout.base_asset, PathBuf::from("/src/model.glb"));
    }

    #[test]
    fn missing_base_asset_is_fatal() {
        let entries = paths(&["wave.fbx"]);
        let err = plan_layout(Path::new("/src"), &entries, "fbx").unwrap_err();
        assert!(matches!(err, RetargetError::MissingBaseAsset { .. }));
    }

    #[test]
    fn motion_files_filtered_and_sorted() {
        let entries = paths(&[
            "model.glb",
            "wave.fbx",
            "Angry.FBX",
            "notes.txt",
            "sad_lose_01.fbx",
        ]);
        let layout = plan_layout(Path::new("/src"), &entries, "fbx").unwrap();
        assert_eq!(
            layout.motion_files,
            paths(&["Angry.FBX", "sad_lose_01.fbx", "wave.fbx"])
        );
    }
}
