//! Pipeline orchestration: correspondence build, per-file
//! extract → remap → identify → upsert, then finalize.
//!
//! The pipeline is the only holder of a mutable handle to the rig's
//! TrackSet during a run. Files are processed strictly one at a time in
//! filename-sorted order; a rerun against the same inputs produces an
//! identical final track set (replace-on-upsert plus prune-on-finalize).

use std::path::{Path, PathBuf};

use crate::clip_name::ClipNamer;
use crate::config::RetargetConfig;
use crate::consolidate::TrackConsolidator;
use crate::correspondence::CorrespondenceMap;
use crate::error::RetargetError;
use crate::host::MotionImporter;
use crate::remap::remap_source;
use crate::skeleton::Skeleton;
use crate::tracks::TrackSet;

/// What one run did: clips created (processing order), files skipped for
/// lack of animation data, and stale track names pruned at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub clips: Vec<String>,
    pub skipped: Vec<PathBuf>,
    pub pruned: Vec<String>,
}

/// Retargeting pipeline for one target rig.
///
/// Construction validates the fatal preconditions (a present, non-empty,
/// duplicate-free skeleton) and builds the correspondence table once; the
/// table is immutable for the pipeline's lifetime.
#[derive(Debug)]
pub struct RetargetPipeline {
    correspondence: CorrespondenceMap,
    namer: ClipNamer,
}

impl RetargetPipeline {
    pub fn new(skeleton: &Skeleton, config: &RetargetConfig) -> Result<Self, RetargetError> {
        skeleton.validate()?;
        Ok(Self {
            correspondence: CorrespondenceMap::from_skeleton(skeleton, &config.namespace),
            namer: ClipNamer::new(config.clip_rules.clone()),
        })
    }

    pub fn correspondence(&self) -> &CorrespondenceMap {
        &self.correspondence
    }

    /// Process `files` against the rig's track set.
    ///
    /// Files are sorted before processing. Extraction failures are logged
    /// and skipped; only one clip per file is taken (the first extracted
    /// action). Finalization prunes every track this run did not produce.
    pub fn run(
        &self,
        files: &[PathBuf],
        importer: &mut dyn MotionImporter,
        tracks: &mut TrackSet,
    ) -> RunReport {
        let mut ordered: Vec<&PathBuf> = files.iter().collect();
        ordered.sort();

        let mut report = RunReport::default();
        let mut consolidator = TrackConsolidator::new(tracks);

        for path in ordered {
            match self.import_one(path, importer, &mut consolidator) {
                Some(clip_name) => report.clips.push(clip_name),
                None => report.skipped.push(path.clone()),
            }
        }

        report.pruned = consolidator.finalize();
        report
    }

    /// Returns the created clip's name, or `None` when the file was
    /// skipped. Never fails the run: per-file errors stop here.
    fn import_one(
        &self,
        path: &Path,
        importer: &mut dyn MotionImporter,
        consolidator: &mut TrackConsolidator<'_>,
    ) -> Option<String> {
        let sources = match importer.extract(path) {
            Ok(sources) if sources.is_empty() => {
                log::warn!("no animation data in {}; skipping", path.display());
                return None;
            }
            Ok(sources) => sources,
            Err(err) => {
                log::warn!("skipping {}: {err}", path.display());
                return None;
            }
        };

        if sources.len() > 1 {
            // Motion files normally carry one action; extras are dropped.
            log::debug!(
                "{} actions in {}; keeping the first",
                sources.len(),
                path.display()
            );
        }

        let clip_name = self.namer.identify(path);
        let remapped = remap_source(&sources[0], &self.correspondence);
        if consolidator.upsert(&clip_name, remapped) {
            Some(clip_name)
        } else {
            None
        }
    }
}
