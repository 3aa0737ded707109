//! Error taxonomy: fatal preconditions vs. recoverable per-file failures.
//!
//! Fatal errors (`RetargetError`) abort a run before any motion file is
//! touched. Per-file errors (`ExtractError`) are contained by the pipeline:
//! the offending file is logged and skipped, and processing continues.

use std::path::PathBuf;
use thiserror::Error;

/// Unrecoverable precondition failures for a retarget run.
#[derive(Debug, Error)]
pub enum RetargetError {
    #[error("target skeleton has no bones")]
    EmptySkeleton,
    #[error("duplicate bone name in target skeleton: '{0}'")]
    DuplicateBone(String),
    #[error("no base asset ({candidates}) under {}", dir.display())]
    MissingBaseAsset { dir: PathBuf, candidates: String },
    #[error("failed to scan {}: {source}", dir.display())]
    Scan {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while extracting motion data from one input file.
/// These never escape the per-file step of the pipeline.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no animation data in {}", path.display())]
    NoAnimation { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {detail}", path.display())]
    Parse { path: PathBuf, detail: String },
}
