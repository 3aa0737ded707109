//! Seams to the host authoring toolkit.
//!
//! The core never talks to a scene graph. Hosts implement `MotionImporter`
//! and pass it into `RetargetPipeline::run`; base-asset import and final
//! export stay entirely on the host side (the pipeline receives a built
//! `Skeleton` and hands back the final `TrackSet`).

use std::path::Path;

use crate::error::ExtractError;
use crate::motion::MotionSource;

/// Extracts motion sources from one input file.
///
/// Implementations must discard any transient scaffolding they create
/// (imported rigs, meshes) before returning; only channel data crosses
/// this boundary. Returning an empty vec is equivalent to
/// `ExtractError::NoAnimation`.
pub trait MotionImporter {
    fn extract(&mut self, path: &Path) -> Result<Vec<MotionSource>, ExtractError>;
}
