//! Rigweld retarget core (toolkit-agnostic)
//!
//! Assembles a single animated character from a base rig plus
//! independently produced motion files whose skeletons use foreign
//! bone-naming conventions. The crate derives a name correspondence from
//! the target skeleton, rewrites per-bone animation channels, assigns
//! canonical clip names from filenames, and consolidates the results into
//! a non-overlapping set of named tracks. Scene-graph work (base import,
//! materials, transform baking, export) stays on the host side behind the
//! `host` seams.

pub mod bone_path;
pub mod clip_name;
pub mod config;
pub mod consolidate;
pub mod correspondence;
pub mod error;
pub mod host;
pub mod layout;
pub mod motion;
pub mod naming;
pub mod pipeline;
pub mod remap;
pub mod skeleton;
pub mod stored_motion;
pub mod tracks;

// Re-exports for consumers (host adapters)
pub use bone_path::ChannelPath;
pub use clip_name::{default_clip_rules, ClipNamer, ClipRule};
pub use config::RetargetConfig;
pub use consolidate::TrackConsolidator;
pub use correspondence::CorrespondenceMap;
pub use error::{ExtractError, RetargetError};
pub use host::MotionImporter;
pub use layout::{plan_layout, scan_dir, SourceLayout, BASE_ASSET_CANDIDATES};
pub use motion::{Keyframe, MotionChannel, MotionSource};
pub use naming::MIXAMO_NAMESPACE;
pub use pipeline::{RetargetPipeline, RunReport};
pub use remap::remap_source;
pub use skeleton::{Bone, Skeleton};
pub use stored_motion::{parse_stored_motion_json, JsonMotionImporter};
pub use tracks::{Strip, Track, TrackSet};
