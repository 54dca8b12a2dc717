//! Generate-run configuration.

use serde::{Deserialize, Serialize};

use morphfix_api_core::{ClipId, MeshChannels};

use crate::resolve::RenameTable;

/// Fully-resolved settings for one generate run.
///
/// A flat value type: the configuration surface owns interaction and
/// persisted preferences, fills this in and hands it over. All fields have
/// explicit defaults and the whole struct round-trips through serde.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateSettings {
    /// Store path of the source state graph. Must exist.
    pub source_graph: String,
    /// Folder receiving the fixed graph artifact.
    pub output_folder: String,
    /// Folder receiving the cloned clip artifacts.
    pub clips_folder: String,
    /// Channel set of the target mesh; `None` leaves channel existence
    /// unconstrained.
    pub target_channels: Option<MeshChannels>,
    /// Mesh-relative object path curves should live on.
    pub target_path: String,
    /// Rebind every morph curve onto `target_path` (when non-empty).
    pub force_target_path: bool,
    pub renames: RenameTable,
    /// When set, only this source clip gets the resolution policy; every
    /// other clip is cloned as-is.
    pub focus_clip: Option<ClipId>,
    /// Emit a per-binding log trail.
    pub verbose: bool,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            source_graph: String::new(),
            output_folder: "output".to_string(),
            clips_folder: "output/clips".to_string(),
            target_channels: None,
            target_path: String::new(),
            force_target_path: true,
            renames: RenameTable::default(),
            focus_clip: None,
            verbose: false,
        }
    }
}
