//! The path-addressed store contract.

use thiserror::Error;

use crate::artifact::Artifact;

/// Errors raised by store operations. Only structural problems surface
/// here; "not there yet" lookups return `Option`/`bool` instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no artifact at '{0}'")]
    NotFound(String),
    #[error("destination folder does not exist: '{0}'")]
    NoSuchFolder(String),
}

/// A key-value asset store with path-addressed load/save/copy/delete.
///
/// The store is a single-writer resource; the host serializes all calls, so
/// implementations need no locking. `load` hands out owned snapshots;
/// callers mutate their copy and `save` it back.
pub trait AssetStore {
    /// Snapshot of the artifact stored at `path`, if any.
    fn load(&self, path: &str) -> Option<Artifact>;

    /// Create or overwrite the artifact at `path`. A stable id is minted on
    /// first create and preserved across overwrites. The parent folder must
    /// already exist.
    fn save(&mut self, path: &str, artifact: Artifact) -> Result<(), StoreError>;

    /// Duplicate the artifact at `src` to `dst` (overwriting), giving the
    /// copy its own stable id.
    fn copy(&mut self, src: &str, dst: &str) -> Result<(), StoreError>;

    /// Remove the artifact at `path`. Returns whether anything was removed.
    fn delete(&mut self, path: &str) -> bool;

    fn exists(&self, path: &str) -> bool;

    /// Globally unique, reconstructible identifier of the artifact at
    /// `path`. Stable across overwrites at the same path.
    fn stable_id(&self, path: &str) -> Option<String>;

    /// Create `folder` and any missing ancestors.
    fn ensure_folder(&mut self, folder: &str);

    fn is_folder(&self, path: &str) -> bool;

    /// Paths of all artifacts under `folder` (recursive), sorted.
    fn list_files(&self, folder: &str) -> Vec<String>;
}
