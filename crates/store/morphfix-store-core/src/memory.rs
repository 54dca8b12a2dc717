//! In-memory reference store.

use hashbrown::{HashMap, HashSet};
use uuid::Uuid;

use crate::artifact::Artifact;
use crate::path;
use crate::store::{AssetStore, StoreError};

#[derive(Clone, Debug)]
struct Stored {
    artifact: Artifact,
    stable_id: String,
}

/// Reference [`AssetStore`] backed by hash maps. Stable ids are v4 UUIDs
/// minted at create time and kept for the lifetime of the path entry.
#[derive(Debug, Default)]
pub struct MemoryStore {
    artifacts: HashMap<String, Stored>,
    folders: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored artifacts (not folders).
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl AssetStore for MemoryStore {
    fn load(&self, path: &str) -> Option<Artifact> {
        self.artifacts.get(path).map(|s| s.artifact.clone())
    }

    fn save(&mut self, path: &str, artifact: Artifact) -> Result<(), StoreError> {
        let folder = path::parent(path);
        if !folder.is_empty() && !self.folders.contains(folder) {
            return Err(StoreError::NoSuchFolder(folder.to_string()));
        }
        match self.artifacts.get_mut(path) {
            Some(stored) => stored.artifact = artifact,
            None => {
                self.artifacts.insert(
                    path.to_string(),
                    Stored {
                        artifact,
                        stable_id: Uuid::new_v4().to_string(),
                    },
                );
            }
        }
        Ok(())
    }

    fn copy(&mut self, src: &str, dst: &str) -> Result<(), StoreError> {
        let artifact = self
            .load(src)
            .ok_or_else(|| StoreError::NotFound(src.to_string()))?;
        self.save(dst, artifact)
    }

    fn delete(&mut self, path: &str) -> bool {
        self.artifacts.remove(path).is_some()
    }

    fn exists(&self, path: &str) -> bool {
        self.artifacts.contains_key(path)
    }

    fn stable_id(&self, path: &str) -> Option<String> {
        self.artifacts.get(path).map(|s| s.stable_id.clone())
    }

    fn ensure_folder(&mut self, folder: &str) {
        if folder.is_empty() {
            return;
        }
        let normalized = folder.trim_end_matches('/').replace('\\', "/");
        let mut prefix = String::new();
        for part in normalized.split('/') {
            if prefix.is_empty() {
                prefix.push_str(part);
            } else {
                prefix = path::join(&prefix, part);
            }
            self.folders.insert(prefix.clone());
        }
    }

    fn is_folder(&self, path: &str) -> bool {
        self.folders.contains(path.trim_end_matches('/'))
    }

    fn list_files(&self, folder: &str) -> Vec<String> {
        let prefix = format!("{}/", folder.trim_end_matches('/'));
        let mut files: Vec<String> = self
            .artifacts
            .keys()
            .filter(|p| p.starts_with(&prefix))
            .cloned()
            .collect();
        files.sort();
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphfix_api_core::Clip;

    fn clip(name: &str) -> Artifact {
        Artifact::Clip(Clip::new(name))
    }

    #[test]
    fn save_requires_parent_folder() {
        let mut store = MemoryStore::new();
        let err = store.save("out/a.clip", clip("a")).unwrap_err();
        assert!(matches!(err, StoreError::NoSuchFolder(f) if f == "out"));

        store.ensure_folder("out");
        store.save("out/a.clip", clip("a")).unwrap();
        assert!(store.exists("out/a.clip"));
    }

    #[test]
    fn ensure_folder_creates_ancestors() {
        let mut store = MemoryStore::new();
        store.ensure_folder("out/fixed/clips");
        assert!(store.is_folder("out"));
        assert!(store.is_folder("out/fixed"));
        assert!(store.is_folder("out/fixed/clips"));
        assert!(!store.is_folder("fixed"));
    }

    #[test]
    fn stable_id_survives_overwrite() {
        let mut store = MemoryStore::new();
        store.ensure_folder("lib");
        store.save("lib/a.clip", clip("a")).unwrap();
        let id = store.stable_id("lib/a.clip").unwrap();

        store.save("lib/a.clip", clip("a2")).unwrap();
        assert_eq!(store.stable_id("lib/a.clip").unwrap(), id);
        assert_eq!(store.load("lib/a.clip").unwrap().as_clip().unwrap().name, "a2");
    }

    #[test]
    fn copy_mints_fresh_stable_id() {
        let mut store = MemoryStore::new();
        store.ensure_folder("lib");
        store.save("lib/a.clip", clip("a")).unwrap();
        store.copy("lib/a.clip", "lib/b.clip").unwrap();

        assert_eq!(store.load("lib/b.clip"), store.load("lib/a.clip"));
        assert_ne!(store.stable_id("lib/a.clip"), store.stable_id("lib/b.clip"));
    }

    #[test]
    fn copy_missing_source_fails() {
        let mut store = MemoryStore::new();
        store.ensure_folder("lib");
        let err = store.copy("lib/missing.clip", "lib/b.clip").unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn list_files_is_recursive_and_sorted() {
        let mut store = MemoryStore::new();
        store.ensure_folder("out/clips");
        store.save("out/clips/b.clip", clip("b")).unwrap();
        store.save("out/clips/a.clip", clip("a")).unwrap();
        store.save("out/graph.graph", clip("g")).unwrap();

        assert_eq!(
            store.list_files("out"),
            vec!["out/clips/a.clip", "out/clips/b.clip", "out/graph.graph"]
        );
        assert_eq!(store.list_files("out/clips").len(), 2);
        assert!(store.list_files("elsewhere").is_empty());
    }

    #[test]
    fn delete_reports_presence() {
        let mut store = MemoryStore::new();
        store.ensure_folder("lib");
        store.save("lib/a.clip", clip("a")).unwrap();
        assert!(store.delete("lib/a.clip"));
        assert!(!store.delete("lib/a.clip"));
    }
}
