use morphfix_api_core::{BindingKey, ClipId};
use morphfix_fixer_core::{
    clean_folder, collect_clips, generate, FixError, GenerateSettings, RenameTable,
};
use morphfix_store_core::{Artifact, AssetStore, MemoryStore, StoreError};
use morphfix_test_fixtures::{face_channels, seeded_store, SOURCE_GRAPH};

fn settings() -> GenerateSettings {
    let mut renames = RenameTable::default();
    renames.insert("EyeBlink".to_string(), vec!["EyeBlink_New".to_string()]);
    GenerateSettings {
        source_graph: SOURCE_GRAPH.to_string(),
        output_folder: "out".to_string(),
        clips_folder: "out/clips".to_string(),
        target_channels: Some(face_channels()),
        target_path: "Root/Face".to_string(),
        force_target_path: true,
        renames,
        focus_clip: None,
        verbose: false,
    }
}

fn fixed_clip_ids<S: AssetStore>(store: &S, fixed_graph: &str) -> Vec<ClipId> {
    let graph = store
        .load(fixed_graph)
        .and_then(Artifact::into_graph)
        .expect("fixed graph readable");
    let mut ids: Vec<ClipId> = collect_clips(&graph).into_iter().collect();
    ids.sort();
    ids
}

#[test]
fn generate_produces_fixed_clips_and_graph() {
    let mut store = seeded_store();
    let report = generate(&mut store, &settings()).unwrap();

    assert_eq!(report.fixed_graph, "out/main_fixed.graph");
    assert_eq!(report.created_clips, 3);
    assert_eq!(report.reused_clips, 0);
    // blink is renamed, jaw is re-pathed, smile is already correct.
    assert_eq!(report.rewritten_bindings, 2);
    assert_eq!(report.unresolved_bindings, 0);
    // blink has two reference slots (state + inner tree), smile and jaw one
    // each.
    assert_eq!(report.rewired_motions, 4);

    let ids = fixed_clip_ids(&store, &report.fixed_graph);
    assert_eq!(ids.len(), 3);
    for id in &ids {
        assert!(id.as_str().starts_with("out/clips/"), "bad id {}", id.as_str());
        assert!(store.exists(id.as_str()));
    }

    // Source artifacts are never mutated.
    let src = store
        .load("library/jaw.clip")
        .and_then(Artifact::into_clip)
        .unwrap();
    assert!(src
        .curve(&BindingKey::blend_shape("Root/OldFace", "JawOpen"))
        .is_some());

    // The fixed jaw clone carries the forced path.
    let jaw_id = ids.iter().find(|id| id.as_str().contains("jaw__")).unwrap();
    let jaw = store
        .load(jaw_id.as_str())
        .and_then(Artifact::into_clip)
        .unwrap();
    assert!(jaw
        .curve(&BindingKey::blend_shape("Root/Face", "JawOpen"))
        .is_some());
}

#[test]
fn regenerate_reuses_clips_and_rewires_identically() {
    let mut store = seeded_store();
    let first = generate(&mut store, &settings()).unwrap();
    let graph_after_first = store.load(&first.fixed_graph);

    let second = generate(&mut store, &settings()).unwrap();

    assert_eq!(second.created_clips, 0);
    assert_eq!(second.reused_clips, 3);
    // The reused clones are already repaired, so nothing rewrites again.
    assert_eq!(second.rewritten_bindings, 0);
    assert_eq!(second.unresolved_bindings, 0);
    assert_eq!(second.rewired_motions, first.rewired_motions);
    assert_eq!(second.fixed_graph, first.fixed_graph);
    assert_eq!(store.load(&second.fixed_graph), graph_after_first);
}

#[test]
fn focus_filter_copies_other_clips_verbatim() {
    let mut store = seeded_store();
    let mut s = settings();
    s.focus_clip = Some(ClipId::from("library/blink.clip"));

    let report = generate(&mut store, &s).unwrap();

    assert_eq!(report.created_clips, 3);
    assert_eq!(report.rewritten_bindings, 1);

    // jaw was cloned without the policy: its mismatched path survives.
    let ids = fixed_clip_ids(&store, &report.fixed_graph);
    let jaw_id = ids.iter().find(|id| id.as_str().contains("jaw__")).unwrap();
    let jaw = store
        .load(jaw_id.as_str())
        .and_then(Artifact::into_clip)
        .unwrap();
    assert!(jaw
        .curve(&BindingKey::blend_shape("Root/OldFace", "JawOpen"))
        .is_some());
}

#[test]
fn unresolved_bindings_are_counted_not_fatal() {
    let mut store = seeded_store();
    let mut s = settings();
    s.renames.clear();

    let report = generate(&mut store, &s).unwrap();

    // EyeBlink has no mapping and no target channel: left as-is.
    assert_eq!(report.unresolved_bindings, 1);
    assert_eq!(report.rewritten_bindings, 1);
}

#[test]
fn missing_source_graph_is_fatal() {
    let mut store = MemoryStore::new();
    let err = generate(&mut store, &settings()).unwrap_err();
    assert!(matches!(err, FixError::MissingSourceGraph(_)));
}

#[test]
fn non_graph_source_artifact_is_fatal() {
    let mut store = seeded_store();
    let mut s = settings();
    s.source_graph = "library/blink.clip".to_string();

    let err = generate(&mut store, &s).unwrap_err();
    assert!(matches!(err, FixError::NotAGraph(_)));
}

/// Store wrapper whose `copy` always fails, standing in for an I/O fault
/// while duplicating the graph.
struct BrokenCopyStore {
    inner: MemoryStore,
}

impl AssetStore for BrokenCopyStore {
    fn load(&self, path: &str) -> Option<Artifact> {
        self.inner.load(path)
    }
    fn save(&mut self, path: &str, artifact: Artifact) -> Result<(), StoreError> {
        self.inner.save(path, artifact)
    }
    fn copy(&mut self, src: &str, _dst: &str) -> Result<(), StoreError> {
        Err(StoreError::NotFound(src.to_string()))
    }
    fn delete(&mut self, path: &str) -> bool {
        self.inner.delete(path)
    }
    fn exists(&self, path: &str) -> bool {
        self.inner.exists(path)
    }
    fn stable_id(&self, path: &str) -> Option<String> {
        self.inner.stable_id(path)
    }
    fn ensure_folder(&mut self, folder: &str) {
        self.inner.ensure_folder(folder)
    }
    fn is_folder(&self, path: &str) -> bool {
        self.inner.is_folder(path)
    }
    fn list_files(&self, folder: &str) -> Vec<String> {
        self.inner.list_files(folder)
    }
}

#[test]
fn failed_graph_copy_aborts_but_keeps_created_clips() {
    let mut store = BrokenCopyStore {
        inner: seeded_store(),
    };

    let err = generate(&mut store, &settings()).unwrap_err();
    assert!(matches!(err, FixError::Store(_)));

    // Best effort: per-clip artifacts created before the fault stay.
    assert_eq!(store.list_files("out/clips").len(), 3);
    assert!(!store.exists("out/main_fixed.graph"));
}

#[test]
fn clean_folder_removes_files_best_effort() {
    let mut store = seeded_store();
    generate(&mut store, &settings()).unwrap();
    assert!(!store.list_files("out").is_empty());

    clean_folder(&mut store, "out");

    assert!(store.list_files("out").is_empty());
    assert!(store.is_folder("out"));
    assert!(store.exists(SOURCE_GRAPH));

    // Unknown folders are ignored outright.
    clean_folder(&mut store, "nowhere");
}
