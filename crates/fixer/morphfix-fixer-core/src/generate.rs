//! End-to-end rewrite of a state graph onto repaired clips.
//!
//! Clones every reachable clip into the clips folder under a deterministic
//! identity, repairs the clones' morph bindings, then duplicates the graph
//! and rewires it onto the clones. Repeated runs reuse existing clip
//! artifacts instead of accumulating duplicates; the fixed graph is always
//! recreated fresh so no stale wiring survives.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use morphfix_api_core::{Clip, ClipId, StateGraph};
use morphfix_store_core::{path, Artifact, AssetStore};

use crate::config::GenerateSettings;
use crate::error::FixError;
use crate::resolve::rewrite_morph_bindings;
use crate::walker::{collect_clips, rewrite_clips, ClipSubstitutions};

/// Outcome of one generate run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateReport {
    /// Store path of the rewired graph artifact.
    pub fixed_graph: String,
    pub created_clips: usize,
    pub reused_clips: usize,
    /// Sum across both unresolved reasons.
    pub unresolved_bindings: usize,
    pub rewritten_bindings: usize,
    /// Individual motion-reference replacements in the fixed graph.
    pub rewired_motions: usize,
}

/// Run the full scan-free rewrite pipeline described in the crate docs.
///
/// Fatal conditions: missing or non-graph source artifact, and store
/// failures while saving clones or copying the graph. Clip artifacts
/// already created before a fatal error are left in place (best effort, no
/// rollback); the fixed graph is only written after every clone succeeded.
pub fn generate<S: AssetStore>(
    store: &mut S,
    settings: &GenerateSettings,
) -> Result<GenerateReport, FixError> {
    let source = store
        .load(&settings.source_graph)
        .ok_or_else(|| FixError::MissingSourceGraph(settings.source_graph.clone()))?;
    let graph = source
        .into_graph()
        .ok_or_else(|| FixError::NotAGraph(settings.source_graph.clone()))?;

    store.ensure_folder(&settings.output_folder);
    store.ensure_folder(&settings.clips_folder);

    let mut report = GenerateReport::default();
    let mut subs = ClipSubstitutions::new();

    let mut clip_ids: Vec<ClipId> = collect_clips(&graph).into_iter().collect();
    clip_ids.sort();

    info!(
        "generate: graph='{}' clips={} out='{}'",
        settings.source_graph,
        clip_ids.len(),
        settings.output_folder
    );

    for id in clip_ids {
        let source_clip = store
            .load(id.as_str())
            .ok_or_else(|| FixError::MissingClip(id.as_str().to_string()))?
            .into_clip()
            .ok_or_else(|| FixError::NotAClip(id.as_str().to_string()))?;

        let dst_path = clip_destination(store, &settings.clips_folder, &id, &source_clip);

        let mut dst_clip = match store.load(&dst_path).and_then(Artifact::into_clip) {
            Some(existing) => {
                report.reused_clips += 1;
                existing
            }
            None => {
                report.created_clips += 1;
                source_clip
            }
        };

        let in_focus = settings
            .focus_clip
            .as_ref()
            .map_or(true, |focus| focus == &id);
        if in_focus {
            let stats = rewrite_morph_bindings(
                &mut dst_clip,
                settings.target_channels.as_ref(),
                &settings.renames,
                settings.force_target_path,
                &settings.target_path,
                settings.verbose,
            );
            report.unresolved_bindings += stats.unresolved;
            report.rewritten_bindings += stats.rewritten;
        } else if settings.verbose {
            debug!("focus filter skips clip '{}'", id.as_str());
        }

        store.save(&dst_path, Artifact::Clip(dst_clip))?;
        subs.insert(id, ClipId::new(dst_path));
    }

    // The fixed graph is recreated from scratch on every run so it can
    // never keep wiring from an earlier generation.
    let fixed_path = path::join(
        &settings.output_folder,
        &format!("{}_fixed.graph", path::file_stem(&settings.source_graph)),
    );
    store.delete(&fixed_path);
    store.copy(&settings.source_graph, &fixed_path)?;

    let mut fixed_graph = store
        .load(&fixed_path)
        .and_then(Artifact::into_graph)
        .ok_or_else(|| FixError::GraphCopyUnreadable(fixed_path.clone()))?;

    report.rewired_motions = rewrite_clips(&mut fixed_graph, &subs);
    store.save(&fixed_path, Artifact::Graph(fixed_graph))?;
    report.fixed_graph = fixed_path;

    info!(
        "clips: created={} reused={} unresolved={} rewritten={}",
        report.created_clips,
        report.reused_clips,
        report.unresolved_bindings,
        report.rewritten_bindings
    );
    info!(
        "graph: fixed='{}' motions_rewired={}",
        report.fixed_graph, report.rewired_motions
    );

    Ok(report)
}

/// Deterministic destination identity for a source clip: display name plus
/// the sanitized stable id of the source artifact, so repeated runs hit the
/// same path.
fn clip_destination<S: AssetStore>(
    store: &S,
    clips_folder: &str,
    id: &ClipId,
    clip: &Clip,
) -> String {
    let key = match store.stable_id(id.as_str()) {
        Some(gid) => path::sanitize_key(&gid),
        None => String::new(),
    };
    let key = if key.is_empty() { "nogid".to_string() } else { key };
    path::join(clips_folder, &format!("{}__{}.clip", clip.name, key))
}

/// Best-effort cleanup of previously generated files under `folder`.
///
/// Missing folders and failed per-file deletes are ignored; cleanup never
/// aborts a run.
pub fn clean_folder<S: AssetStore>(store: &mut S, folder: &str) {
    if folder.is_empty() || !store.is_folder(folder) {
        return;
    }
    for file in store.list_files(folder) {
        if !store.delete(&file) {
            debug!("cleanup left '{}' behind", file);
        }
    }
}
