//! Read-only scan of a state graph against a target mesh.
//!
//! Classifies every morph-target binding in every reachable clip and
//! aggregates the findings into a report the configuration surface can
//! render. Never mutates clips or the graph.

use hashbrown::HashSet;
use log::warn;
use serde::{Deserialize, Serialize};

use morphfix_api_core::{Clip, ClipId, MeshChannels, StateGraph};
use morphfix_store_core::AssetStore;

use crate::walker::collect_clips;

/// Problem class of one binding. A binding with both problems reports
/// `MissingChannel`; the missing channel takes priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    MissingChannel,
    PathMismatch,
}

/// One problematic binding, flat enough for direct UI listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BindingIssue {
    pub clip: ClipId,
    pub clip_name: String,
    pub path: String,
    pub channel: String,
    pub kind: IssueKind,
}

/// Aggregate scan findings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub graph_name: String,
    pub target_path: String,
    /// Reachable clips, sorted by display name (ties by id).
    pub clips: Vec<ClipId>,
    pub total_morph_bindings: usize,
    /// Every channel name seen on a morph binding, sorted.
    pub unique_channels: Vec<String>,
    /// Channels absent from the target mesh, sorted.
    pub missing_channels: Vec<String>,
    pub path_mismatches: usize,
    pub issues: Vec<BindingIssue>,
}

/// Scan every clip reachable from `graph`.
///
/// `target` is the target mesh channel set (`None` = unconstrained, no
/// missing-channel findings); an empty `target_path` disables path checks.
/// Clips referenced by the graph but absent from the store are skipped
/// with a warning.
pub fn scan<S: AssetStore>(
    store: &S,
    graph: &StateGraph,
    target: Option<&MeshChannels>,
    target_path: &str,
) -> ScanReport {
    let mut report = ScanReport {
        graph_name: graph.name.clone(),
        target_path: target_path.to_string(),
        ..ScanReport::default()
    };

    let target_set: Option<HashSet<&str>> =
        target.map(|t| t.names().iter().map(String::as_str).collect());

    let mut clips: Vec<(String, ClipId, Clip)> = Vec::new();
    for id in collect_clips(graph) {
        match store.load(id.as_str()).and_then(|a| a.into_clip()) {
            Some(clip) => clips.push((clip.name.clone(), id, clip)),
            None => warn!("clip referenced by graph '{}' not in store: {}", graph.name, id.as_str()),
        }
    }
    clips.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));

    let mut unique: HashSet<String> = HashSet::new();
    let mut missing: HashSet<String> = HashSet::new();

    for (clip_name, id, clip) in &clips {
        for binding in clip.bindings() {
            let Some(channel) = binding.key.morph_channel() else { continue };

            report.total_morph_bindings += 1;
            unique.insert(channel.to_string());

            let exists = target_set.as_ref().map_or(true, |t| t.contains(channel));
            let path_ok = target_path.is_empty() || binding.key.path == target_path;

            let kind = if !exists {
                IssueKind::MissingChannel
            } else if !path_ok {
                IssueKind::PathMismatch
            } else {
                continue;
            };

            if !exists {
                missing.insert(channel.to_string());
            }
            if !path_ok {
                report.path_mismatches += 1;
            }

            report.issues.push(BindingIssue {
                clip: id.clone(),
                clip_name: clip_name.clone(),
                path: binding.key.path.clone(),
                channel: channel.to_string(),
                kind,
            });
        }
    }

    report.clips = clips.into_iter().map(|(_, id, _)| id).collect();
    report.unique_channels = sorted(unique);
    report.missing_channels = sorted(missing);
    report
}

fn sorted(set: HashSet<String>) -> Vec<String> {
    let mut v: Vec<String> = set.into_iter().collect();
    v.sort();
    v
}
