//! Per-binding resolution policy.
//!
//! For one morph-target binding the policy decides between leaving the
//! curve untouched, reporting it unresolved, or moving it to a new binding
//! key set (possibly fanning one source channel out to several destination
//! channels, each receiving a verbatim copy of the keyframes).

use hashbrown::{HashMap, HashSet};
use log::debug;
use serde::{Deserialize, Serialize};

use morphfix_api_core::{blend_shape_property, BindingKey, Clip, MeshChannels, TargetKind};

/// Operator-entered rename table: source channel name to ordered
/// destination names. Destinations may be empty or name channels missing
/// from the target mesh; the policy filters them.
pub type RenameTable = HashMap<String, Vec<String>>;

/// Why a binding could not be resolved onto the target mesh. Two distinct
/// reasons, one aggregate count in reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnresolvedReason {
    /// No rename entry and the channel does not exist on the target.
    NoMapping,
    /// A rename entry exists but none of its destinations exist on the
    /// target.
    MappedToMissing,
}

/// Outcome for one binding.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// Already correct; the curve stays exactly as it is.
    Keep,
    /// Reported and left untouched (never deleted, never zeroed).
    Unresolved(UnresolvedReason),
    /// Move the curve to `(path, "blendShape." + name)` for every name in
    /// `channels`, removing the original key.
    Rewrite { path: String, channels: Vec<String> },
}

/// Decide the fate of one morph binding.
///
/// `target` is the channel set of the target mesh, or `None` when no mesh
/// is supplied (unconstrained: every name exists). Rename entries take
/// precedence over the identity fallback even when they clean to an empty
/// list; that case reports `MappedToMissing`.
pub fn resolve_channel(
    old_name: &str,
    old_path: &str,
    target: Option<&HashSet<&str>>,
    renames: &RenameTable,
    force_path: bool,
    forced_path: &str,
) -> Resolution {
    let shape_exists = target.map_or(true, |t| t.contains(old_name));
    let new_path = if force_path && !forced_path.is_empty() {
        forced_path
    } else {
        old_path
    };

    let candidates: Vec<&str> = match renames.get(old_name) {
        Some(entry) => {
            let mut seen: HashSet<&str> = HashSet::new();
            entry
                .iter()
                .map(String::as_str)
                .filter(|n| !n.is_empty() && seen.insert(*n))
                .collect()
        }
        None => {
            if !shape_exists {
                return Resolution::Unresolved(UnresolvedReason::NoMapping);
            }
            vec![old_name]
        }
    };

    let channels: Vec<String> = candidates
        .into_iter()
        .filter(|n| target.map_or(true, |t| t.contains(n)))
        .map(str::to_string)
        .collect();

    if channels.is_empty() {
        return Resolution::Unresolved(UnresolvedReason::MappedToMissing);
    }

    if channels.len() == 1 && channels[0] == old_name && new_path == old_path {
        return Resolution::Keep;
    }

    Resolution::Rewrite {
        path: new_path.to_string(),
        channels,
    }
}

/// Counters accumulated while rewriting one clip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixStats {
    /// Installed destination bindings (fan-out counts each copy).
    pub rewritten: usize,
    /// Bindings left untouched for either unresolved reason.
    pub unresolved: usize,
}

/// Apply the resolution policy to every morph-target binding of `clip`.
///
/// The binding key set is snapshotted up front, so one binding's rewrite is
/// not re-classified by a later iteration. If a fan-out target collides
/// with a not-yet-processed binding's key, the later write wins; that is
/// accepted behavior, not a bug.
pub fn rewrite_morph_bindings(
    clip: &mut Clip,
    target: Option<&MeshChannels>,
    renames: &RenameTable,
    force_path: bool,
    forced_path: &str,
    verbose: bool,
) -> FixStats {
    let mut stats = FixStats::default();

    let target_set: Option<HashSet<&str>> =
        target.map(|t| t.names().iter().map(String::as_str).collect());

    let morph_keys: Vec<(BindingKey, String)> = clip
        .bindings()
        .iter()
        .filter_map(|b| {
            b.key
                .morph_channel()
                .map(|name| (b.key.clone(), name.to_string()))
        })
        .collect();

    for (key, old_name) in morph_keys {
        let Some(curve) = clip.curve(&key).cloned() else { continue };

        match resolve_channel(
            &old_name,
            &key.path,
            target_set.as_ref(),
            renames,
            force_path,
            forced_path,
        ) {
            Resolution::Keep => {}
            Resolution::Unresolved(reason) => {
                stats.unresolved += 1;
                if verbose {
                    match reason {
                        UnresolvedReason::NoMapping => debug!(
                            "unresolved channel in clip='{}': '{}' (path='{}')",
                            clip.name, old_name, key.path
                        ),
                        UnresolvedReason::MappedToMissing => debug!(
                            "mapped-to-missing channel in clip='{}': '{}'",
                            clip.name, old_name
                        ),
                    }
                }
            }
            Resolution::Rewrite { path, channels } => {
                clip.remove_curve(&key);
                for channel in channels {
                    let new_key = BindingKey::new(
                        path.clone(),
                        TargetKind::SkinnedMesh,
                        blend_shape_property(&channel),
                    );
                    clip.set_curve(new_key, curve.clone());
                    stats.rewritten += 1;
                }
            }
        }
    }

    stats
}
