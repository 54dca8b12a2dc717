//! Rename-map suggestions for the configuration surface.
//!
//! Pure string heuristics over channel names; nothing here affects the
//! correctness of the rewrite pipeline. Ambiguity is never decided
//! silently: a name with several plausible targets gets no suggestion, and
//! `keyword_candidates` hands the candidate list back to the caller.

use hashbrown::HashMap;

use morphfix_api_core::MeshChannels;

use crate::resolve::RenameTable;

/// Normalized comparison key: lowercase alphanumerics only.
pub fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Suggest 1-to-1 rename entries for `missing` channel names.
///
/// Tried in order per name: exact match ignoring case, unique
/// normalized-key match, unique substring relation between normalized
/// keys. Names that stay ambiguous or unmatched produce no entry.
pub fn suggest_renames(missing: &[String], channels: &MeshChannels) -> RenameTable {
    let mut exact: HashMap<String, &str> = HashMap::new();
    let mut by_key: HashMap<String, Vec<&str>> = HashMap::new();
    for name in channels.names() {
        exact.insert(name.to_lowercase(), name);
        let key = normalize_key(name);
        if !key.is_empty() {
            by_key.entry(key).or_default().push(name);
        }
    }

    let mut table = RenameTable::default();
    for old in missing {
        if old.is_empty() {
            continue;
        }

        if let Some(hit) = exact.get(&old.to_lowercase()) {
            table.insert(old.clone(), vec![hit.to_string()]);
            continue;
        }

        let old_key = normalize_key(old);
        if old_key.is_empty() {
            continue;
        }

        if let Some(hits) = by_key.get(&old_key) {
            if hits.len() == 1 {
                table.insert(old.clone(), vec![hits[0].to_string()]);
                continue;
            }
        }

        let mut related = channels.names().iter().filter(|candidate| {
            let key = normalize_key(candidate);
            !key.is_empty() && (key.contains(&old_key) || old_key.contains(&key))
        });
        if let (Some(only), None) = (related.next(), related.next()) {
            table.insert(old.clone(), vec![only.clone()]);
        }
    }
    table
}

/// Candidate targets for `name` among channels matching `keyword`
/// (prefix or substring relation on normalized keys). The caller decides
/// when more than one candidate remains.
pub fn keyword_candidates(name: &str, channels: &MeshChannels, keyword: &str) -> Vec<String> {
    let key = normalize_key(keyword);
    if key.is_empty() {
        return Vec::new();
    }
    let old_key = normalize_key(name);
    if old_key.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<String> = Vec::new();
    for candidate in channels.names() {
        let cand_key = normalize_key(candidate);
        if cand_key.is_empty() || !cand_key.contains(&key) {
            continue;
        }
        if cand_key.contains(&old_key) || old_key.contains(&cand_key) {
            if !candidates.contains(candidate) {
                candidates.push(candidate.clone());
            }
        }
    }
    candidates
}
