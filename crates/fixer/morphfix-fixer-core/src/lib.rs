//! morphfix-fixer-core: scan and repair morph-target curve bindings.
//!
//! Given an animation state graph, a target mesh channel set and an
//! operator-supplied rename table, this crate discovers every motion clip
//! reachable from the graph, classifies each morph-target curve binding
//! (exists / missing / path-mismatched), resolves replacements per binding
//! (1-to-0, 1-to-1 or 1-to-many) and produces a repaired artifact set:
//! cloned clips plus a retargeted copy of the graph.
//!
//! The core is stateless between invocations; callers pass explicit
//! settings in and receive reports back. Persistence goes through the
//! [`morphfix_store_core::AssetStore`] trait.

pub mod config;
pub mod error;
pub mod generate;
pub mod matcher;
pub mod resolve;
pub mod scan;
pub mod walker;

pub use config::GenerateSettings;
pub use error::FixError;
pub use generate::{clean_folder, generate, GenerateReport};
pub use matcher::{keyword_candidates, normalize_key, suggest_renames};
pub use resolve::{
    resolve_channel, rewrite_morph_bindings, FixStats, RenameTable, Resolution, UnresolvedReason,
};
pub use scan::{scan, BindingIssue, IssueKind, ScanReport};
pub use walker::{collect_clips, rewrite_clips, ClipSubstitutions};
