//! morphfix-store-core: the asset-storage collaborator.
//!
//! The fixer core never touches disk or a host database directly; it goes
//! through the [`AssetStore`] trait. Artifacts are addressed by
//! slash-separated paths and carry a stable, store-minted identifier that
//! survives overwrites. [`MemoryStore`] is the reference implementation
//! used by tests and embedding hosts that manage persistence themselves.

pub mod artifact;
pub mod memory;
pub mod path;
pub mod store;

pub use artifact::Artifact;
pub use memory::MemoryStore;
pub use store::{AssetStore, StoreError};
