//! Fatal errors of the fixer core.
//!
//! Only structural preconditions and unrecoverable store I/O raise; every
//! per-binding problem is aggregated into the run reports instead.

use thiserror::Error;

use morphfix_store_core::StoreError;

#[derive(Debug, Error)]
pub enum FixError {
    #[error("source graph not found at '{0}'")]
    MissingSourceGraph(String),
    #[error("artifact at '{0}' is not a state graph")]
    NotAGraph(String),
    #[error("clip referenced by graph missing from store: '{0}'")]
    MissingClip(String),
    #[error("artifact at '{0}' is not a clip")]
    NotAClip(String),
    #[error("fixed graph unreadable after copy: '{0}'")]
    GraphCopyUnreadable(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
