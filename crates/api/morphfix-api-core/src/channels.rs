//! Morph-target channel naming.
//!
//! Curves drive morph channels through properties of the exact form
//! `"blendShape." + name`. Parsing is strict: anything without that prefix,
//! or with an empty suffix, is not a morph-channel property.

use serde::{Deserialize, Serialize};

/// Property prefix addressing a morph-target channel on a skinned mesh.
pub const BLEND_SHAPE_PREFIX: &str = "blendShape.";

/// Extract the channel name from a curve property identifier.
///
/// Returns `None` when the property does not carry the `blendShape.` prefix
/// or the suffix is empty.
pub fn parse_blend_shape_property(property: &str) -> Option<&str> {
    let name = property.strip_prefix(BLEND_SHAPE_PREFIX)?;
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Compose the property identifier for a channel name.
pub fn blend_shape_property(name: &str) -> String {
    format!("{BLEND_SHAPE_PREFIX}{name}")
}

/// The ordered list of morph-target channel names defined by a target mesh.
///
/// Order follows the mesh's channel indices; only the names matter to the
/// fixer. An absent mesh is represented as `Option::<&MeshChannels>::None`
/// by callers, which the resolution policy treats as unconstrained.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshChannels {
    names: Vec<String>,
}

impl MeshChannels {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Channel names in their natural index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
