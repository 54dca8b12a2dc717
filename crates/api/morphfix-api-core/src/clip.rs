//! Animation clips and curve bindings.
//!
//! A clip owns a flat collection of curve bindings. Each binding is keyed by
//! `(object path, target kind, property)`; the keyframe payload is opaque to
//! the fixer and must survive clone/copy without reinterpretation.

use serde::{Deserialize, Serialize};

use crate::channels::parse_blend_shape_property;

/// Kind of object a curve binding drives.
///
/// Morph-target logic only applies to `SkinnedMesh` bindings; all other
/// kinds pass through the fixer untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    SkinnedMesh,
    Transform,
    Other,
}

/// Key of one curve inside a clip.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindingKey {
    /// Object path relative to the animated root, e.g. `"Root/Face"`.
    pub path: String,
    pub kind: TargetKind,
    /// Property identifier, e.g. `"blendShape.EyeBlink"`.
    pub property: String,
}

impl BindingKey {
    pub fn new(path: impl Into<String>, kind: TargetKind, property: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            property: property.into(),
        }
    }

    /// Shorthand for a morph-channel binding on a skinned mesh.
    pub fn blend_shape(path: impl Into<String>, channel: &str) -> Self {
        Self::new(
            path,
            TargetKind::SkinnedMesh,
            crate::channels::blend_shape_property(channel),
        )
    }

    /// The morph channel this key addresses, if any.
    ///
    /// `None` for non-skinned-mesh kinds and for properties that do not
    /// parse as a morph-channel identifier.
    pub fn morph_channel(&self) -> Option<&str> {
        if self.kind != TargetKind::SkinnedMesh {
            return None;
        }
        parse_blend_shape_property(&self.property)
    }
}

/// One keyframe of a curve. The fixer never samples or edits keys.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub stamp: f32,
    pub value: f32,
}

/// Ordered keyframe payload, treated as opaque by all rewriting logic.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub keys: Vec<Keyframe>,
}

impl Curve {
    pub fn new(keys: Vec<Keyframe>) -> Self {
        Self { keys }
    }

    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = (f32, f32)>,
    {
        Self {
            keys: samples
                .into_iter()
                .map(|(stamp, value)| Keyframe { stamp, value })
                .collect(),
        }
    }
}

/// A keyed curve inside a clip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveBinding {
    pub key: BindingKey,
    pub curve: Curve,
}

/// An animation clip: display name plus its curve bindings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub name: String,
    bindings: Vec<CurveBinding>,
}

impl Clip {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: Vec::new(),
        }
    }

    pub fn with_bindings(name: impl Into<String>, bindings: Vec<CurveBinding>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }

    pub fn bindings(&self) -> &[CurveBinding] {
        &self.bindings
    }

    pub fn curve(&self, key: &BindingKey) -> Option<&Curve> {
        self.bindings.iter().find(|b| &b.key == key).map(|b| &b.curve)
    }

    /// Insert or replace the curve under `key` (last write wins).
    pub fn set_curve(&mut self, key: BindingKey, curve: Curve) {
        if let Some(existing) = self.bindings.iter_mut().find(|b| b.key == key) {
            existing.curve = curve;
        } else {
            self.bindings.push(CurveBinding { key, curve });
        }
    }

    /// Remove the curve under `key`, returning it if present.
    pub fn remove_curve(&mut self, key: &BindingKey) -> Option<Curve> {
        let idx = self.bindings.iter().position(|b| &b.key == key)?;
        Some(self.bindings.remove(idx).curve)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
