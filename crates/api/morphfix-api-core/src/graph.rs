//! Animation state-graph model.
//!
//! A `StateGraph` is a forest of named layers, each owning at most one state
//! machine. Motion references are a tagged union over clip / blend-tree /
//! empty. Blend trees live in an arena on the graph and are referenced by
//! `TreeId`, so the same tree instance can be shared from any number of
//! states or child slots; traversals key their visited sets on `TreeId`,
//! never on structure.

use serde::{Deserialize, Serialize};

/// Identity of a clip artifact: its path in the asset store.
///
/// Identity is storage-derived, never structural; two clips with identical
/// curves are still distinct when stored at different paths.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClipId(pub String);

impl ClipId {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClipId {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

/// Arena index of a blend tree inside its `StateGraph`.
///
/// This is an identity, not a value: two structurally identical trees have
/// distinct ids and are distinct mutation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeId(pub u32);

/// Motion slot of a state or blend-tree child.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionRef {
    #[default]
    Empty,
    Clip(ClipId),
    Tree(TreeId),
}

/// One child slot of a blend tree. Slots are independent: a tree may
/// reference the same motion from several slots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlendTreeChild {
    pub motion: MotionRef,
    pub threshold: f32,
}

impl BlendTreeChild {
    pub fn new(motion: MotionRef, threshold: f32) -> Self {
        Self { motion, threshold }
    }
}

/// A motion node blending an ordered sequence of child motions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlendTree {
    pub name: String,
    pub children: Vec<BlendTreeChild>,
}

/// An animation state holding at most one motion reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    pub motion: MotionRef,
}

impl State {
    pub fn new(name: impl Into<String>, motion: MotionRef) -> Self {
        Self {
            name: name.into(),
            motion,
        }
    }
}

/// A state machine: states plus tree-shaped nested sub-machines.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateMachine {
    pub states: Vec<State>,
    pub children: Vec<StateMachine>,
}

/// A named layer owning at most one root state machine. Absent machines are
/// legal data and are skipped silently by traversals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub machine: Option<StateMachine>,
}

impl Layer {
    pub fn new(name: impl Into<String>, machine: StateMachine) -> Self {
        Self {
            name: name.into(),
            machine: Some(machine),
        }
    }
}

/// A rooted forest of layers plus the blend-tree arena they reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateGraph {
    pub name: String,
    pub layers: Vec<Layer>,
    /// Blend-tree arena; `TreeId` indexes into this list.
    pub trees: Vec<BlendTree>,
}

impl StateGraph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: Vec::new(),
            trees: Vec::new(),
        }
    }

    /// Add a tree to the arena, returning its identity.
    pub fn add_tree(&mut self, tree: BlendTree) -> TreeId {
        let id = TreeId(self.trees.len() as u32);
        self.trees.push(tree);
        id
    }

    /// Look up a tree by identity. Dangling ids resolve to `None`.
    pub fn tree(&self, id: TreeId) -> Option<&BlendTree> {
        self.trees.get(id.0 as usize)
    }

    pub fn tree_mut(&mut self, id: TreeId) -> Option<&mut BlendTree> {
        self.trees.get_mut(id.0 as usize)
    }
}
