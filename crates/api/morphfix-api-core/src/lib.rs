//! morphfix-api-core: shared data model for the morphfix toolkit.
//!
//! Defines the clip/curve-binding model, the animation state-graph model,
//! and the morph-target channel naming helpers. Store and fixer crates
//! build on these types; nothing here touches storage or does traversal.

pub mod channels;
pub mod clip;
pub mod graph;

pub use channels::{blend_shape_property, parse_blend_shape_property, MeshChannels};
pub use clip::{BindingKey, Clip, Curve, CurveBinding, Keyframe, TargetKind};
pub use graph::{BlendTree, BlendTreeChild, ClipId, Layer, MotionRef, State, StateGraph, StateMachine, TreeId};
