//! Shared fixture builders for morphfix integration tests.
//!
//! Keeps the shape of test graphs in one place: a canonical face channel
//! set, morph-curve clip builders, and a seeded in-memory store whose graph
//! exercises nested sub-machines and a blend tree shared by two states.

use morphfix_api_core::{
    BindingKey, BlendTree, BlendTreeChild, Clip, ClipId, Curve, Layer, MeshChannels, MotionRef,
    State, StateGraph, StateMachine,
};
use morphfix_store_core::{Artifact, AssetStore, MemoryStore};

/// Folder the seeded source assets live under.
pub const LIBRARY: &str = "library";
/// Store path of the seeded source graph.
pub const SOURCE_GRAPH: &str = "library/main.graph";

/// Channel set of the canonical target face mesh.
pub fn face_channels() -> MeshChannels {
    MeshChannels::from_names([
        "EyeBlink_New",
        "Blink_L",
        "Blink_R",
        "Smile",
        "JawOpen",
    ])
}

/// A morph-channel curve binding with a small distinctive key sequence.
pub fn morph_binding(path: &str, channel: &str, base: f32) -> (BindingKey, Curve) {
    (
        BindingKey::blend_shape(path, channel),
        Curve::from_samples([(0.0, base), (0.5, base + 50.0), (1.0, base)]),
    )
}

/// Build a clip from `(path, channel)` pairs, one curve each.
pub fn morph_clip(name: &str, bindings: &[(&str, &str)]) -> Clip {
    let mut clip = Clip::new(name);
    for (i, (path, channel)) in bindings.iter().enumerate() {
        let (key, curve) = morph_binding(path, channel, i as f32);
        clip.set_curve(key, curve);
    }
    clip
}

/// Ids of the clips seeded by [`seeded_store`].
pub fn seeded_clip_ids() -> Vec<ClipId> {
    ["library/blink.clip", "library/smile.clip", "library/jaw.clip"]
        .into_iter()
        .map(ClipId::from)
        .collect()
}

/// A store holding three clips and a source graph that reaches all of them:
///
/// - layer "base": state `blink` -> blink clip, state `mix` -> shared tree;
/// - layer "face": state `mix2` -> the *same* shared tree, plus a nested
///   sub-machine whose state references the jaw clip;
/// - the shared tree blends the smile clip against a nested tree that
///   references the blink clip again (aliased reference).
pub fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.ensure_folder(LIBRARY);

    store
        .save(
            "library/blink.clip",
            Artifact::Clip(morph_clip("blink", &[("Root/Face", "EyeBlink")])),
        )
        .unwrap();
    store
        .save(
            "library/smile.clip",
            Artifact::Clip(morph_clip("smile", &[("Root/Face", "Smile")])),
        )
        .unwrap();
    store
        .save(
            "library/jaw.clip",
            Artifact::Clip(morph_clip("jaw", &[("Root/OldFace", "JawOpen")])),
        )
        .unwrap();

    store.save(SOURCE_GRAPH, Artifact::Graph(seeded_graph())).unwrap();
    store
}

/// The graph described on [`seeded_store`], as a bare value.
pub fn seeded_graph() -> StateGraph {
    let mut graph = StateGraph::new("main");

    let inner = graph.add_tree(BlendTree {
        name: "inner".into(),
        children: vec![BlendTreeChild::new(
            MotionRef::Clip("library/blink.clip".into()),
            1.0,
        )],
    });
    let shared = graph.add_tree(BlendTree {
        name: "shared".into(),
        children: vec![
            BlendTreeChild::new(MotionRef::Clip("library/smile.clip".into()), 0.0),
            BlendTreeChild::new(MotionRef::Tree(inner), 1.0),
        ],
    });

    graph.layers.push(Layer::new(
        "base",
        StateMachine {
            states: vec![
                State::new("blink", MotionRef::Clip("library/blink.clip".into())),
                State::new("mix", MotionRef::Tree(shared)),
                State::new("idle", MotionRef::Empty),
            ],
            children: vec![],
        },
    ));

    graph.layers.push(Layer::new(
        "face",
        StateMachine {
            states: vec![State::new("mix2", MotionRef::Tree(shared))],
            children: vec![StateMachine {
                states: vec![State::new("jaw", MotionRef::Clip("library/jaw.clip".into()))],
                children: vec![],
            }],
        },
    ));

    // A layer without a machine is legal data and must be skipped silently.
    graph.layers.push(Layer {
        name: "empty".into(),
        machine: None,
    });

    graph
}
