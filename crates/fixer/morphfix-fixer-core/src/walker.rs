//! State-graph traversal.
//!
//! Both operations share one traversal shape: every layer, every nested
//! sub-machine, every state's motion slot. Blend trees can be shared by
//! reference from any number of slots, so each call carries a visited set
//! keyed on `TreeId`; a tree is expanded (or mutated) at most once per
//! call, which also guarantees termination on cyclic tree references.
//!
//! Gaps in the data (absent layer machines, empty motions, dangling tree
//! ids) are legitimate and skipped silently.

use hashbrown::{HashMap, HashSet};

use morphfix_api_core::{ClipId, MotionRef, StateGraph, StateMachine, TreeId};

/// Clip-to-clip substitution table applied to a graph in one pass.
pub type ClipSubstitutions = HashMap<ClipId, ClipId>;

/// Collect the distinct clip identities reachable from `graph`.
pub fn collect_clips(graph: &StateGraph) -> HashSet<ClipId> {
    let mut clips = HashSet::new();
    let mut visited: HashSet<TreeId> = HashSet::new();
    for layer in &graph.layers {
        if let Some(machine) = &layer.machine {
            collect_from_machine(graph, machine, &mut clips, &mut visited);
        }
    }
    clips
}

fn collect_from_machine(
    graph: &StateGraph,
    machine: &StateMachine,
    clips: &mut HashSet<ClipId>,
    visited: &mut HashSet<TreeId>,
) {
    for state in &machine.states {
        collect_from_motion(graph, &state.motion, clips, visited);
    }
    for child in &machine.children {
        collect_from_machine(graph, child, clips, visited);
    }
}

fn collect_from_motion(
    graph: &StateGraph,
    motion: &MotionRef,
    clips: &mut HashSet<ClipId>,
    visited: &mut HashSet<TreeId>,
) {
    match motion {
        MotionRef::Empty => {}
        MotionRef::Clip(id) => {
            clips.insert(id.clone());
        }
        MotionRef::Tree(id) => {
            if !visited.insert(*id) {
                return;
            }
            let Some(tree) = graph.tree(*id) else { return };
            for child in &tree.children {
                collect_from_motion(graph, &child.motion, clips, visited);
            }
        }
    }
}

/// Replace every motion reference whose clip id is a key of `subs`.
///
/// States are rewired first; blend trees reached along the way are queued
/// and then each mutated in place exactly once, every child slot
/// independently. Returns the total number of individual replacements
/// (slots rewritten, not distinct clips).
pub fn rewrite_clips(graph: &mut StateGraph, subs: &ClipSubstitutions) -> usize {
    if subs.is_empty() {
        return 0;
    }

    let mut rewired = 0;
    let mut visited: HashSet<TreeId> = HashSet::new();
    let mut pending: Vec<TreeId> = Vec::new();

    let StateGraph { layers, trees, .. } = graph;
    for layer in layers {
        if let Some(machine) = layer.machine.as_mut() {
            rewire_machine(machine, subs, &mut visited, &mut pending, &mut rewired);
        }
    }

    while let Some(id) = pending.pop() {
        let Some(tree) = trees.get_mut(id.0 as usize) else { continue };
        for child in &mut tree.children {
            rewire_slot(&mut child.motion, subs, &mut visited, &mut pending, &mut rewired);
        }
    }

    rewired
}

fn rewire_machine(
    machine: &mut StateMachine,
    subs: &ClipSubstitutions,
    visited: &mut HashSet<TreeId>,
    pending: &mut Vec<TreeId>,
    rewired: &mut usize,
) {
    for state in &mut machine.states {
        rewire_slot(&mut state.motion, subs, visited, pending, rewired);
    }
    for child in &mut machine.children {
        rewire_machine(child, subs, visited, pending, rewired);
    }
}

fn rewire_slot(
    motion: &mut MotionRef,
    subs: &ClipSubstitutions,
    visited: &mut HashSet<TreeId>,
    pending: &mut Vec<TreeId>,
    rewired: &mut usize,
) {
    match motion {
        MotionRef::Empty => {}
        MotionRef::Clip(id) => {
            if let Some(replacement) = subs.get(id) {
                *id = replacement.clone();
                *rewired += 1;
            }
        }
        MotionRef::Tree(id) => {
            if visited.insert(*id) {
                pending.push(*id);
            }
        }
    }
}
