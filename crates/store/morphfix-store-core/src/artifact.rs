//! Persisted artifact kinds.

use serde::{Deserialize, Serialize};

use morphfix_api_core::{Clip, StateGraph};

/// A value stored at one asset path. The store copies artifacts whole;
/// payloads are never reinterpreted on the way through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Artifact {
    Clip(Clip),
    Graph(StateGraph),
}

impl Artifact {
    pub fn kind(&self) -> &'static str {
        match self {
            Artifact::Clip(_) => "clip",
            Artifact::Graph(_) => "graph",
        }
    }

    pub fn as_clip(&self) -> Option<&Clip> {
        match self {
            Artifact::Clip(clip) => Some(clip),
            _ => None,
        }
    }

    pub fn into_clip(self) -> Option<Clip> {
        match self {
            Artifact::Clip(clip) => Some(clip),
            _ => None,
        }
    }

    pub fn as_graph(&self) -> Option<&StateGraph> {
        match self {
            Artifact::Graph(graph) => Some(graph),
            _ => None,
        }
    }

    pub fn into_graph(self) -> Option<StateGraph> {
        match self {
            Artifact::Graph(graph) => Some(graph),
            _ => None,
        }
    }
}

impl From<Clip> for Artifact {
    fn from(clip: Clip) -> Self {
        Artifact::Clip(clip)
    }
}

impl From<StateGraph> for Artifact {
    fn from(graph: StateGraph) -> Self {
        Artifact::Graph(graph)
    }
}
