//! JSON graph documents
//!
//! ```json
//! {
//!   "name": "Project Dependencies",
//!   "directed": true,
//!   "nodes": [{"id": "core"}, {"id": 2, "label": "cli", "color": "#CCFFCC"}],
//!   "edges": [{"source": 2, "target": "core", "label": "uses"}]
//! }
//! ```
//!
//! `links` is accepted as an alias of `edges`. Unrecognized keys on nodes and
//! edges are ignored.

use super::Graph;
use crate::error::{Error, Result};
use crate::types::Attributes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Node key as it appears in a document: an integer or a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeKey {
    Int(i64),
    Text(String),
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Int(n) => write!(f, "{}", n),
            NodeKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NodeKey {
    fn from(n: i64) -> Self {
        NodeKey::Int(n)
    }
}

impl From<&str> for NodeKey {
    fn from(s: &str) -> Self {
        NodeKey::Text(s.to_string())
    }
}

impl From<String> for NodeKey {
    fn from(s: String) -> Self {
        NodeKey::Text(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeEntry {
    pub id: NodeKey,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub source: NodeKey,
    pub target: NodeKey,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub nodes: Vec<NodeEntry>,
    #[serde(default, alias = "links")]
    pub edges: Vec<EdgeEntry>,
}

fn default_directed() -> bool {
    true
}

impl GraphDocument {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::InvalidGraph(e.to_string()))
    }

    /// Nodes are added in document order, then edges; an edge endpoint that is
    /// not listed under `nodes` is appended as a bare node.
    pub fn into_graph(self) -> Graph<NodeKey> {
        let mut graph = if self.directed {
            Graph::directed()
        } else {
            Graph::undirected()
        };
        if let Some(name) = self.name {
            graph.set_name(name);
        }
        for node in self.nodes {
            graph.add_node(node.id, node.attributes);
        }
        for edge in self.edges {
            graph.add_edge(edge.source, edge.target, edge.attributes);
        }
        graph
    }
}

impl Graph<NodeKey> {
    /// Load a graph from a JSON document
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(GraphDocument::from_json(text)?.into_graph())
    }
}
