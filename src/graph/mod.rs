//! Graph input: the read-only view the builder consumes and an insertion-ordered
//! graph implementing it.

pub mod document;

use crate::error::{Error, Result};
use crate::types::Attributes;
use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;

pub use document::{EdgeEntry, GraphDocument, NodeEntry, NodeKey};

/// Read access the diagram builder needs from a graph.
///
/// Both iterators must be deterministic, and every edge endpoint is expected
/// to also be reported by `nodes()`.
pub trait GraphView {
    type Key: Hash + Eq + fmt::Display;

    fn name(&self) -> Option<&str>;

    fn nodes(&self) -> impl Iterator<Item = (&Self::Key, &Attributes)>;

    fn edges(&self) -> impl Iterator<Item = (&Self::Key, &Self::Key, &Attributes)>;
}

/// A directed or undirected graph that remembers insertion order.
///
/// Edges iterate by source node order, then by neighbor insertion order. An
/// undirected edge is reported once, from whichever endpoint comes first in
/// node order.
#[derive(Debug, Clone)]
pub struct Graph<K> {
    name: Option<String>,
    directed: bool,
    nodes: IndexMap<K, Attributes>,
    // Keys are inserted alongside `nodes`, so indices line up.
    adjacency: IndexMap<K, IndexMap<K, Attributes>>,
}

impl<K: Hash + Eq + Clone> Graph<K> {
    pub fn directed() -> Self {
        Self::with_direction(true)
    }

    pub fn undirected() -> Self {
        Self::with_direction(false)
    }

    fn with_direction(directed: bool) -> Self {
        Self {
            name: None,
            directed,
            nodes: IndexMap::new(),
            adjacency: IndexMap::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add a node, or merge `attributes` into an existing one.
    pub fn add_node(&mut self, key: K, attributes: Attributes) {
        if let Some(existing) = self.nodes.get_mut(&key) {
            existing.merge(attributes);
            return;
        }
        self.adjacency.insert(key.clone(), IndexMap::new());
        self.nodes.insert(key, attributes);
    }

    /// Add an edge, creating missing endpoints. Repeating an edge merges its
    /// attributes.
    pub fn add_edge(&mut self, source: K, target: K, attributes: Attributes) {
        self.add_node(source.clone(), Attributes::default());
        self.add_node(target.clone(), Attributes::default());

        if !self.directed && source != target {
            if let Some(nbrs) = self.adjacency.get_mut(&target) {
                nbrs.entry(source.clone()).or_default().merge(attributes.clone());
            }
        }
        if let Some(nbrs) = self.adjacency.get_mut(&source) {
            nbrs.entry(target).or_default().merge(attributes);
        }
    }

    pub fn contains_node(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn node_attributes(&self, key: &K) -> Option<&Attributes> {
        self.nodes.get(key)
    }

    /// Mutable access to a node's attributes, e.g. to color it after the fact
    pub fn node_attributes_mut(&mut self, key: &K) -> Option<&mut Attributes> {
        self.nodes.get_mut(key)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_iter().count()
    }

    fn edge_iter(&self) -> impl Iterator<Item = (&K, &K, &Attributes)> {
        let directed = self.directed;
        let adjacency = &self.adjacency;
        adjacency
            .iter()
            .enumerate()
            .flat_map(move |(index, (source, nbrs))| {
                nbrs.iter()
                    .filter(move |(target, _)| {
                        directed
                            || adjacency
                                .get_index_of(*target)
                                .map_or(true, |other| other >= index)
                    })
                    .map(move |(target, attributes)| (source, target, attributes))
            })
    }
}

impl<K: Hash + Eq + Clone + fmt::Display> GraphView for Graph<K> {
    type Key = K;

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn nodes(&self) -> impl Iterator<Item = (&K, &Attributes)> {
        self.nodes.iter()
    }

    fn edges(&self) -> impl Iterator<Item = (&K, &K, &Attributes)> {
        self.edge_iter()
    }
}

/// Combine graphs into one, relabelling nodes with consecutive integers in
/// input order. The union is named after the named inputs, joined with ` + `.
/// All graphs must share the same directedness.
pub fn disjoint_union<K: Hash + Eq + Clone>(graphs: &[Graph<K>]) -> Result<Graph<usize>> {
    let directed = graphs.first().map_or(false, |g| g.directed);
    if graphs.iter().any(|g| g.directed != directed) {
        return Err(Error::InvalidGraph(
            "cannot union directed and undirected graphs".to_string(),
        ));
    }

    let mut union = Graph::with_direction(directed);
    let names: Vec<&str> = graphs.iter().filter_map(|g| g.name.as_deref()).collect();
    if !names.is_empty() {
        union.set_name(names.join(" + "));
    }

    let mut offset = 0;
    for graph in graphs {
        for (index, attributes) in graph.nodes.values().enumerate() {
            union.add_node(offset + index, attributes.clone());
        }
        for (source, target, attributes) in graph.edge_iter() {
            let (Some(s), Some(t)) = (
                graph.nodes.get_index_of(source),
                graph.nodes.get_index_of(target),
            ) else {
                continue;
            };
            union.add_edge(offset + s, offset + t, attributes.clone());
        }
        offset += graph.nodes.len();
    }
    Ok(union)
}
