// The similarity graph — a minimal owned adjacency structure.
//
// Nodes are (period, topic) pairs; edges carry the similarity score between
// two topics from two (possibly equal) periods. The graph is undirected:
// both adjacency directions are kept in sync, and a self-loop is stored
// once. Inserting an edge that already exists overwrites its weight.

pub mod components;
pub mod store;

pub use components::connected_components;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::corpus::TopicNode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicGraph {
    adjacency: BTreeMap<TopicNode, BTreeMap<TopicNode, f64>>,
}

impl TopicGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `node` exists, with or without edges. Isolated nodes matter:
    /// a topic nothing resembles still forms its own super-topic.
    pub fn add_node(&mut self, node: TopicNode) {
        self.adjacency.entry(node).or_default();
    }

    /// Insert or overwrite the undirected edge between `a` and `b`.
    pub fn add_edge(&mut self, a: TopicNode, b: TopicNode, weight: f64) {
        self.adjacency.entry(a).or_default().insert(b, weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
    }

    pub fn remove_edge(&mut self, a: &TopicNode, b: &TopicNode) {
        if let Some(neighbors) = self.adjacency.get_mut(a) {
            neighbors.remove(b);
        }
        if let Some(neighbors) = self.adjacency.get_mut(b) {
            neighbors.remove(a);
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges; a self-loop counts once.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &TopicNode> {
        self.adjacency.keys()
    }

    pub fn neighbors<'a>(
        &'a self,
        node: &TopicNode,
    ) -> impl Iterator<Item = (&'a TopicNode, f64)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|n| n.iter().map(|(node, &w)| (node, w)))
    }

    pub fn weight(&self, a: &TopicNode, b: &TopicNode) -> Option<f64> {
        self.adjacency.get(a).and_then(|n| n.get(b)).copied()
    }

    /// Every undirected edge exactly once, as (smaller node, larger node,
    /// weight).
    pub fn edges(&self) -> impl Iterator<Item = (&TopicNode, &TopicNode, f64)> {
        self.adjacency.iter().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .filter(move |(b, _)| a <= *b)
                .map(move |(b, &w)| (a, b, w))
        })
    }

    /// Remove every edge whose weight is zero or negative. Returns the
    /// number of edges removed.
    pub fn prune_zero_weight(&mut self) -> usize {
        self.prune_where(|w| w <= 0.0)
    }

    /// Remove every edge whose weight is strictly below `threshold`.
    /// Returns the number of edges removed.
    pub fn prune_below(&mut self, threshold: f64) -> usize {
        self.prune_where(|w| w < threshold)
    }

    fn prune_where(&mut self, drop: impl Fn(f64) -> bool) -> usize {
        let doomed: Vec<(TopicNode, TopicNode)> = self
            .edges()
            .filter(|(_, _, w)| drop(*w))
            .map(|(a, b, _)| (*a, *b))
            .collect();
        for (a, b) in &doomed {
            self.remove_edge(a, b);
        }
        doomed.len()
    }
}
