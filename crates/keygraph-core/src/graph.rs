use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

/// A weighted directed graph over string node labels.
///
/// Uses petgraph's directed graph internally; node indices follow
/// first-encounter order, which is what the matrix-based solvers use
/// as their row/column order.
///
/// Each ordered pair `(from, to)` holds exactly one weight: adding the
/// same pair again overwrites the previous weight.
///
/// # Example
///
/// ```rust
/// use keygraph_core::WeightedGraph;
///
/// let mut graph = WeightedGraph::new();
/// graph.add_edge("data", "model", 2.0);
/// graph.add_edge("model", "error", 1.0);
/// graph.add_edge("data", "model", 3.0); // overwrites
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.weight("data", "model"), Some(3.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    /// The underlying directed graph.
    graph: DiGraph<String, f64>,

    /// Map from node label to node index.
    label_index: HashMap<String, NodeIndex>,
}

impl WeightedGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with estimated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            label_index: HashMap::with_capacity(nodes),
        }
    }

    /// Add a node if it is not present yet and return its index.
    pub fn add_node(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.label_index.get(label) {
            return idx;
        }
        let idx = self.graph.add_node(label.to_owned());
        self.label_index.insert(label.to_owned(), idx);
        idx
    }

    /// Add or overwrite the edge `from -> to`.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) {
        let from_idx = self.add_node(from);
        let to_idx = self.add_node(to);
        self.graph.update_edge(from_idx, to_idx, weight);
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct ordered edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Node labels in first-encounter order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// True if `label` is a node of this graph.
    pub fn contains_node(&self, label: &str) -> bool {
        self.label_index.contains_key(label)
    }

    /// Node index for a label.
    pub fn node_index(&self, label: &str) -> Option<NodeIndex> {
        self.label_index.get(label).copied()
    }

    /// Label stored at a node index.
    pub fn label(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        let from_idx = self.node_index(from)?;
        let to_idx = self.node_index(to)?;
        self.graph
            .find_edge(from_idx, to_idx)
            .map(|edge| self.graph[edge])
    }

    /// Iterate over `(from, to, weight)` in edge insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].as_str(),
                self.graph[edge.target()].as_str(),
                *edge.weight(),
            )
        })
    }

    /// Iterate over `(from_index, to_index, weight)` using dense indices.
    pub fn indexed_edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source().index(), edge.target().index(), *edge.weight()))
    }

    /// Sum of outgoing weights of a node. O(d).
    pub fn out_weight(&self, label: &str) -> f64 {
        self.node_index(label)
            .map_or(0.0, |idx| self.out_weight_at(idx))
    }

    /// Sum of incoming weights of a node. O(d).
    pub fn in_weight(&self, label: &str) -> f64 {
        self.node_index(label).map_or(0.0, |idx| {
            self.graph
                .edges_directed(idx, Direction::Incoming)
                .map(|edge| *edge.weight())
                .sum()
        })
    }

    fn out_weight_at(&self, idx: NodeIndex) -> f64 {
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge| *edge.weight())
            .sum()
    }

    /// Out-weights for every node, indexed like [`WeightedGraph::nodes`].
    pub fn out_weights(&self) -> Vec<f64> {
        self.graph
            .node_indices()
            .map(|idx| self.out_weight_at(idx))
            .collect()
    }

    /// Row-normalized copy of the graph.
    ///
    /// Every node with positive out-weight gets its outgoing weights scaled
    /// to sum to 1. Dangling nodes keep an all-zero row. Node and edge order
    /// are preserved.
    pub fn to_stochastic(&self) -> Self {
        let out_weights = self.out_weights();
        let mut graph = self.graph.clone();
        for (weight, original) in graph.edge_weights_mut().zip(self.graph.edge_references()) {
            let total = out_weights[original.source().index()];
            if total > 0.0 {
                *weight /= total;
            }
        }
        Self {
            graph,
            label_index: self.label_index.clone(),
        }
    }

    /// Get the underlying petgraph for advanced operations.
    pub fn as_petgraph(&self) -> &DiGraph<String, f64> {
        &self.graph
    }
}

/// Statistics about a weighted graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of edges.
    pub edge_count: usize,
    /// Sum of all edge weights.
    pub total_weight: f64,
    /// Nodes without outgoing weight.
    pub dangling_count: usize,
}

impl WeightedGraph {
    /// Compute statistics about the graph.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            total_weight: self.graph.edge_weights().sum(),
            dangling_count: self.out_weights().iter().filter(|&&w| w <= 0.0).count(),
        }
    }
}
