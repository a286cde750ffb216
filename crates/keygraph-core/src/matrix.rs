//! Dense adjacency matrices over a [`WeightedGraph`].
//!
//! Row/column `i` is the `i`-th node in first-encounter order, so two graphs
//! loaded from the same edge list always produce the same matrix.

use crate::{CentralityResult, WeightedGraph};
use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// Bijective mapping between node labels and matrix indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeIndexMap {
    labels: Vec<String>,
    positions: HashMap<String, usize>,
}

impl NodeIndexMap {
    /// Build the mapping for a graph's node order.
    pub fn from_graph(graph: &WeightedGraph) -> Self {
        let labels: Vec<String> = graph.nodes().map(str::to_owned).collect();
        let positions = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();
        Self { labels, positions }
    }

    /// Matrix index of a label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// Label at a matrix index.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when no node is indexed.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Attach labels to a score vector.
    ///
    /// `values[i]` becomes the score of `self.label(i)`.
    pub fn scores(&self, values: &Array1<f64>) -> CentralityResult {
        self.labels
            .iter()
            .cloned()
            .zip(values.iter().copied())
            .collect()
    }
}

/// Dense adjacency matrix with its node index.
///
/// `A[i][j]` is the weight of the edge from node `i` to node `j`, or 0.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    matrix: Array2<f64>,
    index: NodeIndexMap,
}

impl AdjacencyMatrix {
    /// Build the matrix for a graph.
    ///
    /// # Complexity
    ///
    /// - Time: O(N² + E)
    /// - Space: O(N²)
    pub fn from_graph(graph: &WeightedGraph) -> Self {
        let index = NodeIndexMap::from_graph(graph);
        let n = index.len();
        let mut matrix = Array2::zeros((n, n));
        for (from, to, weight) in graph.indexed_edges() {
            matrix[[from, to]] = weight;
        }
        Self { matrix, index }
    }

    /// The dense matrix.
    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    /// The label/index mapping.
    pub fn index(&self) -> &NodeIndexMap {
        &self.index
    }

    /// Matrix dimension (node count).
    pub fn dim(&self) -> usize {
        self.index.len()
    }

    /// Split into matrix and index.
    pub fn into_parts(self) -> (Array2<f64>, NodeIndexMap) {
        (self.matrix, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_layout() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("a", "b", 2.0);
        graph.add_edge("a", "c", 1.0);
        graph.add_edge("b", "c", 1.0);

        let adjacency = AdjacencyMatrix::from_graph(&graph);
        let a = adjacency.matrix();

        assert_eq!(adjacency.dim(), 3);
        assert_eq!(a[[0, 1]], 2.0);
        assert_eq!(a[[0, 2]], 1.0);
        assert_eq!(a[[1, 2]], 1.0);
        assert_eq!(a[[2, 0]], 0.0);
        assert_eq!(a.sum(), 4.0);
    }

    #[test]
    fn test_index_is_bijective() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("x", "y", 1.0);
        graph.add_edge("z", "x", 1.0);

        let index = NodeIndexMap::from_graph(&graph);
        for (i, label) in index.labels().iter().enumerate() {
            assert_eq!(index.index_of(label), Some(i));
            assert_eq!(index.label(i), Some(label.as_str()));
        }
        assert_eq!(index.index_of("missing"), None);
    }

    #[test]
    fn test_scores_attach_labels() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("a", "b", 1.0);

        let index = NodeIndexMap::from_graph(&graph);
        let scores = index.scores(&Array1::from(vec![0.25, 0.75]));
        assert_eq!(scores["a"], 0.25);
        assert_eq!(scores["b"], 0.75);
    }
}
