//! Connected components of the undirected view of a weighted graph.
//!
//! Two nodes are connected when an edge with positive weight joins them in
//! either direction. Zero-weight edges carry no current in the resistor
//! view, so they do not connect anything here either.

use crate::WeightedGraph;
use std::cmp::Ordering;
use std::collections::HashMap;

// Union-Find helper functions (at module level per clippy)
fn uf_find(parent: &mut [usize], i: usize) -> usize {
    if parent[i] != i {
        parent[i] = uf_find(parent, parent[i]); // Path compression
    }
    parent[i]
}

fn uf_union(parent: &mut [usize], rank: &mut [usize], x: usize, y: usize) {
    let px = uf_find(parent, x);
    let py = uf_find(parent, y);
    if px == py {
        return;
    }
    // Union by rank
    match rank[px].cmp(&rank[py]) {
        Ordering::Less => parent[px] = py,
        Ordering::Greater => parent[py] = px,
        Ordering::Equal => {
            parent[py] = px;
            rank[px] += 1;
        }
    }
}

/// Component id for every node, indexed like [`WeightedGraph::nodes`].
///
/// Ids are dense (`0..count`) and numbered in order of each component's
/// first node.
pub fn component_labels(graph: &WeightedGraph) -> (Vec<usize>, usize) {
    let n = graph.node_count();
    let mut parent: Vec<usize> = (0..n).collect();
    let mut rank: Vec<usize> = vec![0; n];

    for (src, dst, weight) in graph.indexed_edges() {
        if weight > 0.0 {
            uf_union(&mut parent, &mut rank, src, dst);
        }
    }

    let mut ids: HashMap<usize, usize> = HashMap::new();
    let mut labels = Vec::with_capacity(n);
    for i in 0..n {
        let root = uf_find(&mut parent, i);
        let next = ids.len();
        labels.push(*ids.entry(root).or_insert(next));
    }
    let count = ids.len();
    (labels, count)
}

/// Compute weakly connected components.
///
/// Each component lists its node labels in first-encounter order; the
/// components themselves are ordered by their first node.
///
/// Uses Union-Find for O(V + E * alpha(V)) computation.
pub fn weakly_connected_components(graph: &WeightedGraph) -> Vec<Vec<String>> {
    let (labels, count) = component_labels(graph);
    let mut components = vec![Vec::new(); count];
    for (label, component) in graph.nodes().zip(labels) {
        components[component].push(label.to_owned());
    }
    components
}

/// True when the graph has exactly one weakly connected component.
pub fn is_connected(graph: &WeightedGraph) -> bool {
    component_labels(graph).1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_is_one_component() {
        let mut graph = WeightedGraph::new();
        // A -> B -> C: weakly connected even though directed
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 1.0);

        let components = weakly_connected_components(&graph);
        assert_eq!(components, vec![vec!["A", "B", "C"]]);
        assert!(is_connected(&graph));
    }

    #[test]
    fn test_two_components() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("C", "D", 1.0);

        let components = weakly_connected_components(&graph);
        assert_eq!(components, vec![vec!["A", "B"], vec!["C", "D"]]);
        assert!(!is_connected(&graph));
    }

    #[test]
    fn test_zero_weight_edges_do_not_connect() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 0.0);

        let (labels, count) = component_labels(&graph);
        assert_eq!(count, 2);
        assert_eq!(labels, vec![0, 0, 1]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = WeightedGraph::new();
        assert!(weakly_connected_components(&graph).is_empty());
        assert!(!is_connected(&graph));
    }
}
