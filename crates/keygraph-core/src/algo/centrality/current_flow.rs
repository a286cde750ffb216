//! Current-flow closeness and betweenness.
//!
//! # Intuition
//!
//! Replace every edge by a resistor whose conductance is the edge weight
//! and push electrical current through the network. Shortest-path measures
//! only see the single best route; current spreads over every route in
//! proportion to how well it conducts, so parallel co-occurrence paths all
//! count.
//!
//! # Resistor network
//!
//! The directed graph is symmetrized: the conductance between `u ≠ v` is
//! `w(u,v) + w(v,u)`. Self-loops and zero-weight edges carry no current.
//!
//! ```text
//! L  = D - C                      (weighted Laplacian)
//! L⁺ = (L + J/n)⁻¹ - J/n          (see linalg::laplacian_pseudo_inverse)
//! R(u,v) = L⁺uu + L⁺vv - 2 L⁺uv   (effective resistance)
//! ```
//!
//! # Definitions
//!
//! Closeness is the inverse of the average effective resistance:
//!
//! ```text
//! C_C(v) = (n - 1) / Σ_{u≠v} R(v,u)
//! ```
//!
//! Betweenness sums, over every unordered pair `s < t`, the current that
//! passes through `v` when one unit enters at `s` and leaves at `t`. With
//! potentials `p = L⁺(e_s - e_t)`:
//!
//! ```text
//! τ_st(v) = ½ Σ_u C[v][u] |p_v - p_u|        (v ∉ {s, t})
//! C_B(v)  = Σ_{s<t} τ_st(v)  /  ((n-1)(n-2)/2)  when normalized
//! ```
//!
//! # Disconnected graphs
//!
//! Effective resistance between components is infinite, so both measures
//! refuse disconnected input with [`Error::DisconnectedGraph`].
//!
//! # Dynamic range
//!
//! The shifted Laplacian has condition number about `max(w) / min(w)` over
//! the conductances, and it is inverted in `f64`. Weight ratios around 1e13
//! still solve, with accuracy dropping to a few digits; once the ratio
//! approaches `1/f64::EPSILON` the solver returns [`Error::SingularMatrix`].
//!
//! # References
//!
//! - Brandes & Fleischer (2005). "Centrality measures based on current flow"
//! - Newman (2005). "A measure of betweenness centrality based on random walks"

use crate::algo::components::component_labels;
use crate::algo::Centrality;
use crate::linalg::laplacian_pseudo_inverse;
use crate::matrix::{AdjacencyMatrix, NodeIndexMap};
use crate::{CentralityResult, Error, Result, WeightedGraph};
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

/// Configuration for current-flow betweenness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentFlowConfig {
    /// Divide by the number of pairs not involving the node, giving [0, 1].
    pub normalized: bool,
}

impl Default for CurrentFlowConfig {
    fn default() -> Self {
        Self { normalized: true }
    }
}

/// Current-flow closeness as a [`Centrality`] measure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentFlowCloseness;

/// Current-flow betweenness as a [`Centrality`] measure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentFlowBetweenness(pub CurrentFlowConfig);

/// The symmetrized graph with its Laplacian pseudo-inverse.
struct ResistorNetwork {
    index: NodeIndexMap,
    /// Positive-conductance edges `(i, j, c)` with `i < j`.
    edges: Vec<(usize, usize, f64)>,
    pinv: Array2<f64>,
}

impl ResistorNetwork {
    fn build(graph: &WeightedGraph) -> Result<Self> {
        let (_, components) = component_labels(graph);
        if components > 1 {
            return Err(Error::DisconnectedGraph { components });
        }

        let (a, index) = AdjacencyMatrix::from_graph(graph).into_parts();
        let n = index.len();

        let mut conductance = &a + &a.t();
        conductance.diag_mut().fill(0.0);

        let degrees = conductance.sum_axis(Axis(1));
        let mut laplacian = -&conductance;
        laplacian.diag_mut().assign(&degrees);

        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let c = conductance[[i, j]];
                if c > 0.0 {
                    edges.push((i, j, c));
                }
            }
        }

        let pinv = laplacian_pseudo_inverse(&laplacian)?;
        Ok(Self { index, edges, pinv })
    }

    fn resistance(&self, u: usize, v: usize) -> f64 {
        self.pinv[[u, u]] + self.pinv[[v, v]] - 2.0 * self.pinv[[u, v]]
    }
}

fn zero_scores(graph: &WeightedGraph) -> CentralityResult {
    graph.nodes().map(|label| (label.to_owned(), 0.0)).collect()
}

/// Compute current-flow closeness centrality.
///
/// Graphs with fewer than two nodes score 0 everywhere.
///
/// # Complexity
///
/// - Time: O(N³) (pseudo-inverse)
/// - Space: O(N²)
///
/// # Errors
///
/// - [`Error::DisconnectedGraph`] when the graph has several components.
/// - [`Error::SingularMatrix`] if the shifted Laplacian cannot be inverted.
///
/// # Example
///
/// ```
/// use keygraph_core::WeightedGraph;
/// use keygraph_core::algo::centrality::current_flow_closeness;
///
/// let mut graph = WeightedGraph::new();
/// // Path: a - b - c
/// graph.add_edge("a", "b", 1.0);
/// graph.add_edge("b", "c", 1.0);
///
/// let scores = current_flow_closeness(&graph).unwrap();
/// assert!(scores["b"] > scores["a"]);
/// ```
pub fn current_flow_closeness(graph: &WeightedGraph) -> Result<CentralityResult> {
    let n = graph.node_count();
    if n < 2 {
        return Ok(zero_scores(graph));
    }

    let network = ResistorNetwork::build(graph)?;
    tracing::debug!(nodes = n, edges = network.edges.len(), "computing current-flow closeness");

    let closeness: Array1<f64> = (0..n)
        .map(|v| {
            let total: f64 = (0..n)
                .filter(|&u| u != v)
                .map(|u| network.resistance(v, u))
                .sum();
            (n - 1) as f64 / total
        })
        .collect();

    Ok(network.index.scores(&closeness))
}

/// Compute current-flow betweenness centrality.
///
/// Graphs with fewer than two nodes score 0 everywhere.
///
/// # Complexity
///
/// - Time: O(N³ + N² × E)
/// - Space: O(N²)
///
/// # Errors
///
/// - [`Error::DisconnectedGraph`] when the graph has several components.
/// - [`Error::SingularMatrix`] if the shifted Laplacian cannot be inverted.
///
/// # Example
///
/// ```
/// use keygraph_core::WeightedGraph;
/// use keygraph_core::algo::centrality::{current_flow_betweenness, CurrentFlowConfig};
///
/// let mut graph = WeightedGraph::new();
/// graph.add_edge("a", "b", 1.0);
/// graph.add_edge("b", "c", 1.0);
///
/// let scores = current_flow_betweenness(&graph, CurrentFlowConfig::default()).unwrap();
/// // All current between a and c passes through b
/// assert!((scores["b"] - 1.0).abs() < 1e-9);
/// ```
pub fn current_flow_betweenness(
    graph: &WeightedGraph,
    config: CurrentFlowConfig,
) -> Result<CentralityResult> {
    let n = graph.node_count();
    if n < 2 {
        return Ok(zero_scores(graph));
    }

    let network = ResistorNetwork::build(graph)?;
    tracing::debug!(nodes = n, edges = network.edges.len(), "computing current-flow betweenness");

    let mut betweenness = Array1::<f64>::zeros(n);
    let mut potential = vec![0.0_f64; n];

    for s in 0..n {
        for t in (s + 1)..n {
            // Unit current in at s, out at t
            for (v, p) in potential.iter_mut().enumerate() {
                *p = network.pinv[[v, s]] - network.pinv[[v, t]];
            }

            // Each edge's current counts half towards both of its endpoints
            for &(i, j, c) in &network.edges {
                let half_flow = 0.5 * c * (potential[i] - potential[j]).abs();
                if i != s && i != t {
                    betweenness[i] += half_flow;
                }
                if j != s && j != t {
                    betweenness[j] += half_flow;
                }
            }
        }
    }

    if config.normalized && n > 2 {
        let pairs = ((n - 1) * (n - 2)) as f64 / 2.0;
        betweenness /= pairs;
    }

    Ok(network.index.scores(&betweenness))
}

impl Centrality for CurrentFlowCloseness {
    fn name(&self) -> &'static str {
        "current_flow_closeness"
    }

    fn compute(&self, graph: &WeightedGraph) -> Result<CentralityResult> {
        current_flow_closeness(graph)
    }
}

impl Centrality for CurrentFlowBetweenness {
    fn name(&self) -> &'static str {
        "current_flow_betweenness"
    }

    fn compute(&self, graph: &WeightedGraph) -> Result<CentralityResult> {
        current_flow_betweenness(graph, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> WeightedGraph {
        let mut graph = WeightedGraph::new();
        graph.add_edge("a", "b", 1.0);
        graph.add_edge("b", "c", 1.0);
        graph
    }

    #[test]
    fn test_closeness_path() {
        let scores = current_flow_closeness(&path()).unwrap();

        // R(a,b) = R(b,c) = 1, R(a,c) = 2
        assert!((scores["a"] - 2.0 / 3.0).abs() < 1e-9);
        assert!((scores["b"] - 1.0).abs() < 1e-9);
        assert!((scores["c"] - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_closeness_symmetrizes_direction() {
        // Opposite directions, same undirected network
        let mut reversed = WeightedGraph::new();
        reversed.add_edge("b", "a", 1.0);
        reversed.add_edge("c", "b", 1.0);

        let forward = current_flow_closeness(&path()).unwrap();
        let backward = current_flow_closeness(&reversed).unwrap();
        for (label, score) in &forward {
            assert!((score - backward[label]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_closeness_parallel_directions_add_conductance() {
        // a <-> b with weight 1 each way is one resistor of conductance 2
        let mut graph = WeightedGraph::new();
        graph.add_edge("a", "b", 1.0);
        graph.add_edge("b", "a", 1.0);

        let scores = current_flow_closeness(&graph).unwrap();
        assert!((scores["a"] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_betweenness_path() {
        let scores = current_flow_betweenness(&path(), CurrentFlowConfig::default()).unwrap();

        assert!(scores["a"].abs() < 1e-9);
        assert!((scores["b"] - 1.0).abs() < 1e-9);
        assert!(scores["c"].abs() < 1e-9);
    }

    #[test]
    fn test_betweenness_splits_over_parallel_routes() {
        // Square s - x - t and s - y - t: half the s-t current passes each side
        let mut graph = WeightedGraph::new();
        graph.add_edge("s", "x", 1.0);
        graph.add_edge("x", "t", 1.0);
        graph.add_edge("s", "y", 1.0);
        graph.add_edge("y", "t", 1.0);

        let raw = current_flow_betweenness(&graph, CurrentFlowConfig { normalized: false })
            .unwrap();

        // By symmetry every node scores the same
        for score in raw.values() {
            assert!((score - raw["s"]).abs() < 1e-9);
        }
        // Pair (s, t) alone sends 0.5 through x
        assert!(raw["x"] >= 0.5 - 1e-9);
    }

    #[test]
    fn test_disconnected_graph_is_rejected() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("a", "b", 1.0);
        graph.add_edge("c", "d", 1.0);

        assert!(matches!(
            current_flow_closeness(&graph),
            Err(Error::DisconnectedGraph { components: 2 })
        ));
        assert!(matches!(
            current_flow_betweenness(&graph, CurrentFlowConfig::default()),
            Err(Error::DisconnectedGraph { components: 2 })
        ));
    }

    #[test]
    fn test_uneven_conductances_still_solve() {
        // Two strong links and one very weak one: R(c, d) = 1e7 dominates
        let mut graph = WeightedGraph::new();
        graph.add_edge("a", "b", 1e6);
        graph.add_edge("b", "c", 1e6);
        graph.add_edge("c", "d", 1e-7);

        let scores = current_flow_closeness(&graph).unwrap();
        for label in ["a", "b", "c"] {
            let rel = (scores[label] - 3e-7).abs() / 3e-7;
            assert!(rel < 1e-2, "{label}: {}", scores[label]);
        }
        assert!((scores["d"] - 1e-7).abs() / 1e-7 < 1e-2, "d: {}", scores["d"]);
    }

    #[test]
    fn test_tiny_graphs_score_zero() {
        let mut graph = WeightedGraph::new();
        graph.add_node("solo");

        assert_eq!(current_flow_closeness(&graph).unwrap()["solo"], 0.0);
        assert!(current_flow_closeness(&WeightedGraph::new()).unwrap().is_empty());
    }
}
