//! Katz-Bonacich centrality: influence via damped walk counting.
//!
//! # Intuition
//!
//! Katz centrality counts all weighted walks that end at a node, with a
//! walk of length `k` discounted by `delta^k`. Unlike diffusion centrality
//! there is no cut-off: walks of every length contribute.
//!
//! # Definition
//!
//! ```text
//! M = (I - delta × Aᵗ)⁻¹ - I = Σ_{k≥1} delta^k (Aᵗ)^k
//! x_v = Σ_u M[v][u]          (row sum)
//! ```
//!
//! then `x` is scaled to sum to 1. Row `v` of `(Aᵗ)^k` sums to the total
//! weight of length-`k` walks arriving at `v`.
//!
//! # Choosing delta
//!
//! The power series converges when `delta < 1/ρ(A)`. At `delta = 1/ρ(A)`
//! the matrix `I - delta × Aᵗ` is singular and the solver returns
//! [`Error::SingularMatrix`]; past that point the inverse may exist but no
//! longer equals the walk sum (a warning is logged).
//!
//! Unlike the iterative formulation (`x = α Aᵗ x + β`), the closed form here
//! needs no iteration cap or tolerance.

use crate::algo::Centrality;
use crate::linalg::{invert, normalize_unit_sum, spectral_radius};
use crate::matrix::AdjacencyMatrix;
use crate::{CentralityResult, Error, Result, WeightedGraph};
use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

/// Configuration for Katz-Bonacich centrality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KatzConfig {
    /// Attenuation factor per hop. Must be < 1/λ_max for the walk sum to converge.
    /// Default 0.1 is conservative for co-occurrence counts.
    pub delta: f64,
}

impl Default for KatzConfig {
    fn default() -> Self {
        Self { delta: 0.1 }
    }
}

impl KatzConfig {
    /// Check every parameter against its documented range.
    pub fn validate(&self) -> Result<()> {
        if !(self.delta > 0.0 && self.delta.is_finite()) {
            return Err(Error::invalid(
                "delta",
                format!("must be positive and finite, got {}", self.delta),
            ));
        }
        Ok(())
    }
}

/// Compute Katz-Bonacich centrality in closed form.
///
/// # Complexity
///
/// - Time: O(N³) (matrix inversion)
/// - Space: O(N²)
///
/// # Errors
///
/// - [`Error::SingularMatrix`] when `I - delta × Aᵗ` is not invertible.
/// - [`Error::InvalidParameter`] when `delta <= 0`.
/// - [`Error::NonFiniteScores`] if the inverse overflows.
///
/// # Example
///
/// ```
/// use keygraph_core::WeightedGraph;
/// use keygraph_core::algo::centrality::{katz_centrality, KatzConfig};
///
/// let mut graph = WeightedGraph::new();
/// // Chain: A -> B -> C
/// graph.add_edge("A", "B", 1.0);
/// graph.add_edge("B", "C", 1.0);
///
/// let scores = katz_centrality(&graph, KatzConfig::default()).unwrap();
/// // C receives walks from both A and B, B only from A, A from nobody
/// assert!(scores["C"] > scores["B"]);
/// assert_eq!(scores["A"], 0.0);
/// ```
pub fn katz_centrality(graph: &WeightedGraph, config: KatzConfig) -> Result<CentralityResult> {
    config.validate()?;
    if graph.is_empty() {
        return Ok(CentralityResult::new());
    }

    let adjacency = AdjacencyMatrix::from_graph(graph);
    let a = adjacency.matrix();
    let n = adjacency.dim();

    let radius = spectral_radius(a);
    if config.delta * radius >= 1.0 {
        tracing::warn!(
            delta = config.delta,
            spectral_radius = radius,
            "katz delta is not below 1/spectral_radius; walk series diverges"
        );
    }
    tracing::debug!(nodes = n, delta = config.delta, "computing katz centrality");

    let identity = Array2::<f64>::eye(n);
    let system = &identity - &(a.t().to_owned() * config.delta);
    let walks = invert(&system)? - &identity;

    let raw = walks.sum_axis(Axis(1));
    Ok(adjacency.index().scores(&normalize_unit_sum(raw)?))
}

impl Centrality for KatzConfig {
    fn name(&self) -> &'static str {
        "katz"
    }

    fn compute(&self, graph: &WeightedGraph) -> Result<CentralityResult> {
        katz_centrality(graph, *self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_katz_worked_example() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("a", "b", 2.0);
        graph.add_edge("a", "c", 1.0);
        graph.add_edge("b", "c", 1.0);

        let scores = katz_centrality(&graph, KatzConfig { delta: 0.1 }).unwrap();

        // Walk sums: b = 0.1 * 2, c = 0.1 * 2 + 0.01 * 2 (a -> b -> c)
        assert!(scores["a"].abs() < 1e-12);
        assert!((scores["b"] - 10.0 / 21.0).abs() < 1e-12);
        assert!((scores["c"] - 11.0 / 21.0).abs() < 1e-12);
    }

    #[test]
    fn test_katz_small_delta_tracks_in_weight() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "A", 3.0);
        graph.add_edge("B", "C", 2.0);
        graph.add_edge("C", "B", 4.0);

        let scores = katz_centrality(&graph, KatzConfig { delta: 1e-6 }).unwrap();
        let total: f64 = graph.edges().map(|(_, _, w)| w).sum();

        for label in graph.nodes() {
            let expected = graph.in_weight(label) / total;
            assert!(
                (scores[label] - expected).abs() < 1e-4,
                "{label}: {} vs {expected}",
                scores[label]
            );
        }
    }

    #[test]
    fn test_katz_singular_at_inverse_spectral_radius() {
        // Two-cycle with unit weights: λ_max = 1, so delta = 1 makes I - Aᵗ singular
        let mut graph = WeightedGraph::new();
        graph.add_edge("x", "y", 1.0);
        graph.add_edge("y", "x", 1.0);

        let result = katz_centrality(&graph, KatzConfig { delta: 1.0 });
        assert!(matches!(result, Err(Error::SingularMatrix { .. })));
    }

    #[test]
    fn test_katz_sums_to_one() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 2.0);
        graph.add_edge("C", "A", 1.0);
        graph.add_edge("C", "D", 5.0);

        let scores = katz_centrality(&graph, KatzConfig { delta: 0.05 }).unwrap();
        let total: f64 = scores.values().sum();
        assert!((total - 1.0).abs() < 1e-9, "total = {total}");
    }

    #[test]
    fn test_katz_rejects_non_positive_delta() {
        let mut graph = WeightedGraph::new();
        graph.add_edge("A", "B", 1.0);
        assert!(matches!(
            katz_centrality(&graph, KatzConfig { delta: 0.0 }),
            Err(Error::InvalidParameter { name: "delta", .. })
        ));
    }
}
