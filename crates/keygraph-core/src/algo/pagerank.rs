//! `PageRank` centrality algorithm.
//!
//! Computes the importance of nodes based on link structure.
//! Higher scores indicate more "important" nodes.
//!
//! # Definition
//!
//! ```text
//! x'(v) = (1 - d)/N + d × Σ_{u→v} x(u) × w(u,v)/out(u) + d × dangling/N
//! ```
//!
//! Transition weights are always row-normalized, whether or not the graph
//! was loaded as stochastic. `dangling` is the total score currently held by
//! nodes with zero out-weight; spreading it uniformly keeps the vector a
//! probability distribution.

use crate::algo::Centrality;
use crate::{CentralityResult, Error, Result, WeightedGraph};
use serde::{Deserialize, Serialize};

/// `PageRank` configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Damping factor (probability of following a link vs teleporting).
    /// Typically 0.85.
    pub damping_factor: f64,
    /// Maximum iterations before stopping.
    pub max_iterations: usize,
    /// Convergence tolerance (L1 norm of score changes).
    pub tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl PageRankConfig {
    /// Check every parameter against its documented range.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping_factor > 0.0 && self.damping_factor < 1.0) {
            return Err(Error::invalid(
                "damping_factor",
                format!("must be in (0, 1), got {}", self.damping_factor),
            ));
        }
        if !(self.tolerance > 0.0) {
            return Err(Error::invalid(
                "tolerance",
                format!("must be positive, got {}", self.tolerance),
            ));
        }
        if self.max_iterations == 0 {
            return Err(Error::invalid("max_iterations", "must be at least 1"));
        }
        Ok(())
    }
}

/// Scores plus convergence report.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankOutcome {
    /// Node label -> score; sums to 1.
    pub scores: CentralityResult,
    /// Iterations actually performed.
    pub iterations: usize,
    /// Whether the L1 change dropped below the tolerance.
    pub converged: bool,
}

/// Compute `PageRank` for all nodes.
///
/// Returns a map of node label -> score, where scores sum to 1.0, along with
/// the iteration count. Running out of iterations is not an error: the last
/// iterate is returned with `converged == false` and a warning is logged.
///
/// # Errors
///
/// [`Error::InvalidParameter`] when the config is out of range.
///
/// # Example
///
/// ```
/// use keygraph_core::WeightedGraph;
/// use keygraph_core::algo::pagerank::{pagerank, PageRankConfig};
///
/// let mut graph = WeightedGraph::new();
/// graph.add_edge("a", "b", 2.0);
/// graph.add_edge("a", "c", 1.0);
/// graph.add_edge("b", "c", 1.0);
///
/// let outcome = pagerank(&graph, PageRankConfig::default()).unwrap();
/// assert!(outcome.converged);
/// assert!(outcome.scores["c"] > outcome.scores["b"]);
/// ```
pub fn pagerank(graph: &WeightedGraph, config: PageRankConfig) -> Result<PageRankOutcome> {
    config.validate()?;

    let n = graph.node_count();
    if n == 0 {
        return Ok(PageRankOutcome {
            scores: CentralityResult::new(),
            iterations: 0,
            converged: true,
        });
    }

    let n_f64 = n as f64;
    let d = config.damping_factor;
    let teleport = (1.0 - d) / n_f64;

    let out_weights = graph.out_weights();
    // (from, to, w(u,v)/out(u)) for every edge that can carry mass
    let transitions: Vec<(usize, usize, f64)> = graph
        .indexed_edges()
        .filter(|&(from, _, _)| out_weights[from] > 0.0)
        .map(|(from, to, w)| (from, to, w / out_weights[from]))
        .collect();

    // Initialize scores uniformly
    let mut scores = vec![1.0 / n_f64; n];
    let mut new_scores = vec![0.0; n];
    let mut iterations = 0;
    let mut converged = false;
    let mut residual = f64::INFINITY;

    while iterations < config.max_iterations {
        iterations += 1;

        // Step 1: dangling mass (nodes with no outgoing weight)
        let dangling_sum: f64 = out_weights
            .iter()
            .zip(&scores)
            .filter(|(w, _)| **w <= 0.0)
            .map(|(_, s)| *s)
            .sum();

        // Step 2: teleport + dangling share
        new_scores.fill(teleport + d * dangling_sum / n_f64);

        // Step 3: distribute link mass
        for &(from, to, p) in &transitions {
            new_scores[to] += d * scores[from] * p;
        }

        residual = scores
            .iter()
            .zip(&new_scores)
            .map(|(old, new)| (old - new).abs())
            .sum();

        std::mem::swap(&mut scores, &mut new_scores);

        if residual < config.tolerance {
            converged = true;
            break;
        }
    }

    if converged {
        tracing::debug!(iterations, residual, "pagerank converged");
    } else {
        tracing::warn!(
            iterations,
            residual,
            tolerance = config.tolerance,
            "pagerank did not converge within max_iterations"
        );
    }

    let scores = graph
        .nodes()
        .map(str::to_owned)
        .zip(scores)
        .collect();

    Ok(PageRankOutcome {
        scores,
        iterations,
        converged,
    })
}

impl Centrality for PageRankConfig {
    fn name(&self) -> &'static str {
        "pagerank"
    }

    fn compute(&self, graph: &WeightedGraph) -> Result<CentralityResult> {
        pagerank(graph, *self).map(|outcome| outcome.scores)
    }
}
