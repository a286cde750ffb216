//! Algorithms for scoring keyword graphs.
//!
//! - **PageRank**: random-walk equilibrium ([`pagerank`])
//! - **Centrality**: diffusion, Katz-Bonacich and current-flow measures ([`centrality`])
//! - **Components**: connectivity checks used by the flow solvers ([`components`])
//!
//! | Algorithm | Question | Complexity |
//! |-----------|----------|------------|
//! | PageRank | Random walk equilibrium? | O(E × iter) |
//! | Diffusion | How much damped flow arrives within L hops? | O(L × N²) |
//! | Katz-Bonacich | Reachable via damped walks of any length? | O(N³) |
//! | Current-flow closeness | Low resistance to everyone? | O(N³) |
//! | Current-flow betweenness | Carries current between others? | O(N² × E) |

use crate::{CentralityResult, Result, WeightedGraph};

/// PageRank centrality algorithm.
pub mod pagerank;

/// Matrix-based centrality measures.
pub mod centrality;

/// Connected components algorithm.
pub mod components;

/// A centrality measure that can be run on any [`WeightedGraph`].
///
/// Every solver config implements this, so callers can hold a
/// `&dyn Centrality` (or a [`crate::config::Measure`]) and swap measures or
/// numeric backends without changing call sites.
pub trait Centrality {
    /// Stable short name (used in logs and score file names).
    fn name(&self) -> &'static str;

    /// Score every node of `graph`.
    fn compute(&self, graph: &WeightedGraph) -> Result<CentralityResult>;
}
