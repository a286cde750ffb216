//! Keyword graph centrality: core types + solvers + file formats.
//!
//! This crate re-exports `keygraph-core` and adds file-path entry points that
//! load an edge list and score it in one call.
//!
//! # Example
//!
//! ```rust
//! use keygraph::{algo::pagerank::pagerank, algo::pagerank::PageRankConfig, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_edge("data", "model", 2.0);
//! graph.add_edge("data", "error", 1.0);
//! graph.add_edge("model", "error", 1.0);
//!
//! let outcome = pagerank(&graph, PageRankConfig::default())?;
//! let total: f64 = outcome.scores.values().sum();
//! assert!((total - 1.0).abs() < 1e-9);
//! # Ok::<(), keygraph::Error>(())
//! ```
//!
//! # From an edge file
//!
//! ```rust,ignore
//! use keygraph::{formats::LoadOptions, KatzConfig};
//!
//! let scores = keygraph::katz_from_edge_file("talk.edges", &LoadOptions::default(), KatzConfig::default())?;
//! ```

use std::path::Path;

// Re-export core types
pub use keygraph_core::{
    AdjacencyMatrix, Centrality, CentralityResult, EngineConfig, Error, GraphStats, Measure,
    NodeIndexMap, Result, WeightedGraph,
};

pub use keygraph_core::algo::centrality::{CurrentFlowConfig, DiffusionConfig, KatzConfig};
pub use keygraph_core::algo::pagerank::{PageRankConfig, PageRankOutcome};

// Re-export petgraph and ndarray for advanced operations
pub use keygraph_core::{ndarray, petgraph};

/// Edge list and score file codecs.
pub mod formats {
    pub use keygraph_core::formats::*;
}

/// Centrality solvers and connectivity helpers.
pub mod algo {
    pub use keygraph_core::algo::*;
}

/// Dense matrix helpers used by the solvers.
pub mod linalg {
    pub use keygraph_core::linalg::*;
}

use formats::{EdgeList, LoadOptions};

fn load(path: &Path, options: &LoadOptions) -> Result<WeightedGraph> {
    let graph = EdgeList::read_path(path, options)?;
    tracing::debug!(path = %path.display(), nodes = graph.node_count(), "loaded edge file");
    Ok(graph)
}

/// Load an edge file and compute any [`Measure`] on it.
pub fn centrality_from_edge_file(
    path: impl AsRef<Path>,
    options: &LoadOptions,
    measure: &Measure,
) -> Result<CentralityResult> {
    let graph = load(path.as_ref(), options)?;
    measure.compute(&graph)
}

/// PageRank scores of the graph in an edge file.
pub fn pagerank_from_edge_file(
    path: impl AsRef<Path>,
    options: &LoadOptions,
    config: PageRankConfig,
) -> Result<CentralityResult> {
    centrality_from_edge_file(path, options, &Measure::PageRank(config))
}

/// Diffusion centrality of the graph in an edge file.
pub fn diffusion_from_edge_file(
    path: impl AsRef<Path>,
    options: &LoadOptions,
    config: DiffusionConfig,
) -> Result<CentralityResult> {
    centrality_from_edge_file(path, options, &Measure::Diffusion(config))
}

/// Katz-Bonacich centrality of the graph in an edge file.
pub fn katz_from_edge_file(
    path: impl AsRef<Path>,
    options: &LoadOptions,
    config: KatzConfig,
) -> Result<CentralityResult> {
    centrality_from_edge_file(path, options, &Measure::Katz(config))
}

/// Current-flow closeness of the graph in an edge file.
pub fn closeness_from_edge_file(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<CentralityResult> {
    centrality_from_edge_file(path, options, &Measure::CurrentFlowCloseness)
}

/// Current-flow betweenness of the graph in an edge file.
pub fn betweenness_from_edge_file(
    path: impl AsRef<Path>,
    options: &LoadOptions,
    config: CurrentFlowConfig,
) -> Result<CentralityResult> {
    centrality_from_edge_file(path, options, &Measure::CurrentFlowBetweenness(config))
}
