// Allow minor clippy style warnings at crate level
// These are mostly style preferences, not bugs
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::neg_cmp_op_on_partial_ord)]
#![allow(clippy::many_single_char_names)]

//! Core types and solvers for keyword co-occurrence graphs.
//!
//! This crate provides:
//!
//! - [`WeightedGraph`] - A weighted directed graph over keyword labels
//! - [`AdjacencyMatrix`] - Its dense matrix view with a stable node index
//! - [`algo`] - PageRank, diffusion, Katz-Bonacich and current-flow centrality
//! - [`formats`] - Edge list and score file codecs
//! - [`config`] - Serializable solver parameters
//!
//! # From transcript to scores
//!
//! ```text
//! transcript ──(external co-occurrence builder)──> edge list
//! edge list  ──EdgeList::read──> WeightedGraph ──Centrality::compute──> scores
//! scores     ──ScoreCodec::export──> score file
//! ```
//!
//! Node labels are whatever keys the co-occurrence builder wrote (usually
//! stems). Only the score codec ever sees the original keyword surface
//! forms, through a caller-supplied key function.
//!
//! # Which measure?
//!
//! | Measure | Sees direction? | Sees weights? | Needs connectivity? |
//! |---------|-----------------|---------------|---------------------|
//! | PageRank | yes | row-normalized | no |
//! | Diffusion | yes | raw | no |
//! | Katz-Bonacich | yes | raw | no (but `delta < 1/ρ(A)`) |
//! | Current-flow closeness | no | as conductance | yes |
//! | Current-flow betweenness | no | as conductance | yes |
//!
//! # Example
//!
//! ```rust
//! use keygraph_core::algo::pagerank::{pagerank, PageRankConfig};
//! use keygraph_core::formats::{EdgeList, LoadOptions, ScoreCodec};
//!
//! let edges = "a b 2\na c 1\nb c 1\n";
//! let graph = EdgeList::read(edges.as_bytes(), &LoadOptions::default())?;
//!
//! let outcome = pagerank(&graph, PageRankConfig::default())?;
//! assert!(outcome.converged);
//!
//! let mut out = Vec::new();
//! ScoreCodec::default().export(&outcome.scores, ["a", "b", "c"], |k| k.to_owned(), &mut out)?;
//! # Ok::<(), keygraph_core::Error>(())
//! ```

pub mod algo;
pub mod config;
mod error;
pub mod formats;
mod graph;
pub mod linalg;
pub mod matrix;

pub use algo::Centrality;
pub use config::{EngineConfig, Measure};
pub use error::{Error, Result};
pub use graph::{GraphStats, WeightedGraph};
pub use matrix::{AdjacencyMatrix, NodeIndexMap};

/// Node label -> score.
pub type CentralityResult = std::collections::HashMap<String, f64>;

// Re-export petgraph and ndarray for advanced operations
pub use ndarray;
pub use petgraph;
