//! Serializable engine configuration.
//!
//! Every solver config derives serde with `#[serde(default)]`, so a JSON
//! document only needs the fields it changes:
//!
//! ```json
//! {
//!   "load": { "separator": ",", "stochastic": false },
//!   "measures": [
//!     { "pagerank": { "damping_factor": 0.9 } },
//!     { "katz": { "delta": 0.05 } },
//!     "current_flow_closeness"
//!   ]
//! }
//! ```

use crate::algo::centrality::{
    current_flow_betweenness, current_flow_closeness, diffusion_centrality, katz_centrality,
    CurrentFlowConfig, DiffusionConfig, KatzConfig,
};
use crate::algo::pagerank::{pagerank, PageRankConfig};
use crate::algo::Centrality;
use crate::formats::{LoadOptions, ScoreCodec};
use crate::{CentralityResult, Result, WeightedGraph};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One centrality measure with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    /// PageRank with dangling-mass redistribution.
    #[serde(rename = "pagerank")]
    PageRank(PageRankConfig),
    /// Diffusion centrality over `layers` hops.
    Diffusion(DiffusionConfig),
    /// Katz-Bonacich centrality (closed form).
    Katz(KatzConfig),
    /// Current-flow closeness.
    CurrentFlowCloseness,
    /// Current-flow betweenness.
    CurrentFlowBetweenness(CurrentFlowConfig),
}

impl Measure {
    /// Every measure with default parameters.
    pub fn all() -> Vec<Self> {
        vec![
            Self::PageRank(PageRankConfig::default()),
            Self::Diffusion(DiffusionConfig::default()),
            Self::Katz(KatzConfig::default()),
            Self::CurrentFlowCloseness,
            Self::CurrentFlowBetweenness(CurrentFlowConfig::default()),
        ]
    }
}

impl Centrality for Measure {
    fn name(&self) -> &'static str {
        match self {
            Self::PageRank(config) => config.name(),
            Self::Diffusion(config) => config.name(),
            Self::Katz(config) => config.name(),
            Self::CurrentFlowCloseness => "current_flow_closeness",
            Self::CurrentFlowBetweenness(_) => "current_flow_betweenness",
        }
    }

    fn compute(&self, graph: &WeightedGraph) -> Result<CentralityResult> {
        match *self {
            Self::PageRank(config) => pagerank(graph, config).map(|outcome| outcome.scores),
            Self::Diffusion(config) => diffusion_centrality(graph, config),
            Self::Katz(config) => katz_centrality(graph, config),
            Self::CurrentFlowCloseness => current_flow_closeness(graph),
            Self::CurrentFlowBetweenness(config) => current_flow_betweenness(graph, config),
        }
    }
}

/// Loader, measures and score file settings for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How edge lists are parsed.
    pub load: LoadOptions,
    /// Measures to compute, in order.
    pub measures: Vec<Measure>,
    /// Separator used in exported score files.
    pub score_separator: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            load: LoadOptions::default(),
            measures: Measure::all(),
            score_separator: " ".to_owned(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Codec for the configured score separator.
    pub fn score_codec(&self) -> ScoreCodec {
        ScoreCodec::new(self.score_separator.clone())
    }

    /// Run every configured measure on `graph`.
    ///
    /// A failing measure does not stop the others; each entry carries its
    /// own result.
    pub fn evaluate(
        &self,
        graph: &WeightedGraph,
    ) -> Vec<(&'static str, Result<CentralityResult>)> {
        self.measures
            .iter()
            .map(|measure| {
                let result = measure.compute(graph);
                if let Err(err) = &result {
                    tracing::warn!(
                        measure = measure.name(),
                        error = %err,
                        "centrality measure failed"
                    );
                }
                (measure.name(), result)
            })
            .collect()
    }
}
