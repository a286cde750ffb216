//! Centrality algorithms for measuring keyword importance.
//!
//! # Overview
//!
//! | Algorithm | Question Answered | Normalization |
//! |-----------|-------------------|---------------|
//! | Diffusion | How much damped flow reaches a keyword within L hops? | sums to 1 |
//! | Katz-Bonacich | How many damped walks of any length end here? | sums to 1 |
//! | Current-flow closeness | How low is the resistance to everyone else? | raw |
//! | Current-flow betweenness | How much current passes through between others? | [0, 1] |
//!
//! Diffusion and Katz work on the dense adjacency matrix of the directed
//! graph. The current-flow measures treat the graph as an undirected
//! resistor network whose conductances are the edge weights.
//!
//! # Mathematical Relationships
//!
//! - Diffusion with `L = 1` is weighted in-degree.
//! - Diffusion with `L → ∞` is Katz with the same `delta`.
//! - Katz with `delta → 0` is weighted in-degree.
//!
//! # References
//!
//! - Katz (1953). "A new status index derived from sociometric analysis"
//! - Bonacich (1987). "Power and centrality"
//! - Banerjee et al. (2013). "The diffusion of microfinance"
//! - Brandes & Fleischer (2005). "Centrality measures based on current flow"

mod current_flow;
mod diffusion;
mod katz;

pub use current_flow::{
    current_flow_betweenness, current_flow_closeness, CurrentFlowBetweenness,
    CurrentFlowCloseness, CurrentFlowConfig,
};
pub use diffusion::{diffusion_centrality, DiffusionConfig};
pub use katz::{katz_centrality, KatzConfig};
