//! Error types for keygraph-core.

use thiserror::Error;

/// Error type for graph loading, solving and score serialization.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed edge-list or score-file line.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the input stream.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A matrix that has to be inverted is numerically singular.
    #[error("matrix is singular (vanishing pivot in column {pivot})")]
    SingularMatrix {
        /// Column at which elimination found no usable pivot.
        pivot: usize,
    },

    /// Flow centrality needs a single connected component.
    #[error("graph is not connected ({components} components)")]
    DisconnectedGraph {
        /// Number of connected components found.
        components: usize,
    },

    /// Raw scores overflowed or became NaN, so they cannot be normalized.
    #[error("scores are not finite (total {total})")]
    NonFiniteScores {
        /// Sum of the raw scores.
        total: f64,
    },

    /// A solver parameter is outside its documented range.
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParameter {
        /// Parameter name as it appears in the config.
        name: &'static str,
        /// Constraint that was violated.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

/// Result type for keygraph operations.
pub type Result<T> = std::result::Result<T, Error>;
