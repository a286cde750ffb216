//! Weighted edge list format.
//!
//! One edge per line, no header:
//!
//! ```text
//! <from><sep><to><sep><weight>
//! ```
//!
//! The separator defaults to a single space. Later lines for the same
//! `(from, to)` pair overwrite earlier ones.

use crate::{Error, Result, WeightedGraph};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

/// Options for loading an edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Field separator.
    pub separator: String,
    /// Row-normalize the loaded graph.
    pub stochastic: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            separator: " ".to_owned(),
            stochastic: false,
        }
    }
}

impl LoadOptions {
    /// Options with a custom separator.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }

    /// Set whether the loaded graph is row-normalized.
    pub fn stochastic(mut self, stochastic: bool) -> Self {
        self.stochastic = stochastic;
        self
    }
}

/// Weighted edge list handler.
pub struct EdgeList;

impl EdgeList {
    /// Read a graph from an edge list stream.
    ///
    /// Blank lines are skipped and surrounding whitespace (including a
    /// trailing `\r`) is ignored. Every other line must split into exactly
    /// three fields: two non-empty labels and
    /// a finite, non-negative weight. The first bad line aborts the load.
    ///
    /// # Example
    ///
    /// ```
    /// use keygraph_core::formats::{EdgeList, LoadOptions};
    ///
    /// let input = "a b 2\na c 1\nb c 1\n";
    /// let graph = EdgeList::read(input.as_bytes(), &LoadOptions::default()).unwrap();
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.weight("a", "b"), Some(2.0));
    /// ```
    pub fn read<R: Read>(reader: R, options: &LoadOptions) -> Result<WeightedGraph> {
        if options.separator.is_empty() {
            return Err(Error::invalid("separator", "must not be empty"));
        }

        let reader = BufReader::new(reader);
        let mut graph = WeightedGraph::new();

        for (i, line) in reader.lines().enumerate() {
            let line_no = i + 1;
            let line = line.map_err(|err| super::line_read_error(line_no, err))?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (from, to, weight) = parse_edge(line, &options.separator)
                .map_err(|message| Error::parse(line_no, format!("{message}: {line:?}")))?;
            graph.add_edge(from, to, weight);
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            stochastic = options.stochastic,
            "loaded edge list"
        );

        Ok(if options.stochastic {
            graph.to_stochastic()
        } else {
            graph
        })
    }

    /// Read a graph from an edge list file.
    pub fn read_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<WeightedGraph> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Write a graph as an edge list, one line per edge in insertion order.
    pub fn write<W: Write>(graph: &WeightedGraph, mut writer: W, separator: &str) -> Result<()> {
        for (from, to, weight) in graph.edges() {
            writeln!(writer, "{from}{separator}{to}{separator}{weight}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write a graph to an edge list file.
    pub fn write_path(
        graph: &WeightedGraph,
        path: impl AsRef<Path>,
        separator: &str,
    ) -> Result<()> {
        let file = File::create(path)?;
        Self::write(graph, std::io::BufWriter::new(file), separator)
    }
}

/// Split one line into `(from, to, weight)`, or describe what is wrong with it.
fn parse_edge<'a>(
    line: &'a str,
    separator: &str,
) -> std::result::Result<(&'a str, &'a str, f64), String> {
    let fields: Vec<&str> = line.split(separator).collect();
    let [from, to, weight] = fields.as_slice() else {
        return Err(format!("expected 3 fields, found {}", fields.len()));
    };
    if from.is_empty() || to.is_empty() {
        return Err("empty node label".to_owned());
    }
    let weight: f64 = weight
        .trim()
        .parse()
        .map_err(|_| format!("weight {weight:?} is not a number"))?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(format!("weight {weight} must be finite and non-negative"));
    }
    Ok((*from, *to, weight))
}
