//! Plain-text score files.
//!
//! One keyword per line:
//!
//! ```text
//! <keyword><sep><score>
//! ```
//!
//! Keywords are written in their original surface form, while scores are
//! looked up by the graph key the caller derives from each keyword (usually
//! a stem). Keywords whose key is missing from the result get `0`.
//!
//! Keywords may themselves contain the separator ("machine learning"): on
//! import everything before the last separator is the key.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Score file reader/writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreCodec {
    /// Field separator.
    pub separator: String,
}

impl Default for ScoreCodec {
    fn default() -> Self {
        Self {
            separator: " ".to_owned(),
        }
    }
}

impl ScoreCodec {
    /// Codec with a custom separator.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Write one line per keyword, in `keywords` order.
    ///
    /// `key_fn` maps a keyword to the node key used in `scores`; pass
    /// `|k| k.to_owned()` when the graph is keyed by the keywords themselves.
    ///
    /// # Example
    ///
    /// ```
    /// use keygraph_core::formats::ScoreCodec;
    /// use std::collections::HashMap;
    ///
    /// let scores = HashMap::from([("run".to_owned(), 0.75)]);
    /// let mut out = Vec::new();
    /// ScoreCodec::default()
    ///     .export(&scores, ["running", "jumped"], |k| k.trim_end_matches("ning").to_owned(), &mut out)
    ///     .unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "running 0.75\njumped 0\n");
    /// ```
    pub fn export<I, S, F, W>(
        &self,
        scores: &HashMap<String, f64>,
        keywords: I,
        key_fn: F,
        mut writer: W,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> String,
        W: Write,
    {
        if self.separator.is_empty() {
            return Err(Error::invalid("separator", "must not be empty"));
        }

        let separator = &self.separator;
        for keyword in keywords {
            let keyword = keyword.as_ref();
            let score = scores.get(&key_fn(keyword)).copied().unwrap_or(0.0);
            writeln!(writer, "{keyword}{separator}{score}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write a score file to `path`.
    pub fn export_path<I, S, F>(
        &self,
        scores: &HashMap<String, f64>,
        keywords: I,
        key_fn: F,
        path: impl AsRef<Path>,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> String,
    {
        let file = File::create(path)?;
        self.export(scores, keywords, key_fn, BufWriter::new(file))
    }

    /// Read a score file back into a keyword -> score map.
    ///
    /// The key is every field but the last, re-joined with the separator;
    /// the last field is the score. Blank lines are skipped.
    pub fn import<R: Read>(&self, reader: R) -> Result<HashMap<String, f64>> {
        if self.separator.is_empty() {
            return Err(Error::invalid("separator", "must not be empty"));
        }

        let mut scores = HashMap::new();
        for (i, line) in BufReader::new(reader).lines().enumerate() {
            let line_no = i + 1;
            let line = line.map_err(|err| super::line_read_error(line_no, err))?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            if line.trim().is_empty() {
                continue;
            }

            let Some((key, score)) = line.rsplit_once(self.separator.as_str()) else {
                return Err(Error::parse(
                    line_no,
                    format!("expected `<key>{}<score>`: {line:?}", self.separator),
                ));
            };
            let score: f64 = score
                .trim()
                .parse()
                .map_err(|_| Error::parse(line_no, format!("score {score:?} is not a number")))?;
            scores.insert(key.to_owned(), score);
        }
        Ok(scores)
    }

    /// Read a score file from `path`.
    pub fn import_path(&self, path: impl AsRef<Path>) -> Result<HashMap<String, f64>> {
        let file = File::open(path)?;
        self.import(file)
    }
}
