//! Plain-text formats at the engine boundary.
//!
//! - [`EdgeList`]: weighted edge lists in, and out for round-trips
//! - [`ScoreCodec`]: per-keyword score files

mod edgelist;
mod scores;

pub use edgelist::{EdgeList, LoadOptions};
pub use scores::ScoreCodec;

use crate::Error;
use std::io;

/// Attach the line number to undecodable input; other read failures stay IO errors.
pub(crate) fn line_read_error(line: usize, err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::InvalidData {
        Error::parse(line, "line is not valid UTF-8")
    } else {
        Error::Io(err)
    }
}
