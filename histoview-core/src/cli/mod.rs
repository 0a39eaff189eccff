//! Command bodies for the `histoview` binary.
//!
//! Every command reads a stats snapshot, builds sessions and writes to the
//! supplied writer, so the binary only parses arguments and picks stdout.

pub mod config;
mod inspect;
mod render;
pub mod replay;

#[cfg(test)]
mod tests;

pub use inspect::run_inspect;
pub use render::run_render;
pub use replay::run_replay;

use crate::session::SessionError;
use crate::stats::{HistogramStat, parse_stats_reader};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Reads a snapshot from a file, or from stdin when `path` is `-`.
pub fn load_snapshot(path: &Path) -> Result<Vec<HistogramStat>> {
    if path == Path::new("-") {
        let stdin = io::stdin();
        return parse_stats_reader(stdin.lock()).context("failed to parse stats from stdin");
    }

    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_stats_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse stats from {}", path.display()))
}

/// Picks the named histogram, or the first one when no name is given.
pub fn select_histogram(
    stats: Vec<HistogramStat>,
    name: Option<&str>,
) -> Result<HistogramStat, SessionError> {
    match name {
        Some(name) => stats
            .into_iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| SessionError::NoSuchHistogram {
                name: name.to_string(),
            }),
        None => stats
            .into_iter()
            .next()
            .ok_or_else(|| SessionError::NoSuchHistogram {
                name: "<any>".to_string(),
            }),
    }
}
