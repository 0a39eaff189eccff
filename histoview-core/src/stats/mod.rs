//! Histogram snapshots as consumed from the admin `/stats?format=json` endpoint.
//!
//! The wire shape is deserialized into the `*Json` types in [`parse`] and then
//! validated into [`HistogramStat`], the immutable input of one render call.

mod error;
mod parse;
mod types;


pub use error::StatsError;
pub use parse::{StatsDocument, parse_stats, parse_stats_reader};
pub use types::*;
