pub mod cli;
pub mod conf;
pub mod histogram;
pub mod logging;
pub mod render;
pub mod session;
pub mod stats;
pub mod tooltip;

pub use session::{HistogramSession, render_histograms};
pub use stats::{HistogramStat, PercentileValue, RawBucket, parse_stats};
