use crate::stats::{HistogramStat, PercentileValue, RawBucket, StatsError};
use serde::Deserialize;
use std::io::Read;

/// Top level of a JSON stats dump. Entries other than histogram blocks
/// (counters, gauges, text readouts) deserialize with `histograms: None`.
#[derive(Debug, Default, Deserialize)]
pub struct StatsDocument {
    #[serde(default)]
    pub stats: Vec<StatsEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatsEntry {
    #[serde(default)]
    pub histograms: Option<HistogramsJson>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistogramsJson {
    #[serde(default)]
    pub supported_percentiles: Vec<f64>,
    #[serde(default)]
    pub details: Vec<HistogramDetailJson>,
}

#[derive(Debug, Deserialize)]
pub struct HistogramDetailJson {
    pub name: String,
    #[serde(default)]
    pub percentiles: Vec<PercentileValue>,
    #[serde(default)]
    pub totals: Vec<RawBucket>,
    #[serde(default)]
    pub intervals: Vec<RawBucket>,
}

impl StatsDocument {
    /// Validates every histogram detail in document order.
    pub fn into_histograms(self) -> Result<Vec<HistogramStat>, StatsError> {
        let mut out = Vec::new();

        for block in self.stats.into_iter().filter_map(|entry| entry.histograms) {
            for detail in block.details {
                out.push(HistogramStat::new(
                    detail.name,
                    block.supported_percentiles.clone(),
                    detail.percentiles,
                    detail.totals,
                    detail.intervals,
                )?);
            }
        }

        tracing::debug!(histograms = out.len(), "parsed stats snapshot");
        Ok(out)
    }
}

pub fn parse_stats(json: &str) -> Result<Vec<HistogramStat>, StatsError> {
    serde_json::from_str::<StatsDocument>(json)?.into_histograms()
}

pub fn parse_stats_reader(reader: impl Read) -> Result<Vec<HistogramStat>, StatsError> {
    serde_json::from_reader::<_, StatsDocument>(reader)?.into_histograms()
}
