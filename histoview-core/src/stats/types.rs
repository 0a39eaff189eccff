use crate::stats::StatsError;
use serde::{Deserialize, Serialize};

/// One bucket as reported by the server: `[lower_bound, lower_bound + width)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawBucket {
    pub lower_bound: f64,
    pub width: f64,
    pub count: u64,
}

impl RawBucket {
    pub fn new(lower_bound: f64, width: f64, count: u64) -> Self {
        Self {
            lower_bound,
            width,
            count,
        }
    }

    pub fn upper_bound(&self) -> f64 {
        self.lower_bound + self.width
    }
}

/// A percentile figure reported twice: since process start and for the
/// current measurement window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileValue {
    pub cumulative: f64,
    pub interval: f64,
}

/// A validated histogram snapshot.
///
/// Construction checks that percentile definitions and values line up and
/// that both bucket sequences are well formed, so downstream layout code can
/// index freely.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramStat {
    name: String,
    supported_percentiles: Vec<f64>,
    percentile_values: Vec<PercentileValue>,
    total_buckets: Vec<RawBucket>,
    interval_buckets: Vec<RawBucket>,
}

impl HistogramStat {
    pub fn new(
        name: impl Into<String>,
        supported_percentiles: Vec<f64>,
        percentile_values: Vec<PercentileValue>,
        total_buckets: Vec<RawBucket>,
        interval_buckets: Vec<RawBucket>,
    ) -> Result<Self, StatsError> {
        let name = name.into();

        if supported_percentiles.len() != percentile_values.len() {
            return Err(StatsError::PercentileMismatch {
                histogram: name,
                definitions: supported_percentiles.len(),
                values: percentile_values.len(),
            });
        }

        if let Some(index) = supported_percentiles.iter().position(|p| !p.is_finite()) {
            return Err(StatsError::NonFinite {
                histogram: name,
                field: "supported_percentiles",
                index,
            });
        }

        if let Some(index) = percentile_values
            .iter()
            .position(|v| !v.cumulative.is_finite() || !v.interval.is_finite())
        {
            return Err(StatsError::NonFinite {
                histogram: name,
                field: "percentiles",
                index,
            });
        }

        validate_buckets(&name, "totals", &total_buckets)?;
        validate_buckets(&name, "intervals", &interval_buckets)?;

        Ok(Self {
            name,
            supported_percentiles,
            percentile_values,
            total_buckets,
            interval_buckets,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn supported_percentiles(&self) -> &[f64] {
        &self.supported_percentiles
    }

    pub fn percentile_values(&self) -> &[PercentileValue] {
        &self.percentile_values
    }

    /// Percentile definitions paired with their values, in definition order.
    pub fn percentiles(&self) -> impl Iterator<Item = (f64, &PercentileValue)> {
        self.supported_percentiles
            .iter()
            .copied()
            .zip(self.percentile_values.iter())
    }

    pub fn total_buckets(&self) -> &[RawBucket] {
        &self.total_buckets
    }

    pub fn interval_buckets(&self) -> &[RawBucket] {
        &self.interval_buckets
    }
}

fn validate_buckets(
    histogram: &str,
    field: &'static str,
    buckets: &[RawBucket],
) -> Result<(), StatsError> {
    for (index, bucket) in buckets.iter().enumerate() {
        if !bucket.lower_bound.is_finite() || !bucket.width.is_finite() {
            return Err(StatsError::NonFinite {
                histogram: histogram.to_string(),
                field,
                index,
            });
        }

        if bucket.width <= 0.0 {
            return Err(StatsError::NonPositiveWidth {
                histogram: histogram.to_string(),
                field,
                index,
                width: bucket.width,
            });
        }

        if index > 0 && bucket.lower_bound <= buckets[index - 1].lower_bound {
            return Err(StatsError::Unordered {
                histogram: histogram.to_string(),
                field,
                index,
            });
        }

        if index > 0 && bucket.lower_bound < buckets[index - 1].upper_bound() {
            return Err(StatsError::Overlapping {
                histogram: histogram.to_string(),
                field,
                index,
            });
        }
    }

    Ok(())
}
