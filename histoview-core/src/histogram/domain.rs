use crate::stats::RawBucket;
use serde::Serialize;

/// Maps absolute values onto the `[0, 1]` horizontal axis of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DomainMapper {
    min: f64,
    max: f64,
}

impl DomainMapper {
    /// Spans the first bucket's lower bound to the last bucket's upper bound.
    /// Returns `None` for an empty sequence; callers render an empty layout.
    pub fn from_buckets(totals: &[RawBucket]) -> Option<Self> {
        let first = totals.first()?;
        let last = totals.last()?;

        Some(Self {
            min: first.lower_bound,
            max: last.upper_bound(),
        })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Normalized horizontal position, clamped to `[0, 1]`.
    pub fn to_x(&self, value: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Fraction of the axis covered by a value range of `width`.
    pub fn to_width(&self, width: f64) -> f64 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        (width / span).clamp(0.0, 1.0)
    }
}

/// Bar height as a fraction of the tallest bar. Zero when nothing was counted.
pub fn height_fraction(count: u64, max_count: u64) -> f64 {
    if max_count == 0 {
        return 0.0;
    }
    count as f64 / max_count as f64
}

/// A bucket's value range. The last bucket of a chart closes its upper edge
/// so the maximum recorded value still lands inside a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub lower: f64,
    pub upper: f64,
    pub upper_inclusive: bool,
}

impl ValueRange {
    pub fn half_open(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            upper_inclusive: false,
        }
    }

    pub fn closed(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            upper_inclusive: true,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if value < self.lower {
            return false;
        }
        if self.upper_inclusive {
            value <= self.upper
        } else {
            value < self.upper
        }
    }
}
