use crate::histogram::ValueRange;
use crate::stats::RawBucket;
use serde::Serialize;
use std::ops::Range;

/// Upper bound on visual buckets per chart; more than this and the axis
/// labels start to overlap.
pub const MAX_BUCKETS: usize = 20;

/// One visual bucket: either a single raw bucket or a merged run of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoalescedBucket {
    pub lower_bound: f64,
    pub width: f64,
    pub count: u64,
    /// Raw bucket indices summarized by this bucket.
    pub source: Range<usize>,
}

impl CoalescedBucket {
    fn merge(start: usize, run: &[RawBucket]) -> Option<Self> {
        let first = run.first()?;
        let last = run.last()?;

        Some(Self {
            lower_bound: first.lower_bound,
            width: last.upper_bound() - first.lower_bound,
            count: run.iter().map(|b| b.count).sum(),
            source: start..start + run.len(),
        })
    }

    pub fn upper_bound(&self) -> f64 {
        self.lower_bound + self.width
    }

    pub fn is_merged(&self) -> bool {
        self.source.len() > 1
    }

    /// Range used for annotation lookup; `last` closes the upper edge.
    pub fn range(&self, last: bool) -> ValueRange {
        if last {
            ValueRange::closed(self.lower_bound, self.upper_bound())
        } else {
            ValueRange::half_open(self.lower_bound, self.upper_bound())
        }
    }
}

/// Reduces an ordered raw bucket sequence to at most `max_buckets` visual
/// buckets.
///
/// Buckets are grouped in runs of `ceil(n / max_buckets)`; the short tail that
/// does not fill a whole run is folded into the last run instead of standing
/// alone. So 250 raw buckets become 19 runs of 13 with the last run holding 16,
/// while 100, 200, 400, 500 and 1000 divide evenly into 20.
#[derive(Debug, Clone, Copy)]
pub struct BucketCoalescer {
    max_buckets: usize,
}

impl Default for BucketCoalescer {
    fn default() -> Self {
        Self::new(MAX_BUCKETS)
    }
}

impl BucketCoalescer {
    pub fn new(max_buckets: usize) -> Self {
        Self {
            max_buckets: max_buckets.max(1),
        }
    }

    pub fn max_buckets(&self) -> usize {
        self.max_buckets
    }

    /// Raw buckets per visual bucket for an input of `n`.
    pub fn group_size(&self, n: usize) -> usize {
        if n <= self.max_buckets {
            1
        } else {
            n.div_ceil(self.max_buckets)
        }
    }

    /// Number of visual buckets produced for an input of `n`.
    pub fn group_count(&self, n: usize) -> usize {
        n / self.group_size(n)
    }

    pub fn coalesce(&self, raw: &[RawBucket]) -> Vec<CoalescedBucket> {
        let n = raw.len();
        let size = self.group_size(n);
        let groups = self.group_count(n);

        let mut out = Vec::with_capacity(groups);
        for group in 0..groups {
            let start = group * size;
            let end = if group + 1 == groups { n } else { start + size };
            out.extend(CoalescedBucket::merge(start, &raw[start..end]));
        }

        if size > 1 {
            tracing::debug!(
                raw = n,
                group_size = size,
                buckets = out.len(),
                "coalesced histogram buckets"
            );
        }

        out
    }
}
