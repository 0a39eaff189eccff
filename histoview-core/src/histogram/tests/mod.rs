
use crate::stats::{HistogramStat, PercentileValue, RawBucket};

pub(super) const PERCENTILES: [f64; 10] = [0.0, 25.0, 50.0, 75.0, 90.0, 95.0, 99.0, 99.5, 99.9, 100.0];

pub(super) const CUMULATIVE: [f64; 10] = [
    200.0, 207.5, 302.5, 306.25, 308.5, 309.25, 309.85, 309.925, 309.985, 310.0,
];

/// Two populated regions, `[200, 210)` and `[300, 310)`, with matching interval buckets.
pub(super) fn two_region_stat(totals: Vec<RawBucket>) -> HistogramStat {
    HistogramStat::new(
        "h1",
        PERCENTILES.to_vec(),
        CUMULATIVE
            .iter()
            .map(|&v| PercentileValue {
                cumulative: v,
                interval: v,
            })
            .collect(),
        totals,
        vec![RawBucket::new(200.0, 10.0, 1), RawBucket::new(300.0, 10.0, 2)],
    )
    .unwrap()
}

pub(super) fn two_buckets() -> Vec<RawBucket> {
    vec![RawBucket::new(200.0, 10.0, 1), RawBucket::new(300.0, 10.0, 2)]
}

pub(super) fn spaced_buckets(n: usize) -> Vec<RawBucket> {
    (0..n)
        .map(|i| RawBucket::new(i as f64 * 100.0, 10.0, 1))
        .collect()
}
