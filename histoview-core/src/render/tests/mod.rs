
use crate::histogram::{BucketCoalescer, HistogramLayout};
use crate::stats::{HistogramStat, PercentileValue, RawBucket};

pub(super) fn layout() -> HistogramLayout {
    let stat = HistogramStat::new(
        "cluster.upstream_rq_time",
        vec![0.0, 50.0, 100.0],
        vec![
            PercentileValue {
                cumulative: 200.0,
                interval: 200.0,
            },
            PercentileValue {
                cumulative: 302.5,
                interval: 302.5,
            },
            PercentileValue {
                cumulative: 310.0,
                interval: 310.0,
            },
        ],
        vec![RawBucket::new(200.0, 10.0, 1), RawBucket::new(300.0, 10.0, 2)],
        vec![RawBucket::new(300.0, 10.0, 2)],
    )
    .unwrap();

    HistogramLayout::compute(&stat, &BucketCoalescer::default())
}
