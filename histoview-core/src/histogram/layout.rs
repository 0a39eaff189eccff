use crate::histogram::{
    AnnotationComposer, AnnotationKind, BucketCoalescer, CoalescedBucket, DomainMapper,
    ValueRange, bucket_header, format_value, height_fraction,
};
use crate::stats::HistogramStat;
use serde::Serialize;

/// Geometry of one visual bucket. All lengths are fractions of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketGeometry {
    pub bucket: CoalescedBucket,
    pub range: ValueRange,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub kind: AnnotationKind,
    pub value: f64,
    pub left: f64,
    pub label: String,
}

/// Everything a renderer needs to draw one histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramLayout {
    pub name: String,
    pub domain: Option<DomainMapper>,
    pub max_count: u64,
    pub buckets: Vec<BucketGeometry>,
    pub percentile_ticks: Vec<Tick>,
    pub interval_ticks: Vec<Tick>,
}

impl HistogramLayout {
    pub fn compute(stat: &HistogramStat, coalescer: &BucketCoalescer) -> Self {
        let Some(domain) = DomainMapper::from_buckets(stat.total_buckets()) else {
            return Self::empty(stat.name());
        };

        let coalesced = coalescer.coalesce(stat.total_buckets());
        let max_count = coalesced.iter().map(|b| b.count).max().unwrap_or(0);
        let last = coalesced.len().saturating_sub(1);

        let buckets = coalesced
            .into_iter()
            .enumerate()
            .map(|(i, bucket)| BucketGeometry {
                range: bucket.range(i == last),
                left: domain.to_x(bucket.lower_bound),
                width: domain.to_width(bucket.width),
                height: height_fraction(bucket.count, max_count),
                bucket,
            })
            .collect();

        let percentile_ticks = stat
            .percentiles()
            .map(|(percentile, value)| Tick {
                kind: AnnotationKind::Percentile,
                value: value.cumulative,
                left: domain.to_x(value.cumulative),
                label: format!("P{}", format_value(percentile)),
            })
            .collect();

        let interval_ticks = stat
            .interval_buckets()
            .iter()
            .map(|b| Tick {
                kind: AnnotationKind::Interval,
                value: b.lower_bound,
                left: domain.to_x(b.lower_bound),
                label: format!(
                    "Interval [{}, {})",
                    format_value(b.lower_bound),
                    format_value(b.upper_bound())
                ),
            })
            .collect();

        Self {
            name: stat.name().to_string(),
            domain: Some(domain),
            max_count,
            buckets,
            percentile_ticks,
            interval_ticks,
        }
    }

    fn empty(name: &str) -> Self {
        tracing::debug!(histogram = name, "no totals; rendering empty layout");
        Self {
            name: name.to_string(),
            domain: None,
            max_count: 0,
            buckets: Vec::new(),
            percentile_ticks: Vec::new(),
            interval_ticks: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Axis label text per bucket, in bucket order.
    pub fn labels(&self) -> Vec<String> {
        self.buckets
            .iter()
            .map(|g| format_value(g.bucket.lower_bound))
            .collect()
    }

    /// Popup content for bucket `index`, or `None` if out of range.
    pub fn popup_entries(&self, stat: &HistogramStat, index: usize) -> Option<Vec<String>> {
        let geometry = self.buckets.get(index)?;
        Some(AnnotationComposer::new(stat).popup_entries(&geometry.bucket, &geometry.range))
    }

    pub fn headers(&self) -> Vec<String> {
        self.buckets.iter().map(|g| bucket_header(&g.bucket)).collect()
    }
}
