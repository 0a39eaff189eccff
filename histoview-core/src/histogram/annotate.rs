use crate::histogram::{CoalescedBucket, ValueRange, format_value};
use crate::stats::{HistogramStat, RawBucket};
use serde::Serialize;
use std::cmp::Ordering;

/// Percentiles sort ahead of intervals at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    Percentile,
    Interval,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub position: f64,
    pub label: String,
}

impl Annotation {
    pub fn percentile(percentile: f64, cumulative: f64) -> Self {
        Self {
            kind: AnnotationKind::Percentile,
            position: cumulative,
            label: format!(
                "P{}: {}",
                format_value(percentile),
                format_value(cumulative)
            ),
        }
    }

    pub fn interval(bucket: &RawBucket) -> Self {
        Self {
            kind: AnnotationKind::Interval,
            position: bucket.lower_bound,
            label: format!(
                "Interval [{}, {}): {}",
                format_value(bucket.lower_bound),
                format_value(bucket.upper_bound()),
                bucket.count
            ),
        }
    }

    fn order(a: &Self, b: &Self) -> Ordering {
        a.position
            .total_cmp(&b.position)
            .then_with(|| a.kind.cmp(&b.kind))
    }
}

/// Header line of a bucket's popup: `[lower, upper)`.
pub fn bucket_header(bucket: &CoalescedBucket) -> String {
    format!(
        "[{}, {})",
        format_value(bucket.lower_bound),
        format_value(bucket.upper_bound())
    )
}

/// Builds popup content for buckets of a single histogram.
pub struct AnnotationComposer<'a> {
    stat: &'a HistogramStat,
}

impl<'a> AnnotationComposer<'a> {
    pub fn new(stat: &'a HistogramStat) -> Self {
        Self { stat }
    }

    /// Percentile and interval markers inside `range`, ascending by position.
    pub fn annotations(&self, range: &ValueRange) -> Vec<Annotation> {
        let percentiles = self
            .stat
            .percentiles()
            .filter(|(_, value)| range.contains(value.cumulative))
            .map(|(percentile, value)| Annotation::percentile(percentile, value.cumulative));

        let intervals = self
            .stat
            .interval_buckets()
            .iter()
            .filter(|b| range.contains(b.lower_bound))
            .map(Annotation::interval);

        let mut out: Vec<Annotation> = percentiles.chain(intervals).collect();
        // Stable, so equal percentiles keep definition order.
        out.sort_by(Annotation::order);
        out
    }

    /// Header followed by every annotation label, as shown in the popup.
    pub fn popup_entries(&self, bucket: &CoalescedBucket, range: &ValueRange) -> Vec<String> {
        let annotations = self.annotations(range);

        let mut entries = Vec::with_capacity(annotations.len() + 1);
        entries.push(bucket_header(bucket));
        entries.extend(annotations.into_iter().map(|a| a.label));
        entries
    }
}
