
use crate::stats::{HistogramStat, parse_stats};

pub(super) const SNAPSHOT: &str = r#"{"stats": [{"histograms": {
  "supported_percentiles": [0, 50, 100],
  "details": [{
    "name": "downstream_rq_time",
    "percentiles": [
      {"cumulative": 1, "interval": 1},
      {"cumulative": 12.5, "interval": 12},
      {"cumulative": 20, "interval": 20}
    ],
    "totals": [
      {"lower_bound": 1, "width": 1, "count": 4},
      {"lower_bound": 10, "width": 10, "count": 2}
    ],
    "intervals": [{"lower_bound": 10, "width": 10, "count": 1}]
  }]
}}]}"#;

pub(super) fn stats() -> Vec<HistogramStat> {
    parse_stats(SNAPSHOT).unwrap()
}
