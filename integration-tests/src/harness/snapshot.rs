use serde_json::{Value, json};
use std::path::PathBuf;

/// Reads a file from `fixtures/`.
pub fn fixture(file: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file);

    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

/// A snapshot holding one histogram `h1` with the given totals and the
/// standard ten percentiles and two interval buckets.
pub fn histogram_json(totals: Value) -> String {
    json!({"stats": [{
        "histograms": {
            "supported_percentiles": [0, 25, 50, 75, 90, 95, 99, 99.5, 99.9, 100],
            "details": [{
                "name": "h1",
                "percentiles": [
                    {"cumulative": 200, "interval": 200},
                    {"cumulative": 207.5, "interval": 207.5},
                    {"cumulative": 302.5, "interval": 302.5},
                    {"cumulative": 306.25, "interval": 306.25},
                    {"cumulative": 308.5, "interval": 308.5},
                    {"cumulative": 309.25, "interval": 309.25},
                    {"cumulative": 309.85, "interval": 309.85},
                    {"cumulative": 309.925, "interval": 309.925},
                    {"cumulative": 309.985, "interval": 309.985},
                    {"cumulative": 310, "interval": 310}
                ],
                "totals": totals,
                "intervals": [
                    {"lower_bound": 200, "width": 10, "count": 1},
                    {"lower_bound": 300, "width": 10, "count": 2}
                ]
            }]
        }
    }]})
    .to_string()
}

/// `n` buckets of width 10 spaced 100 apart, one sample each.
pub fn spaced_totals(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| json!({"lower_bound": i * 100, "width": 10, "count": 1}))
            .collect(),
    )
}
