use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to decode stats JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error(
        "histogram '{histogram}' has {values} percentile values for {definitions} supported percentiles"
    )]
    PercentileMismatch {
        histogram: String,
        definitions: usize,
        values: usize,
    },

    #[error("histogram '{histogram}' has a non-finite value in {field}[{index}]")]
    NonFinite {
        histogram: String,
        field: &'static str,
        index: usize,
    },

    #[error("histogram '{histogram}' has non-positive width {width} in {field}[{index}]")]
    NonPositiveWidth {
        histogram: String,
        field: &'static str,
        index: usize,
        width: f64,
    },

    #[error("histogram '{histogram}' lower bounds are not strictly increasing at {field}[{index}]")]
    Unordered {
        histogram: String,
        field: &'static str,
        index: usize,
    },

    #[error("histogram '{histogram}' bucket {field}[{index}] overlaps the previous bucket")]
    Overlapping {
        histogram: String,
        field: &'static str,
        index: usize,
    },
}
