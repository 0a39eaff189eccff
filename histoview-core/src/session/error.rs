use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("histogram '{histogram}' has no bucket {index} ({buckets} buckets rendered)")]
    NoSuchBucket {
        histogram: String,
        index: usize,
        buckets: usize,
    },

    #[error("no histogram named '{name}' in snapshot")]
    NoSuchHistogram { name: String },
}
