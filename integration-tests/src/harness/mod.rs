mod snapshot;
pub mod tracing;

pub use self::snapshot::{fixture, histogram_json, spaced_totals};
pub use self::tracing::{CapturedEvent, init_test_tracing};
