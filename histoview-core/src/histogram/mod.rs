//! The layout half of the histogram view.
//!
//! One render call flows through this module in a single direction:
//!
//! HistogramStat
//! DomainMapper
//! BucketCoalescer
//! AnnotationComposer (per bucket, on hover)
//! HistogramLayout
//!
//! Nothing here knows about elements, HTML or terminals; see [`crate::render`].

mod annotate;
mod coalesce;
mod domain;
mod format;
mod layout;

#[cfg(test)]
mod tests;

pub use annotate::*;
pub use coalesce::*;
pub use domain::*;
pub use format::format_value;
pub use layout::*;
