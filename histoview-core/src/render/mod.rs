//! Binding adapters from [`HistogramLayout`](crate::histogram::HistogramLayout)
//! to something a person can look at.
//!
//! [`TreeRenderer`] builds a headless element tree whose class names are the
//! contract downstream tooling keys off. [`html`] serializes that tree;
//! [`TextRenderer`] draws straight to a terminal string.

mod element;
pub mod html;
mod text;
mod view;

#[cfg(test)]
mod tests;

pub use element::*;
pub use text::{DEFAULT_BAR_WIDTH, DEFAULT_COLOR, TextRenderer};
pub use view::*;

use crate::histogram::HistogramLayout;

pub const HISTOGRAM: &str = "histogram";
pub const HISTOGRAM_NAME: &str = "histogram-name";
pub const HISTOGRAM_GRAPH: &str = "histogram-graph";
pub const HISTOGRAM_BUCKET: &str = "histogram-bucket";
pub const HISTOGRAM_POPUP: &str = "histogram-popup";
pub const HISTOGRAM_POPUP_ENTRY: &str = "histogram-popup-entry";
pub const HISTOGRAM_ANNOTATIONS: &str = "histogram-annotations";
pub const HISTOGRAM_PERCENTILE: &str = "histogram-percentile";
pub const HISTOGRAM_INTERVAL: &str = "histogram-interval";
pub const HISTOGRAM_LABELS: &str = "histogram-labels";
pub const HISTOGRAM_LABEL: &str = "histogram-label";

pub trait Renderer {
    type Output;

    fn render(&self, layout: &HistogramLayout) -> Self::Output;
}
