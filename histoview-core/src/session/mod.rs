//! A rendered histogram together with its hover behavior.
//!
//! Each session owns its own view and tooltip controller, so sessions built
//! from the same snapshot never share mutable state.

mod error;

#[cfg(test)]
mod tests;

pub use error::SessionError;

use crate::conf::ViewConfig;
use crate::histogram::HistogramLayout;
use crate::render::{HistogramView, Renderer, TreeRenderer};
use crate::stats::HistogramStat;
use crate::tooltip::{TooltipController, TooltipState};
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct HistogramSession {
    stat: HistogramStat,
    layout: HistogramLayout,
    view: HistogramView,
    tooltip: TooltipController,
}

impl HistogramSession {
    pub fn new(stat: HistogramStat, config: &ViewConfig) -> Self {
        let layout = HistogramLayout::compute(&stat, &config.coalescer());
        let view = TreeRenderer.render(&layout);

        Self {
            stat,
            layout,
            view,
            tooltip: TooltipController::new(config.hide_delay()),
        }
    }

    pub fn name(&self) -> &str {
        self.stat.name()
    }

    pub fn stat(&self) -> &HistogramStat {
        &self.stat
    }

    pub fn layout(&self) -> &HistogramLayout {
        &self.layout
    }

    pub fn view(&self) -> &HistogramView {
        &self.view
    }

    pub fn tooltip_state(&self) -> TooltipState {
        self.tooltip.state()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.tooltip.next_deadline()
    }

    pub fn bucket_count(&self) -> usize {
        self.layout.buckets.len()
    }

    /// What hovering bucket `index` would show, without changing state.
    pub fn popup_entries(&self, index: usize) -> Result<Vec<String>, SessionError> {
        self.layout
            .popup_entries(&self.stat, index)
            .ok_or_else(|| self.no_such_bucket(index))
    }

    pub fn pointer_enter(&mut self, index: usize) -> Result<(), SessionError> {
        let entries = self.popup_entries(index)?;
        self.tooltip.pointer_enter(index, &entries, &mut self.view);
        Ok(())
    }

    pub fn pointer_leave(&mut self, index: usize, now: Instant) -> Result<(), SessionError> {
        if index >= self.bucket_count() {
            return Err(self.no_such_bucket(index));
        }
        self.tooltip.pointer_leave(index, now);
        Ok(())
    }

    /// Returns whether the popup was hidden by this call.
    pub fn advance(&mut self, now: Instant) -> bool {
        self.tooltip.advance(now, &mut self.view)
    }

    /// Text of each popup entry currently attached to the popup element.
    pub fn popup_text(&self) -> Vec<String> {
        self.view
            .popup()
            .children
            .iter()
            .map(|c| c.text_content())
            .collect()
    }

    pub fn popup_visible(&self) -> bool {
        self.view.popup().is_visible()
    }

    fn no_such_bucket(&self, index: usize) -> SessionError {
        SessionError::NoSuchBucket {
            histogram: self.stat.name().to_string(),
            index,
            buckets: self.bucket_count(),
        }
    }
}

/// One independent session per histogram, in snapshot order.
pub fn render_histograms(stats: Vec<HistogramStat>, config: &ViewConfig) -> Vec<HistogramSession> {
    stats
        .into_iter()
        .map(|stat| HistogramSession::new(stat, config))
        .collect()
}
