use crate::histogram::{HistogramLayout, format_value};
use crate::render::Renderer;
use owo_colors::OwoColorize;

pub const DEFAULT_BAR_WIDTH: usize = 40;
pub const DEFAULT_COLOR: bool = true;

/// Terminal bar chart, one row per visual bucket.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    pub bar_width: usize,
    pub color: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
            color: DEFAULT_COLOR,
        }
    }
}

impl TextRenderer {
    fn cells(&self, height: f64, count: u64) -> usize {
        let cells = (height * self.bar_width as f64).round() as usize;
        // Any non-zero count gets at least one cell so it stays visible.
        let cells = if count > 0 { cells.max(1) } else { 0 };
        cells.min(self.bar_width)
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, layout: &HistogramLayout) -> String {
        let mut out = String::new();

        if self.color {
            out.push_str(&format!("{}\n", layout.name.bold()));
        } else {
            out.push_str(&format!("{}\n", layout.name));
        }

        if layout.is_empty() {
            out.push_str("  <no buckets>\n");
            return out;
        }

        let headers = layout.headers();
        let header_width = headers.iter().map(|h| h.len()).max().unwrap_or(0);

        for (geometry, header) in layout.buckets.iter().zip(&headers) {
            let cells = self.cells(geometry.height, geometry.bucket.count);
            let bar = "█".repeat(cells);
            let bar = if self.color {
                bar.cyan().to_string()
            } else {
                bar
            };
            // Pad by cell count; the bar is multi-byte and may carry escapes.
            let pad = self.bar_width - cells;
            out.push_str(&format!(
                "  {:<hw$}  {}{} {}\n",
                header,
                bar,
                " ".repeat(pad),
                geometry.bucket.count,
                hw = header_width
            ));
        }

        if !layout.percentile_ticks.is_empty() {
            let line: Vec<String> = layout
                .percentile_ticks
                .iter()
                .map(|t| format!("{}={}", t.label, format_value(t.value)))
                .collect();
            out.push_str(&format!("  percentiles: {}\n", line.join(" ")));
        }

        if !layout.interval_ticks.is_empty() {
            let line: Vec<&str> = layout
                .interval_ticks
                .iter()
                .map(|t| t.label.as_str())
                .collect();
            out.push_str(&format!("  intervals: {}\n", line.join(" ")));
        }

        out
    }
}
