use crate::conf::HistoviewConfig;
use crate::histogram::HistogramLayout;
use crate::logging::OutputFormat;
use crate::render::{Renderer, html};
use crate::session::render_histograms;
use crate::stats::HistogramStat;
use anyhow::Result;
use std::io::Write;

pub fn run_render(
    stats: Vec<HistogramStat>,
    format: OutputFormat,
    config: &HistoviewConfig,
    out: &mut impl Write,
) -> Result<()> {
    let sessions = render_histograms(stats, &config.view);
    tracing::info!(histograms = sessions.len(), format = ?format, "rendering histograms");

    match format {
        OutputFormat::Html => {
            let roots: Vec<_> = sessions.iter().map(|s| s.view().root()).collect();
            out.write_all(html::render_page("Histograms", &roots).as_bytes())?;
        }

        OutputFormat::Text => {
            let renderer = config.text.renderer();
            for session in &sessions {
                writeln!(out, "{}", renderer.render(session.layout()))?;
            }
        }

        OutputFormat::Json => {
            let layouts: Vec<&HistogramLayout> = sessions.iter().map(|s| s.layout()).collect();
            serde_json::to_writer_pretty(&mut *out, &layouts)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
