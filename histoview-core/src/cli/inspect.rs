use crate::conf::HistoviewConfig;
use crate::session::HistogramSession;
use crate::stats::HistogramStat;
use anyhow::Result;
use std::io::Write;

/// Prints what hovering `bucket` would show, one entry per line.
pub fn run_inspect(
    stat: HistogramStat,
    bucket: usize,
    config: &HistoviewConfig,
    out: &mut impl Write,
) -> Result<()> {
    let session = HistogramSession::new(stat, &config.view);

    for entry in session.popup_entries(bucket)? {
        writeln!(out, "{entry}")?;
    }
    Ok(())
}
