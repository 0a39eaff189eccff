use crate::conf::load_config;
use clap::Subcommand;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a config file and exit
    Check {
        /// Path to the config file (defaults to `--config`, then histoview.toml)
        path: Option<PathBuf>,
    },
}

pub const DEFAULT_CONFIG_PATH: &str = "histoview.toml";

/// Picks the file `config check` validates: the positional path, then the
/// global `--config` flag, then `histoview.toml`.
pub fn check_path(path: Option<PathBuf>, global: Option<PathBuf>) -> PathBuf {
    path.or(global)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

pub fn check(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let cfg = load_config(path)?;

    writeln!(out, "✔ Config loaded successfully")?;
    writeln!(out, "✔ max_buckets = {}", cfg.view.max_buckets)?;
    writeln!(out, "✔ hide_delay_ms = {}", cfg.view.hide_delay_ms)?;
    writeln!(
        out,
        "✔ text bar_width = {}, color = {}",
        cfg.text.bar_width, cfg.text.color
    )?;
    Ok(())
}
