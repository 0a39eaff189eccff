use anyhow::Context;
use clap::{Parser, Subcommand};
use histoview_core::cli::{self, config::ConfigCmd};
use histoview_core::conf::load_config_or_default;
use histoview_core::logging::{OutputFormat, default_output_format, init_logging};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "histoview",
    version,
    about = "Histoview: render latency histograms from stats snapshots"
)]
struct Cli {
    /// Path to a histoview.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every histogram in a stats snapshot
    Render {
        /// Stats JSON file, or `-` for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Output format (text on a terminal, html otherwise)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the popup a hover over one bucket would show
    Inspect {
        input: PathBuf,

        #[arg(long)]
        histogram: Option<String>,

        #[arg(long)]
        bucket: usize,
    },

    /// Replay pointer events (JSON lines on stdin) against one histogram
    Replay {
        input: PathBuf,

        #[arg(long)]
        histogram: Option<String>,
    },

    /// Config file tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    if let Err(e) = run(cli) {
        eprintln!("histoview error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.command {
        Command::Config {
            cmd: ConfigCmd::Check { path },
        } => cli::config::check(&cli::config::check_path(path, args.config), &mut out),

        Command::Render { input, format } => {
            let config = load_config_or_default(args.config.as_deref())?;
            let stats = cli::load_snapshot(&input)?;
            let format = format.unwrap_or_else(default_output_format);
            cli::run_render(stats, format, &config, &mut out)
        }

        Command::Inspect {
            input,
            histogram,
            bucket,
        } => {
            let config = load_config_or_default(args.config.as_deref())?;
            let stat = cli::select_histogram(cli::load_snapshot(&input)?, histogram.as_deref())?;
            cli::run_inspect(stat, bucket, &config, &mut out)
        }

        Command::Replay { input, histogram } => {
            anyhow::ensure!(
                input.as_path() != Path::new("-"),
                "replay reads pointer events from stdin; pass the snapshot as a file"
            );
            let config = load_config_or_default(args.config.as_deref())?;
            let stat = cli::select_histogram(cli::load_snapshot(&input)?, histogram.as_deref())
                .context("failed to select histogram for replay")?;
            tracing::info!(histogram = stat.name(), "replaying pointer events");

            let stdin = io::stdin();
            cli::run_replay(stat, &config, stdin.lock(), &mut out)
        }
    }
}
