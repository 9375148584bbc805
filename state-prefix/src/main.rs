//! Print the S3 location of a packaged serverless deployment.
//!
//! Reads `dist/serverless-state.json` from the working directory and writes
//! `s3://<bucket>/<prefix>` as a single line on stdout.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use state_prefix::exit_codes;
use state_prefix::io::config::OutputFormat;
use state_prefix::logging;
use state_prefix::report::{ReportRequest, report_from_root};

#[derive(Parser, Debug)]
#[command(
    name = "state-prefix",
    version,
    about = "Print s3://<bucket>/<prefix> from a serverless deployment state file"
)]
struct Cli {
    /// State file to read [default: dist/serverless-state.json].
    #[arg(long, value_name = "PATH")]
    state: Option<PathBuf>,
    /// TOML config file. Not read unless given; must exist when given.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output format [default: text].
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::FAILURE);
    }
}

fn run(cli: Cli) -> Result<()> {
    let request = ReportRequest {
        state_path: cli.state,
        config_path: cli.config,
        format: cli.format,
    };
    let report = report_from_root(Path::new("."), &request)?;
    let line = report.render()?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{line}").context("write report to stdout")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}
