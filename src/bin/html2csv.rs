use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use html_table_to_csv::{
    DEFAULT_SELECTOR, GrabError, GrabOptions, GrabReport, OutputTarget, TableSelection,
    grab_tables,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "html2csv",
    version,
    about = "Extract HTML tables read from stdin into CSV"
)]
struct Cli {
    /// Index of table to print, starting at 0. Negative prints all tables.
    #[arg(short = 'n', long = "index", default_value_t = -1, allow_negative_numbers = true)]
    index: i64,

    /// CSS selector identifying tables.
    #[arg(short = 's', long = "selector", default_value = DEFAULT_SELECTOR)]
    selector: String,

    /// Output base path. Writes <base>.csv for one table, <base>_<n>.csv for several.
    #[arg(short = 'o', long = "output", default_value = "")]
    output: String,

    /// Enable verbose warning output.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_options(cli: &Cli) -> GrabOptions {
    GrabOptions {
        selector: cli.selector.clone(),
        table: TableSelection::from_flag(cli.index),
        output: OutputTarget::from_flag(&cli.output),
    }
}

fn log_report(report: &GrabReport, verbose: bool) {
    if report.warnings.is_empty() {
        return;
    }

    eprintln!("warning: {} issue(s) detected", report.warnings.len());
    if verbose {
        for warning in &report.warnings {
            eprintln!(
                "  - {:?} table={:?}: {}",
                warning.code, warning.table_index, warning.message
            );
        }
    }
}

fn run_grab(cli: &Cli) -> Result<GrabReport> {
    let options = parse_options(cli);
    let stdout = io::stdout().lock();
    grab_tables(io::stdin().lock(), stdout, &options)
        .with_context(|| format!("failed to convert tables matching '{}'", options.selector))
}

fn exit_code_for(error: &anyhow::Error) -> u8 {
    error
        .downcast_ref::<GrabError>()
        .map_or(1, GrabError::exit_code)
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("html_table_to_csv=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match run_grab(&cli) {
        Ok(report) => {
            log_report(&report, cli.verbose);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(exit_code_for(&error))
        }
    }
}
