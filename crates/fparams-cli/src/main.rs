//! fparams CLI: one-line-or-one-per-line layout checks for Go signatures.
//!
//! ## Usage
//!
//! ```bash
//! fparams check ./...             # or: fparams check src/ main.go
//! fparams check --format json .
//! fparams fix .                   # rewrite offending signatures in place
//! ```
//!
//! Exit codes: 0 clean, 1 issues found, 2 usage or I/O failure.

mod discover;
mod error;
mod output;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fparams::{analyze_source, apply_fixes, AnalyzerConfig, FparamsError};

use error::CliResult;
use output::{print_reports, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "fparams", version, about = "Checks that Go function parameters and return values are all on one line or each on their own line")]
struct Cli {
    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress the summary line.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report layout violations without modifying anything.
    Check(CheckArgs),
    /// Rewrite offending signatures in place.
    Fix(FixArgs),
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Files or directories to check; directories are walked for .go files.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    #[command(flatten)]
    rule: RuleArgs,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct FixArgs {
    /// Files or directories to fix; directories are walked for .go files.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    #[command(flatten)]
    rule: RuleArgs,
}

/// Rule toggles, named after the original analyzer flags.
#[derive(Debug, Args)]
struct RuleArgs {
    /// Disable the parameter-list check.
    #[arg(long = "disable-check-func-params")]
    disable_check_func_params: bool,

    /// Disable the return-value-list check.
    #[arg(long = "disable-check-func-returns")]
    disable_check_func_returns: bool,
}

impl RuleArgs {
    fn to_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            check_params: !self.disable_check_func_params,
            check_returns: !self.disable_check_func_returns,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Run the selected command; returns the number of unresolved issues.
fn run(cli: &Cli) -> CliResult<usize> {
    match &cli.command {
        Commands::Check(args) => run_check(args, cli.quiet),
        Commands::Fix(args) => run_fix(args, cli.quiet),
    }
}

fn run_check(args: &CheckArgs, quiet: bool) -> CliResult<usize> {
    let config = args.rule.to_config();
    let files = discover::collect_go_files(&args.paths)?;
    tracing::info!(files = files.len(), "checking signature layout");

    let mut reports = Vec::with_capacity(files.len());
    for file in &files {
        reports.push(fparams::analyze_file(file, &config)?);
    }
    print_reports(&reports, args.format, quiet)
}

fn run_fix(args: &FixArgs, quiet: bool) -> CliResult<usize> {
    let config = args.rule.to_config();
    let files = discover::collect_go_files(&args.paths)?;

    let mut fixed_files = 0usize;
    let mut fixed_signatures = 0usize;
    for file in &files {
        let source = fs::read_to_string(file)
            .map_err(|e| FparamsError::io(file.display().to_string(), e))?;
        let report = analyze_source(&file.display().to_string(), &source, &config);
        if !report.has_diagnostics() {
            continue;
        }
        let rewritten = apply_fixes(&source, &report.diagnostics)?;
        fs::write(file, rewritten)?;
        fixed_files += 1;
        fixed_signatures += report.diagnostics.len();
        tracing::debug!(path = %file.display(), count = report.diagnostics.len(), "rewrote file");
    }

    if !quiet {
        eprintln!("fixed {fixed_signatures} signature(s) in {fixed_files} file(s)");
    }
    Ok(0)
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fparams={level},fparams_cli={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
