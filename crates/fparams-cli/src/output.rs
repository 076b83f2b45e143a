//! Output formatting for check results.

use clap::ValueEnum;
use console::style;
use fparams::{Diagnostic, FileReport, Severity};

use crate::error::CliResult;

/// Output format for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON reports, one object per file.
    Json,
}

/// Print the reports in the requested format. Returns the total number of
/// diagnostics printed.
pub fn print_reports(reports: &[FileReport], format: OutputFormat, quiet: bool) -> CliResult<usize> {
    let total: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
    match format {
        OutputFormat::Text => {
            for report in reports {
                for diag in &report.diagnostics {
                    print_text_diagnostic(&report.path, diag);
                }
            }
            if !quiet {
                print_summary(reports, total);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(reports)?);
        }
    }
    Ok(total)
}

fn print_text_diagnostic(path: &str, diag: &Diagnostic) {
    let severity = match diag.severity {
        Severity::Error => style("error").red().bold(),
        Severity::Warning => style("warning").yellow().bold(),
        Severity::Info => style("info").cyan(),
    };
    println!(
        "{severity}[{}]: {} ({}:{}:{})",
        diag.rule, diag.message, path, diag.position.line, diag.position.column
    );
    if !diag.fixes.is_empty() {
        println!("  = help: run `fparams fix` to put each entry on its own line");
    }
}

fn print_summary(reports: &[FileReport], total: usize) {
    let files: usize = reports.len();
    let functions: usize = reports.iter().map(|r| r.functions_checked).sum();
    if total == 0 {
        eprintln!(
            "{} {files} file(s), {functions} function(s) checked",
            style("ok").green().bold()
        );
    } else {
        eprintln!(
            "{} {total} issue(s) across {files} file(s)",
            style("found").yellow().bold()
        );
    }
}
