//! helioselene-verify - recheck Helios/Selene test vectors
//!
//! Loads a JSON vector document, recomputes every claimed result with the
//! oracle's own arithmetic, and prints a per-vector PASS/FAIL/SKIP report.
//! Exit code 0 means every vector agreed, 1 means at least one diverged,
//! 2 means the document itself could not be processed.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use helioselene_oracle_core::{run_document, CheckStatus, RunReport, VectorDocument};

/// Independent verification oracle for Helios/Selene test vectors
#[derive(Parser)]
#[command(name = "helioselene-verify")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON vector document
    vectors: PathBuf,

    /// Only print failures and the summary
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match run(&cli) {
        Ok(report) => {
            print_report(&report, cli.quiet);
            if report.tally().failed == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold());
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<RunReport> {
    let doc = VectorDocument::from_path(&cli.vectors)
        .with_context(|| format!("failed to load vector document {:?}", cli.vectors))?;
    run_document(&doc).context("vector document could not be checked")
}

fn print_report(report: &RunReport, quiet: bool) {
    for section in &report.sections {
        let failures = section.records.iter().any(|r| r.status == CheckStatus::Fail);
        if !quiet || failures {
            println!("=== {} ===", style(&section.name).bold());
        }
        for record in &section.records {
            match record.status {
                CheckStatus::Pass => {
                    if !quiet {
                        println!("  {} {}", style("PASS:").green(), record.label);
                    }
                }
                CheckStatus::Fail => {
                    println!("  {} {}", style("FAIL:").red().bold(), record.label);
                    if let Some(detail) = &record.detail {
                        println!("    {detail}");
                    }
                }
                CheckStatus::Skip => {
                    if !quiet {
                        let reason = record.detail.as_deref().unwrap_or("skipped");
                        println!("  {} {} ({reason})", style("SKIP:").yellow(), record.label);
                    }
                }
            }
        }
    }

    let tally = report.tally();
    println!("{}", "=".repeat(60));
    println!(
        "Total: {}  Passed: {}  Failed: {}  Skipped: {}",
        tally.total(),
        tally.passed,
        tally.failed,
        tally.skipped
    );
    if tally.failed == 0 {
        println!("{}", style("ALL TESTS PASSED").green().bold());
    } else {
        println!(
            "{}",
            style(format!("*** {} FAILURE(S) ***", tally.failed)).red().bold()
        );
    }
}
