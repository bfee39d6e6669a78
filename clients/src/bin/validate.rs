//! `qb-validate`: checks RDF Data Cube documents against IC-1..IC-21.
//!
//! Each input file is loaded into its own in-memory graph, normalized, and
//! validated. Directories are searched for `.ttl` and `.nt` files.
//!
//! **Usage:**
//! ```
//! qb-validate [--config <file>] [--constraint <id>]... [--skip <id>]...
//!             [--format text|json] [--no-normalize] [--sequential] <path>...
//! ```
//!
//! Exits non-zero if any constraint reports a violation.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use qb_clients::config::{FileConfig, OutputFormat, Overrides, RunConfig};
use qb_clients::inputs::collect_inputs;
use qb_conformance::{normalize, validate_with, ValidationSummary};
use tracing::info;

/// Validate RDF Data Cube documents.
#[derive(Parser)]
#[command(
    name = "qb-validate",
    about = "Check RDF Data Cube documents against the 21 integrity constraints"
)]
struct Args {
    /// Turtle (.ttl) or N-Triples (.nt) files, or directories to search.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run only this constraint (repeatable), e.g. IC-12.
    #[arg(long = "constraint", short = 'c')]
    constraints: Vec<String>,

    /// Leave this constraint out (repeatable).
    #[arg(long)]
    skip: Vec<String>,

    /// Report format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Validate the graph as loaded, without normalization.
    #[arg(long)]
    no_normalize: bool,

    /// Evaluate constraints one at a time.
    #[arg(long)]
    sequential: bool,

    /// Log at debug level.
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    qb_clients::init_logging(args.verbose);

    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let run = RunConfig::resolve(
        file,
        Overrides {
            constraints: args.constraints,
            skip: args.skip,
            format: args.format,
            no_normalize: args.no_normalize,
            sequential: args.sequential,
        },
    )?;

    let inputs = collect_inputs(&args.paths)?;
    info!(files = inputs.len(), "validating");

    let mut failed_files = 0usize;
    for path in &inputs {
        let summary = validate_file(path, &run)?;
        match run.format {
            OutputFormat::Text => print_text(path, &summary),
            OutputFormat::Json => print_json(path, &summary)?,
        }
        if !summary.all_passed() {
            failed_files += 1;
        }
    }

    if failed_files > 0 {
        eprintln!(
            "Validation FAILED: {} of {} file(s) violate at least one constraint.",
            failed_files,
            inputs.len()
        );
        process::exit(1);
    }

    if run.format == OutputFormat::Text {
        println!("Validation PASSED.");
    }
    Ok(())
}

fn validate_file(path: &Path, run: &RunConfig) -> Result<ValidationSummary> {
    let mut graph = qb_store::load_path(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    info!(file = %path.display(), triples = graph.len(), "loaded");
    if run.normalize {
        let stats = normalize(&mut graph);
        info!(added = stats.total(), "normalized");
    }
    Ok(validate_with(&graph, &run.options))
}

fn print_text(path: &Path, summary: &ValidationSummary) {
    println!("{}", path.display());
    println!("{}", "=".repeat(path.display().to_string().len()));
    for (id, report) in &summary.reports {
        let status = if report.is_empty() { "PASS" } else { "FAIL" };
        println!("[{}] {} {}", status, id, id.title());
        for (node, detail) in report.iter() {
            println!("       {} -> {}", node.display_compact(), detail.describe());
        }
    }
    println!(
        "Summary: {} constraint(s) checked, {} failed, {} violation(s)",
        summary.reports.len(),
        summary.failure_count(),
        summary.total_violations()
    );
    println!();
}

fn print_json(path: &Path, summary: &ValidationSummary) -> Result<()> {
    let document = serde_json::json!({
        "file": path.display().to_string(),
        "passed": summary.all_passed(),
        "reports": summary.reports,
    });
    let text =
        serde_json::to_string_pretty(&document).context("Failed to serialize report to JSON")?;
    println!("{}", text);
    Ok(())
}
