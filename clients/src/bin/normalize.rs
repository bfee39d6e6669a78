//! `qb-normalize`: materializes the facts an abbreviated cube leaves
//! implicit and writes the result as N-Triples.
//!
//! **Usage:**
//! ```
//! qb-normalize <input> [--out <file>]
//! ```
//!
//! Writes to stdout unless `--out` is given. Per-phase counts go to stderr.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use qb_conformance::normalize;
use qb_store::{load_path, to_ntriples};

/// Normalize an RDF Data Cube document.
#[derive(Parser)]
#[command(
    name = "qb-normalize",
    about = "Apply RDF Data Cube normalization and write N-Triples"
)]
struct Args {
    /// Turtle (.ttl) or N-Triples (.nt) input.
    input: PathBuf,

    /// Output file (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    qb_clients::init_logging(args.verbose);

    let mut graph = load_path(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;
    let before = graph.len();
    let stats = normalize(&mut graph);

    eprintln!(
        "{}: {} triples, +{} type/property closure, +{} attachment push-down",
        args.input.display(),
        before,
        stats.type_closure,
        stats.push_down
    );

    let nt = to_ntriples(&graph);
    match &args.out {
        Some(path) => {
            fs::write(path, &nt).with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("  Written: {}", path.display());
        }
        None => io::stdout()
            .lock()
            .write_all(nt.as_bytes())
            .context("Failed to write to stdout")?,
    }
    Ok(())
}
