use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ozinfo_ingest::{DiagListing, read_ozinfo};
use ozinfo_model::GenerateOptions;
use ozinfo_output::generate_documents;

use crate::types::RunResult;

pub fn run_generate(options: &GenerateOptions) -> Result<RunResult> {
    let run_span = info_span!(
        "generate",
        cycle = %options.cycle,
        outer_loop = %options.outer_loop
    );
    let _run_guard = run_span.enter();
    let start = Instant::now();

    // =========================================================================
    // Stage 1: Read the ozinfo table
    // =========================================================================
    let table = read_ozinfo(&options.ozinfo)
        .with_context(|| format!("read ozinfo {}", options.ozinfo.display()))?;

    // =========================================================================
    // Stage 2: Scan the diag directory
    // =========================================================================
    let listing = DiagListing::scan(&options.diag_dir)
        .with_context(|| format!("scan diag directory {}", options.diag_dir.display()))?;
    info!(
        files = listing.files().len(),
        suffix = %listing.suffix(),
        "diag files found"
    );

    // =========================================================================
    // Stage 3: Build and write documents
    // =========================================================================
    let report = generate_documents(&table, &listing, options).context("write YAML documents")?;
    info!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        "generation complete"
    );

    Ok(RunResult {
        cycle: options.cycle.clone(),
        outer_loop: options.outer_loop,
        data_type: options.data_type(),
        diag_dir: options.diag_dir.clone(),
        entries: table.len(),
        report,
    })
}
