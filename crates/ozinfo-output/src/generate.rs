//! Per-sensor generation loop.

use std::path::PathBuf;

use tracing::{debug, info, info_span};

use ozinfo_ingest::DiagListing;
use ozinfo_model::{GenerateOptions, OzinfoTable};

use crate::builder::build_document;
use crate::error::Result;
use crate::writer::{output_path, write_document};

/// A document that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub sensor: String,
    pub diag_path: PathBuf,
    pub output_path: PathBuf,
    pub layers: Vec<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub written: Vec<GeneratedDocument>,
    /// Sensors with no diag file for this loop and cycle.
    pub skipped: Vec<String>,
}

/// Writes one document per sensor that has a listed diag file.
///
/// Sensors without a diag file are recorded as skipped. The first write
/// failure aborts the loop; documents already written stay on disk.
pub fn generate_documents(
    table: &OzinfoTable,
    listing: &DiagListing,
    options: &GenerateOptions,
) -> Result<GenerationReport> {
    let data_type = options.data_type();
    let mut report = GenerationReport::default();

    for sensor in table.unique_sensors() {
        let span = info_span!("sensor", sensor);
        let _guard = span.enter();

        let Some(diag_path) = listing.find(sensor, options.outer_loop, &options.cycle) else {
            debug!("no diag file, skipping");
            report.skipped.push(sensor.to_string());
            continue;
        };

        let document = build_document(table, sensor, &diag_path, data_type, options.monitor);
        let output = output_path(&options.output_prefix, &diag_path);
        write_document(&document, sensor, &output)?;
        info!(
            output = %output.display(),
            layers = document.diagnostic.ozone.len(),
            "YAML written"
        );

        report.written.push(GeneratedDocument {
            sensor: sensor.to_string(),
            layers: document.layers(),
            diag_path,
            output_path: output,
        });
    }

    Ok(report)
}
