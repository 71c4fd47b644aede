//! Diagnostic document construction.

use std::path::Path;

use tracing::trace;

use ozinfo_model::{DataType, DiagnosticDocument, OzinfoTable};

/// Builds the document for `sensor`.
///
/// Every table entry of the sensor contributes one bias-corrected layer, in
/// table order. Monitored entries (use flag other than 1) are dropped unless
/// `monitor` is set.
pub fn build_document(
    table: &OzinfoTable,
    sensor: &str,
    diag_path: &Path,
    data_type: DataType,
    monitor: bool,
) -> DiagnosticDocument {
    let mut document = DiagnosticDocument::new(diag_path, data_type);
    for entry in table.entries_for(sensor) {
        if !entry.is_assimilated() && !monitor {
            trace!(sensor, layer = entry.layer, usage = entry.usage, "skipping monitored layer");
            continue;
        }
        document.push_layer(entry.layer);
    }
    document
}
