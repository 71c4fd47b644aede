use std::path::PathBuf;

use ozinfo_model::{DataType, Loop};
use ozinfo_output::GenerationReport;

#[derive(Debug)]
pub struct RunResult {
    pub cycle: String,
    pub outer_loop: Loop,
    pub data_type: DataType,
    pub diag_dir: PathBuf,
    /// Rows read from the ozinfo table.
    pub entries: usize,
    pub report: GenerationReport,
}
