//! Configuration options for YAML generation.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// GSI outer loop the diagnostics were written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loop {
    /// First guess.
    #[default]
    Ges,
    /// Analysis.
    Anl,
}

impl Loop {
    pub fn as_str(self) -> &'static str {
        match self {
            Loop::Ges => "ges",
            Loop::Anl => "anl",
        }
    }
}

impl fmt::Display for Loop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which quantity the downstream reader should pull from the diag file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variable {
    /// Departures (O-F or O-A depending on the loop).
    #[default]
    Omf,
    /// Observed values.
    Obs,
    /// Simulated observations, H(x).
    Hofx,
}

/// Label written under `data type` in a diagnostic document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Observation,
    Hofx,
    Oma,
    Omf,
}

impl DataType {
    /// Picks the label for a variable; departures depend on the loop.
    pub fn select(variable: Variable, outer_loop: Loop) -> Self {
        match (variable, outer_loop) {
            (Variable::Obs, _) => DataType::Observation,
            (Variable::Hofx, _) => DataType::Hofx,
            (Variable::Omf, Loop::Anl) => DataType::Oma,
            (Variable::Omf, Loop::Ges) => DataType::Omf,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Observation => "observation",
            DataType::Hofx => "hofx",
            DataType::Oma => "oma",
            DataType::Omf => "omf",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a single generation run needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory holding `diag_*` files.
    pub diag_dir: PathBuf,
    /// Cycle timestamp, `YYYYMMDDHH`.
    pub cycle: String,
    /// Path to the ozinfo table.
    pub ozinfo: PathBuf,
    /// Prefix prepended verbatim to every output file name.
    pub output_prefix: String,
    pub outer_loop: Loop,
    pub variable: Variable,
    /// Include monitored (use flag != 1) entries.
    pub monitor: bool,
}

impl GenerateOptions {
    pub fn new(
        diag_dir: impl Into<PathBuf>,
        cycle: impl Into<String>,
        ozinfo: impl Into<PathBuf>,
        output_prefix: impl Into<String>,
    ) -> Self {
        Self {
            diag_dir: diag_dir.into(),
            cycle: cycle.into(),
            ozinfo: ozinfo.into(),
            output_prefix: output_prefix.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_loop(mut self, outer_loop: Loop) -> Self {
        self.outer_loop = outer_loop;
        self
    }

    #[must_use]
    pub fn with_variable(mut self, variable: Variable) -> Self {
        self.variable = variable;
        self
    }

    #[must_use]
    pub fn with_monitor(mut self, enable: bool) -> Self {
        self.monitor = enable;
        self
    }

    /// Data type label implied by the variable and loop.
    pub fn data_type(&self) -> DataType {
        DataType::select(self.variable, self.outer_loop)
    }
}
