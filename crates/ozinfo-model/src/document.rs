//! Diagnostic document written for each sensor.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::options::DataType;

/// Top-level YAML document: a single `diagnostic` mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticDocument {
    pub diagnostic: Diagnostic,
}

/// Field order here is the key order in the written YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    #[serde(rename = "data type")]
    pub data_type: DataType,
    pub ozone: Vec<LayerDescriptor>,
}

/// One layer to process. Both fields are single-element lists in the
/// downstream format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDescriptor {
    pub layer: Vec<i32>,
    #[serde(rename = "bias correction")]
    pub bias_correction: Vec<bool>,
}

impl LayerDescriptor {
    /// Descriptor for `layer` with bias correction enabled.
    pub fn bias_corrected(layer: i32) -> Self {
        Self {
            layer: vec![layer],
            bias_correction: vec![true],
        }
    }
}

impl DiagnosticDocument {
    pub fn new(path: impl Into<PathBuf>, data_type: DataType) -> Self {
        Self {
            diagnostic: Diagnostic {
                path: path.into(),
                data_type,
                ozone: Vec::new(),
            },
        }
    }

    pub fn push_layer(&mut self, layer: i32) {
        self.diagnostic
            .ozone
            .push(LayerDescriptor::bias_corrected(layer));
    }

    /// Layers listed in the document, in order.
    pub fn layers(&self) -> Vec<i32> {
        self.diagnostic
            .ozone
            .iter()
            .flat_map(|d| d.layer.iter().copied())
            .collect()
    }
}
