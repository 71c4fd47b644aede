//! GSI diagnostic file discovery and naming.

use std::path::{Path, PathBuf};

use tracing::debug;

use ozinfo_model::Loop;

use crate::error::{IngestError, Result};

/// File name prefix shared by all GSI diag files (`diag_*`).
pub const DIAG_PREFIX: &str = "diag_";

/// Width of the `YYYYMMDDHH` cycle at the start of the suffix-bearing fragment.
const CYCLE_WIDTH: usize = 10;

/// Lists all `diag_*` files in a directory.
///
/// Returns files sorted by filename.
pub fn list_diag_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_diag = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(DIAG_PREFIX));
        if is_diag {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Derives the suffix that follows the cycle in every diag file name.
///
/// `diag_omi_aura_ges.2021010100.nc4` gives `.nc4` and
/// `diag_omi_aura_ges.2021010100_ensmean.nc4` gives `_ensmean.nc4`.
pub fn derive_suffix(example: &Path) -> Result<String> {
    let name = example
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let fragments: Vec<&str> = name.split('.').collect();
    let [.., stamped, extension] = fragments.as_slice() else {
        return Err(IngestError::MalformedDiagName { name });
    };
    let tail: String = stamped.chars().skip(CYCLE_WIDTH).collect();
    Ok(format!("{tail}.{extension}"))
}

/// Builds `diag_<sensor>_<loop>.<cycle><suffix>`.
pub fn diag_file_name(sensor: &str, outer_loop: Loop, cycle: &str, suffix: &str) -> String {
    format!("{DIAG_PREFIX}{sensor}_{outer_loop}.{cycle}{suffix}")
}

/// The diag files of one directory together with their shared suffix.
#[derive(Debug, Clone)]
pub struct DiagListing {
    dir: PathBuf,
    files: Vec<PathBuf>,
    suffix: String,
}

impl DiagListing {
    /// Lists `dir` and derives the suffix from the first file.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be read or holds no `diag_*` file.
    pub fn scan(dir: &Path) -> Result<Self> {
        let files = list_diag_files(dir)?;
        let Some(example) = files.first() else {
            return Err(IngestError::NoDiagFiles {
                dir: dir.to_path_buf(),
            });
        };
        let suffix = derive_suffix(example)?;
        debug!(
            dir = %dir.display(),
            files = files.len(),
            example = %example.display(),
            suffix = %suffix,
            "scanned diag directory"
        );
        Ok(Self {
            dir: dir.to_path_buf(),
            files,
            suffix,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Path the diag file for `sensor` would have.
    pub fn expected_path(&self, sensor: &str, outer_loop: Loop, cycle: &str) -> PathBuf {
        self.dir
            .join(diag_file_name(sensor, outer_loop, cycle, &self.suffix))
    }

    /// Expected path for `sensor`, if that file was listed.
    pub fn find(&self, sensor: &str, outer_loop: Loop, cycle: &str) -> Option<PathBuf> {
        let expected = self.expected_path(sensor, outer_loop, cycle);
        self.files.contains(&expected).then_some(expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_suffix_plain() {
        let suffix = derive_suffix(Path::new("/d/diag_sbuv2_n19_ges.2021010100.nc4")).unwrap();
        assert_eq!(suffix, ".nc4");
    }

    #[test]
    fn test_derive_suffix_with_member_tag() {
        let suffix =
            derive_suffix(Path::new("diag_omi_aura_anl.2021010100_ensmean.nc4")).unwrap();
        assert_eq!(suffix, "_ensmean.nc4");
    }

    #[test]
    fn test_derive_suffix_short_stamp() {
        assert_eq!(derive_suffix(Path::new("diag_x.2021.nc4")).unwrap(), ".nc4");
    }

    #[test]
    fn test_derive_suffix_without_dot() {
        let err = derive_suffix(Path::new("diag_nothing")).unwrap_err();
        assert!(matches!(err, IngestError::MalformedDiagName { .. }));
    }

    #[test]
    fn test_diag_file_name_round_trip() {
        let suffix = derive_suffix(Path::new("diag_sensorA_ges.2021010100.nc4")).unwrap();
        assert_eq!(
            diag_file_name("sensorA", Loop::Ges, "2021010100", &suffix),
            "diag_sensorA_ges.2021010100.nc4"
        );
    }
}
