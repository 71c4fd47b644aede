//! Ozinfo table reading.
//!
//! An ozinfo file is line oriented. Lines starting with `!` are comments; every
//! other line holds whitespace-separated `<sensor> <layer> <use> ...` fields,
//! of which only the first three are read. The first row with fewer than three
//! fields ends the table.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use ozinfo_model::{Entry, OzinfoTable};

use crate::error::{IngestError, Result};

/// Marker starting a comment line.
pub const COMMENT_MARKER: u8 = b'!';

/// Reads and normalizes the ozinfo table at `path`.
pub fn read_ozinfo(path: &Path) -> Result<OzinfoTable> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => IngestError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let table = parse_ozinfo(file, path)?;
    info!(
        path = %path.display(),
        entries = table.len(),
        sensors = table.unique_sensors().len(),
        "read ozinfo table"
    );
    Ok(table)
}

/// Parses ozinfo rows from `reader`. `source` is only used in errors.
pub fn parse_ozinfo<R: Read>(reader: R, source: &Path) -> Result<OzinfoTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(COMMENT_MARKER))
        .from_reader(reader);

    let mut entries = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;
        let line = record.position().map_or(0, csv::Position::line);
        let row = record.get(0).unwrap_or_default();
        match parse_row(row, source, line)? {
            Some(entry) => entries.push(entry),
            None => {
                debug!(line, "short ozinfo row, stopping");
                break;
            }
        }
    }

    Ok(OzinfoTable::normalized(entries))
}

/// Parses one row. Returns `None` when the row has fewer than three fields.
fn parse_row(row: &str, source: &Path, line: u64) -> Result<Option<Entry>> {
    let mut fields = row.split_whitespace();
    let (Some(sensor), Some(layer), Some(usage)) = (fields.next(), fields.next(), fields.next())
    else {
        return Ok(None);
    };
    let layer = parse_int("layer", layer, source, line)?;
    let usage = parse_int("use flag", usage, source, line)?;
    Ok(Some(Entry::new(sensor, layer, usage)))
}

fn parse_int(field: &'static str, value: &str, source: &Path, line: u64) -> Result<i32> {
    value.parse().map_err(|_| IngestError::InvalidValue {
        field,
        value: value.to_string(),
        path: source.to_path_buf(),
        line,
    })
}
