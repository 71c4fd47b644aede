//! Parsed ozinfo entries and the level-normalized table.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Layer value marking a total-column (full-column aggregate) entry.
pub const TOTAL_COLUMN_LAYER: i32 = 0;

/// Use flag of an assimilated entry. Anything else is monitor-only.
pub const ASSIMILATED_USAGE: i32 = 1;

/// Use flag of a monitored entry.
pub const MONITORED_USAGE: i32 = -1;

/// One row of an ozinfo table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Sensor tag used in diagnostic file names (e.g. `sbuv2_n19`).
    pub sensor: String,
    /// Vertical layer index, `0` after normalization for total column.
    pub layer: i32,
    /// `1` for assimilated, `-1` for monitored.
    pub usage: i32,
}

impl Entry {
    pub fn new(sensor: impl Into<String>, layer: i32, usage: i32) -> Self {
        Self {
            sensor: sensor.into(),
            layer,
            usage,
        }
    }

    /// Returns true if the entry is assimilated rather than monitored.
    pub fn is_assimilated(&self) -> bool {
        self.usage == ASSIMILATED_USAGE
    }

    pub fn is_total_column(&self) -> bool {
        self.layer == TOTAL_COLUMN_LAYER
    }
}

/// Ordered ozinfo entries.
///
/// The table is built once by the reader and handed to the document builder;
/// entries keep the order they had in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OzinfoTable {
    entries: Vec<Entry>,
}

impl OzinfoTable {
    /// Builds a table from raw entries without normalizing levels.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Builds a table and applies [`OzinfoTable::normalize_levels`].
    pub fn normalized(entries: Vec<Entry>) -> Self {
        let mut table = Self::from_entries(entries);
        table.normalize_levels();
        table
    }

    /// Rewrites the layer of every entry whose successor's layer is not
    /// strictly greater to [`TOTAL_COLUMN_LAYER`].
    ///
    /// The pass is positional over the whole table: a sensor's last layer is
    /// zeroed when the next sensor restarts its numbering, and the final entry
    /// is never touched.
    pub fn normalize_levels(&mut self) {
        for index in 0..self.entries.len().saturating_sub(1) {
            let next = self.entries[index + 1].layer;
            let current = &mut self.entries[index];
            if next <= current.layer {
                current.layer = TOTAL_COLUMN_LAYER;
            }
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sensors(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.sensor.as_str()).collect()
    }

    pub fn layers(&self) -> Vec<i32> {
        self.entries.iter().map(|e| e.layer).collect()
    }

    pub fn usages(&self) -> Vec<i32> {
        self.entries.iter().map(|e| e.usage).collect()
    }

    /// Distinct sensor tags in sorted order.
    pub fn unique_sensors(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.sensor.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Entries belonging to `sensor`, in table order.
    pub fn entries_for<'a>(&'a self, sensor: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |e| e.sensor == sensor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, i32, i32)]) -> OzinfoTable {
        OzinfoTable::normalized(
            rows.iter()
                .map(|(sensor, layer, usage)| Entry::new(*sensor, *layer, *usage))
                .collect(),
        )
    }

    #[test]
    fn increasing_layers_are_kept() {
        let t = table(&[("sbuv2_n19", 1, 1), ("sbuv2_n19", 2, 1), ("sbuv2_n19", 3, -1)]);
        assert_eq!(t.layers(), vec![1, 2, 3]);
    }

    #[test]
    fn last_layer_before_restart_becomes_total_column() {
        let t = table(&[
            ("sbuv2_n19", 1, 1),
            ("sbuv2_n19", 2, 1),
            ("sbuv2_n19", 3, 1),
            ("omi_aura", 1, 1),
        ]);
        assert_eq!(t.layers(), vec![1, 2, 0, 1]);
    }

    #[test]
    fn single_layer_sensors_collapse_to_total_column() {
        let t = table(&[("gome_metop-b", 1, 1), ("omi_aura", 1, 1), ("ompstc8_npp", 1, -1)]);
        assert_eq!(t.layers(), vec![0, 0, 1]);
    }

    #[test]
    fn comparison_uses_unmodified_successor() {
        // 5 -> 5 zeroes the first, then 5 -> 6 leaves the second alone
        let t = table(&[("a", 5, 1), ("a", 5, 1), ("a", 6, 1)]);
        assert_eq!(t.layers(), vec![0, 5, 6]);
    }

    #[test]
    fn empty_and_single_tables_are_unchanged() {
        assert!(table(&[]).is_empty());
        assert_eq!(table(&[("a", 7, 1)]).layers(), vec![7]);
    }

    #[test]
    fn unique_sensors_are_sorted_and_deduplicated() {
        let t = table(&[("omi_aura", 1, 1), ("gome_metop-b", 1, 1), ("omi_aura", 2, 1)]);
        assert_eq!(t.unique_sensors(), vec!["gome_metop-b", "omi_aura"]);
    }

    #[test]
    fn entries_for_keeps_table_order() {
        let t = table(&[("a", 1, 1), ("b", 1, 1), ("a", 2, -1)]);
        let usages: Vec<i32> = t.entries_for("a").map(|e| e.usage).collect();
        assert_eq!(usages, vec![1, -1]);
    }
}
