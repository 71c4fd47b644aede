use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ozinfo_model::TOTAL_COLUMN_LAYER;
use ozinfo_cli::types::RunResult;

pub fn print_written(result: &RunResult) {
    for document in &result.report.written {
        println!("YAML written to {}", document.output_path.display());
    }
}

pub fn print_summary(result: &RunResult) {
    println!("Cycle: {} ({})", result.cycle, result.outer_loop);
    println!("Diags: {}", result.diag_dir.display());
    println!("Data type: {}", result.data_type);
    println!("Ozinfo entries: {}", result.entries);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sensor"),
        header_cell("Layers"),
        header_cell("Diag file"),
        header_cell("Output"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for document in &result.report.written {
        table.add_row(vec![
            Cell::new(&document.sensor)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            layer_cell(&document.layers),
            Cell::new(file_name(&document.diag_path)),
            Cell::new(document.output_path.display()),
        ]);
    }
    for sensor in &result.report.skipped {
        table.add_row(vec![
            dim_cell(sensor),
            dim_cell("-"),
            dim_cell("missing"),
            dim_cell("-"),
        ]);
    }
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Layer count, flagging a total-column layer.
fn layer_cell(layers: &[i32]) -> Cell {
    if layers.is_empty() {
        return Cell::new(0).fg(Color::Yellow);
    }
    if layers.contains(&TOTAL_COLUMN_LAYER) {
        Cell::new(format!("{} (+TC)", layers.len()))
    } else {
        Cell::new(layers.len())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
