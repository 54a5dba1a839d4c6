// CSV export of result tables.
//
// Output is deterministic: no timestamps, fixed float precision, rows in
// table order. Re-running on the same corpus produces byte-identical files.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::info;

use crate::analysis::{Cell, ResultTable};

/// Neutralize cells a spreadsheet would evaluate as a formula by prefixing a
/// single quote. Cells that already start with a quote are left alone.
pub fn csv_safe_cell(value: String) -> String {
    match value.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => format!("'{value}"),
        _ => value,
    }
}

/// Render one cell. Floats use six decimals; missing cells are empty.
pub fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Int(i) => i.to_string(),
        Cell::Float(f) if f.is_finite() => format!("{f:.6}"),
        Cell::Float(_) | Cell::Missing => String::new(),
        Cell::Text(s) => csv_safe_cell(s.clone()),
    }
}

/// Write a table as CSV to any writer: header row, then one row per record.
pub fn write_table<W: Write>(table: &ResultTable, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);

    if !table.columns().is_empty() {
        wtr.write_record(table.columns().iter().map(|c| csv_safe_cell(c.clone())))
            .context("Failed to write CSV header")?;
    }
    for row in table.rows() {
        wtr.write_record(row.iter().map(format_cell))
            .context("Failed to write CSV row")?;
    }
    wtr.flush().context("Failed to flush CSV writer")?;
    Ok(())
}

/// Write a table as CSV to `path`, creating parent directories.
pub fn write_table_csv(table: &ResultTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file =
        fs::File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_table(table, file)?;
    info!(path = %path.display(), rows = table.len(), "Wrote CSV");
    Ok(())
}
