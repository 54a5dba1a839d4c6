// Result table: ordered rows of typed cells under named columns.
//
// Columns are discovered from the rows pushed into the table, in first-seen
// order. A row that lacks a column gets a Missing cell. This makes the
// cross-sector concatenation trivial even though sectors carry different
// marker_* columns.

use std::collections::HashMap;

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl Cell {
    /// Numeric value of Int and Float cells.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            Cell::Text(_) | Cell::Missing => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Option<String>> for Cell {
    fn from(value: Option<String>) -> Self {
        value.map(Cell::Text).unwrap_or(Cell::Missing)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Cell>>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Append a row of named cells. Unknown names become new columns
    /// (earlier rows get Missing); columns absent from the row get Missing.
    pub fn push_row<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = (String, Cell)>,
    {
        let mut row = vec![Cell::Missing; self.columns.len()];
        for (name, cell) in cells {
            let idx = match self.index.get(&name) {
                Some(&idx) => idx,
                None => {
                    let idx = self.columns.len();
                    self.index.insert(name.clone(), idx);
                    self.columns.push(name);
                    for existing in &mut self.rows {
                        existing.push(Cell::Missing);
                    }
                    row.push(Cell::Missing);
                    idx
                }
            };
            row[idx] = cell;
        }
        self.rows.push(row);
    }

    /// Cell at (row, column name).
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = *self.index.get(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// One value per row for a column; None if the column doesn't exist.
    /// Non-numeric and missing cells come back as None.
    pub fn numeric_column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let idx = *self.index.get(name)?;
        Some(self.rows.iter().map(|r| r[idx].as_f64()).collect())
    }

    /// One value per row for a text column; None if the column doesn't exist.
    pub fn text_column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let idx = *self.index.get(name)?;
        Some(self.rows.iter().map(|r| r[idx].as_text()).collect())
    }

    /// Mean over the numeric cells of a column. Missing cells are skipped;
    /// None when the column doesn't exist or has no numeric cells.
    pub fn mean(&self, name: &str) -> Option<f64> {
        let values: Vec<f64> = self.numeric_column(name)?.into_iter().flatten().collect();
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Concatenate tables row-wise, unioning their columns in first-seen order.
    pub fn concat<'a, I>(tables: I) -> Self
    where
        I: IntoIterator<Item = &'a ResultTable>,
    {
        let mut out = ResultTable::new();
        for table in tables {
            for row in &table.rows {
                out.push_row(table.columns.iter().cloned().zip(row.iter().cloned()));
            }
        }
        out
    }
}
