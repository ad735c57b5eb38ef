//! Tabular view of records.

use crate::record::RepositoryRecord;
use crate::shape::ListingShape;

/// Records laid out as named columns and string rows.
///
/// Column names and order follow [`ListingShape::columns`]; the `Index`
/// column only exists for user listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTable {
    columns: &'static [&'static str],
    rows: Vec<Vec<String>>,
}

impl RecordTable {
    /// Builds a table from records of the given shape.
    pub fn from_records(records: &[RepositoryRecord], shape: ListingShape) -> Self {
        let rows = records
            .iter()
            .map(|record| {
                let mut row = Vec::with_capacity(shape.columns().len());
                if shape.is_indexed() {
                    row.push(record.index.map(|i| i.to_string()).unwrap_or_default());
                }
                row.push(record.name.clone());
                row.push(record.url.clone());
                row.push(record.description.clone());
                row.push(record.stars.to_string());
                row
            })
            .collect();

        Self {
            columns: shape.columns(),
            rows,
        }
    }

    /// Column names in order.
    pub fn columns(&self) -> &[&'static str] {
        self.columns
    }

    /// Rows in record order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let position = self.columns.iter().position(|column| *column == name)?;
        Some(self.rows.iter().map(|row| row[position].as_str()).collect())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
