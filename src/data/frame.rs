use super::writer::{csv_writer, into_text};
use super::{render_value, Record, StructuredTable};
use crate::error::{Result, UploadError};
use serde_json::Value;

/// An in-memory table with named columns and positional rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Frame {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a frame whose columns are the union of all record keys in
    /// first-seen order. Cells a record does not provide are null.
    pub fn from_records(records: &[Record]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in records {
            for key in record.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| record.get(column).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(UploadError::invalid_parameter(
                "row",
                format!(
                    "Row has {} values but the frame has {} columns",
                    row.len(),
                    self.columns.len()
                ),
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn with_row(mut self, row: Vec<Value>) -> Result<Self> {
        self.push_row(row)?;
        Ok(self)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl StructuredTable for Frame {
    /// An empty frame renders its header only; a frame without columns
    /// renders as empty text.
    fn to_csv(&self) -> Result<String> {
        if self.columns.is_empty() {
            return Ok(String::new());
        }

        let mut writer = csv_writer();
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(render_value))?;
        }
        into_text(writer)
    }
}
