//! Tabular input for uploads
//!
//! Data reaches the uploader either as a sequence of records or as a
//! structured table that knows how to render itself as CSV. The choice is
//! made by the caller through [`TabularData`].

pub mod frame;
pub mod writer;

pub use frame::Frame;
pub use writer::records_to_csv;

use crate::error::{Result, UploadError};
use serde_json::Value;
use std::path::Path;

/// One row of tabular data, keyed by column name in insertion order
pub type Record = serde_json::Map<String, Value>;

/// A table that renders itself as CSV text without a row-index column
pub trait StructuredTable {
    fn to_csv(&self) -> Result<String>;
}

/// Input accepted by [`Uploader::upload`](crate::Uploader::upload)
#[derive(Clone, Copy)]
pub enum TabularData<'a> {
    /// Records sharing the columns of the first record
    Records(&'a [Record]),
    /// A table with its own CSV rendering
    Table(&'a dyn StructuredTable),
}

impl std::fmt::Debug for TabularData<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabularData::Records(records) => f
                .debug_struct("Records")
                .field("len", &records.len())
                .finish(),
            TabularData::Table(_) => f.debug_struct("Table").finish_non_exhaustive(),
        }
    }
}

impl<'a> TabularData<'a> {
    /// Render the data as CSV text
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::NoData`] for an empty record sequence and
    /// [`UploadError::MismatchedColumns`] when a later record has a column
    /// the first record lacks. Errors from a table's own rendering are
    /// passed through.
    pub fn to_csv(&self) -> Result<String> {
        match self {
            TabularData::Records(records) => records_to_csv(records),
            TabularData::Table(table) => table.to_csv(),
        }
    }
}

impl<'a> From<&'a [Record]> for TabularData<'a> {
    fn from(records: &'a [Record]) -> Self {
        TabularData::Records(records)
    }
}

impl<'a> From<&'a Vec<Record>> for TabularData<'a> {
    fn from(records: &'a Vec<Record>) -> Self {
        TabularData::Records(records.as_slice())
    }
}

impl<'a> From<&'a Frame> for TabularData<'a> {
    fn from(frame: &'a Frame) -> Self {
        TabularData::Table(frame)
    }
}

/// Text written to a CSV field for a JSON value
pub(crate) fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // nested values are kept as compact JSON
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Parse a JSON array of objects into records
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Object(record) => Ok(record),
            other => Err(UploadError::invalid_parameter(
                "records",
                format!("Entry {} is not an object: {}", index, other),
            )),
        })
        .collect()
}

/// Read a JSON file holding an array of objects
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let json = std::fs::read_to_string(path)?;
    parse_records(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_value() {
        assert_eq!(render_value(&json!(null)), "");
        assert_eq!(render_value(&json!("a,b")), "a,b");
        assert_eq!(render_value(&json!(true)), "true");
        assert_eq!(render_value(&json!(42)), "42");
        assert_eq!(render_value(&json!(1.5)), "1.5");
        assert_eq!(render_value(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_parse_records_keeps_key_order() {
        let records = parse_records(r#"[{"b": 1, "a": 2}, {"b": 3, "a": 4}]"#).unwrap();
        assert_eq!(records.len(), 2);
        let keys: Vec<&String> = records[0].keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_parse_records_rejects_non_objects() {
        let err = parse_records(r#"[{"a": 1}, 7]"#).unwrap_err();
        assert!(matches!(err, UploadError::InvalidParameter { .. }));
        assert!(err.to_string().contains("Entry 1"));
    }

    #[test]
    fn test_tabular_data_dispatch() {
        let records = parse_records(r#"[{"x": 1}]"#).unwrap();
        let data = TabularData::from(&records);
        assert_eq!(data.to_csv().unwrap(), "x\r\n1\r\n");

        let frame = Frame::new(["x"]).with_row(vec![json!(2)]).unwrap();
        let data = TabularData::from(&frame);
        assert_eq!(data.to_csv().unwrap(), "x\r\n2\r\n");

        let empty: Vec<Record> = Vec::new();
        assert!(matches!(
            TabularData::from(&empty).to_csv(),
            Err(UploadError::NoData)
        ));
    }
}
