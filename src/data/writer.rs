//! CSV text rendering for record sequences

use super::{render_value, Record};
use crate::error::{Result, UploadError};
use csv::{Writer, WriterBuilder};

pub(crate) fn csv_writer() -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .delimiter(b',')
        .from_writer(Vec::new())
}

pub(crate) fn into_text(writer: Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| UploadError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Render records as CSV text with a header row.
///
/// The header is the key order of the first record. A later record that
/// lacks a header column gets an empty field; a later record with a column
/// outside the header is rejected with its zero-based index.
pub fn records_to_csv(records: &[Record]) -> Result<String> {
    let first = records.first().ok_or(UploadError::NoData)?;
    let header: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut writer = csv_writer();
    writer.write_record(&header)?;

    for (row, record) in records.iter().enumerate() {
        if let Some(extra) = record.keys().find(|key| !first.contains_key(key.as_str())) {
            return Err(UploadError::mismatched_columns(row, extra.as_str()));
        }

        let fields: Vec<String> = header
            .iter()
            .map(|column| record.get(*column).map(render_value).unwrap_or_default())
            .collect();
        writer.write_record(&fields)?;
    }

    into_text(writer)
}
