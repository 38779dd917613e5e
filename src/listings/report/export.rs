use std::io::Write;

use serde::ser::Error as _;
use serde_json::{Map, Value};

use super::views::ROW_HEADER;
use crate::listings::error::ExportError;
use crate::listings::record::ComputerRecord;

impl ComputerRecord {
    /// Keyed mapping with every serialized listing key.
    pub fn to_map(&self) -> Result<Map<String, Value>, ExportError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(ExportError::Json(serde_json::Error::custom(format!(
                "listing serialized to {other} instead of an object"
            )))),
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write a header row followed by one row per listing.
pub fn write_csv<'a, W, I>(records: I, writer: W) -> Result<(), ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a ComputerRecord>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(ROW_HEADER)?;
    for record in records {
        csv_writer.write_record(record.to_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}
