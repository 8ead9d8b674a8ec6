// crates/route-core/src/loader/tabular.rs

//! Row readers shared by the gazetteer and the mode table.
//!
//! Deserialization failures carry the 1-based data row they happened on,
//! so a bad file points at the offending line.

use crate::error::{Result, RouteError};
use serde::de::DeserializeOwned;
use std::io::Read;

#[cfg(feature = "csv")]
pub fn read_csv_rows<T, R>(reader: R) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, result) in rdr.deserialize::<T>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(err) => return Err(csv_error(err, idx + 1)),
        }
    }
    Ok(rows)
}

#[cfg(feature = "csv")]
fn csv_error(err: csv::Error, row: usize) -> RouteError {
    match err.kind() {
        csv::ErrorKind::Deserialize { .. } | csv::ErrorKind::UnequalLengths { .. } => {
            RouteError::MalformedRecord {
                row,
                reason: err.to_string(),
            }
        }
        _ => RouteError::Csv(err),
    }
}

/// Reads a JSON array of row objects.
#[cfg(feature = "json")]
pub fn read_json_rows<T, R>(reader: R) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let values: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
    values
        .into_iter()
        .enumerate()
        .map(|(idx, v)| {
            serde_json::from_value(v).map_err(|e| RouteError::MalformedRecord {
                row: idx + 1,
                reason: e.to_string(),
            })
        })
        .collect()
}
