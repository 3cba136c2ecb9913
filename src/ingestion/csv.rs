//! Delimited-text loader.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};
use crate::types::{Cell, Table};

/// Load a delimited text file into an in-memory [`Table`].
///
/// Rules:
///
/// - The first line is the header and defines column names.
/// - Every record must have as many fields as the header.
/// - Empty cells become [`Cell::Missing`]; everything else is kept as [`Cell::Text`].
///
/// A path that does not exist yields [`PipelineError::FileNotFound`]. The file handle is dropped
/// before this function returns, on success and on error.
pub fn load_table_from_path(path: impl AsRef<Path>, delimiter: u8) -> PipelineResult<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PipelineError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => PipelineError::Io(e),
    })?;

    let mut rdr = reader_builder(delimiter).from_reader(file);
    load_table_from_reader(&mut rdr).map_err(|e| match e {
        PipelineError::EmptyInput { .. } => PipelineError::EmptyInput {
            path: path.to_path_buf(),
        },
        other => other,
    })
}

/// Load a table from an existing CSV reader.
///
/// The reader must be configured with `has_headers(true)`.
pub fn load_table_from_reader<R: Read>(rdr: &mut csv::Reader<R>) -> PipelineResult<Table> {
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(PipelineError::EmptyInput {
            path: "<reader>".into(),
        });
    }
    let columns: Vec<String> = headers.iter().map(str::to_owned).collect();

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(Cell::from_raw).collect());
    }

    Ok(Table::new(columns, rows))
}

/// Reader configuration shared by the path and in-memory entrypoints.
pub fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(false).delimiter(delimiter);
    builder
}
