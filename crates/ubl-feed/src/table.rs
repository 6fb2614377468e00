//! CSV reading - header-keyed rows from a feed document
//!
//! The first record is the header; it names the columns and is not emitted as data.
//! Rows may be shorter or longer than the header. Cells are decoded lossily so a
//! stray invalid byte damages one cell instead of the whole document.

use std::collections::HashMap;

use csv::{ByteRecord, ReaderBuilder};
use ubl_core::{FeedRow, FeedTable, FetchError};

/// Read a CSV document into a feed table
pub fn read_table(body: &[u8]) -> Result<FeedTable, FetchError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body);

    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(|e| FetchError::io(format!("unreadable feed header: {e}")))?
        .iter()
        .map(|cell| String::from_utf8_lossy(cell).trim().to_string())
        .collect();

    let mut rows = Vec::new();
    let mut record = ByteRecord::new();

    while reader
        .read_byte_record(&mut record)
        .map_err(|e| FetchError::io(format!("unreadable feed row: {e}")))?
    {
        // Spreadsheet exports pad the sheet with rows of empty cells
        if record.iter().all(<[u8]>::is_empty) {
            continue;
        }

        let line = record.position().map_or(0, csv::Position::line);
        let cells: HashMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.clone(), String::from_utf8_lossy(cell).into_owned()))
            .collect();

        rows.push(FeedRow::new(line, cells));
    }

    Ok(FeedTable::new(headers, rows))
}
