//! Delimited-text parsing for the exported menu sheet.
//!
//! This is deliberately not a general CSV reader. It follows what the
//! spreadsheet export produces: one delimiter for the whole document (picked
//! from the header line), optional double quotes around a cell, and doubled
//! quotes inside. Delimiters inside quoted cells are not supported.

use tracing::debug;

use crate::models::Record;

/// Delimiter used when the header line contains no `;`
pub const DEFAULT_DELIMITER: char = ',';
pub const SEMICOLON_DELIMITER: char = ';';

/// Pick the delimiter from the header line alone
pub fn detect_delimiter(header_line: &str) -> char {
    if header_line.contains(SEMICOLON_DELIMITER) {
        SEMICOLON_DELIMITER
    } else {
        DEFAULT_DELIMITER
    }
}

/// Remove at most one pair of surrounding double quotes, collapse `""` to `"`, trim.
///
/// The pair must sit at the very edges of the cell; quotes behind padding stay.
pub fn strip_quotes(cell: &str) -> String {
    let unquoted = if cell.len() >= 2 && cell.starts_with('"') && cell.ends_with('"') {
        &cell[1..cell.len() - 1]
    } else {
        cell
    };

    unquoted.replace("\"\"", "\"").trim().to_string()
}

/// Parse the whole sheet into records keyed by header text.
///
/// Rows whose first cell is blank are spacer rows and are dropped. Short rows
/// are padded with empty values; cells beyond the header width are ignored.
pub fn parse_table(text: &str) -> Vec<Record> {
    let text = text.trim_start_matches('\u{feff}').trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line));

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };

    let delimiter = detect_delimiter(header_line);
    let headers: Vec<String> = header_line.split(delimiter).map(strip_quotes).collect();

    let mut records = Vec::new();

    for (index, line) in lines.enumerate() {
        let cells: Vec<&str> = line.split(delimiter).collect();

        if cells.first().map_or(true, |first| first.trim().is_empty()) {
            debug!("Dropping blank row {}", index + 2);
            continue;
        }

        let record = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let value = cells.get(i).map(|cell| strip_quotes(cell)).unwrap_or_default();
                (header.clone(), value)
            })
            .collect::<Record>();

        records.push(record);
    }

    records
}
