//! Comma-delimited record files with quote escaping.
//!
//! The only boundary format in the system: an optional header line followed
//! by rows, comma-delimited, where a field containing the delimiter is
//! wrapped in double quotes. Splitting keeps the quote characters in the
//! field value; key extraction strips them during normalization.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::record::Record;

/// Splits one line on `delimiter`, ignoring delimiters inside quotes.
pub fn split_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;

    for c in line.chars() {
        if c == '"' {
            inside_quotes = !inside_quotes;
        }
        if c == delimiter && !inside_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(c);
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// A header row plus data rows read from one file.
pub struct CsvData {
    pub header: Record,
    pub rows: Vec<Record>,
}

/// Reads a CSV file with a header line.
pub fn read_records(path: impl AsRef<Path>) -> Result<CsvData, String> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| format!("failed to open {}: {}", path.display(), e))?;
    let reader = BufReader::new(file);

    let mut header = None;
    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        if line.trim().is_empty() {
            continue;
        }
        let record = Record::new(split_line(&line, ','));
        if header.is_none() {
            header = Some(record);
        } else {
            rows.push(record);
        }
    }

    let header = header.ok_or_else(|| format!("{} is empty", path.display()))?;
    Ok(CsvData { header, rows })
}

/// Writes a header line and rows to `path`, overwriting any existing file.
pub fn write_records(
    path: impl AsRef<Path>,
    header: &Record,
    rows: &[Record],
) -> Result<(), String> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| format!("failed to create {}: {}", path.display(), e))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", header)
        .map_err(|e| format!("failed to write {}: {}", path.display(), e))?;
    for row in rows {
        writeln!(writer, "{}", row)
            .map_err(|e| format!("failed to write {}: {}", path.display(), e))?;
    }
    writer
        .flush()
        .map_err(|e| format!("failed to flush {}: {}", path.display(), e))?;
    Ok(())
}
