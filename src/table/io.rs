//! CSV/TSV import and export for [`RowSet`]

use std::io::{Read, Write};

use crate::io::{Exportable, Importable};
use crate::table::row_set_struct::RowSet;

/// Error type for [`RowSet`] IO operations
#[derive(Debug)]
pub enum RowSetIOError {
    /// IO Error
    Io(std::io::Error),
    /// CSV reading/writing error
    Csv(csv::Error),
    /// The input has no header row
    MissingHeader,
    /// Unsupported Format
    UnsupportedFormat(String),
}

impl std::fmt::Display for RowSetIOError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowSetIOError::Io(e) => write!(f, "IO Error: {}", e),
            RowSetIOError::Csv(e) => write!(f, "CSV Error: {}", e),
            RowSetIOError::MissingHeader => write!(f, "Input has no header row"),
            RowSetIOError::UnsupportedFormat(s) => write!(f, "Unsupported Format: {}", s),
        }
    }
}

impl std::error::Error for RowSetIOError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RowSetIOError::Io(e) => Some(e),
            RowSetIOError::Csv(e) => Some(e),
            RowSetIOError::MissingHeader | RowSetIOError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for RowSetIOError {
    fn from(e: std::io::Error) -> Self {
        RowSetIOError::Io(e)
    }
}

impl From<csv::Error> for RowSetIOError {
    fn from(e: csv::Error) -> Self {
        RowSetIOError::Csv(e)
    }
}

fn delimiter_for(format: &str) -> Option<u8> {
    match format {
        _ if format.ends_with("csv") => Some(b','),
        _ if format.ends_with("tsv") => Some(b'\t'),
        _ => None,
    }
}

impl Importable for RowSet {
    type Error = RowSetIOError;

    fn import_from_reader<R: Read>(reader: R, format: &str) -> Result<Self, Self::Error> {
        let delimiter = delimiter_for(format)
            .ok_or_else(|| RowSetIOError::UnsupportedFormat(format.to_string()))?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .from_reader(reader);
        let header: Vec<String> = csv_reader.headers()?.iter().map(String::from).collect();
        if header.is_empty() {
            return Err(RowSetIOError::MissingHeader);
        }
        let mut row_set = RowSet::with_header(header);
        for record in csv_reader.records() {
            let record = record?;
            row_set.rows.push(record.iter().map(String::from).collect());
        }
        Ok(row_set)
    }
}

impl Exportable for RowSet {
    type Error = RowSetIOError;

    fn export_to_writer<W: Write>(&self, writer: W, format: &str) -> Result<(), Self::Error> {
        let delimiter = delimiter_for(format)
            .ok_or_else(|| RowSetIOError::UnsupportedFormat(format.to_string()))?;
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_writer(writer);
        csv_writer.write_record(&self.header)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod row_set_io_tests {
    use super::*;

    fn small_table() -> RowSet {
        RowSet {
            header: ["Case ID", "Activity", "Timestamp", "Resource", "cost"]
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            rows: vec![
                ["1", "register", "2024-01-01 10:00:00", "", "50"]
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect(),
                ["2", "close", "2024-01-01 11:00:00", "", ""]
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect(),
            ],
        }
    }

    #[test]
    fn test_csv_file_round_trip() {
        let table = small_table();
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("output_file.csv");
        table.export_to_path(&path).unwrap();
        let imported = RowSet::import_from_path(&path).unwrap();
        assert_eq!(table, imported);
    }

    #[test]
    fn test_csv_bytes() {
        let table = small_table();
        let mut bytes = Vec::new();
        table.export_to_writer(&mut bytes, "csv").unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.starts_with("Case ID,Activity,Timestamp,Resource,cost\n"));
        let imported = RowSet::import_from_bytes(&bytes, "csv").unwrap();
        assert_eq!(table, imported);
    }

    #[test]
    fn test_tsv() {
        let table = small_table();
        let mut bytes = Vec::new();
        table.export_to_writer(&mut bytes, "tsv").unwrap();
        assert!(bytes.contains(&b'\t'));
        let imported = RowSet::import_from_bytes(&bytes, "tsv").unwrap();
        assert_eq!(table, imported);
    }

    #[test]
    fn test_unsupported_format() {
        let res = RowSet::import_from_bytes(b"a,b\n1,2\n", "xlsx");
        assert!(matches!(res, Err(RowSetIOError::UnsupportedFormat(_))));
    }
}
