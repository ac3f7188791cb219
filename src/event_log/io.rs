//! IO implementations for [`EventLog`]
//!
//! The hierarchical on-disk log formats of other ecosystems are read and
//! written by external tooling; the interchange format here is the JSON
//! serialization of the [`EventLog`] structure itself.

use std::io::{Read, Write};

use crate::event_log::event_log_struct::EventLog;
use crate::io::{Exportable, Importable};

/// Error type for [`EventLog`] IO operations
#[derive(Debug)]
pub enum EventLogIOError {
    /// IO Error
    Io(std::io::Error),
    /// JSON Parsing Error
    Json(serde_json::Error),
    /// Unsupported Format
    UnsupportedFormat(String),
}

impl std::fmt::Display for EventLogIOError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventLogIOError::Io(e) => write!(f, "IO Error: {}", e),
            EventLogIOError::Json(e) => write!(f, "JSON Error: {}", e),
            EventLogIOError::UnsupportedFormat(s) => write!(f, "Unsupported Format: {}", s),
        }
    }
}

impl std::error::Error for EventLogIOError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EventLogIOError::Io(e) => Some(e),
            EventLogIOError::Json(e) => Some(e),
            EventLogIOError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for EventLogIOError {
    fn from(e: std::io::Error) -> Self {
        EventLogIOError::Io(e)
    }
}

impl From<serde_json::Error> for EventLogIOError {
    fn from(e: serde_json::Error) -> Self {
        EventLogIOError::Json(e)
    }
}

impl Importable for EventLog {
    type Error = EventLogIOError;

    fn import_from_reader<R: Read>(reader: R, format: &str) -> Result<Self, Self::Error> {
        match format {
            _ if format.ends_with("json") => {
                let log: EventLog = serde_json::from_reader(reader)?;
                Ok(log)
            }
            _ => Err(EventLogIOError::UnsupportedFormat(format.to_string())),
        }
    }
}

impl Exportable for EventLog {
    type Error = EventLogIOError;

    fn export_to_writer<W: Write>(&self, writer: W, format: &str) -> Result<(), Self::Error> {
        if format.ends_with("json") {
            serde_json::to_writer(writer, self)?;
            Ok(())
        } else {
            Err(EventLogIOError::UnsupportedFormat(format.to_string()))
        }
    }
}

#[cfg(test)]
mod event_log_io_tests {
    use super::*;
    use crate::event_log::event_log_struct::{Event, Trace};

    fn small_log() -> EventLog {
        let mut log = EventLog::new();
        let mut trace = Trace::with_case_id("1".to_string());
        trace.events.push(Event::new("register".to_string()));
        trace.events.push(Event::new("decide".to_string()));
        log.traces.push(trace);
        log
    }

    #[test]
    fn test_json_file_round_trip() {
        let log = small_log();
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("log.json");
        log.export_to_path(&path).unwrap();
        let imported = EventLog::import_from_path(&path).unwrap();
        assert_eq!(log, imported);
    }

    #[test]
    fn test_unsupported_format() {
        let log = small_log();
        let mut bytes = Vec::new();
        let res = log.export_to_writer(&mut bytes, "xes");
        assert!(matches!(res, Err(EventLogIOError::UnsupportedFormat(_))));
        let res = EventLog::import_from_bytes(b"{}", "parquet");
        assert!(matches!(res, Err(EventLogIOError::UnsupportedFormat(_))));
    }
}
