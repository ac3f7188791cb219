use itertools::Itertools;

use crate::event_log::constants::{
    ACTIVITY_NAME, RESOURCE_NAME, STANDARD_ATTRIBUTE_NAMES, TIMESTAMP_FORMAT, TIMESTAMP_NAME,
    TRACE_ID_NAME,
};
use crate::event_log::event_log_struct::{AttributeValue, EditableAttributes, EventLog};
use crate::table::row_set_struct::{RowSet, FIXED_COLUMNS};

/// Error type for the strict log-to-table direction
///
/// A failed conversion returns no partial [`RowSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogToTableError {
    /// A trace has no case identifier, or an event has no activity name
    MissingRequiredField {
        /// The missing attribute key ([`TRACE_ID_NAME`] or [`ACTIVITY_NAME`])
        field: &'static str,
        /// Index of the affected trace within the log
        trace_index: usize,
        /// Index of the affected event within the trace (`None` for trace-level fields)
        event_index: Option<usize>,
    },
    /// An event's timestamp attribute is present but not a native date value
    /// and can therefore not be rendered with [`TIMESTAMP_FORMAT`]
    TimestampFormat {
        /// Index of the affected trace within the log
        trace_index: usize,
        /// Index of the affected event within the trace
        event_index: usize,
        /// String rendering of the offending value
        value: String,
    },
}

impl std::fmt::Display for LogToTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredField {
                field,
                trace_index,
                event_index: Some(event_index),
            } => write!(
                f,
                "Missing required field '{field}' on event {event_index} of trace {trace_index}"
            ),
            Self::MissingRequiredField {
                field, trace_index, ..
            } => write!(f, "Missing required field '{field}' on trace {trace_index}"),
            Self::TimestampFormat {
                trace_index,
                event_index,
                value,
            } => write!(
                f,
                "Timestamp of event {event_index} of trace {trace_index} is not a native date value: '{value}'"
            ),
        }
    }
}

impl std::error::Error for LogToTableError {}

///
/// Flatten an [`EventLog`] to a [`RowSet`] with one row per event
///
/// The header is the four fixed columns ([`FIXED_COLUMNS`]) followed by one
/// column per extra attribute key observed anywhere in the log (sorted).
/// The key union is collected in a first full pass, before any row is
/// emitted, so every row has the same width of `4 + |extra keys|`.
///
/// Strict direction: a trace without a case identifier or an event without
/// an activity name fails with [`LogToTableError::MissingRequiredField`];
/// a timestamp attribute that is not a native date fails with
/// [`LogToTableError::TimestampFormat`]. An absent timestamp or resource
/// renders as an empty cell, as does every absent extra attribute.
///
pub fn convert_log_to_table(log: &EventLog) -> Result<RowSet, LogToTableError> {
    // Pass 1: union of extra attribute keys over all events of all traces.
    // Must be complete before emission; it fixes the header for every row.
    let extra_columns: Vec<&String> = log
        .traces
        .iter()
        .flat_map(|t| t.events.iter())
        .flat_map(|e| e.attributes.iter().map(|a| &a.key))
        .filter(|k| !STANDARD_ATTRIBUTE_NAMES.contains(&k.as_str()))
        .unique()
        .sorted()
        .collect();

    let mut header: Vec<String> = FIXED_COLUMNS.iter().map(|c| (*c).to_string()).collect();
    header.extend(extra_columns.iter().map(|k| (*k).clone()));
    let width = header.len();
    let mut row_set = RowSet::with_header(header);

    // Pass 2: one row per event, in trace order and per-trace event order
    for (trace_index, trace) in log.traces.iter().enumerate() {
        let case_id = trace
            .case_id()
            .ok_or(LogToTableError::MissingRequiredField {
                field: TRACE_ID_NAME,
                trace_index,
                event_index: None,
            })?;
        for (event_index, event) in trace.events.iter().enumerate() {
            let activity = event
                .activity()
                .ok_or(LogToTableError::MissingRequiredField {
                    field: ACTIVITY_NAME,
                    trace_index,
                    event_index: Some(event_index),
                })?;
            let timestamp = match event.attributes.get_by_key(TIMESTAMP_NAME) {
                None => String::new(),
                Some(attr) => match &attr.value {
                    AttributeValue::Date(d) => d.format(TIMESTAMP_FORMAT).to_string(),
                    other => {
                        return Err(LogToTableError::TimestampFormat {
                            trace_index,
                            event_index,
                            value: other.to_string(),
                        })
                    }
                },
            };

            let mut row: Vec<String> = Vec::with_capacity(width);
            row.push(case_id.clone());
            row.push(activity.clone());
            row.push(timestamp);
            row.push(
                event
                    .attributes
                    .get_by_key(RESOURCE_NAME)
                    .map(|a| a.value.to_string())
                    .unwrap_or_default(),
            );
            for key in &extra_columns {
                row.push(
                    event
                        .attributes
                        .get_by_key(key)
                        .map(|a| a.value.to_string())
                        .unwrap_or_default(),
                );
            }
            row_set.rows.push(row);
        }
    }
    Ok(row_set)
}

#[cfg(test)]
mod log_to_table_tests {
    use chrono::DateTime;

    use super::*;
    use crate::event_log::constants::TIMESTAMP_NAME;
    use crate::event_log::event_log_struct::{Event, Trace};

    fn date_attr(s: &str) -> AttributeValue {
        AttributeValue::Date(
            DateTime::parse_from_rfc3339(s)
                .unwrap()
                .fixed_offset(),
        )
    }

    fn two_case_log() -> EventLog {
        let mut log = EventLog::new();

        let mut case_1 = Trace::with_case_id("1".to_string());
        let mut register = Event::new("register".to_string());
        register
            .attributes
            .add_to_attributes(TIMESTAMP_NAME.to_string(), date_attr("2024-01-01T10:00:00Z"));
        register
            .attributes
            .add_to_attributes("cost".to_string(), AttributeValue::String("50".to_string()));
        case_1.events.push(register);
        log.traces.push(case_1);

        let mut case_2 = Trace::with_case_id("2".to_string());
        let mut close = Event::new("close".to_string());
        close
            .attributes
            .add_to_attributes(TIMESTAMP_NAME.to_string(), date_attr("2024-01-01T11:00:00Z"));
        case_2.events.push(close);
        log.traces.push(case_2);

        log
    }

    #[test]
    fn test_two_case_example() {
        let table = convert_log_to_table(&two_case_log()).unwrap();
        assert_eq!(
            table.header,
            vec!["Case ID", "Activity", "Timestamp", "Resource", "cost"]
        );
        assert_eq!(
            table.rows,
            vec![
                vec!["1", "register", "2024-01-01 10:00:00", "", "50"],
                vec!["2", "close", "2024-01-01 11:00:00", "", ""],
            ]
            .into_iter()
            .map(|r| r.into_iter().map(String::from).collect::<Vec<_>>())
            .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_row_count_and_width() {
        let mut log = two_case_log();
        // Second event on case 1 carrying a different extra attribute
        let mut examine = Event::new("examine".to_string());
        examine
            .attributes
            .add_to_attributes(TIMESTAMP_NAME.to_string(), date_attr("2024-01-01T10:30:00Z"));
        examine.attributes.add_to_attributes(
            "urgency".to_string(),
            AttributeValue::String("high".to_string()),
        );
        log.traces[0].events.push(examine);

        let table = convert_log_to_table(&log).unwrap();
        assert_eq!(table.num_rows(), log.total_event_count());
        // 4 fixed + union {cost, urgency}, identical for every row
        assert_eq!(table.num_columns(), 6);
        assert!(table.rows.iter().all(|r| r.len() == 6));
        // Sorted extra columns
        assert_eq!(table.header[4..], ["cost".to_string(), "urgency".to_string()]);
    }

    #[test]
    fn test_missing_activity_is_rejected() {
        let mut log = two_case_log();
        log.traces[1].events.push(Event::default());
        let err = convert_log_to_table(&log).unwrap_err();
        assert_eq!(
            err,
            LogToTableError::MissingRequiredField {
                field: ACTIVITY_NAME,
                trace_index: 1,
                event_index: Some(1),
            }
        );
    }

    #[test]
    fn test_missing_case_id_is_rejected() {
        let mut log = two_case_log();
        log.traces[0].attributes.clear();
        let err = convert_log_to_table(&log).unwrap_err();
        assert_eq!(
            err,
            LogToTableError::MissingRequiredField {
                field: TRACE_ID_NAME,
                trace_index: 0,
                event_index: None,
            }
        );
    }

    #[test]
    fn test_non_native_timestamp_is_rejected() {
        let mut log = two_case_log();
        let ts = log.traces[0].events[0]
            .attributes
            .get_by_key_mut(TIMESTAMP_NAME)
            .unwrap();
        ts.value = AttributeValue::String("2024-01-01 10:00:00".to_string());
        let err = convert_log_to_table(&log).unwrap_err();
        assert!(matches!(err, LogToTableError::TimestampFormat { trace_index: 0, event_index: 0, .. }));
    }

    #[test]
    fn test_absent_timestamp_renders_empty() {
        let mut log = two_case_log();
        log.traces[0].events[0]
            .attributes
            .remove_with_key(TIMESTAMP_NAME);
        let table = convert_log_to_table(&log).unwrap();
        assert_eq!(table.cell(0, 2), "");
    }

    #[test]
    fn test_standard_name_collision_is_exact_match_only() {
        let mut log = two_case_log();
        // Case/whitespace variants of standard names are ordinary extras
        log.traces[0].events[0].attributes.add_to_attributes(
            "Concept:Name".to_string(),
            AttributeValue::String("x".to_string()),
        );
        log.traces[0].events[0].attributes.add_to_attributes(
            " org:resource".to_string(),
            AttributeValue::String("y".to_string()),
        );
        let table = convert_log_to_table(&log).unwrap();
        assert!(table.column_index("Concept:Name").is_some());
        assert!(table.column_index(" org:resource").is_some());
        assert_eq!(table.num_columns(), 4 + 3);
    }
}
