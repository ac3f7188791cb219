use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::event_log::constants::{RESOURCE_NAME, TIMESTAMP_FORMAT, TIMESTAMP_NAME};
use crate::event_log::event_log_struct::{
    AttributeValue, EditableAttributes, Event, EventLog, Trace,
};
use crate::table::row_set_struct::{
    RowSet, ACTIVITY_COLUMN, CASE_ID_COLUMN, RESOURCE_COLUMN, TIMESTAMP_COLUMN,
};

/// Options for rebuilding an [`EventLog`] from a [`RowSet`]
///
/// The column names are remapped to the internal standard attribute names
/// (e.g., the case-identifier column becomes the trace `concept:name`);
/// every other column becomes an extra event attribute under its own name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableToLogOptions {
    /// Name of the case-identifier column (required in the header)
    pub case_id_column: String,
    /// Name of the activity column (required in the header)
    pub activity_column: String,
    /// Name of the timestamp column
    ///
    /// Not structural: a header without this column converts, with no
    /// timestamp attribute on any event.
    pub timestamp_column: String,
    /// Name of the resource column
    pub resource_column: String,
}

impl Default for TableToLogOptions {
    fn default() -> Self {
        Self {
            case_id_column: CASE_ID_COLUMN.to_string(),
            activity_column: ACTIVITY_COLUMN.to_string(),
            timestamp_column: TIMESTAMP_COLUMN.to_string(),
            resource_column: RESOURCE_COLUMN.to_string(),
        }
    }
}

/// Error type for the table-to-log direction
///
/// Structural only: per-row values cannot fail once the header is validated
/// (an unparseable timestamp degrades to [`AttributeValue::None`] instead).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableToLogError {
    /// The case-identifier or activity column is absent from the header
    MissingColumn(String),
}

impl std::fmt::Display for TableToLogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingColumn(name) => write!(f, "Missing required column: '{name}'"),
        }
    }
}

impl std::error::Error for TableToLogError {}

///
/// Rebuild an [`EventLog`] from a [`RowSet`], using the default column names
/// (see [`TableToLogOptions`])
///
pub fn convert_table_to_log(rows: &RowSet) -> Result<EventLog, TableToLogError> {
    convert_table_to_log_with_options(rows, &TableToLogOptions::default())
}

///
/// Rebuild an [`EventLog`] from a [`RowSet`]
///
/// Rows are grouped into traces by the case-identifier column, preserving
/// the first-seen order of case identifiers; within a case, row order is the
/// event order. Timestamps are parsed with [`TIMESTAMP_FORMAT`] (naive,
/// assumed UTC); a non-empty value that does not parse becomes
/// [`AttributeValue::None`] on the event rather than aborting the
/// conversion. Empty cells produce no attribute at all.
///
pub fn convert_table_to_log_with_options(
    rows: &RowSet,
    options: &TableToLogOptions,
) -> Result<EventLog, TableToLogError> {
    let case_id_idx = rows
        .column_index(&options.case_id_column)
        .ok_or_else(|| TableToLogError::MissingColumn(options.case_id_column.clone()))?;
    let activity_idx = rows
        .column_index(&options.activity_column)
        .ok_or_else(|| TableToLogError::MissingColumn(options.activity_column.clone()))?;
    let timestamp_idx = rows.column_index(&options.timestamp_column);
    let resource_idx = rows.column_index(&options.resource_column);

    let extra_columns: Vec<(usize, &String)> = rows
        .header
        .iter()
        .enumerate()
        .filter(|(i, _)| {
            *i != case_id_idx
                && *i != activity_idx
                && Some(*i) != timestamp_idx
                && Some(*i) != resource_idx
        })
        .collect();

    let mut log = EventLog::new();
    let mut trace_index_by_case_id: HashMap<String, usize> = HashMap::new();

    for row_index in 0..rows.num_rows() {
        let case_id = rows.cell(row_index, case_id_idx);
        let trace_index = match trace_index_by_case_id.get(case_id) {
            Some(i) => *i,
            None => {
                log.traces.push(Trace::with_case_id(case_id.to_string()));
                let i = log.traces.len() - 1;
                trace_index_by_case_id.insert(case_id.to_string(), i);
                i
            }
        };

        let mut event = Event::new(rows.cell(row_index, activity_idx).to_string());
        if let Some(timestamp_idx) = timestamp_idx {
            let raw = rows.cell(row_index, timestamp_idx);
            if !raw.is_empty() {
                let value = match NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
                    Ok(dt) => AttributeValue::Date(dt.and_utc().fixed_offset()),
                    // Sole lenient path: the row is still emitted, its
                    // timestamp is unusable downstream
                    Err(_) => AttributeValue::None(),
                };
                event
                    .attributes
                    .add_to_attributes(TIMESTAMP_NAME.to_string(), value);
            }
        }
        if let Some(resource_idx) = resource_idx {
            let raw = rows.cell(row_index, resource_idx);
            if !raw.is_empty() {
                event
                    .attributes
                    .add_to_attributes(RESOURCE_NAME.to_string(), raw.into());
            }
        }
        for (column_index, name) in &extra_columns {
            let raw = rows.cell(row_index, *column_index);
            if !raw.is_empty() {
                event.attributes.add_to_attributes((*name).clone(), raw.into());
            }
        }
        log.traces[trace_index].events.push(event);
    }
    Ok(log)
}
