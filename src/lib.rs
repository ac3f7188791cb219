#![warn(
    clippy::doc_markdown,
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs
)]
#![doc = include_str!("../README.md")]

///
/// Event Logs (hierarchical [`EventLog`] of traces and events)
///
pub mod event_log {
    /// Constants (standard attribute names, timestamp pattern)
    pub mod constants;
    /// [`EventLog`] struct and sub-structs
    pub mod event_log_struct;
    /// JSON import/export for [`EventLog`]
    pub mod io;
    pub use event_log_struct::{
        Attribute, AttributeValue, Attributes, EditableAttributes, Event, EventLog, Trace,
    };
}

///
/// Flat event tables ([`RowSet`])
///
pub mod table {
    /// CSV/TSV import/export for [`RowSet`]
    pub mod io;
    /// [`RowSet`] struct and fixed column names
    pub mod row_set_struct;

    #[doc(inline)]
    pub use row_set_struct::RowSet;
}

///
/// Conversion between [`EventLog`] and [`RowSet`]
///
pub mod bridge {
    /// Flatten an [`EventLog`] to a [`RowSet`]
    pub mod log_to_table;
    /// Rebuild an [`EventLog`] from a [`RowSet`]
    pub mod table_to_log;
}

///
/// Duration statistics over event logs
///
/// Produces plain numbers only; rendering them (histograms, bar charts, ...)
/// is left to downstream tooling.
///
pub mod analysis {
    /// Inter-activity, case and arrival duration statistics
    pub mod durations;
}

/// Import/export traits and output directory layout
pub mod io;

#[doc(inline)]
pub use bridge::log_to_table::convert_log_to_table;

#[doc(inline)]
pub use bridge::log_to_table::LogToTableError;

#[doc(inline)]
pub use bridge::table_to_log::convert_table_to_log;

#[doc(inline)]
pub use bridge::table_to_log::convert_table_to_log_with_options;

#[doc(inline)]
pub use bridge::table_to_log::TableToLogError;

#[doc(inline)]
pub use bridge::table_to_log::TableToLogOptions;

#[doc(inline)]
pub use event_log::event_log_struct::EventLog;

#[doc(inline)]
pub use table::row_set_struct::RowSet;

#[doc(inline)]
pub use io::Exportable;

#[doc(inline)]
pub use io::Importable;
