/// Common identifying field for event identities (i.e., activities)
pub const ACTIVITY_NAME: &str = "concept:name";

/// Common identifying field for trace identities (i.e., case IDs)
///
/// See also [`ACTIVITY_NAME`]
pub const TRACE_ID_NAME: &str = "concept:name";

/// Common field for event timestamps
pub const TIMESTAMP_NAME: &str = "time:timestamp";

/// Common field for event resources (i.e., the executing person or system)
pub const RESOURCE_NAME: &str = "org:resource";

/// Fixed textual timestamp pattern used by the tabular representation
///
/// e.g., `2024-01-01 10:00:00`. Values are naive; UTC is assumed when
/// parsing them back.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The three standard event attribute names ([`ACTIVITY_NAME`],
/// [`TIMESTAMP_NAME`], [`RESOURCE_NAME`])
///
/// Any other event attribute name is an _extra_ attribute and maps to its
/// own table column.
pub const STANDARD_ATTRIBUTE_NAMES: [&str; 3] = [ACTIVITY_NAME, TIMESTAMP_NAME, RESOURCE_NAME];
