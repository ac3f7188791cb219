use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

use super::constants::{ACTIVITY_NAME, RESOURCE_NAME, TIMESTAMP_NAME, TRACE_ID_NAME};

///
/// Possible attribute values of an event, trace or log attribute
///
/// Tip: If you know the expected [`AttributeValue`] type, make use of the `try_as_xxx` functions (e.g., [`AttributeValue::try_as_string`])
///
/// ```rust
/// use log_table_bridge::event_log::{AttributeValue};
/// let v = AttributeValue::Float(42.0);
///
/// let f = v.try_as_float().unwrap();
/// assert_eq!(*f,42.0);
/// ````
///
/// [`AttributeValue`] implements [`Display`] and thus `to_string()`;
/// for [`AttributeValue::None`] values, the String `"None"` is returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "content")]
pub enum AttributeValue {
    /// String values
    String(String),
    /// `DateTime` values
    Date(DateTime<FixedOffset>),
    /// Integer values
    Int(i64),
    /// Float values
    Float(f64),
    /// Boolean values
    Boolean(bool),
    /// IDs (UUIDs)
    ID(Uuid),
    /// Used to represent invalid values (e.g., `DateTime` which could not be parsed)
    None(),
}

impl Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AttributeValue::String(s) => s.to_string(),
            AttributeValue::Date(date_time) => date_time.to_string(),
            AttributeValue::Int(i) => i.to_string(),
            AttributeValue::Float(f) => f.to_string(),
            AttributeValue::Boolean(b) => b.to_string(),
            AttributeValue::ID(uuid) => uuid.to_string(),
            AttributeValue::None() => String::from("None"),
        };
        write!(f, "{}", s)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T> From<DateTime<T>> for AttributeValue
where
    T: chrono::TimeZone,
{
    fn from(value: DateTime<T>) -> Self {
        Self::Date(value.fixed_offset())
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Uuid> for AttributeValue {
    fn from(value: Uuid) -> Self {
        Self::ID(value)
    }
}

impl AttributeValue {
    ///
    /// Try to get attribute value as String
    ///
    /// Returns `Some()` of inner value if value is of variant [`AttributeValue::String`] and `None` otherwise
    ///
    pub fn try_as_string(&self) -> Option<&String> {
        match self {
            AttributeValue::String(v) => Some(v),
            _ => None,
        }
    }
    ///
    /// Try to get attribute value as date
    ///
    /// Returns `Some()` of inner value if value is of variant [`AttributeValue::Date`] and `None` otherwise
    ///
    pub fn try_as_date(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            AttributeValue::Date(v) => Some(v),
            _ => None,
        }
    }
    ///
    /// Try to get attribute value as int
    ///
    /// Returns `Some()` of inner value if value is of variant [`AttributeValue::Int`] and `None` otherwise
    ///
    pub fn try_as_int(&self) -> Option<&i64> {
        match self {
            AttributeValue::Int(v) => Some(v),
            _ => None,
        }
    }
    ///
    /// Try to get attribute value as float
    ///
    /// Returns `Some()` of inner value if value is of variant [`AttributeValue::Float`] and `None` otherwise
    ///
    pub fn try_as_float(&self) -> Option<&f64> {
        match self {
            AttributeValue::Float(v) => Some(v),
            _ => None,
        }
    }
    ///
    /// Try to get attribute value as bool
    ///
    /// Returns `Some()` of inner value if value is of variant [`AttributeValue::Boolean`] and `None` otherwise
    ///
    pub fn try_as_bool(&self) -> Option<&bool> {
        match self {
            AttributeValue::Boolean(v) => Some(v),
            _ => None,
        }
    }
    ///
    /// Try to get attribute value as [`Uuid`]
    ///
    /// Returns `Some()` of inner value if value is of variant [`AttributeValue::ID`] and `None` otherwise
    ///
    pub fn try_as_uuid(&self) -> Option<&Uuid> {
        match self {
            AttributeValue::ID(v) => Some(v),
            _ => None,
        }
    }

    /// Check whether the value is the invalid/unparseable marker [`AttributeValue::None`]
    pub fn is_none(&self) -> bool {
        matches!(self, AttributeValue::None())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
///
/// Attribute made up of the key and value
///
pub struct Attribute {
    /// Attribute key
    pub key: String,
    /// Attribute value
    pub value: AttributeValue,
}

impl Attribute {
    ///
    /// Helper to create a new attribute
    ///
    pub fn new(key: String, attribute_val: AttributeValue) -> Self {
        Self {
            key,
            value: attribute_val,
        }
    }
}

///
/// Attributes are [`Vec`]s of [`Attribute`]s
///
/// See the [`EditableAttributes`] trait for convenient functions to add, edit or remove attributes by key.
///
/// Tip: If you know the expected attribute type, make use of the `try_as_xxx` functions (e.g., [`AttributeValue::try_as_string`])
/// ```rust
/// use log_table_bridge::event_log::{Attribute, AttributeValue, EditableAttributes};
/// let attrs = vec![Attribute::new("key".to_string(), AttributeValue::Float(42.0))];
///
/// let f = attrs.get_by_key("key").and_then(|a| a.value.try_as_float()).unwrap();
/// assert_eq!(*f,42.0);
/// ````
pub type Attributes = Vec<Attribute>;

///
/// Trait to easily add and update attributes
///
pub trait EditableAttributes {
    ///
    /// Add a new attribute (with key and value)
    ///
    /// Note: Does _not_ check if attribute was already present and does _not_ sort attributes wrt. key.
    ///
    fn add_to_attributes(&mut self, key: String, value: AttributeValue);
    ///
    /// Add a new attribute
    ///
    fn add_attribute(&mut self, attr: Attribute);
    ///
    /// Get an attribute by key
    ///
    /// _Complexity_: Does linear lookup (i.e., in O(n)). If you need faster lookup, consider manually sorting the attributes by key and utilizing binary search.
    fn get_by_key(&self, key: &str) -> Option<&Attribute>;
    ///
    /// Get an attribute as mutable by key
    ///
    /// _Complexity_: Does linear lookup (i.e., in O(n)).
    fn get_by_key_mut(&mut self, key: &str) -> Option<&mut Attribute>;
    ///
    /// Remove attribute with given key
    ///
    /// Returns `true` if the attribute was present and `false` otherwise
    ///
    /// _Complexity_: Does linear lookup (i.e., in O(n)).
    fn remove_with_key(&mut self, key: &str) -> bool;
}

impl EditableAttributes for Attributes {
    fn add_to_attributes(&mut self, key: String, value: AttributeValue) {
        let a = Attribute::new(key, value);
        self.push(a);
    }

    fn add_attribute(&mut self, a: Attribute) {
        self.push(a);
    }

    fn get_by_key(&self, key: &str) -> Option<&Attribute> {
        self.iter().find(|attr| attr.key == key)
    }

    fn get_by_key_mut(&mut self, key: &str) -> Option<&mut Attribute> {
        self.iter_mut().find(|attr| attr.key == key)
    }

    fn remove_with_key(&mut self, key: &str) -> bool {
        let index_opt = self.iter().position(|a| a.key == key);
        if let Some(index) = index_opt {
            self.remove(index);
            return true;
        }
        false
    }
}

///
/// An event consists of multiple (event) attributes ([`Attributes`])
///
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Event attributes
    pub attributes: Attributes,
}

impl Event {
    /// Create a new event with the provided activity (stored under [`ACTIVITY_NAME`])
    pub fn new(activity: String) -> Self {
        Event {
            attributes: vec![Attribute::new(
                ACTIVITY_NAME.to_string(),
                AttributeValue::String(activity),
            )],
        }
    }

    /// Get the activity name of this event (the [`ACTIVITY_NAME`] attribute), if present as a String
    pub fn activity(&self) -> Option<&String> {
        self.attributes
            .get_by_key(ACTIVITY_NAME)
            .and_then(|a| a.value.try_as_string())
    }

    /// Get the timestamp of this event (the [`TIMESTAMP_NAME`] attribute), if present as a native date
    ///
    /// Returns `None` both when the attribute is absent and when it holds an
    /// unparseable marker value ([`AttributeValue::None`]).
    pub fn timestamp(&self) -> Option<&DateTime<FixedOffset>> {
        self.attributes
            .get_by_key(TIMESTAMP_NAME)
            .and_then(|a| a.value.try_as_date())
    }

    /// Get the resource of this event (the [`RESOURCE_NAME`] attribute), if present as a String
    pub fn resource(&self) -> Option<&String> {
        self.attributes
            .get_by_key(RESOURCE_NAME)
            .and_then(|a| a.value.try_as_string())
    }
}

///
/// A trace (case) consists of a list of events and trace attributes (See also [`Event`] and [`Attributes`])
///
/// The case identifier lives in the trace attributes under [`TRACE_ID_NAME`].
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Trace {
    /// Trace-level attributes
    pub attributes: Attributes,
    /// Events contained in trace
    pub events: Vec<Event>,
}

impl Trace {
    /// Initializes a new trace with no attributes and events
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new trace with the provided case identifier and no events
    pub fn with_case_id(case_id: String) -> Self {
        Self {
            attributes: vec![Attribute::new(
                TRACE_ID_NAME.to_string(),
                AttributeValue::String(case_id),
            )],
            events: vec![],
        }
    }

    /// Get the case identifier of this trace (the [`TRACE_ID_NAME`] attribute), if present as a String
    pub fn case_id(&self) -> Option<&String> {
        self.attributes
            .get_by_key(TRACE_ID_NAME)
            .and_then(|a| a.value.try_as_string())
    }

    ///
    /// Clones a new `Trace` that contains the same attributes but does initially not contain any
    /// events.
    ///
    pub fn clone_without_events(&self) -> Self {
        Self {
            attributes: self.attributes.clone(),
            events: vec![],
        }
    }
}

///
/// Event log consisting of a list of [`Trace`]s and log [`Attributes`]
///
/// Trace order is preserved (for stable output) but carries no meaning;
/// event order within a trace is the recorded execution order.
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EventLog {
    /// Top-level attributes
    pub attributes: Attributes,
    /// Traces contained in log
    pub traces: Vec<Trace>,
}

impl EventLog {
    /// Initializes a new event log with no attributes and an empty trace list
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Clones a new `EventLog` that contains the same attributes but does initially not contain
    /// any traces.
    ///
    pub fn clone_without_traces(&self) -> Self {
        Self {
            attributes: self.attributes.clone(),
            traces: vec![],
        }
    }

    /// Total number of events, summed over all traces
    pub fn total_event_count(&self) -> usize {
        self.traces.iter().map(|t| t.events.len()).sum()
    }
}
