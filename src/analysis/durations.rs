//! Duration statistics over event logs
//!
//! Plain-number equivalents of the usual throughput charts: gaps between
//! consecutive activities, per-case durations, and case arrival/dispersion
//! averages. Events without a native timestamp are skipped.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use itertools::Itertools;

use crate::event_log::event_log_struct::EventLog;

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn seconds_between(a: &DateTime<FixedOffset>, b: &DateTime<FixedOffset>) -> f64 {
    b.signed_duration_since(a).num_milliseconds() as f64 / 1000.0
}

///
/// Gaps (in seconds) between consecutive events within a case, keyed by the
/// activity of the _second_ event of each pair
///
/// i.e., for each activity: how long did the process wait before this
/// activity happened, across all of its occurrences.
///
pub fn durations_by_activity(log: &EventLog) -> HashMap<String, Vec<f64>> {
    let mut durations: HashMap<String, Vec<f64>> = HashMap::new();
    for trace in &log.traces {
        let timed: Vec<(&String, &DateTime<FixedOffset>)> = trace
            .events
            .iter()
            .filter_map(|e| match (e.activity(), e.timestamp()) {
                (Some(activity), Some(ts)) => Some((activity, ts)),
                _ => None,
            })
            .collect();
        for ((_, prev_ts), (activity, ts)) in timed.iter().copied().tuple_windows() {
            durations
                .entry(activity.clone())
                .or_default()
                .push(seconds_between(prev_ts, ts));
        }
    }
    durations
}

/// Mean gap (in seconds) preceding each activity (see [`durations_by_activity`])
pub fn average_durations_by_activity(log: &EventLog) -> HashMap<String, f64> {
    durations_by_activity(log)
        .into_iter()
        .filter_map(|(activity, durations)| mean(&durations).map(|m| (activity, m)))
        .collect()
}

///
/// Per-case durations (in seconds) from the earliest to the latest
/// timestamped event
///
/// Cases with fewer than two timestamped events are skipped.
///
pub fn case_durations(log: &EventLog) -> Vec<f64> {
    log.traces
        .iter()
        .filter_map(|trace| {
            let timestamps: Vec<&DateTime<FixedOffset>> =
                trace.events.iter().filter_map(|e| e.timestamp()).collect();
            if timestamps.len() < 2 {
                return None;
            }
            let first = timestamps.iter().copied().min().unwrap();
            let last = timestamps.iter().copied().max().unwrap();
            Some(seconds_between(first, last))
        })
        .collect()
}

/// Mean gap (in seconds) between consecutive case start timestamps, in
/// chronological order
///
/// `None` when fewer than two cases have a timestamped event.
pub fn average_case_arrival(log: &EventLog) -> Option<f64> {
    let gaps: Vec<f64> = log
        .traces
        .iter()
        .filter_map(|t| t.events.iter().filter_map(|e| e.timestamp()).min())
        .sorted()
        .tuple_windows()
        .map(|(a, b)| seconds_between(a, b))
        .collect();
    mean(&gaps)
}

/// Mean gap (in seconds) between consecutive case end timestamps, in
/// chronological order
///
/// `None` when fewer than two cases have a timestamped event.
pub fn average_case_dispersion(log: &EventLog) -> Option<f64> {
    let gaps: Vec<f64> = log
        .traces
        .iter()
        .filter_map(|t| t.events.iter().filter_map(|e| e.timestamp()).max())
        .sorted()
        .tuple_windows()
        .map(|(a, b)| seconds_between(a, b))
        .collect();
    mean(&gaps)
}
