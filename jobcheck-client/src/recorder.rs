//! Exchange recorders
//!
//! Sinks for envelopes and human-readable notes. The harness passes a
//! recorder into every component instead of reaching for a global logger,
//! so tests can capture exactly what was written.

use reqwest::StatusCode;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

use crate::envelope::Body;

/// Sink for everything the harness observes
pub trait ExchangeRecorder: Send + Sync {
    /// Records the status code of a response
    fn record_status(&self, status: StatusCode);

    /// Records a decoded (or sentinel) response body
    fn record_body(&self, body: &Body);

    /// Records a free-form line meant for a human reading the run
    fn record_note(&self, note: &str);
}

/// Writes records to the `tracing` stream at INFO
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRecorder;

impl ExchangeRecorder for TracingRecorder {
    fn record_status(&self, status: StatusCode) {
        info!("Status Code: {}", status.as_u16());
    }

    fn record_body(&self, body: &Body) {
        info!("Response Body: {}", body);
    }

    fn record_note(&self, note: &str) {
        info!("{}", note);
    }
}

/// One captured record
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Status(StatusCode),
    Body(Body),
    Note(String),
}

/// In-memory recorder
///
/// Uses Arc<Mutex<Vec<Record>>> so clones share one buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecorder {
    records: Arc<Mutex<Vec<Record>>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, record: Record) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    /// Snapshot of everything recorded so far
    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Status codes in the order they were recorded
    pub fn statuses(&self) -> Vec<StatusCode> {
        self.records()
            .into_iter()
            .filter_map(|record| match record {
                Record::Status(status) => Some(status),
                _ => None,
            })
            .collect()
    }

    /// Bodies in the order they were recorded
    pub fn bodies(&self) -> Vec<Body> {
        self.records()
            .into_iter()
            .filter_map(|record| match record {
                Record::Body(body) => Some(body),
                _ => None,
            })
            .collect()
    }

    /// Notes in the order they were recorded
    pub fn notes(&self) -> Vec<String> {
        self.records()
            .into_iter()
            .filter_map(|record| match record {
                Record::Note(note) => Some(note),
                _ => None,
            })
            .collect()
    }

    /// Returns and clears all records
    pub fn drain(&self) -> Vec<Record> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.drain(..).collect()
    }
}

impl ExchangeRecorder for MemoryRecorder {
    fn record_status(&self, status: StatusCode) {
        self.push(Record::Status(status));
    }

    fn record_body(&self, body: &Body) {
        self.push(Record::Body(body.clone()));
    }

    fn record_note(&self, note: &str) {
        self.push(Record::Note(note.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_recorder_keeps_order() {
        let recorder = MemoryRecorder::new();
        recorder.record_status(StatusCode::OK);
        recorder.record_body(&Body::NonJson);
        recorder.record_note("All Jobs:");

        assert_eq!(
            recorder.records(),
            vec![
                Record::Status(StatusCode::OK),
                Record::Body(Body::NonJson),
                Record::Note("All Jobs:".to_string()),
            ]
        );
        assert_eq!(recorder.statuses(), vec![StatusCode::OK]);
        assert_eq!(recorder.notes(), vec!["All Jobs:".to_string()]);
    }

    #[test]
    fn test_clones_share_buffer() {
        let recorder = MemoryRecorder::new();
        let clone = recorder.clone();
        clone.record_status(StatusCode::CREATED);

        assert_eq!(recorder.drain().len(), 1);
        assert!(clone.records().is_empty());
    }
}
