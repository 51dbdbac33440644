// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! Producers hold a [`DiagnosticsHandle`]; the application owns the
//! [`DiagnosticsCollector`] and drains the channel into its ring buffer on
//! every tick.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::export::{generate_default_filename, write_atomic, ExportError};
use super::{
    sanitize_message, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind,
    DiagnosticReport, ErrorEvent, NotificationEvent, ReportMetadata, SerializableEvent,
    SystemInfo, UserAction, WarningEvent,
};

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block: when the channel is full the event
/// is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.send(DiagnosticEventKind::UserAction { action, details });
    }

    pub fn log_notification(&self, event: NotificationEvent) {
        self.send(DiagnosticEventKind::Notification { event });
    }

    /// Logs a warning; the message is sanitized first.
    pub fn log_warning(&self, warning: WarningEvent) {
        let event = WarningEvent {
            message: sanitize_message(&warning.message),
            ..warning
        };
        self.send(DiagnosticEventKind::Warning { event });
    }

    /// Logs an error; the message is sanitized first.
    pub fn log_error(&self, error: ErrorEvent) {
        let event = ErrorEvent {
            message: sanitize_message(&error.message),
            ..error
        };
        self.send(DiagnosticEventKind::Error { event });
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic start, for relative event timestamps.
    collection_started_at: Instant,
    /// Wall-clock start, for report metadata.
    collection_started_at_utc: DateTime<Utc>,
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("events", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Records an action directly, bypassing the channel.
    pub fn log_action(&mut self, action: UserAction) {
        self.buffer.push(DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action,
            details: None,
        }));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Builds a report from the current buffer contents.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
        );

        DiagnosticReport::new(metadata, SystemInfo::collect(), events)
    }

    /// Serializes the current report as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    /// Writes the report into `dir` under a timestamped filename.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the directory cannot be created, the
    /// report cannot be serialized or the file cannot be written.
    pub fn export_to_dir(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(generate_default_filename());
        let json = self.export_json()?;
        write_atomic(&path, &json)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DismissCause;
    use tempfile::tempdir;

    #[test]
    fn handle_events_arrive_after_process_pending() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = collector.handle();

        handle.log_notification(NotificationEvent::Removed { id: 3 });
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn warnings_are_sanitized_before_storage() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        collector
            .handle()
            .log_warning(WarningEvent::new("Could not reach ops@example.com"));
        collector.process_pending();

        let stored = collector.iter().next().map(|e| e.kind.clone());
        assert_eq!(
            stored,
            Some(DiagnosticEventKind::Warning {
                event: WarningEvent::new("Could not reach <email>"),
            })
        );
    }

    #[test]
    fn full_channel_drops_instead_of_blocking() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(10_000));
        let handle = collector.handle();
        for id in 0..(DEFAULT_CHANNEL_CAPACITY as u64 + 50) {
            handle.log_notification(NotificationEvent::Removed { id });
        }
        collector.process_pending();
        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn export_json_contains_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        collector.handle().log_notification(NotificationEvent::Dismissing {
            id: 1,
            cause: DismissCause::Timeout,
        });
        collector.log_action(UserAction::ClearNotifications);
        collector.process_pending();

        let json = collector.export_json().expect("export should succeed");
        assert!(json.contains("\"clear_notifications\""));
        assert!(json.contains("\"timeout\""));
    }

    #[test]
    fn export_to_dir_writes_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let collector = DiagnosticsCollector::new(BufferCapacity::default());

        let path = collector
            .export_to_dir(&dir.path().join("nested"))
            .expect("export should succeed");
        assert!(path.exists());
    }
}
