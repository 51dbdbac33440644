// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report generation.
//!
//! A report is the serialized content of the event buffer plus enough
//! context (version, platform, collection window) to read it later.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::events::NotificationEvent;
use super::DiagnosticEventKind;

/// Metadata about a diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (ISO 8601)
    pub generated_at: String,
    /// Version of the crate that generated the report
    pub app_version: String,
    /// When diagnostic collection started (ISO 8601)
    pub collection_started_at: String,
    /// Duration of collection in milliseconds
    pub collection_duration_ms: u64,
    /// Total number of events in the report
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// Platform the report was captured on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemInfo {
    /// Operating system family (e.g., "linux", "windows", "macos")
    pub os: String,
    /// CPU architecture (e.g., "`x86_64`", "aarch64")
    pub cpu_arch: String,
}

impl SystemInfo {
    #[must_use]
    pub fn collect() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            cpu_arch: std::env::consts::ARCH.to_string(),
        }
    }
}

/// A diagnostic event with its timestamp made relative to collection start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: DiagnosticEventKind,
    ) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;

        Self { timestamp_ms, kind }
    }
}

/// Event counts for a quick read of the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    /// Count of events by type (e.g., `"notification": 12`)
    pub event_counts: BTreeMap<String, usize>,
    /// Notifications shown per severity name
    pub shown_by_severity: BTreeMap<String, usize>,
    /// Blocking notifications replaced before being dismissed
    pub preemptions: usize,
}

impl ReportSummary {
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        let mut summary = Self::default();

        for event in events {
            let type_name = match &event.kind {
                DiagnosticEventKind::UserAction { .. } => "user_action",
                DiagnosticEventKind::Warning { .. } => "warning",
                DiagnosticEventKind::Error { .. } => "error",
                DiagnosticEventKind::Notification { event } => {
                    match event {
                        NotificationEvent::Shown { severity, .. } => {
                            *summary
                                .shown_by_severity
                                .entry(severity.clone())
                                .or_insert(0) += 1;
                        }
                        NotificationEvent::Preempted { .. } => summary.preemptions += 1,
                        NotificationEvent::Dismissing { .. } | NotificationEvent::Removed { .. } => {}
                    }
                    "notification"
                }
            };
            *summary
                .event_counts
                .entry(type_name.to_string())
                .or_insert(0) += 1;
        }

        summary
    }
}

/// Complete diagnostic report, serialized as JSON on export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub system_info: SystemInfo,
    pub summary: ReportSummary,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(
        metadata: ReportMetadata,
        system_info: SystemInfo,
        events: Vec<SerializableEvent>,
    ) -> Self {
        let summary = ReportSummary::from_events(&events);
        Self {
            metadata,
            system_info,
            summary,
            events,
        }
    }
}
