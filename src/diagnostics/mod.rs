// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! Events describing notification lifecycles, user actions, warnings and
//! errors are captured into a memory-bounded circular buffer and can be
//! exported as JSON reports.
//!
//! # Privacy
//!
//! Warning and error texts are sanitized before they are stored: file
//! paths, e-mail addresses and bearer tokens never reach a report.

mod buffer;
mod collector;
mod events;
mod export;
mod report;
mod sanitizer;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, DismissCause, ErrorEvent, NotificationEvent,
    UserAction, WarningEvent,
};
pub use export::{default_export_directory, ExportError};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent, SystemInfo};
pub use sanitizer::sanitize_message;
