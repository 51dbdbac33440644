// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the events captured while notifications are shown
//! and dismissed, plus the user actions and warnings around them.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Asked for a notification from the demo controls.
    RequestNotification {
        /// Severity name as requested.
        severity: String,
    },

    /// Clicked the backdrop behind a blocking notification.
    ClickBackdrop,

    /// Pressed the dismiss control of an inline notification.
    PressDismiss,

    /// Cleared every notification at once.
    ClearNotifications,

    /// Switched the interface language.
    ChangeLanguage {
        /// Locale identifier, e.g. `fr`.
        locale: String,
    },

    /// Switched the theme mode.
    ChangeTheme {
        /// `light`, `dark` or `system`.
        mode: String,
    },

    /// Exported a diagnostics report.
    ExportDiagnostics,
}

/// Why a notification started leaving the screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DismissCause {
    /// Inline display duration elapsed.
    Timeout,
    /// Inline dismiss control.
    DismissControl,
    /// Debounced backdrop click.
    Backdrop,
    /// Called from code.
    Programmatic,
}

/// Lifecycle step of a single notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum NotificationEvent {
    /// The notification became visible.
    Shown {
        id: u64,
        severity: String,
        mode: String,
    },
    /// A blocking notification was removed at once to make room for `by`.
    Preempted { id: u64, by: u64 },
    /// The notification lost its shown state.
    Dismissing { id: u64, cause: DismissCause },
    /// The notification left the view tree.
    Removed { id: u64 },
}

/// A warning surfaced to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    /// Sanitized warning text.
    pub message: String,
    /// Module that raised the warning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_module: Option<String>,
}

impl WarningEvent {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source_module: None,
        }
    }

    #[must_use]
    pub fn with_source(mut self, module: impl Into<String>) -> Self {
        self.source_module = Some(module.into());
        self
    }
}

/// An error surfaced to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorEvent {
    /// Sanitized error text.
    pub message: String,
    /// Module that raised the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_module: Option<String>,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source_module: None,
        }
    }

    #[must_use]
    pub fn with_source(mut self, module: impl Into<String>) -> Self {
        self.source_module = Some(module.into());
        self
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// User-initiated action.
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    /// Notification lifecycle step.
    Notification { event: NotificationEvent },

    /// Non-critical warning.
    Warning { event: WarningEvent },

    /// Critical error.
    Error { event: ErrorEvent },
}
