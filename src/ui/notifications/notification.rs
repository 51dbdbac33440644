// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `Severity`, the
//! derived `PresentationMode`, and the structured `Body` content rendered
//! inside a toast.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    ///
    /// IDs come from a process-wide counter, so two notifications created
    /// within the same instant still get distinct IDs.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// How a notification is presented, derived from its severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresentationMode {
    /// Appended to the inline host, auto-dismissed after a delay.
    Inline,
    /// Rendered above everything with a backdrop; only one at a time.
    Blocking,
}

/// Severity level determines styling and presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Informational message (blue, inline).
    #[default]
    Info,
    /// Operation completed successfully (green, inline).
    Success,
    /// Something needs the user's attention (orange, blocking).
    Warning,
    /// Something went wrong (red, blocking).
    Danger,
    /// A severity name nobody recognised. Inline and unstyled.
    Unrecognized,
}

impl Severity {
    /// Parses a severity name. Unknown names are accepted as
    /// [`Severity::Unrecognized`] rather than rejected.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "info" => Severity::Info,
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "danger" => Severity::Danger,
            _ => Severity::Unrecognized,
        }
    }

    /// Returns the presentation mode for this severity.
    ///
    /// Severity alone decides the mode; there is no override.
    #[must_use]
    pub fn mode(self) -> PresentationMode {
        match self {
            Severity::Warning | Severity::Danger => PresentationMode::Blocking,
            Severity::Info | Severity::Success | Severity::Unrecognized => {
                PresentationMode::Inline
            }
        }
    }

    /// Returns the accent color, or `None` for unrecognized severities.
    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            Severity::Info => Some(palette::INFO_500),
            Severity::Success => Some(palette::SUCCESS_500),
            Severity::Warning => Some(palette::WARNING_500),
            Severity::Danger => Some(palette::ERROR_500),
            Severity::Unrecognized => None,
        }
    }

    /// Returns the lowercase name used in diagnostics and config.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
            Severity::Unrecognized => "unrecognized",
        }
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A run of text inside a rich body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub strong: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: false,
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strong: true,
        }
    }
}

/// Content shown inside a notification.
///
/// Bodies are never interpreted as markup: text is rendered as-is and
/// emphasis has to be spelled out with [`Span`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Text(String),
    Rich(Vec<Span>),
}

impl Body {
    /// Returns the body flattened to plain text.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Body::Text(text) => text.clone(),
            Body::Rich(spans) => spans.iter().map(|span| span.text.as_str()).collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Body::Text(text) => text.is_empty(),
            Body::Rich(spans) => spans.iter().all(|span| span.text.is_empty()),
        }
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<Vec<Span>> for Body {
    fn from(spans: Vec<Span>) -> Self {
        Body::Rich(spans)
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    body: Body,
}

impl Notification {
    /// Creates a new notification with the given severity and body.
    pub fn new(severity: Severity, body: impl Into<Body>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            body: body.into(),
        }
    }

    pub fn info(body: impl Into<Body>) -> Self {
        Self::new(Severity::Info, body)
    }

    pub fn success(body: impl Into<Body>) -> Self {
        Self::new(Severity::Success, body)
    }

    pub fn warning(body: impl Into<Body>) -> Self {
        Self::new(Severity::Warning, body)
    }

    pub fn danger(body: impl Into<Body>) -> Self {
        Self::new(Severity::Danger, body)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn mode(&self) -> PresentationMode {
        self.severity.mode()
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }
}
