// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications::{self, Severity};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded from the toast widgets.
    Notification(notifications::NotificationMessage),
    /// One of the demo buttons asked for a notification.
    Show(Severity),
    ClearNotifications,
    CycleTheme,
    CycleLanguage,
    ExportDiagnostics,
    /// Periodic tick driving the notification lifecycle.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for diagnostics reports).
    /// Takes precedence over `ICED_TOASTS_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOASTS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
