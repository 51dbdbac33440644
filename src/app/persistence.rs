// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.

use super::Message;
use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsHandle, WarningEvent};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Severity};
use iced::Task;

/// Persists the current preferences to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the handlers directly without touching the user's config.
/// A failed save is reported as a warning notification.
pub fn persist_preferences(
    cfg: &Config,
    i18n: &I18n,
    notifications: &mut Manager,
    diagnostics: &DiagnosticsHandle,
) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    if let Err(error) = config::save(cfg) {
        diagnostics.log_warning(WarningEvent::new(error.to_string()).with_source("config"));
        notifications.show(i18n.tr("notification-config-save-error"), Severity::Warning);
    }

    Task::none()
}
