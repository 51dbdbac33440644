// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] borrowing the pieces of `App` they
//! need, so they can be exercised without building the whole application.

use super::{persistence, Message};
use crate::config::Config;
use crate::diagnostics::{
    default_export_directory, DiagnosticsCollector, ErrorEvent, ExportError, UserAction,
};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Body, Manager, NotificationMessage, Severity, Span};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::time::Instant;

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut Config,
    pub notifications: &'a mut Manager,
    pub diagnostics: &'a mut DiagnosticsCollector,
}

impl UpdateContext<'_> {
    fn persist(&mut self) -> Task<Message> {
        let handle = self.diagnostics.handle();
        persistence::persist_preferences(self.config, self.i18n, self.notifications, &handle)
    }
}

/// Builds the demo body for a severity.
pub fn demo_body(i18n: &I18n, severity: Severity) -> Body {
    match severity {
        Severity::Info => i18n.tr("demo-body-info").into(),
        Severity::Success => vec![
            Span::strong(i18n.tr("demo-body-success-strong")),
            Span::plain(format!(" {}", i18n.tr("demo-body-success"))),
        ]
        .into(),
        Severity::Warning => i18n.tr("demo-body-warning").into(),
        Severity::Danger => i18n.tr("demo-body-danger").into(),
        Severity::Unrecognized => i18n.tr("demo-body-unrecognized").into(),
    }
}

pub fn handle_show(ctx: &mut UpdateContext<'_>, severity: Severity) -> Task<Message> {
    ctx.diagnostics.log_action(UserAction::RequestNotification {
        severity: severity.name().to_string(),
    });
    ctx.notifications.show(demo_body(ctx.i18n, severity), severity);
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &NotificationMessage,
) -> Task<Message> {
    match message {
        notifications::NotificationMessage::BackdropClicked(_) => {
            ctx.diagnostics.log_action(UserAction::ClickBackdrop);
        }
        notifications::NotificationMessage::Dismiss(_) => {
            ctx.diagnostics.log_action(UserAction::PressDismiss);
        }
        notifications::NotificationMessage::Tick(_) => {}
    }
    ctx.notifications.handle_message(message);
    Task::none()
}

pub fn handle_clear(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.diagnostics.log_action(UserAction::ClearNotifications);
    ctx.notifications.clear();
    Task::none()
}

pub fn handle_cycle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mode = ctx.theme_mode.next();
    *ctx.theme_mode = mode;
    ctx.config.general.theme_mode = mode;
    ctx.diagnostics.log_action(UserAction::ChangeTheme {
        mode: format!("{mode:?}").to_lowercase(),
    });
    ctx.persist()
}

pub fn handle_cycle_language(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(locale) = ctx.i18n.next_locale() else {
        return Task::none();
    };
    ctx.i18n.set_locale(locale.clone());
    ctx.config.general.language = Some(locale.to_string());
    ctx.diagnostics.log_action(UserAction::ChangeLanguage {
        locale: locale.to_string(),
    });
    ctx.persist()
}

pub fn handle_export_diagnostics(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.diagnostics.log_action(UserAction::ExportDiagnostics);
    ctx.diagnostics.process_pending();

    let result = default_export_directory()
        .ok_or(ExportError::NoDirectory)
        .and_then(|dir| ctx.diagnostics.export_to_dir(&dir));

    match result {
        Ok(path) => {
            let path = path.display().to_string();
            ctx.notifications.show(
                ctx.i18n
                    .tr_with_args("diagnostics-exported", &[("path", path.as_str())]),
                Severity::Success,
            );
        }
        Err(error) => {
            ctx.diagnostics
                .handle()
                .log_error(ErrorEvent::new(error.to_string()).with_source("diagnostics"));
            ctx.notifications
                .show(ctx.i18n.tr("diagnostics-export-failed"), Severity::Danger);
        }
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);
    ctx.diagnostics.process_pending();
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferCapacity, DiagnosticEventKind};
    use std::time::Duration;

    struct Fixture {
        i18n: I18n,
        theme_mode: ThemeMode,
        config: Config,
        notifications: Manager,
        diagnostics: DiagnosticsCollector,
    }

    impl Fixture {
        fn new() -> Self {
            let diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
            let mut notifications = Manager::new();
            notifications.set_diagnostics(diagnostics.handle());
            Self {
                i18n: I18n::new(Some("en-US".to_string()), &Config::default()),
                theme_mode: ThemeMode::Light,
                config: Config::default(),
                notifications,
                diagnostics,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &mut self.i18n,
                theme_mode: &mut self.theme_mode,
                config: &mut self.config,
                notifications: &mut self.notifications,
                diagnostics: &mut self.diagnostics,
            }
        }
    }

    #[test]
    fn show_routes_by_severity() {
        let mut fixture = Fixture::new();
        let _ = handle_show(&mut fixture.ctx(), Severity::Info);
        let _ = handle_show(&mut fixture.ctx(), Severity::Warning);

        assert_eq!(fixture.notifications.inline_count(), 1);
        assert_eq!(fixture.notifications.blocking_count(), 1);
    }

    #[test]
    fn success_body_is_rich() {
        let fixture = Fixture::new();
        assert!(matches!(
            demo_body(&fixture.i18n, Severity::Success),
            Body::Rich(_)
        ));
    }

    #[test]
    fn backdrop_click_is_logged_and_forwarded() {
        let mut fixture = Fixture::new();
        let id = fixture.notifications.show("modal", Severity::Danger);

        let _ = handle_notification_message(
            &mut fixture.ctx(),
            &NotificationMessage::BackdropClicked(id),
        );
        assert!(fixture
            .notifications
            .backdrop()
            .is_some_and(|backdrop| backdrop.is_armed()));

        let later = Instant::now() + Duration::from_millis(500);
        let _ = handle_tick(&mut fixture.ctx(), later);
        assert!(fixture.notifications.get(id).is_none());
        assert!(fixture.diagnostics.iter().any(|event| matches!(
            event.kind,
            DiagnosticEventKind::UserAction {
                action: UserAction::ClickBackdrop,
                ..
            }
        )));
    }

    #[test]
    fn cycle_theme_updates_config() {
        let mut fixture = Fixture::new();
        let _ = handle_cycle_theme(&mut fixture.ctx());
        assert_eq!(fixture.theme_mode, ThemeMode::Dark);
        assert_eq!(fixture.config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn cycle_language_records_locale() {
        let mut fixture = Fixture::new();
        let before = fixture.i18n.current_locale().clone();
        let _ = handle_cycle_language(&mut fixture.ctx());

        assert_ne!(*fixture.i18n.current_locale(), before);
        assert_eq!(
            fixture.config.general.language,
            Some(fixture.i18n.current_locale().to_string())
        );
    }

    #[test]
    fn clear_empties_the_manager() {
        let mut fixture = Fixture::new();
        let _ = handle_show(&mut fixture.ctx(), Severity::Success);
        let _ = handle_show(&mut fixture.ctx(), Severity::Danger);
        let _ = handle_clear(&mut fixture.ctx());
        assert!(!fixture.notifications.has_notifications());
    }
}
