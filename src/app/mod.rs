// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the notification manager, the diagnostics
//! collector, localization and the persisted preferences, and translates
//! messages into calls on them.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::TICK_INTERVAL;

use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Severity};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Last loaded or saved preferences.
    config: Config,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("inline", &self.notifications.inline_count())
            .field("blocking", &self.notifications.blocking_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 600;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // iced 0.14 requires a `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(None, Config::default())
    }
}

impl App {
    /// Builds the state from preferences, without touching the disk.
    fn from_config(lang: Option<String>, config: Config) -> Self {
        let diagnostics = DiagnosticsCollector::new(config.diagnostics.capacity());

        let mut manager =
            notifications::Manager::new().with_timings(config.notifications.timings());
        if !config.notifications.has_inline_host() {
            manager = manager.without_inline_host();
        }
        manager.set_diagnostics(diagnostics.handle());

        Self {
            i18n: I18n::new(lang, &config),
            theme_mode: config.general.theme_mode,
            config,
            notifications: manager,
            diagnostics,
        }
    }

    /// Loads preferences and reports a config that could not be read.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::from_config(flags.lang, config);

        if let Some(key) = config_warning {
            app.show_config_warning(&key);
        }

        (app, Task::none())
    }

    /// Shows the warning for a config that could not be read. The manager
    /// records it in diagnostics like any other warning.
    fn show_config_warning(&mut self, key: &str) {
        let text = self.i18n.tr(key);
        self.notifications.show(text, Severity::Warning);
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
        };

        match message {
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::Show(severity) => update::handle_show(&mut ctx, severity),
            Message::ClearNotifications => update::handle_clear(&mut ctx),
            Message::CycleTheme => update::handle_cycle_theme(&mut ctx),
            Message::CycleLanguage => update::handle_cycle_language(&mut ctx),
            Message::ExportDiagnostics => update::handle_export_diagnostics(&mut ctx),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            notifications: &self.notifications,
            theme_mode: self.theme_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotificationsConfig;
    use crate::diagnostics::DiagnosticEventKind;
    use std::time::{Duration, Instant};

    #[test]
    fn default_app_uses_default_timings() {
        let app = App::default();
        assert_eq!(
            app.notifications.timings(),
            notifications::Timings::default()
        );
        assert!(app.notifications.has_host());
    }

    #[test]
    fn config_can_unmount_inline_host() {
        let config = Config {
            notifications: NotificationsConfig {
                inline_host: Some(false),
                ..NotificationsConfig::default()
            },
            ..Config::default()
        };
        let mut app = App::from_config(None, config);

        let _ = app.update(Message::Show(Severity::Info));
        assert_eq!(app.notifications.inline_count(), 0);

        let _ = app.update(Message::Show(Severity::Warning));
        assert_eq!(app.notifications.blocking_count(), 1);
    }

    #[test]
    fn repeated_blocking_requests_keep_one_on_screen() {
        let mut app = App::default();
        for _ in 0..5 {
            let _ = app.update(Message::Show(Severity::Danger));
            assert_eq!(app.notifications.blocking_count(), 1);
        }
    }

    #[test]
    fn ticks_drive_inline_removal() {
        let mut app = App::default();
        let _ = app.update(Message::Show(Severity::Success));
        assert_eq!(app.notifications.inline_count(), 1);

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(6)));
        assert_eq!(app.notifications.inline_count(), 0);
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn theme_follows_mode() {
        let mut app = App::default();
        app.theme_mode = ThemeMode::Light;
        assert_eq!(app.theme(), Theme::Light);
        let _ = app.update(Message::CycleTheme);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn config_warning_is_recorded_once() {
        let mut app = App::default();
        app.show_config_warning(config::LOAD_ERROR_KEY);
        app.diagnostics.process_pending();

        let warnings = app
            .diagnostics
            .iter()
            .filter(|event| matches!(event.kind, DiagnosticEventKind::Warning { .. }))
            .count();
        assert_eq!(warnings, 1);
        assert_eq!(app.notifications.blocking_count(), 1);
    }

    #[test]
    fn view_renders_with_notifications() {
        let mut app = App::default();
        let _ = app.update(Message::Show(Severity::Info));
        let _ = app.update(Message::Show(Severity::Warning));
        let _ = app.view();
    }
}
