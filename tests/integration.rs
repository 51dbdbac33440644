// SPDX-License-Identifier: MPL-2.0
use iced_toasts::config::{self, Config, GeneralConfig, NotificationsConfig};
use iced_toasts::diagnostics::{
    BufferCapacity, DiagnosticEventKind, DiagnosticsCollector, NotificationEvent,
};
use iced_toasts::i18n::fluent::I18n;
use iced_toasts::ui::notifications::{Manager, Phase, Severity, Span, Timings};
use iced_toasts::ui::theming::ThemeMode;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn blocking_notifications_never_coexist() {
    let mut manager = Manager::new();
    let t0 = Instant::now();

    let severities = [
        Severity::Warning,
        Severity::Danger,
        Severity::Danger,
        Severity::Warning,
    ];
    for (step, severity) in severities.into_iter().enumerate() {
        let now = t0 + ms(step as u64 * 40);
        manager.show_at(format!("blocking {step}"), severity, now);
        manager.tick(now);
        assert_eq!(manager.blocking_count(), 1);
        assert!(manager.backdrop().is_some());
    }
}

#[test]
fn danger_preempts_warning_with_its_backdrop() {
    let mut manager = Manager::new();
    let t0 = Instant::now();

    let first = manager.show_at("msg1", Severity::Warning, t0);
    let second = manager.show_at("msg2", Severity::Danger, t0 + ms(10));

    assert!(manager.get(first).is_none());
    let active = manager.blocking().expect("msg2 should be active");
    assert_eq!(active.id(), second);
    assert!(active.is_shown());
    assert_eq!(manager.backdrop().map(|b| b.owner()), Some(second));
}

#[test]
fn inline_notifications_accumulate() {
    let mut manager = Manager::new();
    let t0 = Instant::now();

    let a = manager.show_at("a", Severity::Info, t0);
    let b = manager.show_at("b", Severity::Success, t0 + ms(5));

    assert_ne!(a, b);
    let ids: Vec<_> = manager.inline().map(|entry| entry.id()).collect();
    assert_eq!(ids, vec![a, b]);
    assert!(manager.backdrop().is_none());
}

#[test]
fn double_backdrop_click_removes_once() {
    let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
    let mut manager = Manager::new();
    manager.set_diagnostics(collector.handle());
    let t0 = Instant::now();

    let id = manager.show_at("careful", Severity::Danger, t0);
    assert!(manager.backdrop_clicked_at(id, t0 + ms(1)));
    assert!(!manager.backdrop_clicked_at(id, t0 + ms(2)));

    manager.tick(t0 + ms(1000));
    assert_eq!(manager.blocking_count(), 0);
    assert!(!manager.dismiss_at(id, t0 + ms(1001)));

    collector.process_pending();
    let removals = collector
        .iter()
        .filter(|event| {
            matches!(
                &event.kind,
                DiagnosticEventKind::Notification {
                    event: NotificationEvent::Removed { id: removed },
                } if *removed == id.value()
            )
        })
        .count();
    assert_eq!(removals, 1);
}

#[test]
fn backdrop_click_is_debounced() {
    let mut manager = Manager::new();
    let t0 = Instant::now();
    let id = manager.show_at("wait", Severity::Warning, t0);

    let click = t0 + ms(500);
    manager.backdrop_clicked_at(id, click);

    manager.tick(click + ms(99));
    assert!(manager.blocking().is_some_and(|entry| entry.is_shown()));
    assert!(manager.backdrop().is_some());

    manager.tick(click + ms(100));
    assert!(manager.blocking().is_none());
    assert!(manager.backdrop().is_none());
}

#[test]
fn exit_transition_keeps_element_until_it_elapses() {
    let mut manager = Manager::new();
    let t0 = Instant::now();
    let id = manager.show_at("going", Severity::Danger, t0);

    let dismissed = t0 + ms(50);
    assert!(manager.teardown_at(id, dismissed));

    let entry = manager.get(id).expect("still in the tree");
    assert_eq!(entry.phase(), Phase::Dismissing);
    assert!(manager.backdrop().is_none());

    manager.tick(dismissed + ms(299));
    assert!(manager.get(id).is_some());

    manager.tick(dismissed + ms(300));
    assert!(manager.get(id).is_none());
    assert!(!manager.has_notifications());
}

#[test]
fn severity_alone_decides_the_backdrop() {
    for severity in [Severity::Warning, Severity::Danger] {
        let mut manager = Manager::new();
        let id = manager.show("x", severity);
        assert_eq!(manager.backdrop().map(|b| b.owner()), Some(id));
    }
    for severity in [Severity::Info, Severity::Success, Severity::parse("critical")] {
        let mut manager = Manager::new();
        manager.show("x", severity);
        assert!(manager.backdrop().is_none());
        assert_eq!(manager.inline_count(), 1);
    }
}

#[test]
fn inline_auto_hides_after_duration_and_fade() {
    let mut manager = Manager::new();
    let t0 = Instant::now();
    let body = vec![Span::strong("Saved."), Span::plain(" Done.")];
    let id = manager.show_at(body, Severity::Success, t0);

    manager.tick(t0 + ms(4999));
    assert!(manager.get(id).is_some_and(|entry| entry.is_shown()));

    manager.tick(t0 + ms(5000));
    assert_eq!(
        manager.get(id).map(|entry| entry.phase()),
        Some(Phase::Dismissing)
    );

    let timings = Timings::default();
    manager.tick(t0 + timings.inline_duration + timings.inline_fade);
    assert_eq!(manager.inline_count(), 0);
}

#[test]
fn missing_host_drops_inline_but_keeps_blocking() {
    let mut manager = Manager::new().without_inline_host();

    let inline = manager.show("lost", Severity::Info);
    assert!(manager.get(inline).is_none());
    assert!(!manager.dismiss(inline));

    manager.show("kept", Severity::Warning);
    assert_eq!(manager.blocking_count(), 1);
}

#[test]
fn config_round_trip_feeds_timings_and_locale() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        notifications: NotificationsConfig {
            exit_transition_ms: Some(450),
            backdrop_debounce_ms: Some(250),
            ..NotificationsConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded, saved);

    let timings = loaded.notifications.timings();
    assert_eq!(timings.exit_transition, ms(450));
    assert_eq!(timings.backdrop_debounce, ms(250));

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn unreadable_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[notifications\nbroken")
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(config::LOAD_ERROR_KEY));
}

#[test]
fn diagnostics_export_contains_lifecycle() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
    let mut manager = Manager::new();
    manager.set_diagnostics(collector.handle());

    let t0 = Instant::now();
    let id = manager.show_at("Card declined", Severity::Danger, t0);
    manager.teardown_at(id, t0 + ms(10));
    manager.tick(t0 + ms(1000));
    collector.process_pending();

    let path = collector
        .export_to_dir(dir.path())
        .expect("Failed to export report");
    let json = std::fs::read_to_string(path).expect("Failed to read report");
    assert!(json.contains("\"shown\""));
    assert!(json.contains("\"dismissing\""));
    assert!(json.contains("\"removed\""));
}
