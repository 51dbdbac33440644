// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns every notification on screen. Inline notifications
//! live in the inline host and leave on their own after a delay. Blocking
//! notifications sit in a single slot together with their backdrop; a new
//! one always replaces the previous one at once.
//!
//! Time never advances inside the manager. Every delayed step is a task in
//! a [`Scheduler`] and runs from [`Manager::tick`], so each lifecycle can be
//! replayed exactly in tests.

use super::notification::{Body, Notification, NotificationId, PresentationMode, Severity};
use super::scheduler::{Scheduler, TaskId};
use crate::config::{
    DEFAULT_BACKDROP_DEBOUNCE_MS, DEFAULT_EXIT_TRANSITION_MS, DEFAULT_INLINE_DURATION_MS,
    DEFAULT_INLINE_FADE_MS,
};
use crate::diagnostics::{
    DiagnosticsHandle, DismissCause, ErrorEvent, NotificationEvent, WarningEvent,
};
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The dismiss control of an inline notification was pressed.
    Dismiss(NotificationId),
    /// The backdrop behind a blocking notification was clicked.
    BackdropClicked(NotificationId),
    /// Time advanced; run every task that became due.
    Tick(Instant),
}

/// Durations driving the notification lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// How long an inline notification stays before hiding itself.
    pub inline_duration: Duration,
    /// Fade-out of an inline notification before it is removed.
    pub inline_fade: Duration,
    /// Exit transition of a dismissed blocking notification.
    pub exit_transition: Duration,
    /// Delay between a backdrop click and the teardown it triggers.
    pub backdrop_debounce: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            inline_duration: Duration::from_millis(DEFAULT_INLINE_DURATION_MS),
            inline_fade: Duration::from_millis(DEFAULT_INLINE_FADE_MS),
            exit_transition: Duration::from_millis(DEFAULT_EXIT_TRANSITION_MS),
            backdrop_debounce: Duration::from_millis(DEFAULT_BACKDROP_DEBOUNCE_MS),
        }
    }
}

/// Visual phase of a notification that is still in the view tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Shown state applied.
    Visible,
    /// Shown state removed; waiting for the exit animation to finish.
    Dismissing,
}

/// A notification placed in the view tree.
#[derive(Debug, Clone)]
pub struct Entry {
    notification: Notification,
    phase: Phase,
    /// The one delayed step this entry is waiting for, if any.
    pending: Option<TaskId>,
}

impl Entry {
    fn visible(notification: Notification, pending: Option<TaskId>) -> Self {
        Self {
            notification,
            phase: Phase::Visible,
            pending,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.notification.id()
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.notification.severity()
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        self.notification.body()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the shown state is applied.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.phase == Phase::Visible
    }
}

/// Dimming surface paired with the active blocking notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    owner: NotificationId,
    armed: bool,
}

impl Backdrop {
    #[must_use]
    pub fn owner(&self) -> NotificationId {
        self.owner
    }

    /// Returns whether a click was registered and a teardown is on its way.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[derive(Debug)]
struct BlockingSlot {
    entry: Entry,
    backdrop: Backdrop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    AutoHide(NotificationId),
    HideFinished(NotificationId),
    BackdropDebounce(NotificationId),
    ExitFinished(NotificationId),
}

/// Owns the inline host, the blocking slot, and the delayed steps of both.
#[derive(Debug)]
pub struct Manager {
    /// Inline notifications, oldest first. `None` when no host is mounted.
    inline_host: Option<Vec<Entry>>,
    /// The active blocking notification and its backdrop.
    blocking: Option<BlockingSlot>,
    /// Blocking notifications playing their exit transition.
    leaving: Vec<Entry>,
    scheduler: Scheduler<Deferred>,
    timings: Timings,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates a manager with default timings and a mounted inline host.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inline_host: Some(Vec::new()),
            blocking: None,
            leaving: Vec::new(),
            scheduler: Scheduler::new(),
            timings: Timings::default(),
            diagnostics: None,
        }
    }

    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Removes the inline host. Inline notifications are then dropped
    /// silently; blocking ones are unaffected.
    #[must_use]
    pub fn without_inline_host(mut self) -> Self {
        self.inline_host = None;
        self
    }

    /// Sets the diagnostics handle for logging lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    #[must_use]
    pub fn has_host(&self) -> bool {
        self.inline_host.is_some()
    }

    /// Shows a notification now. See [`Manager::show_at`].
    pub fn show(&mut self, body: impl Into<Body>, severity: Severity) -> NotificationId {
        self.show_at(body, severity, Instant::now())
    }

    /// Shows a notification, routing it by the mode its severity implies.
    ///
    /// Blocking severities replace whatever blocking notification is on
    /// screen. Inline ones accumulate, or vanish silently when no inline
    /// host is mounted. The returned ID is valid for [`Manager::dismiss`]
    /// either way.
    pub fn show_at(
        &mut self,
        body: impl Into<Body>,
        severity: Severity,
        now: Instant,
    ) -> NotificationId {
        self.push_at(Notification::new(severity, body), now)
    }

    /// Shows an already built notification now.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        self.push_at(notification, Instant::now())
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) -> NotificationId {
        let id = notification.id();
        match notification.mode() {
            PresentationMode::Blocking => self.show_blocking(notification),
            PresentationMode::Inline => self.show_inline(notification, now),
        }
        id
    }

    fn show_blocking(&mut self, notification: Notification) {
        let id = notification.id();

        // Whatever blocking surface exists goes away before the new one
        // appears, without exit animation.
        if let Some(previous) = self.blocking.take() {
            self.discard(&previous.entry);
            self.log(NotificationEvent::Preempted {
                id: previous.entry.id().value(),
                by: id.value(),
            });
            self.log(NotificationEvent::Removed {
                id: previous.entry.id().value(),
            });
        }
        for entry in std::mem::take(&mut self.leaving) {
            self.discard(&entry);
            self.log(NotificationEvent::Removed {
                id: entry.id().value(),
            });
        }

        self.log_shown(&notification);
        self.blocking = Some(BlockingSlot {
            entry: Entry::visible(notification, None),
            backdrop: Backdrop {
                owner: id,
                armed: false,
            },
        });
    }

    fn show_inline(&mut self, notification: Notification, now: Instant) {
        if self.inline_host.is_none() {
            return;
        }

        self.log_shown(&notification);
        let task = self.scheduler.schedule_after(
            now,
            self.timings.inline_duration,
            Deferred::AutoHide(notification.id()),
        );
        if let Some(entries) = self.inline_host.as_mut() {
            entries.push(Entry::visible(notification, task));
        }
    }

    /// Registers a click on the backdrop owned by `id`, now.
    pub fn backdrop_clicked(&mut self, id: NotificationId) -> bool {
        self.backdrop_clicked_at(id, Instant::now())
    }

    /// Registers a click on the backdrop owned by `id`.
    ///
    /// Only the first click counts: it schedules the teardown after the
    /// debounce delay. Returns `false` for later clicks and for backdrops
    /// that no longer exist.
    pub fn backdrop_clicked_at(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(slot) = self.blocking.as_mut() else {
            return false;
        };
        if slot.backdrop.owner != id || slot.backdrop.armed {
            return false;
        }

        slot.backdrop.armed = true;
        if let Some(task) = slot.entry.pending.take() {
            self.scheduler.cancel(task);
        }
        slot.entry.pending = self.scheduler.schedule_after(
            now,
            self.timings.backdrop_debounce,
            Deferred::BackdropDebounce(id),
        );
        true
    }

    /// Tears down the active blocking notification `id`, now.
    pub fn teardown(&mut self, id: NotificationId) -> bool {
        self.teardown_at(id, Instant::now())
    }

    /// Tears down the active blocking notification `id`.
    ///
    /// The shown state and the backdrop go away immediately; the
    /// notification itself is removed once the exit transition elapsed.
    /// Returns `false` without doing anything when `id` is not the active
    /// blocking notification.
    pub fn teardown_at(&mut self, id: NotificationId, now: Instant) -> bool {
        self.teardown_with(id, now, DismissCause::Programmatic)
    }

    fn teardown_with(&mut self, id: NotificationId, now: Instant, cause: DismissCause) -> bool {
        if !self
            .blocking
            .as_ref()
            .is_some_and(|slot| slot.entry.id() == id)
        {
            return false;
        }
        let Some(BlockingSlot { mut entry, .. }) = self.blocking.take() else {
            return false;
        };

        if let Some(task) = entry.pending.take() {
            self.scheduler.cancel(task);
        }
        entry.phase = Phase::Dismissing;
        entry.pending = self.scheduler.schedule_after(
            now,
            self.timings.exit_transition,
            Deferred::ExitFinished(id),
        );
        self.leaving.push(entry);

        self.log(NotificationEvent::Dismissing {
            id: id.value(),
            cause,
        });
        true
    }

    fn hide_inline(&mut self, id: NotificationId, now: Instant, cause: DismissCause) -> bool {
        let Some(entries) = self.inline_host.as_mut() else {
            return false;
        };
        let Some(entry) = entries
            .iter_mut()
            .find(|entry| entry.id() == id && entry.is_shown())
        else {
            return false;
        };

        if let Some(task) = entry.pending.take() {
            self.scheduler.cancel(task);
        }
        entry.phase = Phase::Dismissing;
        entry.pending = self.scheduler.schedule_after(
            now,
            self.timings.inline_fade,
            Deferred::HideFinished(id),
        );

        self.log(NotificationEvent::Dismissing {
            id: id.value(),
            cause,
        });
        true
    }

    /// Dismisses any notification by ID, now.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    /// Dismisses any notification by ID.
    ///
    /// Blocking notifications go through [`Manager::teardown_at`], inline
    /// ones through their fade-out. Returns `true` if a dismissal started;
    /// unknown or already leaving notifications are left alone.
    pub fn dismiss_at(&mut self, id: NotificationId, now: Instant) -> bool {
        self.teardown_with(id, now, DismissCause::Programmatic)
            || self.hide_inline(id, now, DismissCause::Programmatic)
    }

    /// Runs every delayed step due at `now`.
    ///
    /// Steps chain from their own deadline rather than from `now`, so a
    /// late tick does not stretch the lifecycle.
    pub fn tick(&mut self, now: Instant) {
        while let Some((at, task)) = self.scheduler.pop_due(now) {
            match task {
                Deferred::AutoHide(id) => {
                    self.clear_pending(id);
                    self.hide_inline(id, at, DismissCause::Timeout);
                }
                Deferred::HideFinished(id) => {
                    let removed = self.inline_host.as_mut().is_some_and(|entries| {
                        let before = entries.len();
                        entries.retain(|entry| entry.id() != id);
                        entries.len() < before
                    });
                    if removed {
                        self.log(NotificationEvent::Removed { id: id.value() });
                    }
                }
                Deferred::BackdropDebounce(id) => {
                    self.clear_pending(id);
                    self.teardown_with(id, at, DismissCause::Backdrop);
                }
                Deferred::ExitFinished(id) => {
                    let before = self.leaving.len();
                    self.leaving.retain(|entry| entry.id() != id);
                    if self.leaving.len() < before {
                        self.log(NotificationEvent::Removed { id: id.value() });
                    }
                }
            }
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.hide_inline(*id, Instant::now(), DismissCause::DismissControl);
            }
            Message::BackdropClicked(id) => {
                self.backdrop_clicked(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Removes every notification and cancels every pending step.
    pub fn clear(&mut self) {
        if let Some(entries) = self.inline_host.as_mut() {
            entries.clear();
        }
        self.blocking = None;
        self.leaving.clear();
        self.scheduler.clear();
    }

    /// Returns the active blocking notification.
    #[must_use]
    pub fn blocking(&self) -> Option<&Entry> {
        self.blocking.as_ref().map(|slot| &slot.entry)
    }

    /// Returns the backdrop of the active blocking notification.
    #[must_use]
    pub fn backdrop(&self) -> Option<&Backdrop> {
        self.blocking.as_ref().map(|slot| &slot.backdrop)
    }

    /// Returns the inline notifications, oldest first.
    pub fn inline(&self) -> impl Iterator<Item = &Entry> {
        self.inline_host.iter().flatten()
    }

    /// Returns the blocking notifications playing their exit transition.
    pub fn leaving(&self) -> impl Iterator<Item = &Entry> {
        self.leaving.iter()
    }

    /// Looks up a notification anywhere in the view tree.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Entry> {
        self.blocking()
            .into_iter()
            .chain(self.leaving())
            .chain(self.inline())
            .find(|entry| entry.id() == id)
    }

    /// Number of blocking notifications in the view tree, leaving ones
    /// included.
    #[must_use]
    pub fn blocking_count(&self) -> usize {
        usize::from(self.blocking.is_some()) + self.leaving.len()
    }

    #[must_use]
    pub fn inline_count(&self) -> usize {
        self.inline_host.as_ref().map_or(0, Vec::len)
    }

    /// Returns whether anything is on screen or waiting to happen.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.blocking_count() > 0 || self.inline_count() > 0 || !self.scheduler.is_empty()
    }

    /// Returns when the next delayed step is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    fn clear_pending(&mut self, id: NotificationId) {
        let entry = self
            .blocking
            .as_mut()
            .map(|slot| &mut slot.entry)
            .into_iter()
            .chain(self.leaving.iter_mut())
            .chain(self.inline_host.iter_mut().flatten())
            .find(|entry| entry.id() == id);
        if let Some(entry) = entry {
            entry.pending = None;
        }
    }

    fn discard(&mut self, entry: &Entry) {
        if let Some(task) = entry.pending {
            self.scheduler.cancel(task);
        }
    }

    fn log(&self, event: NotificationEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log_notification(event);
        }
    }

    fn log_shown(&self, notification: &Notification) {
        let Some(handle) = &self.diagnostics else {
            return;
        };
        let mode = match notification.mode() {
            PresentationMode::Inline => "inline",
            PresentationMode::Blocking => "blocking",
        };
        handle.log_notification(NotificationEvent::Shown {
            id: notification.id().value(),
            severity: notification.severity().name().to_string(),
            mode: mode.to_string(),
        });
        match notification.severity() {
            Severity::Warning => handle.log_warning(
                WarningEvent::new(notification.body().plain_text()).with_source("notifications"),
            ),
            Severity::Danger => handle.log_error(
                ErrorEvent::new(notification.body().plain_text()).with_source("notifications"),
            ),
            Severity::Info | Severity::Success | Severity::Unrecognized => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferCapacity, DiagnosticEventKind, DiagnosticsCollector};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.inline_count(), 0);
        assert_eq!(manager.blocking_count(), 0);
        assert!(!manager.has_notifications());
        assert!(manager.has_host());
    }

    #[test]
    fn inline_show_schedules_auto_hide() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        manager.show_at("saved", Severity::Success, t0);

        assert_eq!(manager.inline_count(), 1);
        assert_eq!(manager.next_deadline(), Some(t0 + ms(5_000)));
    }

    #[test]
    fn inline_auto_hides_then_leaves_after_fade() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show_at("saved", Severity::Info, t0);

        manager.tick(t0 + ms(4_999));
        assert!(manager.get(id).is_some_and(Entry::is_shown));

        manager.tick(t0 + ms(5_000));
        assert_eq!(manager.get(id).map(Entry::phase), Some(Phase::Dismissing));

        manager.tick(t0 + ms(5_149));
        assert!(manager.get(id).is_some());

        manager.tick(t0 + ms(5_150));
        assert!(manager.get(id).is_none());
        assert!(!manager.has_notifications());
    }

    #[test]
    fn dismiss_control_hides_inline_early() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show_at("copied", Severity::Info, t0);

        assert!(manager.dismiss_at(id, t0 + ms(10)));
        assert!(!manager.dismiss_at(id, t0 + ms(20)));

        manager.tick(t0 + ms(160));
        assert_eq!(manager.inline_count(), 0);
        // The cancelled auto-hide must not resurrect anything.
        manager.tick(t0 + ms(6_000));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn missing_host_is_not_logged() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let mut manager = Manager::new().without_inline_host();
        manager.set_diagnostics(collector.handle());

        manager.show("lost", Severity::Info);
        collector.process_pending();
        assert!(collector.is_empty());
    }

    #[test]
    fn huge_timings_never_panic() {
        let t0 = Instant::now();
        let mut manager = Manager::new().with_timings(Timings {
            inline_duration: Duration::MAX,
            inline_fade: Duration::MAX,
            exit_transition: Duration::MAX,
            backdrop_debounce: Duration::MAX,
        });

        let inline = manager.show_at("x", Severity::Info, t0);
        let blocking = manager.show_at("y", Severity::Danger, t0);
        assert!(manager.backdrop_clicked_at(blocking, t0));
        assert!(manager.dismiss_at(inline, t0));
        assert!(manager.teardown_at(blocking, t0));

        // Deadlines past the end of time never come due.
        manager.tick(t0 + Duration::from_secs(3_600));
        assert!(manager.get(inline).is_some());
        assert!(manager.get(blocking).is_some());
        assert_eq!(manager.next_deadline(), None);
    }

    #[test]
    fn missing_host_drops_inline_silently() {
        let t0 = Instant::now();
        let mut manager = Manager::new().without_inline_host();
        let id = manager.show_at("hello", Severity::Info, t0);

        assert_eq!(manager.inline_count(), 0);
        assert!(manager.get(id).is_none());
        assert!(!manager.dismiss_at(id, t0));

        let blocking = manager.show_at("still works", Severity::Danger, t0);
        assert_eq!(manager.blocking().map(Entry::id), Some(blocking));
    }

    #[test]
    fn teardown_of_unknown_id_is_noop() {
        let mut manager = Manager::new();
        let stray = Notification::danger("never shown").id();
        assert!(!manager.teardown_at(stray, Instant::now()));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn teardown_does_not_touch_inline_notifications() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show_at("inline", Severity::Info, t0);
        assert!(!manager.teardown_at(id, t0));
        assert!(manager.get(id).is_some_and(Entry::is_shown));
    }

    #[test]
    fn blocking_show_pairs_with_unarmed_backdrop() {
        let mut manager = Manager::new();
        let id = manager.show("careful", Severity::Warning);

        let backdrop = manager.backdrop().copied();
        assert_eq!(backdrop.map(|b| b.owner()), Some(id));
        assert_eq!(backdrop.map(|b| b.is_armed()), Some(false));
        assert!(manager.blocking().is_some_and(Entry::is_shown));
        assert_eq!(manager.next_deadline(), None);
    }

    #[test]
    fn preemption_cancels_pending_debounce() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let first = manager.show_at("first", Severity::Warning, t0);
        manager.backdrop_clicked_at(first, t0);

        let second = manager.show_at("second", Severity::Danger, t0 + ms(50));
        manager.tick(t0 + ms(1_000));

        assert_eq!(manager.blocking().map(Entry::id), Some(second));
        assert!(manager.blocking().is_some_and(Entry::is_shown));
        assert_eq!(manager.blocking_count(), 1);
    }

    #[test]
    fn new_blocking_removes_leaving_one_at_once() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let first = manager.show_at("first", Severity::Warning, t0);
        manager.teardown_at(first, t0);
        assert_eq!(manager.leaving().count(), 1);

        manager.show_at("second", Severity::Warning, t0 + ms(10));
        assert_eq!(manager.leaving().count(), 0);
        assert_eq!(manager.blocking_count(), 1);
        assert!(manager.get(first).is_none());
    }

    #[test]
    fn stale_backdrop_click_is_ignored() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let first = manager.show_at("first", Severity::Warning, t0);
        let second = manager.show_at("second", Severity::Warning, t0);

        assert!(!manager.backdrop_clicked_at(first, t0));
        assert!(manager.backdrop_clicked_at(second, t0));
        assert!(!manager.backdrop_clicked_at(second, t0 + ms(5)));
    }

    #[test]
    fn late_tick_does_not_stretch_exit_transition() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        let id = manager.show_at("modal", Severity::Danger, t0);
        manager.backdrop_clicked_at(id, t0);

        // A single late tick runs the debounce and the removal it chains.
        manager.tick(t0 + ms(400));
        assert!(manager.get(id).is_none());
    }

    #[test]
    fn clear_removes_everything() {
        let t0 = Instant::now();
        let mut manager = Manager::new();
        manager.show_at("a", Severity::Info, t0);
        manager.show_at("b", Severity::Danger, t0);

        manager.clear();
        assert!(!manager.has_notifications());
        assert!(manager.backdrop().is_none());
    }

    #[test]
    fn handle_message_dismiss_only_targets_inline() {
        let mut manager = Manager::new();
        let inline = manager.show("inline", Severity::Info);
        let blocking = manager.show("blocking", Severity::Danger);

        manager.handle_message(&Message::Dismiss(blocking));
        assert!(manager.blocking().is_some_and(Entry::is_shown));

        manager.handle_message(&Message::Dismiss(inline));
        assert_eq!(manager.get(inline).map(Entry::phase), Some(Phase::Dismissing));
    }

    #[test]
    fn custom_timings_are_honoured() {
        let t0 = Instant::now();
        let timings = Timings {
            inline_duration: ms(1_000),
            inline_fade: ms(0),
            exit_transition: ms(50),
            backdrop_debounce: ms(10),
        };
        let mut manager = Manager::new().with_timings(timings);
        manager.show_at("short", Severity::Info, t0);
        let modal = manager.show_at("modal", Severity::Warning, t0);
        manager.backdrop_clicked_at(modal, t0);

        manager.tick(t0 + ms(60));
        assert_eq!(manager.blocking_count(), 0);
        manager.tick(t0 + ms(1_000));
        assert_eq!(manager.inline_count(), 0);
    }

    #[test]
    fn lifecycle_is_logged_to_diagnostics() {
        let t0 = Instant::now();
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        let first = manager.show_at("Payment failed for /home/ada/invoice.pdf", Severity::Danger, t0);
        let second = manager.show_at("retry", Severity::Warning, t0);
        manager.teardown_at(second, t0);
        manager.tick(t0 + ms(300));
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert!(kinds.contains(&DiagnosticEventKind::Notification {
            event: NotificationEvent::Preempted {
                id: first.value(),
                by: second.value(),
            },
        }));
        assert!(kinds.contains(&DiagnosticEventKind::Error {
            event: ErrorEvent::new("Payment failed for <path>").with_source("notifications"),
        }));
        assert!(kinds.contains(&DiagnosticEventKind::Notification {
            event: NotificationEvent::Removed { id: second.value() },
        }));
    }
}
